// ABOUTME: Application constants for collection layout and content limits
// ABOUTME: Single source of truth for store path segments and value ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

/// Collection path segments for the document store layout
pub mod collections {
    /// Creator library documents, keyed by the owning creator ID
    pub const CREATOR_LIBRARIES: &str = "creator_libraries";
    /// Library sessions sub-collection under a library document
    pub const SESSIONS: &str = "sessions";
    /// Exercises sub-collection under a session document
    pub const EXERCISES: &str = "exercises";
    /// Sets sub-collection under an exercise document
    pub const SETS: &str = "sets";
    /// Library modules ("weeks") sub-collection under a library document
    pub const MODULES: &str = "modules";
    /// Measure/objective presets sub-collection under a library document
    pub const PRESETS: &str = "measure_objective_presets";
    /// Client-scoped session override documents, keyed by client session ID
    pub const CLIENT_SESSIONS: &str = "client_sessions";
    /// Plan-week-scoped session override documents
    pub const CLIENT_PLAN_SESSIONS: &str = "client_plan_sessions";
    /// Creator program documents root
    pub const CREATOR_PROGRAMS: &str = "creator_programs";
    /// Programs sub-collection under a creator programs document
    pub const PROGRAMS: &str = "programs";
    /// Creator media metadata root
    pub const CREATOR_MEDIA: &str = "creator_media";
    /// Uploaded file metadata sub-collection
    pub const FILES: &str = "files";
    /// Free-form feedback records
    pub const CREATOR_FEEDBACK: &str = "creator_feedback";
}

/// Value ranges enforced by set normalization and session placement
pub mod limits {
    /// Lowest storable intensity value
    pub const INTENSITY_MIN: u8 = 1;
    /// Highest storable intensity value
    pub const INTENSITY_MAX: u8 = 10;
    /// Suffix appended to stored intensity values
    pub const INTENSITY_SUFFIX: &str = "/10";
    /// Highest day index within a plan week (0-based, Monday..Sunday)
    pub const DAY_INDEX_MAX: u8 = 6;
}

/// Service identity used by structured logging
pub mod service_names {
    /// Canonical service name for log records
    pub const COACHFORGE: &str = "coachforge";
}
