// ABOUTME: Content managers - CRUD services over the creator's document collections
// ABOUTME: Libraries, sessions, modules, programs, presets, media metadata, and feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

/// Feedback record service
pub mod feedback;
/// Exercise definition catalog service
pub mod libraries;
/// Uploaded media metadata service and blob uploader seam
pub mod media;
/// Module ("week") service
pub mod modules;
/// Preset service
pub mod presets;
/// Program grid service
pub mod programs;
/// Library session lifecycle service
pub mod sessions;

pub use feedback::FeedbackManager;
pub use libraries::LibraryManager;
pub use media::{BlobUploader, MediaManager};
pub use modules::ModuleManager;
pub use presets::{CreatePresetRequest, PresetManager};
pub use programs::ProgramManager;
pub use sessions::SessionManager;
