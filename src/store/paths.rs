// ABOUTME: Builders for the document-store path layout
// ABOUTME: Session trees share one shape across library, client, and plan-week scopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::constants::collections;
use uuid::Uuid;

/// Path to a creator's library document
#[must_use]
pub fn library_doc(library_id: Uuid) -> String {
    format!("{}/{library_id}", collections::CREATOR_LIBRARIES)
}

/// Collection of sessions under a library
#[must_use]
pub fn sessions_collection(library_id: Uuid) -> String {
    format!("{}/{}", library_doc(library_id), collections::SESSIONS)
}

/// Collection of modules ("weeks") under a library
#[must_use]
pub fn modules_collection(library_id: Uuid) -> String {
    format!("{}/{}", library_doc(library_id), collections::MODULES)
}

/// Path to one module document
#[must_use]
pub fn module_doc(library_id: Uuid, module_id: Uuid) -> String {
    format!("{}/{module_id}", modules_collection(library_id))
}

/// Collection of measure/objective presets under a library
#[must_use]
pub fn presets_collection(library_id: Uuid) -> String {
    format!("{}/{}", library_doc(library_id), collections::PRESETS)
}

/// Path to one preset document
#[must_use]
pub fn preset_doc(library_id: Uuid, preset_id: Uuid) -> String {
    format!("{}/{preset_id}", presets_collection(library_id))
}

/// Collection of programs under a creator
#[must_use]
pub fn programs_collection(creator_id: Uuid) -> String {
    format!(
        "{}/{creator_id}/{}",
        collections::CREATOR_PROGRAMS,
        collections::PROGRAMS
    )
}

/// Path to one program document
#[must_use]
pub fn program_doc(creator_id: Uuid, program_id: Uuid) -> String {
    format!("{}/{program_id}", programs_collection(creator_id))
}

/// Collection of uploaded-file metadata under a creator
#[must_use]
pub fn media_collection(creator_id: Uuid) -> String {
    format!(
        "{}/{creator_id}/{}",
        collections::CREATOR_MEDIA,
        collections::FILES
    )
}

/// Path to one media metadata document
#[must_use]
pub fn media_doc(creator_id: Uuid, file_id: Uuid) -> String {
    format!("{}/{file_id}", media_collection(creator_id))
}

/// Blob store path for an uploaded file's bytes
#[must_use]
pub fn media_blob_path(creator_id: Uuid, file_name: &str) -> String {
    format!("{}/{creator_id}/{file_name}", collections::CREATOR_MEDIA)
}

/// Collection of feedback records
#[must_use]
pub fn feedback_collection() -> String {
    collections::CREATOR_FEEDBACK.into()
}

/// Path to one feedback document
#[must_use]
pub fn feedback_doc(feedback_id: Uuid) -> String {
    format!("{}/{feedback_id}", collections::CREATOR_FEEDBACK)
}

/// Path set for one session document and its exercise/set sub-collections.
///
/// Library sessions, client-scoped copies, and plan-week-scoped copies all
/// share this shape; only the root differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDocTree {
    root: String,
}

impl SessionDocTree {
    /// Tree rooted at the canonical library session
    #[must_use]
    pub fn library(library_id: Uuid, session_id: Uuid) -> Self {
        Self {
            root: format!("{}/{session_id}", sessions_collection(library_id)),
        }
    }

    /// Tree rooted at a client-scoped override copy
    #[must_use]
    pub fn client(client_session_id: Uuid) -> Self {
        Self {
            root: format!("{}/{client_session_id}", collections::CLIENT_SESSIONS),
        }
    }

    /// Tree rooted at a plan-week-scoped override copy
    #[must_use]
    pub fn client_plan(
        client_id: Uuid,
        program_id: Uuid,
        week_key: &str,
        session_id: Uuid,
    ) -> Self {
        Self {
            root: format!(
                "{}/{client_id}/{program_id}/{week_key}/{session_id}",
                collections::CLIENT_PLAN_SESSIONS
            ),
        }
    }

    /// Path to the session document itself
    #[must_use]
    pub fn session_doc(&self) -> &str {
        &self.root
    }

    /// Collection of exercises under the session
    #[must_use]
    pub fn exercises(&self) -> String {
        format!("{}/{}", self.root, collections::EXERCISES)
    }

    /// Path to one exercise document
    #[must_use]
    pub fn exercise_doc(&self, exercise_id: Uuid) -> String {
        format!("{}/{exercise_id}", self.exercises())
    }

    /// Collection of sets under an exercise
    #[must_use]
    pub fn sets(&self, exercise_id: Uuid) -> String {
        format!("{}/{}", self.exercise_doc(exercise_id), collections::SETS)
    }

    /// Path to one set document
    #[must_use]
    pub fn set_doc(&self, exercise_id: Uuid, set_id: Uuid) -> String {
        format!("{}/{set_id}", self.sets(exercise_id))
    }
}
