// ABOUTME: Edit scopes - the three mutually exclusive contexts a session edit runs in
// ABOUTME: Carries the storage coordinates each scope needs to locate its override copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pointer to a canonical library session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionRef {
    /// Library (creator) owning the session
    pub library_id: Uuid,
    /// Session identifier within that library
    pub session_id: Uuid,
}

impl SessionRef {
    /// Create a session reference
    #[must_use]
    pub const fn new(library_id: Uuid, session_id: Uuid) -> Self {
        Self {
            library_id,
            session_id,
        }
    }
}

/// One of three mutually exclusive edit contexts for a session.
///
/// `Library` edits the canonical session directly. The other two edit a
/// lazily-created copy and fall back to the canonical content while no copy
/// exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum EditScope {
    /// Edit the canonical library session
    Library,
    /// Edit a client-scoped copy (1:1 coaching)
    Client {
        /// Key of the client-scoped override document
        client_session_id: Uuid,
    },
    /// Edit a plan-week-scoped copy (assigned program week)
    ClientPlan {
        /// Client the plan belongs to
        client_id: Uuid,
        /// Assigned program
        program_id: Uuid,
        /// Week within the program (e.g. `"week_1"`)
        week_key: String,
        /// Session within that week
        session_id: Uuid,
    },
}

impl EditScope {
    /// Whether this scope edits the shared library content directly
    #[must_use]
    pub const fn is_library(&self) -> bool {
        matches!(self, Self::Library)
    }
}
