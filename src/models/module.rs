// ABOUTME: Library modules ("weeks") - ordered containers referencing sessions
// ABOUTME: Sessions are attached and detached by reference, never copied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered "week" grouping of sessions within a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryModule {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Dense zero-based position among the library's modules
    pub order: u32,
    /// Referenced session IDs, in display order
    #[serde(default)]
    pub session_ids: Vec<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl LibraryModule {
    /// Create an empty module at the given position
    #[must_use]
    pub fn new(name: impl Into<String>, order: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            order,
            session_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
