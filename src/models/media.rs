// ABOUTME: Uploaded media metadata and free-form feedback records
// ABOUTME: Binary bytes live in the blob store; only metadata is persisted here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for one uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Unique identifier
    pub id: Uuid,
    /// Original file name
    pub name: String,
    /// Blob store path holding the bytes
    pub storage_path: String,
    /// Public URL for the uploaded file
    pub url: String,
    /// MIME content type
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

/// Kind of feedback a creator submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// Something is broken
    Bug,
    /// Something could be better
    Suggestion,
}

impl FeedbackKind {
    /// Convert to store string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Suggestion => "suggestion",
        }
    }

    /// Parse from store string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "bug" => Self::Bug,
            _ => Self::Suggestion,
        }
    }
}

/// A free-form feedback record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique identifier
    pub id: Uuid,
    /// Creator who submitted the feedback
    pub creator_id: Uuid,
    /// Bug report or suggestion
    pub kind: FeedbackKind,
    /// Free-form text
    pub text: String,
    /// Optional screenshot or attachment URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}
