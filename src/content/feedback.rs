// ABOUTME: Creator feedback records - bug reports and suggestions
// ABOUTME: Append-only; records are read back newest first for triage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::errors::{AppError, AppResult};
use crate::models::{Feedback, FeedbackKind};
use crate::store::{paths, DocumentStore};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Feedback submission and listing
#[derive(Clone)]
pub struct FeedbackManager<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> FeedbackManager<S> {
    /// Create a new feedback manager
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Submit a feedback record
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty text
    pub async fn submit(
        &self,
        creator_id: Uuid,
        kind: FeedbackKind,
        text: &str,
        image_url: Option<String>,
    ) -> AppResult<Feedback> {
        if text.trim().is_empty() {
            return Err(AppError::missing_required_field("feedback text"));
        }

        let feedback = Feedback {
            id: Uuid::new_v4(),
            creator_id,
            kind,
            text: text.to_owned(),
            image_url,
            created_at: Utc::now(),
        };
        self.store
            .put(&paths::feedback_doc(feedback.id), &feedback)
            .await?;

        info!(%creator_id, kind = kind.as_str(), "recorded feedback");
        Ok(feedback)
    }

    /// List all feedback records, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn list(&self) -> AppResult<Vec<Feedback>> {
        let mut records: Vec<Feedback> = self.store.list(&paths::feedback_collection()).await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
