// ABOUTME: Client-scoped session repository (1:1 coaching overrides)
// ABOUTME: Copy-on-write on first mutation; reads fall back to the library original
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use super::{ops, ExerciseUpdate, SessionRepository, SessionUpdate, SetField};
use crate::errors::AppResult;
use crate::models::{
    Exercise, ExerciseSet, ExerciseWithSets, Preset, SessionDocument, SessionRef,
    SessionWithExercises,
};
use crate::store::{DocumentStore, SessionDocTree};
use crate::validation::ExerciseDraft;
use tracing::info;
use uuid::Uuid;

/// Repository editing a client-scoped copy keyed by `client_session_id`.
///
/// The copy materializes on the first mutation; until then the creator sees
/// the library content. [`Self::revert_to_library`] discards the copy.
#[derive(Clone)]
pub struct ClientSessionRepository<S: DocumentStore> {
    store: S,
    binding: std::sync::Arc<ops::OverrideBinding>,
}

impl<S: DocumentStore> ClientSessionRepository<S> {
    /// Create a repository for a client-scoped session
    #[must_use]
    pub fn new(store: S, source: SessionRef, client_session_id: Uuid) -> Self {
        Self {
            binding: std::sync::Arc::new(ops::OverrideBinding {
                source: SessionDocTree::library(source.library_id, source.session_id),
                target: SessionDocTree::client(client_session_id),
                initial_day_index: None,
            }),
            store,
        }
    }

    /// Delete the override copy; subsequent reads return the library original.
    /// The copy is discarded, never merged back.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable
    pub async fn revert_to_library(&self) -> AppResult<()> {
        let removed = self
            .store
            .delete_tree(self.binding.target.session_doc())
            .await?;
        info!(
            target = self.binding.target.session_doc(),
            removed, "reverted client session to library"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl<S: DocumentStore> SessionRepository for ClientSessionRepository<S> {
    async fn get_session_with_exercises(&self) -> AppResult<SessionWithExercises> {
        let tree = self.binding.readable(&self.store).await?;
        ops::session_with_exercises(&self.store, tree).await
    }

    async fn update_session(&self, update: &SessionUpdate) -> AppResult<SessionDocument> {
        let tree = self.binding.writable(&self.store).await?;
        ops::update_session(&self.store, tree, update, false).await
    }

    async fn create_exercise(&self, draft: ExerciseDraft) -> AppResult<ExerciseWithSets> {
        let tree = self.binding.writable(&self.store).await?;
        ops::create_exercise(&self.store, tree, draft).await
    }

    async fn update_exercise(
        &self,
        exercise_id: Uuid,
        update: &ExerciseUpdate,
    ) -> AppResult<Exercise> {
        let tree = self.binding.writable(&self.store).await?;
        ops::update_exercise(&self.store, tree, exercise_id, update).await
    }

    async fn delete_exercise(&self, exercise_id: Uuid) -> AppResult<()> {
        let tree = self.binding.writable(&self.store).await?;
        ops::delete_exercise(&self.store, tree, exercise_id).await
    }

    async fn update_exercise_order(
        &self,
        exercise_id: Uuid,
        new_index: u32,
    ) -> AppResult<Vec<Exercise>> {
        let tree = self.binding.writable(&self.store).await?;
        ops::move_exercise(&self.store, tree, exercise_id, new_index).await
    }

    async fn create_set(
        &self,
        exercise_id: Uuid,
        reps: Option<String>,
        intensity: Option<String>,
    ) -> AppResult<ExerciseSet> {
        let tree = self.binding.writable(&self.store).await?;
        ops::create_set(&self.store, tree, exercise_id, reps, intensity).await
    }

    async fn update_set(
        &self,
        exercise_id: Uuid,
        set_id: Uuid,
        field: SetField,
    ) -> AppResult<ExerciseSet> {
        let tree = self.binding.writable(&self.store).await?;
        ops::update_set(&self.store, tree, exercise_id, set_id, &field).await
    }

    async fn update_all_sets(
        &self,
        exercise_id: Uuid,
        field: SetField,
    ) -> AppResult<Vec<ExerciseSet>> {
        let tree = self.binding.writable(&self.store).await?;
        ops::update_all_sets(&self.store, tree, exercise_id, &field).await
    }

    async fn delete_set(&self, exercise_id: Uuid, set_id: Uuid) -> AppResult<Vec<ExerciseSet>> {
        let tree = self.binding.writable(&self.store).await?;
        ops::delete_set(&self.store, tree, exercise_id, set_id).await
    }

    async fn get_sets(&self, exercise_id: Uuid) -> AppResult<Vec<ExerciseSet>> {
        let tree = self.binding.readable(&self.store).await?;
        ops::require_exercise(&self.store, tree, exercise_id).await?;
        ops::list_sets(&self.store, tree, exercise_id).await
    }

    async fn apply_preset(&self, exercise_id: Uuid, preset: &Preset) -> AppResult<Exercise> {
        let tree = self.binding.writable(&self.store).await?;
        ops::apply_preset(&self.store, tree, exercise_id, preset).await
    }
}
