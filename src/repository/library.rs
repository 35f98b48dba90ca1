// ABOUTME: Library-scoped session repository - edits the canonical shared session
// ABOUTME: Reads and writes target the same tree; no copy-on-write involved
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
use uuid::Uuid;

/// Repository editing the canonical library session directly
#[derive(Clone)]
pub struct LibrarySessionRepository<S: DocumentStore> {
    store: S,
    tree: SessionDocTree,
}

impl<S: DocumentStore> LibrarySessionRepository<S> {
    /// Create a repository for a canonical library session
    #[must_use]
    pub fn new(store: S, source: SessionRef) -> Self {
        Self {
            tree: SessionDocTree::library(source.library_id, source.session_id),
            store,
        }
    }
}

#[async_trait::async_trait]
impl<S: DocumentStore> SessionRepository for LibrarySessionRepository<S> {
    async fn get_session_with_exercises(&self) -> AppResult<SessionWithExercises> {
        ops::session_with_exercises(&self.store, &self.tree).await
    }

    async fn update_session(&self, update: &SessionUpdate) -> AppResult<SessionDocument> {
        ops::update_session(&self.store, &self.tree, update, false).await
    }

    async fn create_exercise(&self, draft: ExerciseDraft) -> AppResult<ExerciseWithSets> {
        ops::create_exercise(&self.store, &self.tree, draft).await
    }

    async fn update_exercise(
        &self,
        exercise_id: Uuid,
        update: &ExerciseUpdate,
    ) -> AppResult<Exercise> {
        ops::update_exercise(&self.store, &self.tree, exercise_id, update).await
    }

    async fn delete_exercise(&self, exercise_id: Uuid) -> AppResult<()> {
        ops::delete_exercise(&self.store, &self.tree, exercise_id).await
    }

    async fn update_exercise_order(
        &self,
        exercise_id: Uuid,
        new_index: u32,
    ) -> AppResult<Vec<Exercise>> {
        ops::move_exercise(&self.store, &self.tree, exercise_id, new_index).await
    }

    async fn create_set(
        &self,
        exercise_id: Uuid,
        reps: Option<String>,
        intensity: Option<String>,
    ) -> AppResult<ExerciseSet> {
        ops::create_set(&self.store, &self.tree, exercise_id, reps, intensity).await
    }

    async fn update_set(
        &self,
        exercise_id: Uuid,
        set_id: Uuid,
        field: SetField,
    ) -> AppResult<ExerciseSet> {
        ops::update_set(&self.store, &self.tree, exercise_id, set_id, &field).await
    }

    async fn update_all_sets(
        &self,
        exercise_id: Uuid,
        field: SetField,
    ) -> AppResult<Vec<ExerciseSet>> {
        ops::update_all_sets(&self.store, &self.tree, exercise_id, &field).await
    }

    async fn delete_set(&self, exercise_id: Uuid, set_id: Uuid) -> AppResult<Vec<ExerciseSet>> {
        ops::delete_set(&self.store, &self.tree, exercise_id, set_id).await
    }

    async fn get_sets(&self, exercise_id: Uuid) -> AppResult<Vec<ExerciseSet>> {
        ops::require_exercise(&self.store, &self.tree, exercise_id).await?;
        ops::list_sets(&self.store, &self.tree, exercise_id).await
    }

    async fn apply_preset(&self, exercise_id: Uuid, preset: &Preset) -> AppResult<Exercise> {
        ops::apply_preset(&self.store, &self.tree, exercise_id, preset).await
    }
}
