// ABOUTME: Plan-week-scoped session repository (assigned program week overrides)
// ABOUTME: Same copy-on-write semantics as the client scope, plus a mutable day placement
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
use std::sync::Arc;
use uuid::Uuid;

/// Repository editing a copy keyed by `(client, program, week, session)`.
///
/// Carries the session's mutable `day_index` within the plan week; everything
/// else follows the client-scope copy-on-write semantics.
#[derive(Clone)]
pub struct ClientPlanSessionRepository<S: DocumentStore> {
    store: S,
    binding: Arc<ops::OverrideBinding>,
}

impl<S: DocumentStore> ClientPlanSessionRepository<S> {
    /// Create a repository for a plan-week-scoped session
    #[must_use]
    pub fn new(
        store: S,
        source: SessionRef,
        client_id: Uuid,
        program_id: Uuid,
        week_key: String,
        session_id: Uuid,
    ) -> Self {
        Self {
            binding: Arc::new(ops::OverrideBinding {
                source: SessionDocTree::library(source.library_id, source.session_id),
                target: SessionDocTree::client_plan(client_id, program_id, &week_key, session_id),
                initial_day_index: None,
            }),
            store,
        }
    }

    /// Stamp a day placement onto the copy when it first materializes
    /// (taken from the week's session assignment)
    #[must_use]
    pub fn with_initial_day_index(mut self, day_index: u8) -> Self {
        self.binding = Arc::new(ops::OverrideBinding {
            source: self.binding.source.clone(),
            target: self.binding.target.clone(),
            initial_day_index: Some(day_index),
        });
        self
    }
}

#[async_trait::async_trait]
impl<S: DocumentStore> SessionRepository for ClientPlanSessionRepository<S> {
    async fn get_session_with_exercises(&self) -> AppResult<SessionWithExercises> {
        let tree = self.binding.readable(&self.store).await?;
        ops::session_with_exercises(&self.store, tree).await
    }

    async fn update_session(&self, update: &SessionUpdate) -> AppResult<SessionDocument> {
        let tree = self.binding.writable(&self.store).await?;
        // Day placement is legal in this scope
        ops::update_session(&self.store, tree, update, true).await
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
