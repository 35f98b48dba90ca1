// ABOUTME: Scope-polymorphic session repository - the override router
// ABOUTME: One interface, three storage locations; writes copy-on-write, reads fall back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

//! # Session Repository (Override Router)
//!
//! Every content-editing screen talks to one [`SessionRepository`] selected
//! once at screen entry from the active [`EditScope`]. Scope never leaks into
//! business logic:
//!
//! - `library` edits the canonical session tree directly.
//! - `client` and `client_plan` write to a scoped override tree, lazily
//!   materialized by the copy service on the first mutation; reads fall back
//!   to the canonical tree until then.
//!
//! All implementations keep exercise and set `order` values dense and
//! zero-based after every insert, delete, or move.

/// Client-scoped repository (1:1 coaching overrides)
pub mod client;
/// Plan-week-scoped repository (assigned program week overrides)
pub mod client_plan;
/// Library-scoped repository (edits the shared original)
pub mod library;

mod ops;

use crate::errors::{AppError, AppResult};
use crate::models::{
    EditScope, Exercise, ExerciseRef, ExerciseSet, ExerciseWithSets, Measure, Objective, Preset,
    SessionDocument, SessionRef, SessionWithExercises,
};
use crate::store::DocumentStore;
use crate::validation::ExerciseDraft;
use std::collections::BTreeMap;
use uuid::Uuid;

pub use client::ClientSessionRepository;
pub use client_plan::ClientPlanSessionRepository;
pub use library::LibrarySessionRepository;

/// Partial update for a session document. `None` leaves a field untouched;
/// for `image_url`, `Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    /// New display name
    pub name: Option<String>,
    /// New cover image (`Some(None)` clears it)
    pub image_url: Option<Option<String>>,
    /// New day placement within the plan week (plan scope only)
    pub day_index: Option<u8>,
}

/// Partial update for an exercise. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseUpdate {
    /// New primary reference
    pub primary: Option<ExerciseRef>,
    /// New alternatives map
    pub alternatives: Option<BTreeMap<Uuid, Vec<String>>>,
    /// New measures list
    pub measures: Option<Vec<Measure>>,
    /// New objectives list (the hidden sentinel is merged on write)
    pub objectives: Option<Vec<Objective>>,
    /// New custom measure labels
    pub custom_measure_labels: Option<Vec<String>>,
    /// New custom objective labels
    pub custom_objective_labels: Option<Vec<String>>,
}

/// One set field in stored form, for single and apply-to-all updates.
/// Applying a field never touches the other field or the set's `order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetField {
    /// Target repetitions (`None` clears)
    Reps(Option<String>),
    /// Target intensity (`None` clears)
    Intensity(Option<String>),
}

impl SetField {
    /// Check the carried value is in stored form
    ///
    /// # Errors
    ///
    /// Returns a validation error when the value does not match the stored
    /// reps or intensity pattern
    pub fn validate(&self) -> AppResult<()> {
        match self {
            Self::Reps(Some(value)) if !crate::normalize::is_stored_reps(value) => Err(
                AppError::invalid_input(format!("reps value {value:?} is not in stored form")),
            ),
            Self::Intensity(Some(value)) if !crate::normalize::is_stored_intensity(value) => {
                Err(AppError::value_out_of_range(format!(
                    "intensity value {value:?} is not in stored form"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Write the field onto a set, leaving everything else untouched
    pub fn apply(&self, set: &mut ExerciseSet) {
        match self {
            Self::Reps(value) => set.reps.clone_from(value),
            Self::Intensity(value) => set.intensity.clone_from(value),
        }
    }
}

/// Scope-polymorphic session content interface.
///
/// Write operations on override scopes materialize the copy first; read
/// operations fall back to the canonical library content until a copy exists.
#[async_trait::async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetch the session with its ordered exercises and sets
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if neither an override copy nor the
    /// canonical session exists
    async fn get_session_with_exercises(&self) -> AppResult<SessionWithExercises>;

    /// Update session fields
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty names or misplaced day indexes
    async fn update_session(&self, update: &SessionUpdate) -> AppResult<SessionDocument>;

    /// Persist a new exercise from a draft that passes the creation gate
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` enumerating unmet requirements when the gate
    /// fails
    async fn create_exercise(&self, draft: ExerciseDraft) -> AppResult<ExerciseWithSets>;

    /// Update an existing exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    async fn update_exercise(
        &self,
        exercise_id: Uuid,
        update: &ExerciseUpdate,
    ) -> AppResult<Exercise>;

    /// Delete an exercise and its sets, renumbering the remaining exercises
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    async fn delete_exercise(&self, exercise_id: Uuid) -> AppResult<()>;

    /// Move an exercise to a new position; returns the renumbered list
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    async fn update_exercise_order(
        &self,
        exercise_id: Uuid,
        new_index: u32,
    ) -> AppResult<Vec<Exercise>>;

    /// Append a set to an exercise
    ///
    /// # Errors
    ///
    /// Returns a validation error for values not in stored form
    async fn create_set(
        &self,
        exercise_id: Uuid,
        reps: Option<String>,
        intensity: Option<String>,
    ) -> AppResult<ExerciseSet>;

    /// Update one field of one set
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the set does not exist
    async fn update_set(
        &self,
        exercise_id: Uuid,
        set_id: Uuid,
        field: SetField,
    ) -> AppResult<ExerciseSet>;

    /// Apply one field across every set of the exercise
    ///
    /// # Errors
    ///
    /// Returns a validation error for values not in stored form
    async fn update_all_sets(
        &self,
        exercise_id: Uuid,
        field: SetField,
    ) -> AppResult<Vec<ExerciseSet>>;

    /// Delete a set, renumbering the remaining sets
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the set does not exist
    async fn delete_set(&self, exercise_id: Uuid, set_id: Uuid) -> AppResult<Vec<ExerciseSet>>;

    /// Fetch the ordered sets of an exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    async fn get_sets(&self, exercise_id: Uuid) -> AppResult<Vec<ExerciseSet>>;

    /// Replace the exercise's measures/objectives bundle from a preset
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the exercise does not exist
    async fn apply_preset(&self, exercise_id: Uuid, preset: &Preset) -> AppResult<Exercise>;
}

/// Repository wrapper that delegates to the implementation for the scope
/// selected at screen entry
#[derive(Clone)]
pub enum ScopedRepository<S: DocumentStore> {
    /// Edits the canonical library session
    Library(LibrarySessionRepository<S>),
    /// Edits a client-scoped override copy
    Client(ClientSessionRepository<S>),
    /// Edits a plan-week-scoped override copy
    ClientPlan(ClientPlanSessionRepository<S>),
}

impl<S: DocumentStore> ScopedRepository<S> {
    /// Select the implementation for an edit scope.
    ///
    /// `source` names the canonical library session the scope is viewing.
    pub fn for_scope(store: S, source: SessionRef, scope: EditScope) -> Self {
        match scope {
            EditScope::Library => Self::Library(LibrarySessionRepository::new(store, source)),
            EditScope::Client { client_session_id } => {
                Self::Client(ClientSessionRepository::new(store, source, client_session_id))
            }
            EditScope::ClientPlan {
                client_id,
                program_id,
                week_key,
                session_id,
            } => Self::ClientPlan(ClientPlanSessionRepository::new(
                store, source, client_id, program_id, week_key, session_id,
            )),
        }
    }

    /// Discard the override copy so reads fall back to the library original.
    ///
    /// Only client-scoped sessions support this ("reset to library"); there
    /// is no partial or field-level revert.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for library and plan-week scopes
    pub async fn revert_to_library(&self) -> AppResult<()> {
        match self {
            Self::Client(repo) => repo.revert_to_library().await,
            Self::Library(_) | Self::ClientPlan(_) => Err(AppError::invalid_input(
                "reset to library is only available for client-scoped sessions",
            )),
        }
    }
}

#[async_trait::async_trait]
impl<S: DocumentStore> SessionRepository for ScopedRepository<S> {
    async fn get_session_with_exercises(&self) -> AppResult<SessionWithExercises> {
        match self {
            Self::Library(repo) => repo.get_session_with_exercises().await,
            Self::Client(repo) => repo.get_session_with_exercises().await,
            Self::ClientPlan(repo) => repo.get_session_with_exercises().await,
        }
    }

    async fn update_session(&self, update: &SessionUpdate) -> AppResult<SessionDocument> {
        match self {
            Self::Library(repo) => repo.update_session(update).await,
            Self::Client(repo) => repo.update_session(update).await,
            Self::ClientPlan(repo) => repo.update_session(update).await,
        }
    }

    async fn create_exercise(&self, draft: ExerciseDraft) -> AppResult<ExerciseWithSets> {
        match self {
            Self::Library(repo) => repo.create_exercise(draft).await,
            Self::Client(repo) => repo.create_exercise(draft).await,
            Self::ClientPlan(repo) => repo.create_exercise(draft).await,
        }
    }

    async fn update_exercise(
        &self,
        exercise_id: Uuid,
        update: &ExerciseUpdate,
    ) -> AppResult<Exercise> {
        match self {
            Self::Library(repo) => repo.update_exercise(exercise_id, update).await,
            Self::Client(repo) => repo.update_exercise(exercise_id, update).await,
            Self::ClientPlan(repo) => repo.update_exercise(exercise_id, update).await,
        }
    }

    async fn delete_exercise(&self, exercise_id: Uuid) -> AppResult<()> {
        match self {
            Self::Library(repo) => repo.delete_exercise(exercise_id).await,
            Self::Client(repo) => repo.delete_exercise(exercise_id).await,
            Self::ClientPlan(repo) => repo.delete_exercise(exercise_id).await,
        }
    }

    async fn update_exercise_order(
        &self,
        exercise_id: Uuid,
        new_index: u32,
    ) -> AppResult<Vec<Exercise>> {
        match self {
            Self::Library(repo) => repo.update_exercise_order(exercise_id, new_index).await,
            Self::Client(repo) => repo.update_exercise_order(exercise_id, new_index).await,
            Self::ClientPlan(repo) => repo.update_exercise_order(exercise_id, new_index).await,
        }
    }

    async fn create_set(
        &self,
        exercise_id: Uuid,
        reps: Option<String>,
        intensity: Option<String>,
    ) -> AppResult<ExerciseSet> {
        match self {
            Self::Library(repo) => repo.create_set(exercise_id, reps, intensity).await,
            Self::Client(repo) => repo.create_set(exercise_id, reps, intensity).await,
            Self::ClientPlan(repo) => repo.create_set(exercise_id, reps, intensity).await,
        }
    }

    async fn update_set(
        &self,
        exercise_id: Uuid,
        set_id: Uuid,
        field: SetField,
    ) -> AppResult<ExerciseSet> {
        match self {
            Self::Library(repo) => repo.update_set(exercise_id, set_id, field).await,
            Self::Client(repo) => repo.update_set(exercise_id, set_id, field).await,
            Self::ClientPlan(repo) => repo.update_set(exercise_id, set_id, field).await,
        }
    }

    async fn update_all_sets(
        &self,
        exercise_id: Uuid,
        field: SetField,
    ) -> AppResult<Vec<ExerciseSet>> {
        match self {
            Self::Library(repo) => repo.update_all_sets(exercise_id, field).await,
            Self::Client(repo) => repo.update_all_sets(exercise_id, field).await,
            Self::ClientPlan(repo) => repo.update_all_sets(exercise_id, field).await,
        }
    }

    async fn delete_set(&self, exercise_id: Uuid, set_id: Uuid) -> AppResult<Vec<ExerciseSet>> {
        match self {
            Self::Library(repo) => repo.delete_set(exercise_id, set_id).await,
            Self::Client(repo) => repo.delete_set(exercise_id, set_id).await,
            Self::ClientPlan(repo) => repo.delete_set(exercise_id, set_id).await,
        }
    }

    async fn get_sets(&self, exercise_id: Uuid) -> AppResult<Vec<ExerciseSet>> {
        match self {
            Self::Library(repo) => repo.get_sets(exercise_id).await,
            Self::Client(repo) => repo.get_sets(exercise_id).await,
            Self::ClientPlan(repo) => repo.get_sets(exercise_id).await,
        }
    }

    async fn apply_preset(&self, exercise_id: Uuid, preset: &Preset) -> AppResult<Exercise> {
        match self {
            Self::Library(repo) => repo.apply_preset(exercise_id, preset).await,
            Self::Client(repo) => repo.apply_preset(exercise_id, preset).await,
            Self::ClientPlan(repo) => repo.apply_preset(exercise_id, preset).await,
        }
    }
}
