// ABOUTME: Shared session-tree operations behind every repository scope
// ABOUTME: All mutations renumber siblings so order values stay dense and zero-based
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use super::{ExerciseUpdate, SessionUpdate, SetField};
use crate::constants::limits::DAY_INDEX_MAX;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Exercise, ExerciseSet, ExerciseWithSets, Objective, Preset, SessionDocument,
    SessionWithExercises,
};
use crate::ordering;
use crate::store::{DocumentStore, SessionDocTree};
use crate::validation::{self, ExerciseDraft};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Source/target tree pair for an override scope.
///
/// Reads resolve to the override tree once a copy exists and to the canonical
/// source until then; writes materialize the copy first.
pub(super) struct OverrideBinding {
    pub source: SessionDocTree,
    pub target: SessionDocTree,
    pub initial_day_index: Option<u8>,
}

impl OverrideBinding {
    pub(super) async fn readable<S: DocumentStore>(
        &self,
        store: &S,
    ) -> AppResult<&SessionDocTree> {
        if store.exists(self.target.session_doc()).await? {
            Ok(&self.target)
        } else {
            Ok(&self.source)
        }
    }

    pub(super) async fn writable<S: DocumentStore>(
        &self,
        store: &S,
    ) -> AppResult<&SessionDocTree> {
        crate::copy::ensure_session_copy(store, &self.source, &self.target, self.initial_day_index)
            .await?;
        Ok(&self.target)
    }
}

pub(super) async fn require_session<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
) -> AppResult<SessionDocument> {
    store
        .get::<SessionDocument>(tree.session_doc())
        .await?
        .ok_or_else(|| AppError::not_found("session").with_resource_id(tree.session_doc()))
}

pub(super) async fn list_exercises<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
) -> AppResult<Vec<Exercise>> {
    let mut exercises: Vec<Exercise> = store.list(&tree.exercises()).await?;
    exercises.sort_by_key(|exercise| exercise.order);
    Ok(exercises)
}

pub(super) async fn list_sets<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
) -> AppResult<Vec<ExerciseSet>> {
    let mut sets: Vec<ExerciseSet> = store.list(&tree.sets(exercise_id)).await?;
    sets.sort_by_key(|set| set.order);
    Ok(sets)
}

pub(super) async fn require_exercise<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
) -> AppResult<Exercise> {
    store
        .get::<Exercise>(&tree.exercise_doc(exercise_id))
        .await?
        .ok_or_else(|| AppError::not_found("exercise").with_resource_id(exercise_id.to_string()))
}

pub(super) async fn session_with_exercises<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
) -> AppResult<SessionWithExercises> {
    let session = require_session(store, tree).await?;
    let exercises = list_exercises(store, tree).await?;

    let mut with_sets = Vec::with_capacity(exercises.len());
    for exercise in exercises {
        let sets = list_sets(store, tree, exercise.id).await?;
        with_sets.push(ExerciseWithSets { exercise, sets });
    }

    Ok(SessionWithExercises {
        session,
        exercises: with_sets,
    })
}

pub(super) async fn update_session<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    update: &SessionUpdate,
    allow_day_index: bool,
) -> AppResult<SessionDocument> {
    let mut session = require_session(store, tree).await?;

    if let Some(name) = &update.name {
        if name.trim().is_empty() {
            return Err(AppError::missing_required_field("session name"));
        }
        session.name.clone_from(name);
    }

    if let Some(image_url) = &update.image_url {
        session.image_url.clone_from(image_url);
    }

    if let Some(day_index) = update.day_index {
        if !allow_day_index {
            return Err(AppError::invalid_input(
                "day placement only applies to plan-week session copies",
            ));
        }
        if day_index > DAY_INDEX_MAX {
            return Err(AppError::value_out_of_range(format!(
                "day index {day_index} outside 0-{DAY_INDEX_MAX}"
            )));
        }
        session.day_index = Some(day_index);
    }

    session.updated_at = Utc::now();
    store.put(tree.session_doc(), &session).await?;
    Ok(session)
}

pub(super) async fn create_exercise<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    draft: ExerciseDraft,
) -> AppResult<ExerciseWithSets> {
    let missing = validation::missing_requirements(&draft);
    if !missing.is_empty() {
        let reasons: Vec<&str> = missing
            .iter()
            .map(validation::MissingRequirement::description)
            .collect();
        return Err(AppError::invalid_input("exercise draft cannot be saved")
            .with_details(serde_json::json!({ "missing": reasons })));
    }

    // Gate guarantees the primary is present
    let Some(primary) = draft.primary.clone() else {
        return Err(AppError::missing_required_field("primary exercise"));
    };

    require_session(store, tree).await?;
    let existing = list_exercises(store, tree).await?;

    let exercise = Exercise {
        id: Uuid::new_v4(),
        order: existing.len() as u32,
        primary,
        alternatives: draft.alternatives.clone(),
        measures: draft.measures.clone(),
        objectives: Objective::merge_sentinel(draft.objectives.clone()),
        custom_measure_labels: draft.custom_measure_labels.clone(),
        custom_objective_labels: draft.custom_objective_labels.clone(),
    };

    let sets = build_sets(&draft)?;

    store.put(&tree.exercise_doc(exercise.id), &exercise).await?;
    for set in &sets {
        store.put(&tree.set_doc(exercise.id, set.id), set).await?;
    }

    debug!(exercise_id = %exercise.id, sets = sets.len(), "created exercise");
    Ok(ExerciseWithSets { exercise, sets })
}

fn build_sets(draft: &ExerciseDraft) -> AppResult<Vec<ExerciseSet>> {
    if draft.sets.is_empty() {
        return Ok((0..draft.planned_set_count).map(ExerciseSet::empty).collect());
    }

    let mut sets = Vec::with_capacity(draft.sets.len());
    for (index, set_draft) in draft.sets.iter().enumerate() {
        validate_stored_reps(set_draft.reps.as_deref())?;
        validate_stored_intensity(set_draft.intensity.as_deref())?;
        sets.push(ExerciseSet {
            id: Uuid::new_v4(),
            order: index as u32,
            reps: set_draft.reps.clone(),
            intensity: set_draft.intensity.clone(),
        });
    }
    Ok(sets)
}

pub(super) async fn update_exercise<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
    update: &ExerciseUpdate,
) -> AppResult<Exercise> {
    let mut exercise = require_exercise(store, tree, exercise_id).await?;

    if let Some(primary) = &update.primary {
        if primary.exercise_name.is_empty() {
            return Err(AppError::missing_required_field("primary exercise name"));
        }
        exercise.primary = primary.clone();
    }
    if let Some(alternatives) = &update.alternatives {
        exercise.alternatives.clone_from(alternatives);
    }
    if let Some(measures) = &update.measures {
        exercise.measures.clone_from(measures);
    }
    if let Some(objectives) = &update.objectives {
        exercise.objectives = Objective::merge_sentinel(objectives.clone());
    }
    if let Some(labels) = &update.custom_measure_labels {
        exercise.custom_measure_labels.clone_from(labels);
    }
    if let Some(labels) = &update.custom_objective_labels {
        exercise.custom_objective_labels.clone_from(labels);
    }

    store.put(&tree.exercise_doc(exercise_id), &exercise).await?;
    Ok(exercise)
}

pub(super) async fn delete_exercise<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
) -> AppResult<()> {
    require_exercise(store, tree, exercise_id).await?;
    // Removes the exercise document and its sets sub-collection
    store.delete_tree(&tree.exercise_doc(exercise_id)).await?;

    let mut remaining = list_exercises(store, tree).await?;
    ordering::renumber(&mut remaining);
    for exercise in &remaining {
        store.put(&tree.exercise_doc(exercise.id), exercise).await?;
    }
    Ok(())
}

pub(super) async fn move_exercise<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
    new_index: u32,
) -> AppResult<Vec<Exercise>> {
    let mut exercises = list_exercises(store, tree).await?;
    let Some(from) = exercises.iter().position(|e| e.id == exercise_id) else {
        return Err(
            AppError::not_found("exercise").with_resource_id(exercise_id.to_string())
        );
    };

    ordering::move_to_index(&mut exercises, from, new_index as usize);
    for exercise in &exercises {
        store.put(&tree.exercise_doc(exercise.id), exercise).await?;
    }
    Ok(exercises)
}

pub(super) async fn create_set<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
    reps: Option<String>,
    intensity: Option<String>,
) -> AppResult<ExerciseSet> {
    validate_stored_reps(reps.as_deref())?;
    validate_stored_intensity(intensity.as_deref())?;
    require_exercise(store, tree, exercise_id).await?;

    let existing = list_sets(store, tree, exercise_id).await?;
    let set = ExerciseSet {
        id: Uuid::new_v4(),
        order: existing.len() as u32,
        reps,
        intensity,
    };
    store.put(&tree.set_doc(exercise_id, set.id), &set).await?;
    Ok(set)
}

pub(super) async fn update_set<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
    set_id: Uuid,
    field: &SetField,
) -> AppResult<ExerciseSet> {
    field.validate()?;
    let path = tree.set_doc(exercise_id, set_id);
    let mut set = store
        .get::<ExerciseSet>(&path)
        .await?
        .ok_or_else(|| AppError::not_found("set").with_resource_id(set_id.to_string()))?;

    field.apply(&mut set);
    store.put(&path, &set).await?;
    Ok(set)
}

pub(super) async fn update_all_sets<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
    field: &SetField,
) -> AppResult<Vec<ExerciseSet>> {
    field.validate()?;
    require_exercise(store, tree, exercise_id).await?;

    let mut sets = list_sets(store, tree, exercise_id).await?;
    for set in &mut sets {
        // Only the targeted field changes; order and the other field stay put
        field.apply(set);
        store.put(&tree.set_doc(exercise_id, set.id), set).await?;
    }
    Ok(sets)
}

pub(super) async fn delete_set<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
    set_id: Uuid,
) -> AppResult<Vec<ExerciseSet>> {
    if !store.exists(&tree.set_doc(exercise_id, set_id)).await? {
        return Err(AppError::not_found("set").with_resource_id(set_id.to_string()));
    }
    store.delete(&tree.set_doc(exercise_id, set_id)).await?;

    let mut remaining = list_sets(store, tree, exercise_id).await?;
    ordering::renumber(&mut remaining);
    for set in &remaining {
        store.put(&tree.set_doc(exercise_id, set.id), set).await?;
    }
    Ok(remaining)
}

pub(super) async fn apply_preset<S: DocumentStore>(
    store: &S,
    tree: &SessionDocTree,
    exercise_id: Uuid,
    preset: &Preset,
) -> AppResult<Exercise> {
    let mut exercise = require_exercise(store, tree, exercise_id).await?;

    exercise.measures.clone_from(&preset.measures);
    exercise.objectives = Objective::merge_sentinel(preset.objectives.clone());
    exercise
        .custom_measure_labels
        .clone_from(&preset.custom_measure_labels);
    exercise
        .custom_objective_labels
        .clone_from(&preset.custom_objective_labels);

    store.put(&tree.exercise_doc(exercise_id), &exercise).await?;
    Ok(exercise)
}

fn validate_stored_reps(reps: Option<&str>) -> AppResult<()> {
    match reps {
        Some(value) if !crate::normalize::is_stored_reps(value) => Err(
            AppError::invalid_input(format!("reps value {value:?} is not in stored form")),
        ),
        _ => Ok(()),
    }
}

fn validate_stored_intensity(intensity: Option<&str>) -> AppResult<()> {
    match intensity {
        Some(value) if !crate::normalize::is_stored_intensity(value) => Err(
            AppError::value_out_of_range(format!(
                "intensity value {value:?} is not in stored form"
            )),
        ),
        _ => Ok(()),
    }
}
