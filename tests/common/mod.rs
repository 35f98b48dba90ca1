// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Seeds a library session tree with exercises and sets on an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs, dead_code)]

use coachforge::models::{
    ExerciseDefinition, ExerciseRef, Library, Measure, Objective, SessionDocument,
};
use coachforge::store::{paths, DocumentStore, InMemoryStore, SessionDocTree};
use coachforge::validation::{ExerciseDraft, SetDraft};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A seeded canonical session: two exercises, the first with two sets
pub struct SeededSession {
    pub library_id: Uuid,
    pub session_id: Uuid,
    pub exercise_ids: Vec<Uuid>,
    pub set_ids: Vec<Uuid>,
}

/// A draft that passes the creation gate
pub fn valid_draft(library_id: Uuid, name: &str) -> ExerciseDraft {
    ExerciseDraft {
        primary: Some(ExerciseRef {
            library_id,
            exercise_name: name.to_owned(),
        }),
        measures: vec![Measure::Reps, Measure::Weight],
        objectives: vec![Objective::Reps],
        sets: vec![
            SetDraft {
                reps: Some("8-12".into()),
                intensity: Some("7/10".into()),
            },
            SetDraft {
                reps: Some("10".into()),
                intensity: None,
            },
        ],
        ..ExerciseDraft::default()
    }
}

/// Seed a library session with two exercises directly through the store
pub async fn seed_session(store: &InMemoryStore) -> SeededSession {
    let library_id = Uuid::new_v4();
    let session = SessionDocument::new("Push Day");
    let tree = SessionDocTree::library(library_id, session.id);
    store.put(tree.session_doc(), &session).await.unwrap();

    let mut exercise_ids = Vec::new();
    let mut set_ids = Vec::new();
    for (order, name) in ["Bench Press", "Overhead Press"].iter().enumerate() {
        let exercise = coachforge::models::Exercise {
            id: Uuid::new_v4(),
            order: order as u32,
            primary: ExerciseRef {
                library_id,
                exercise_name: (*name).to_owned(),
            },
            alternatives: BTreeMap::new(),
            measures: vec![Measure::Reps],
            objectives: Objective::merge_sentinel(vec![Objective::Reps]),
            custom_measure_labels: Vec::new(),
            custom_objective_labels: Vec::new(),
        };
        store
            .put(&tree.exercise_doc(exercise.id), &exercise)
            .await
            .unwrap();

        if order == 0 {
            for set_order in 0..2u32 {
                let set = coachforge::models::ExerciseSet {
                    id: Uuid::new_v4(),
                    order: set_order,
                    reps: Some("8-12".into()),
                    intensity: Some("7/10".into()),
                };
                store
                    .put(&tree.set_doc(exercise.id, set.id), &set)
                    .await
                    .unwrap();
                set_ids.push(set.id);
            }
        }
        exercise_ids.push(exercise.id);
    }

    SeededSession {
        library_id,
        session_id: session.id,
        exercise_ids,
        set_ids,
    }
}

/// Seed a library document with one complete and one incomplete definition
pub async fn seed_library(store: &InMemoryStore, library_id: Uuid) {
    let mut library = Library::new(library_id);
    library.exercises.insert(
        "Bench Press".into(),
        ExerciseDefinition {
            video_url: Some("https://cdn.example.com/bench.mp4".into()),
            muscle_map: BTreeMap::from([("chest".into(), 0.7), ("triceps".into(), 0.3)]),
            implements: vec!["barbell".into()],
            default_measures: vec![Measure::Reps, Measure::Weight],
            default_objectives: vec![Objective::Reps],
        },
    );
    library.exercises.insert(
        "Overhead Press".into(),
        ExerciseDefinition {
            video_url: None,
            muscle_map: BTreeMap::new(),
            implements: Vec::new(),
            default_measures: Vec::new(),
            default_objectives: Vec::new(),
        },
    );
    store
        .put(&paths::library_doc(library_id), &library)
        .await
        .unwrap();
}
