// ABOUTME: Integration tests for the content copy service
// ABOUTME: Idempotence under concurrency, missing-source aborts, and day placement stamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use coachforge::copy::{ensure_session_copy, CopyOutcome};
use coachforge::errors::ErrorCode;
use coachforge::models::{Exercise, ExerciseSet, SessionDocument};
use coachforge::store::{DocumentStore, InMemoryStore, SessionDocTree};
use uuid::Uuid;

#[tokio::test]
async fn test_copy_preserves_full_tree() {
    let store = InMemoryStore::new();
    let seeded = common::seed_session(&store).await;
    let source = SessionDocTree::library(seeded.library_id, seeded.session_id);
    let target = SessionDocTree::client(Uuid::new_v4());

    let outcome = ensure_session_copy(&store, &source, &target, None)
        .await
        .unwrap();
    assert_eq!(outcome, CopyOutcome::Created);

    let original: SessionDocument = store.get(source.session_doc()).await.unwrap().unwrap();
    let copied: SessionDocument = store.get(target.session_doc()).await.unwrap().unwrap();
    assert_eq!(copied, original);

    let mut source_exercises: Vec<Exercise> = store.list(&source.exercises()).await.unwrap();
    let mut copied_exercises: Vec<Exercise> = store.list(&target.exercises()).await.unwrap();
    source_exercises.sort_by_key(|e| e.order);
    copied_exercises.sort_by_key(|e| e.order);
    assert_eq!(copied_exercises, source_exercises);

    // Sets come over with ids and order intact
    let first = &copied_exercises[0];
    let mut sets: Vec<ExerciseSet> = store.list(&target.sets(first.id)).await.unwrap();
    sets.sort_by_key(|s| s.order);
    assert_eq!(sets.len(), 2);
    assert!(seeded.set_ids.contains(&sets[0].id));
}

#[tokio::test]
async fn test_second_call_is_a_no_op() {
    let store = InMemoryStore::new();
    let seeded = common::seed_session(&store).await;
    let source = SessionDocTree::library(seeded.library_id, seeded.session_id);
    let target = SessionDocTree::client(Uuid::new_v4());

    assert_eq!(
        ensure_session_copy(&store, &source, &target, None)
            .await
            .unwrap(),
        CopyOutcome::Created
    );

    // Mutate the copy, then call again: the edit must survive
    let mut copied: SessionDocument = store.get(target.session_doc()).await.unwrap().unwrap();
    copied.name = "Edited Copy".into();
    store.put(target.session_doc(), &copied).await.unwrap();

    assert_eq!(
        ensure_session_copy(&store, &source, &target, None)
            .await
            .unwrap(),
        CopyOutcome::AlreadyPresent
    );
    let reread: SessionDocument = store.get(target.session_doc()).await.unwrap().unwrap();
    assert_eq!(reread.name, "Edited Copy");
}

#[tokio::test]
async fn test_concurrent_first_edits_produce_one_copy() {
    let store = InMemoryStore::new();
    let seeded = common::seed_session(&store).await;
    let source = SessionDocTree::library(seeded.library_id, seeded.session_id);
    let target = SessionDocTree::client(Uuid::new_v4());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        let source = source.clone();
        let target = target.clone();
        handles.push(tokio::spawn(async move {
            ensure_session_copy(&store, &source, &target, None).await
        }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap().unwrap() {
            CopyOutcome::Created => created += 1,
            CopyOutcome::AlreadyPresent => {}
        }
    }
    assert_eq!(created, 1);

    let copied: SessionDocument = store.get(target.session_doc()).await.unwrap().unwrap();
    assert_eq!(copied.id, seeded.session_id);
}

#[tokio::test]
async fn test_missing_source_aborts_without_partial_copy() {
    let store = InMemoryStore::new();
    let source = SessionDocTree::library(Uuid::new_v4(), Uuid::new_v4());
    let target = SessionDocTree::client(Uuid::new_v4());

    let error = ensure_session_copy(&store, &source, &target, None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::CopySourceNotFound);
    assert!(!store.exists(target.session_doc()).await.unwrap());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_initial_day_index_is_stamped_onto_the_copy() {
    let store = InMemoryStore::new();
    let seeded = common::seed_session(&store).await;
    let source = SessionDocTree::library(seeded.library_id, seeded.session_id);
    let target =
        SessionDocTree::client_plan(Uuid::new_v4(), Uuid::new_v4(), "week_1", seeded.session_id);

    ensure_session_copy(&store, &source, &target, Some(3))
        .await
        .unwrap();

    let copied: SessionDocument = store.get(target.session_doc()).await.unwrap().unwrap();
    assert_eq!(copied.day_index, Some(3));

    // The library original never carries a day placement
    let original: SessionDocument = store.get(source.session_doc()).await.unwrap().unwrap();
    assert_eq!(original.day_index, None);
}
