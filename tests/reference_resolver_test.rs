// ABOUTME: Integration tests for the exercise reference resolver
// ABOUTME: Completeness flags, graceful degradation, and per-instance cache lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use coachforge::resolver::ReferenceResolver;
use coachforge::store::InMemoryStore;
use uuid::Uuid;

#[tokio::test]
async fn test_complete_definition_resolves_as_complete() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    common::seed_library(&store, library_id).await;

    let resolver = ReferenceResolver::new(store);
    let resolved = resolver.resolve(library_id, "Bench Press").await;
    assert_eq!(resolved.display_title, "Bench Press");
    assert!(resolved.is_complete);
}

#[tokio::test]
async fn test_incomplete_definition_resolves_with_flag_down() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    common::seed_library(&store, library_id).await;

    let resolver = ReferenceResolver::new(store);
    let resolved = resolver.resolve(library_id, "Overhead Press").await;
    assert_eq!(resolved.display_title, "Overhead Press");
    assert!(!resolved.is_complete);
}

#[tokio::test]
async fn test_missing_library_degrades_to_raw_identifier() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();

    let resolver = ReferenceResolver::new(store);
    let resolved = resolver.resolve(library_id, "Bench Press").await;
    assert_eq!(resolved.display_title, library_id.to_string());
    assert!(!resolved.is_complete);
}

#[tokio::test]
async fn test_exercise_missing_from_library_keeps_its_name() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    common::seed_library(&store, library_id).await;

    let resolver = ReferenceResolver::new(store);
    let resolved = resolver.resolve(library_id, "Deadlift").await;
    assert_eq!(resolved.display_title, "Deadlift");
    assert!(!resolved.is_complete);
}

#[tokio::test]
async fn test_library_is_fetched_once_per_instance() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    common::seed_library(&store, library_id).await;

    let resolver = ReferenceResolver::new(store);
    resolver.resolve(library_id, "Bench Press").await;
    resolver.resolve(library_id, "Overhead Press").await;
    resolver.resolve(library_id, "Deadlift").await;
    assert_eq!(resolver.cached_library_count(), 1);

    resolver.invalidate();
    assert_eq!(resolver.cached_library_count(), 0);
}
