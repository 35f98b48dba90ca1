// ABOUTME: Integration tests for the content managers
// ABOUTME: Usage-conflict deletes, module/program wiring, presets, media, and feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use coachforge::content::{
    BlobUploader, CreatePresetRequest, FeedbackManager, LibraryManager, MediaManager,
    ModuleManager, PresetManager, ProgramManager, SessionManager,
};
use coachforge::errors::{AppResult, ErrorCode};
use coachforge::models::{
    EditScope, ExerciseDefinition, FeedbackKind, Measure, Objective, SessionRef,
};
use coachforge::repository::{ScopedRepository, SessionRepository};
use coachforge::store::InMemoryStore;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[tokio::test]
async fn test_session_delete_refused_while_referenced() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    let sessions = SessionManager::new(store.clone());
    let modules = ModuleManager::new(store.clone());
    let programs = ProgramManager::new(store.clone());

    let session = sessions.create_session(library_id, "Leg Day").await.unwrap();
    let module = modules.create_module(library_id, "Week A").await.unwrap();
    modules
        .attach_session(library_id, module.id, session.id)
        .await
        .unwrap();

    let program = programs.create_program(library_id, "Block 1").await.unwrap();
    programs
        .set_week_from_module(library_id, program.id, "week_1", library_id, module.id)
        .await
        .unwrap();

    let error = sessions
        .delete_session(library_id, session.id)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceInUse);
    assert!(error.message.contains("1 program(s)"));
    assert!(error.message.contains("1 module(s)"));

    // Unreference, then delete succeeds
    programs
        .remove_assignment(library_id, program.id, "week_1", session.id)
        .await
        .unwrap();
    modules
        .detach_session(library_id, module.id, session.id)
        .await
        .unwrap();
    sessions.delete_session(library_id, session.id).await.unwrap();
}

#[tokio::test]
async fn test_module_delete_refused_while_a_program_was_built_from_it() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    let modules = ModuleManager::new(store.clone());
    let programs = ProgramManager::new(store.clone());

    let module = modules.create_module(library_id, "Week A").await.unwrap();
    let program = programs.create_program(library_id, "Block 1").await.unwrap();
    programs
        .set_week_from_module(library_id, program.id, "week_1", library_id, module.id)
        .await
        .unwrap();

    let error = modules
        .delete_module(library_id, module.id)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceInUse);

    programs.delete_program(library_id, program.id).await.unwrap();
    modules.delete_module(library_id, module.id).await.unwrap();
}

#[tokio::test]
async fn test_module_orders_stay_dense_through_reorder_and_delete() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    let modules = ModuleManager::new(store.clone());

    let a = modules.create_module(library_id, "A").await.unwrap();
    let b = modules.create_module(library_id, "B").await.unwrap();
    let c = modules.create_module(library_id, "C").await.unwrap();
    assert_eq!((a.order, b.order, c.order), (0, 1, 2));

    let reordered = modules.reorder_module(library_id, c.id, 0).await.unwrap();
    let names: Vec<&str> = reordered.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
    let orders: Vec<u32> = reordered.iter().map(|m| m.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);

    modules.delete_module(library_id, a.id).await.unwrap();
    let remaining = modules.list_modules(library_id).await.unwrap();
    let orders: Vec<u32> = remaining.iter().map(|m| m.order).collect();
    assert_eq!(orders, vec![0, 1]);
}

#[tokio::test]
async fn test_attaching_a_session_twice_is_rejected() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    let sessions = SessionManager::new(store.clone());
    let modules = ModuleManager::new(store.clone());

    let session = sessions.create_session(library_id, "Pull Day").await.unwrap();
    let module = modules.create_module(library_id, "Week A").await.unwrap();

    modules
        .attach_session(library_id, module.id, session.id)
        .await
        .unwrap();
    let error = modules
        .attach_session(library_id, module.id, session.id)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_week_from_module_places_sessions_on_consecutive_days() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    let sessions = SessionManager::new(store.clone());
    let modules = ModuleManager::new(store.clone());
    let programs = ProgramManager::new(store.clone());

    let module = modules.create_module(library_id, "Week A").await.unwrap();
    for name in ["Push", "Pull", "Legs"] {
        let session = sessions.create_session(library_id, name).await.unwrap();
        modules
            .attach_session(library_id, module.id, session.id)
            .await
            .unwrap();
    }

    let program = programs.create_program(library_id, "Block 1").await.unwrap();
    let program = programs
        .set_week_from_module(library_id, program.id, "week_1", library_id, module.id)
        .await
        .unwrap();

    let week = program.weeks.get("week_1").unwrap();
    assert_eq!(week.source_module_id, Some(module.id));
    let days: Vec<u8> = week.assignments.iter().map(|a| a.day_index).collect();
    assert_eq!(days, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_preset_crud_and_application() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    let presets = PresetManager::new(store.clone());

    // Empty bundles are rejected
    let error = presets
        .create_preset(
            library_id,
            CreatePresetRequest {
                name: "Empty".into(),
                measures: vec![],
                objectives: vec![],
                custom_measure_labels: vec![],
                custom_objective_labels: vec![],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let preset = presets
        .create_preset(
            library_id,
            CreatePresetRequest {
                name: "Strength".into(),
                measures: vec![Measure::Weight],
                objectives: vec![Objective::Intensity],
                custom_measure_labels: vec![],
                custom_objective_labels: vec![],
            },
        )
        .await
        .unwrap();

    // Apply through a session repository: exercise bundle is replaced and
    // the hidden objective merged in
    let seeded = common::seed_session(&store).await;
    let repo = ScopedRepository::for_scope(
        store.clone(),
        SessionRef {
            library_id: seeded.library_id,
            session_id: seeded.session_id,
        },
        EditScope::Library,
    );
    let exercise = repo
        .apply_preset(seeded.exercise_ids[0], &preset)
        .await
        .unwrap();
    assert_eq!(exercise.measures, vec![Measure::Weight]);
    assert_eq!(
        exercise.objectives,
        vec![Objective::Intensity, Objective::Previous]
    );

    // Deleting the preset leaves the applied values in place
    presets.delete_preset(library_id, preset.id).await.unwrap();
    let resolved = repo.get_session_with_exercises().await.unwrap();
    assert_eq!(resolved.exercises[0].exercise.measures, vec![Measure::Weight]);
}

#[tokio::test]
async fn test_library_definition_rename_keeps_names_unique() {
    let store = InMemoryStore::new();
    let library_id = Uuid::new_v4();
    let libraries = LibraryManager::new(store);

    libraries
        .upsert_definition(library_id, "Squat", ExerciseDefinition::default())
        .await
        .unwrap();
    libraries
        .upsert_definition(library_id, "Front Squat", ExerciseDefinition::default())
        .await
        .unwrap();

    let error = libraries
        .rename_definition(library_id, "Squat", "Front Squat")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let library = libraries
        .rename_definition(library_id, "Squat", "Back Squat")
        .await
        .unwrap();
    assert!(library.exercises.contains_key("Back Squat"));
    assert!(!library.exercises.contains_key("Squat"));
}

struct MemoryUploader {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryUploader {
    fn new() -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl BlobUploader for MemoryUploader {
    async fn upload(
        &self,
        storage_path: &str,
        bytes: &[u8],
        _content_type: &str,
        on_progress: &(dyn Fn(u8) + Send + Sync),
    ) -> AppResult<String> {
        on_progress(100);
        self.blobs
            .lock()
            .unwrap()
            .insert(storage_path.to_owned(), bytes.to_vec());
        Ok(format!("https://cdn.example.com/{storage_path}"))
    }

    async fn remove(&self, storage_path: &str) -> AppResult<()> {
        self.blobs.lock().unwrap().remove(storage_path);
        Ok(())
    }
}

#[tokio::test]
async fn test_media_upload_records_metadata_and_delete_removes_blob() {
    let store = InMemoryStore::new();
    let creator_id = Uuid::new_v4();
    let media = MediaManager::new(store);
    let uploader = MemoryUploader::new();

    let file = media
        .upload(
            creator_id,
            &uploader,
            "demo.mp4",
            b"not really a video",
            "video/mp4",
            &|_progress: u8| {},
        )
        .await
        .unwrap();
    assert_eq!(file.size, 18);
    assert!(file.url.ends_with(&file.storage_path));
    assert!(uploader.blobs.lock().unwrap().contains_key(&file.storage_path));

    let listed = media.list_files(creator_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, file.id);

    media.delete_file(creator_id, &uploader, file.id).await.unwrap();
    assert!(media.list_files(creator_id).await.unwrap().is_empty());
    assert!(uploader.blobs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_feedback_requires_text_and_lists_newest_first() {
    let store = InMemoryStore::new();
    let creator_id = Uuid::new_v4();
    let feedback = FeedbackManager::new(store);

    let error = feedback
        .submit(creator_id, FeedbackKind::Bug, "   ", None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);

    feedback
        .submit(creator_id, FeedbackKind::Bug, "sets disappear on reorder", None)
        .await
        .unwrap();
    feedback
        .submit(
            creator_id,
            FeedbackKind::Suggestion,
            "dark mode please",
            Some("https://cdn.example.com/shot.png".into()),
        )
        .await
        .unwrap();

    let listed = feedback.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].kind, FeedbackKind::Suggestion);
}
