// ABOUTME: Common data models for creator coaching content
// ABOUTME: Libraries, sessions, exercises, sets, modules, programs, presets, and edit scopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

/// Exercise library catalog types
pub mod library;
/// Uploaded media metadata and feedback records
pub mod media;
/// Library modules ("weeks") grouping sessions by reference
pub mod module;
/// Measure/objective preset bundles
pub mod preset;
/// Program documents giving plan weeks their coordinates
pub mod program;
/// Edit scopes and session source references
pub mod scope;
/// Sessions, exercises, and sets
pub mod session;

pub use library::{ExerciseDefinition, Library};
pub use media::{Feedback, FeedbackKind, MediaFile};
pub use module::LibraryModule;
pub use preset::Preset;
pub use program::{Program, ProgramWeek, SessionAssignment};
pub use scope::{EditScope, SessionRef};
pub use session::{
    Exercise, ExerciseRef, ExerciseSet, ExerciseWithSets, Measure, Objective, SessionDocument,
    SessionWithExercises,
};
