// ABOUTME: Content copy service - lazy copy-on-write of session trees into override scopes
// ABOUTME: First write wins; a missing source aborts the triggering mutation with no partial copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

//! # Content Copy Service
//!
//! Client and plan-week scopes edit a detached copy of the canonical library
//! session. The copy materializes lazily on the first mutation: callers invoke
//! [`ensure_session_copy`] before writing, and reads keep falling back to the
//! library original until a copy exists.
//!
//! Creation is idempotent. The session document is claimed with a
//! create-if-absent write, so two near-simultaneous first edits produce
//! exactly one copy (the loser observes the existing document and no-ops).

use crate::errors::AppResult;
use crate::models::{Exercise, ExerciseSet, SessionDocument};
use crate::store::{DocumentStore, SessionDocTree};
use tracing::{debug, info};

/// What `ensure_session_copy` found or did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// This call created the override copy
    Created,
    /// An override copy already existed; nothing was written
    AlreadyPresent,
}

/// Ensure an override copy of `source` exists at `target`.
///
/// No-op when the target session document already exists. Otherwise the full
/// session tree - document, exercises, sets, with ordering and all fields
/// preserved verbatim - is copied. `initial_day_index`, when given, is stamped
/// onto the copied session document (plan-week scope placement).
///
/// # Errors
///
/// Returns [`crate::errors::ErrorCode::CopySourceNotFound`] when the canonical
/// session is missing; the triggering mutation must abort and no partial copy
/// is persisted. Store failures propagate as-is.
pub async fn ensure_session_copy<S: DocumentStore>(
    store: &S,
    source: &SessionDocTree,
    target: &SessionDocTree,
    initial_day_index: Option<u8>,
) -> AppResult<CopyOutcome> {
    if store.exists(target.session_doc()).await? {
        return Ok(CopyOutcome::AlreadyPresent);
    }

    let Some(mut session) = store.get::<SessionDocument>(source.session_doc()).await? else {
        return Err(crate::errors::AppError::copy_source_not_found(
            source.session_doc(),
        ));
    };

    // Gather the full source tree before claiming the target, so a missing
    // source can never leave a partial copy behind.
    let exercises: Vec<Exercise> = store.list(&source.exercises()).await?;
    let mut sets_by_exercise = Vec::with_capacity(exercises.len());
    for exercise in &exercises {
        let sets: Vec<ExerciseSet> = store.list(&source.sets(exercise.id)).await?;
        sets_by_exercise.push(sets);
    }

    if let Some(day_index) = initial_day_index {
        session.day_index = Some(day_index);
    }

    // The session document is the claim; losing the race means another first
    // edit already produced the copy.
    if !store.create(target.session_doc(), &session).await? {
        debug!(
            target = target.session_doc(),
            "lost copy-on-write race, copy already present"
        );
        return Ok(CopyOutcome::AlreadyPresent);
    }

    for (exercise, sets) in exercises.iter().zip(&sets_by_exercise) {
        store
            .put(&target.exercise_doc(exercise.id), exercise)
            .await?;
        for set in sets {
            store
                .put(&target.set_doc(exercise.id, set.id), set)
                .await?;
        }
    }

    info!(
        source = source.session_doc(),
        target = target.session_doc(),
        exercises = exercises.len(),
        "created override copy"
    );
    Ok(CopyOutcome::Created)
}
