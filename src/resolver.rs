// ABOUTME: Reference resolver - maps {library, exercise name} pairs to display data
// ABOUTME: Caches library documents per instance; fetch failures degrade instead of erroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

//! # Reference Resolver
//!
//! Exercises reference their definitions as `{library_id, exercise_name}`
//! pairs. The resolver fetches the owning library document once, memoizes
//! per-pair results, and computes a completeness flag (video + muscle map +
//! implements all present).
//!
//! One resolver instance is created per modal interaction and dropped (or
//! [`ReferenceResolver::invalidate`]d) when the modal closes, so cached
//! library content never outlives the screen that fetched it.

use crate::models::Library;
use crate::store::{paths, DocumentStore};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Resolved display data for one exercise reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Title shown in the exercise row
    pub display_title: String,
    /// Whether the definition has a video, a muscle map, and implements
    pub is_complete: bool,
}

/// Per-interaction resolver with bounded-lifetime caches
#[derive(Clone)]
pub struct ReferenceResolver<S: DocumentStore> {
    store: S,
    /// Fetched library documents; `None` records a failed or missing fetch
    libraries: Arc<DashMap<Uuid, Option<Library>>>,
    /// Memoized per-pair results
    resolved: Arc<DashMap<(Uuid, String), ResolvedReference>>,
}

impl<S: DocumentStore> ReferenceResolver<S> {
    /// Create a resolver bound to one modal interaction
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            libraries: Arc::new(DashMap::new()),
            resolved: Arc::new(DashMap::new()),
        }
    }

    /// Resolve a reference to its display title and completeness flag.
    ///
    /// Never fails: when the library document cannot be fetched, every
    /// exercise in that library resolves to the raw library identifier with
    /// `is_complete = false`.
    pub async fn resolve(&self, library_id: Uuid, exercise_name: &str) -> ResolvedReference {
        let key = (library_id, exercise_name.to_owned());
        if let Some(hit) = self.resolved.get(&key) {
            return hit.clone();
        }

        let resolved = match self.library(library_id).await {
            Some(library) => match library.exercises.get(exercise_name) {
                Some(definition) => ResolvedReference {
                    display_title: exercise_name.to_owned(),
                    is_complete: definition.is_complete(),
                },
                None => {
                    debug!(%library_id, exercise_name, "exercise missing from library");
                    ResolvedReference {
                        display_title: exercise_name.to_owned(),
                        is_complete: false,
                    }
                }
            },
            // Degrade to the raw identifier; the screen stays usable
            None => ResolvedReference {
                display_title: library_id.to_string(),
                is_complete: false,
            },
        };

        self.resolved.insert(key, resolved.clone());
        resolved
    }

    /// Drop all cached library content (call on modal close)
    pub fn invalidate(&self) {
        self.libraries.clear();
        self.resolved.clear();
    }

    /// Number of library documents currently cached
    #[must_use]
    pub fn cached_library_count(&self) -> usize {
        self.libraries.len()
    }

    async fn library(&self, library_id: Uuid) -> Option<Library> {
        if let Some(cached) = self.libraries.get(&library_id) {
            return cached.clone();
        }

        let fetched = match self.store.get::<Library>(&paths::library_doc(library_id)).await {
            Ok(Some(library)) => Some(library),
            Ok(None) => {
                warn!(%library_id, "library document missing");
                None
            }
            Err(error) => {
                warn!(%library_id, %error, "library fetch failed, degrading to identifiers");
                None
            }
        };

        self.libraries.insert(library_id, fetched.clone());
        fetched
    }
}
