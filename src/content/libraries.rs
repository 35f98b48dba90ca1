// ABOUTME: Library catalog operations - exercise definitions keyed by unique name
// ABOUTME: The library document's map key carries the uniqueness invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseDefinition, Library};
use crate::store::{paths, DocumentStore};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// Exercise catalog operations for creator libraries
#[derive(Clone)]
pub struct LibraryManager<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> LibraryManager<S> {
    /// Create a new library manager
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch a library document
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn get(&self, library_id: Uuid) -> AppResult<Option<Library>> {
        self.store.get(&paths::library_doc(library_id)).await
    }

    /// Fetch a library, creating an empty one on first access
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn ensure(&self, creator_id: Uuid) -> AppResult<Library> {
        if let Some(library) = self.get(creator_id).await? {
            return Ok(library);
        }
        let library = Library::new(creator_id);
        self.store
            .put(&paths::library_doc(creator_id), &library)
            .await?;
        debug!(%creator_id, "created empty library");
        Ok(library)
    }

    /// Insert or replace an exercise definition
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty names
    pub async fn upsert_definition(
        &self,
        library_id: Uuid,
        name: &str,
        definition: ExerciseDefinition,
    ) -> AppResult<Library> {
        if name.trim().is_empty() {
            return Err(AppError::missing_required_field("exercise name"));
        }

        let mut library = self.ensure(library_id).await?;
        library.exercises.insert(name.to_owned(), definition);
        library.updated_at = Utc::now();
        self.store
            .put(&paths::library_doc(library_id), &library)
            .await?;
        Ok(library)
    }

    /// Rename an exercise definition, keeping names unique within the library
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the old name is missing and
    /// `InvalidInput` if the new name is taken or empty
    pub async fn rename_definition(
        &self,
        library_id: Uuid,
        old_name: &str,
        new_name: &str,
    ) -> AppResult<Library> {
        if new_name.trim().is_empty() {
            return Err(AppError::missing_required_field("exercise name"));
        }

        let mut library = self
            .get(library_id)
            .await?
            .ok_or_else(|| AppError::not_found("library"))?;

        if library.exercises.contains_key(new_name) {
            return Err(AppError::invalid_input(format!(
                "an exercise named {new_name:?} already exists in this library"
            )));
        }

        let definition = library
            .exercises
            .remove(old_name)
            .ok_or_else(|| AppError::not_found("exercise").with_resource_id(old_name))?;
        library.exercises.insert(new_name.to_owned(), definition);
        library.updated_at = Utc::now();

        self.store
            .put(&paths::library_doc(library_id), &library)
            .await?;
        Ok(library)
    }

    /// Remove an exercise definition
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the library or exercise is missing
    pub async fn remove_definition(&self, library_id: Uuid, name: &str) -> AppResult<Library> {
        let mut library = self
            .get(library_id)
            .await?
            .ok_or_else(|| AppError::not_found("library"))?;

        if library.exercises.remove(name).is_none() {
            return Err(AppError::not_found("exercise").with_resource_id(name));
        }
        library.updated_at = Utc::now();

        self.store
            .put(&paths::library_doc(library_id), &library)
            .await?;
        Ok(library)
    }
}
