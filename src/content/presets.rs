// ABOUTME: Measure/objective preset CRUD for a creator's library
// ABOUTME: Applying a preset to an exercise goes through the session repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::errors::{AppError, AppResult};
use crate::models::{Measure, Objective, Preset};
use crate::store::{paths, DocumentStore};
use uuid::Uuid;

/// Fields for a new preset
#[derive(Debug, Clone)]
pub struct CreatePresetRequest {
    /// Display name
    pub name: String,
    /// Measures the preset applies
    pub measures: Vec<Measure>,
    /// Objectives the preset applies
    pub objectives: Vec<Objective>,
    /// Labels for `Measure::Custom` entries
    pub custom_measure_labels: Vec<String>,
    /// Labels for `Objective::Custom` entries
    pub custom_objective_labels: Vec<String>,
}

/// Preset operations for a creator's library
#[derive(Clone)]
pub struct PresetManager<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> PresetManager<S> {
    /// Create a new preset manager
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a preset
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is empty or when the
    /// preset carries no measures and no objectives
    pub async fn create_preset(
        &self,
        library_id: Uuid,
        request: CreatePresetRequest,
    ) -> AppResult<Preset> {
        if request.name.trim().is_empty() {
            return Err(AppError::missing_required_field("preset name"));
        }
        if request.measures.is_empty() && request.objectives.is_empty() {
            return Err(AppError::invalid_input(
                "a preset needs at least one measure or objective",
            ));
        }

        let mut preset = Preset::new(request.name, request.measures, request.objectives);
        preset.custom_measure_labels = request.custom_measure_labels;
        preset.custom_objective_labels = request.custom_objective_labels;

        self.store
            .put(&paths::preset_doc(library_id, preset.id), &preset)
            .await?;
        Ok(preset)
    }

    /// Fetch one preset
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the preset is missing
    pub async fn get_preset(&self, library_id: Uuid, preset_id: Uuid) -> AppResult<Preset> {
        self.store
            .get(&paths::preset_doc(library_id, preset_id))
            .await?
            .ok_or_else(|| AppError::not_found("preset").with_resource_id(preset_id.to_string()))
    }

    /// List the library's presets, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn list_presets(&self, library_id: Uuid) -> AppResult<Vec<Preset>> {
        let mut presets: Vec<Preset> = self
            .store
            .list(&paths::presets_collection(library_id))
            .await?;
        presets.sort_by_key(|preset| preset.created_at);
        Ok(presets)
    }

    /// Rename a preset
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the preset is missing
    pub async fn rename_preset(
        &self,
        library_id: Uuid,
        preset_id: Uuid,
        name: &str,
    ) -> AppResult<Preset> {
        if name.trim().is_empty() {
            return Err(AppError::missing_required_field("preset name"));
        }

        let mut preset = self.get_preset(library_id, preset_id).await?;
        name.clone_into(&mut preset.name);
        self.store
            .put(&paths::preset_doc(library_id, preset_id), &preset)
            .await?;
        Ok(preset)
    }

    /// Delete a preset. Exercises it was applied to keep their values.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the preset is missing
    pub async fn delete_preset(&self, library_id: Uuid, preset_id: Uuid) -> AppResult<()> {
        let path = paths::preset_doc(library_id, preset_id);
        if !self.store.exists(&path).await? {
            return Err(
                AppError::not_found("preset").with_resource_id(preset_id.to_string())
            );
        }
        self.store.delete(&path).await
    }
}
