// ABOUTME: Module ("week") operations - ordered containers of session references
// ABOUTME: Attach/detach never copies; deletion is refused while programs use the module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::errors::{AppError, AppResult};
use crate::models::{LibraryModule, Program};
use crate::ordering;
use crate::store::{paths, DocumentStore, SessionDocTree};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Operations on a library's modules
#[derive(Clone)]
pub struct ModuleManager<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> ModuleManager<S> {
    /// Create a new module manager
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// List the library's modules by their dense order
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn list_modules(&self, library_id: Uuid) -> AppResult<Vec<LibraryModule>> {
        let mut modules: Vec<LibraryModule> = self
            .store
            .list(&paths::modules_collection(library_id))
            .await?;
        modules.sort_by_key(|module| module.order);
        Ok(modules)
    }

    /// Create an empty module at the end of the list
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty names
    pub async fn create_module(&self, library_id: Uuid, name: &str) -> AppResult<LibraryModule> {
        if name.trim().is_empty() {
            return Err(AppError::missing_required_field("module name"));
        }

        let existing = self.list_modules(library_id).await?;
        let module = LibraryModule::new(name, existing.len() as u32);
        self.store
            .put(&paths::module_doc(library_id, module.id), &module)
            .await?;
        Ok(module)
    }

    /// Rename a module
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the module is missing
    pub async fn rename_module(
        &self,
        library_id: Uuid,
        module_id: Uuid,
        name: &str,
    ) -> AppResult<LibraryModule> {
        if name.trim().is_empty() {
            return Err(AppError::missing_required_field("module name"));
        }

        let mut module = self.require_module(library_id, module_id).await?;
        name.clone_into(&mut module.name);
        module.updated_at = Utc::now();
        self.store
            .put(&paths::module_doc(library_id, module_id), &module)
            .await?;
        Ok(module)
    }

    /// Move a module to a new position; returns the renumbered list
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the module is missing
    pub async fn reorder_module(
        &self,
        library_id: Uuid,
        module_id: Uuid,
        new_index: u32,
    ) -> AppResult<Vec<LibraryModule>> {
        let mut modules = self.list_modules(library_id).await?;
        let Some(from) = modules.iter().position(|m| m.id == module_id) else {
            return Err(
                AppError::not_found("module").with_resource_id(module_id.to_string())
            );
        };

        ordering::move_to_index(&mut modules, from, new_index as usize);
        for module in &modules {
            self.store
                .put(&paths::module_doc(library_id, module.id), module)
                .await?;
        }
        Ok(modules)
    }

    /// Delete a module. Refused while any program was built from it.
    ///
    /// # Errors
    ///
    /// Returns `ResourceInUse` when referenced, `ResourceNotFound` when missing
    pub async fn delete_module(&self, library_id: Uuid, module_id: Uuid) -> AppResult<()> {
        self.require_module(library_id, module_id).await?;

        let programs: Vec<Program> = self
            .store
            .list(&paths::programs_collection(library_id))
            .await?;
        let uses = programs
            .iter()
            .filter(|program| program.references_module(module_id))
            .count();
        if uses > 0 {
            return Err(AppError::resource_in_use(format!(
                "module is used in {uses} program(s)"
            ))
            .with_resource_id(module_id.to_string()));
        }

        self.store
            .delete(&paths::module_doc(library_id, module_id))
            .await?;

        let mut remaining = self.list_modules(library_id).await?;
        ordering::renumber(&mut remaining);
        for module in &remaining {
            self.store
                .put(&paths::module_doc(library_id, module.id), module)
                .await?;
        }

        info!(%library_id, %module_id, "deleted module");
        Ok(())
    }

    /// Attach a session to a module by reference
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for missing modules or sessions and
    /// `InvalidInput` when the session is already attached
    pub async fn attach_session(
        &self,
        library_id: Uuid,
        module_id: Uuid,
        session_id: Uuid,
    ) -> AppResult<LibraryModule> {
        let session_tree = SessionDocTree::library(library_id, session_id);
        if !self.store.exists(session_tree.session_doc()).await? {
            return Err(
                AppError::not_found("session").with_resource_id(session_id.to_string())
            );
        }

        let mut module = self.require_module(library_id, module_id).await?;
        if module.session_ids.contains(&session_id) {
            return Err(AppError::invalid_input(
                "session is already attached to this module",
            ));
        }

        module.session_ids.push(session_id);
        module.updated_at = Utc::now();
        self.store
            .put(&paths::module_doc(library_id, module_id), &module)
            .await?;
        Ok(module)
    }

    /// Detach a session reference from a module (the session itself survives)
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the module or attachment is missing
    pub async fn detach_session(
        &self,
        library_id: Uuid,
        module_id: Uuid,
        session_id: Uuid,
    ) -> AppResult<LibraryModule> {
        let mut module = self.require_module(library_id, module_id).await?;
        let Some(position) = module.session_ids.iter().position(|id| *id == session_id) else {
            return Err(
                AppError::not_found("session attachment").with_resource_id(session_id.to_string())
            );
        };

        module.session_ids.remove(position);
        module.updated_at = Utc::now();
        self.store
            .put(&paths::module_doc(library_id, module_id), &module)
            .await?;
        Ok(module)
    }

    async fn require_module(&self, library_id: Uuid, module_id: Uuid) -> AppResult<LibraryModule> {
        self.store
            .get(&paths::module_doc(library_id, module_id))
            .await?
            .ok_or_else(|| AppError::not_found("module").with_resource_id(module_id.to_string()))
    }
}
