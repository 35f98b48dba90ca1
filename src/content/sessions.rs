// ABOUTME: Library session lifecycle - create, list, delete canonical sessions
// ABOUTME: Deletion is refused while programs or modules still reference the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::errors::{AppError, AppResult};
use crate::models::{LibraryModule, Program, SessionDocument};
use crate::store::{paths, DocumentStore, SessionDocTree};
use tracing::info;
use uuid::Uuid;

/// Lifecycle operations for canonical library sessions
#[derive(Clone)]
pub struct SessionManager<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> SessionManager<S> {
    /// Create a new session manager
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Create an empty library session
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty names
    pub async fn create_session(
        &self,
        library_id: Uuid,
        name: &str,
    ) -> AppResult<SessionDocument> {
        if name.trim().is_empty() {
            return Err(AppError::missing_required_field("session name"));
        }

        let session = SessionDocument::new(name);
        let tree = SessionDocTree::library(library_id, session.id);
        self.store.put(tree.session_doc(), &session).await?;
        Ok(session)
    }

    /// List the library's sessions, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn list_sessions(&self, library_id: Uuid) -> AppResult<Vec<SessionDocument>> {
        let mut sessions: Vec<SessionDocument> = self
            .store
            .list(&paths::sessions_collection(library_id))
            .await?;
        sessions.sort_by_key(|session| session.created_at);
        Ok(sessions)
    }

    /// Delete a library session and its exercise tree.
    ///
    /// Refused while any program or module still references the session; the
    /// alert names the referencing counts and there is no force-delete path.
    ///
    /// # Errors
    ///
    /// Returns `ResourceInUse` when referenced, `ResourceNotFound` when missing
    pub async fn delete_session(&self, library_id: Uuid, session_id: Uuid) -> AppResult<()> {
        let tree = SessionDocTree::library(library_id, session_id);
        if !self.store.exists(tree.session_doc()).await? {
            return Err(
                AppError::not_found("session").with_resource_id(session_id.to_string())
            );
        }

        let programs: Vec<Program> = self
            .store
            .list(&paths::programs_collection(library_id))
            .await?;
        let program_uses = programs
            .iter()
            .filter(|program| program.references_session(session_id))
            .count();

        let modules: Vec<LibraryModule> = self
            .store
            .list(&paths::modules_collection(library_id))
            .await?;
        let module_uses = modules
            .iter()
            .filter(|module| module.session_ids.contains(&session_id))
            .count();

        if program_uses > 0 || module_uses > 0 {
            return Err(AppError::resource_in_use(format!(
                "session is used in {program_uses} program(s) and {module_uses} module(s)"
            ))
            .with_resource_id(session_id.to_string()));
        }

        let removed = self.store.delete_tree(tree.session_doc()).await?;
        info!(%library_id, %session_id, removed, "deleted library session");
        Ok(())
    }
}
