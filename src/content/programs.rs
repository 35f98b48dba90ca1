// ABOUTME: Program grid operations - weeks of session assignments per creator
// ABOUTME: Weeks can be assembled from modules or edited assignment by assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::{LibraryModule, Program, ProgramWeek, SessionAssignment};
use crate::store::{paths, DocumentStore};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Program grid operations for a creator
#[derive(Clone)]
pub struct ProgramManager<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> ProgramManager<S> {
    /// Create a new program manager
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Create an empty program
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty names
    pub async fn create_program(&self, creator_id: Uuid, name: &str) -> AppResult<Program> {
        if name.trim().is_empty() {
            return Err(AppError::missing_required_field("program name"));
        }

        let program = Program::new(name);
        self.store
            .put(&paths::program_doc(creator_id, program.id), &program)
            .await?;
        Ok(program)
    }

    /// Fetch one program
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the program is missing
    pub async fn get_program(&self, creator_id: Uuid, program_id: Uuid) -> AppResult<Program> {
        self.store
            .get(&paths::program_doc(creator_id, program_id))
            .await?
            .ok_or_else(|| AppError::not_found("program").with_resource_id(program_id.to_string()))
    }

    /// List the creator's programs, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn list_programs(&self, creator_id: Uuid) -> AppResult<Vec<Program>> {
        let mut programs: Vec<Program> = self
            .store
            .list(&paths::programs_collection(creator_id))
            .await?;
        programs.sort_by_key(|program| program.created_at);
        Ok(programs)
    }

    /// Delete a program document
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the program is missing
    pub async fn delete_program(&self, creator_id: Uuid, program_id: Uuid) -> AppResult<()> {
        let path = paths::program_doc(creator_id, program_id);
        if !self.store.exists(&path).await? {
            return Err(
                AppError::not_found("program").with_resource_id(program_id.to_string())
            );
        }
        self.store.delete(&path).await?;
        info!(%creator_id, %program_id, "deleted program");
        Ok(())
    }

    /// Populate a program week from a library module.
    ///
    /// Attached sessions are placed on consecutive days and the week remembers
    /// its source module so module deletion can detect the dependency. The
    /// week's previous content is replaced.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the program or module is missing
    pub async fn set_week_from_module(
        &self,
        creator_id: Uuid,
        program_id: Uuid,
        week_key: &str,
        library_id: Uuid,
        module_id: Uuid,
    ) -> AppResult<Program> {
        let module: LibraryModule = self
            .store
            .get(&paths::module_doc(library_id, module_id))
            .await?
            .ok_or_else(|| AppError::not_found("module").with_resource_id(module_id.to_string()))?;

        let assignments = module
            .session_ids
            .iter()
            .enumerate()
            .map(|(day, session_id)| SessionAssignment {
                session_id: *session_id,
                library_id,
                day_index: u8::try_from(day).unwrap_or(limits::DAY_INDEX_MAX).min(limits::DAY_INDEX_MAX),
            })
            .collect();

        let mut program = self.get_program(creator_id, program_id).await?;
        program.weeks.insert(
            week_key.to_owned(),
            ProgramWeek {
                source_module_id: Some(module_id),
                assignments,
            },
        );
        program.updated_at = Utc::now();

        self.store
            .put(&paths::program_doc(creator_id, program_id), &program)
            .await?;
        info!(%program_id, %module_id, week_key, "populated program week from module");
        Ok(program)
    }

    /// Assign a session to a day within a program week
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for day indexes past the end of the week
    /// and `ResourceNotFound` if the program is missing
    pub async fn assign_session(
        &self,
        creator_id: Uuid,
        program_id: Uuid,
        week_key: &str,
        assignment: SessionAssignment,
    ) -> AppResult<Program> {
        if assignment.day_index > limits::DAY_INDEX_MAX {
            return Err(AppError::value_out_of_range(format!(
                "day index must be between 0 and {}",
                limits::DAY_INDEX_MAX
            )));
        }

        let mut program = self.get_program(creator_id, program_id).await?;
        let week = program.weeks.entry(week_key.to_owned()).or_default();
        week.assignments.push(assignment);
        program.updated_at = Utc::now();

        self.store
            .put(&paths::program_doc(creator_id, program_id), &program)
            .await?;
        Ok(program)
    }

    /// Remove a session assignment from a program week
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the program, week, or assignment is missing
    pub async fn remove_assignment(
        &self,
        creator_id: Uuid,
        program_id: Uuid,
        week_key: &str,
        session_id: Uuid,
    ) -> AppResult<Program> {
        let mut program = self.get_program(creator_id, program_id).await?;
        let week = program
            .weeks
            .get_mut(week_key)
            .ok_or_else(|| AppError::not_found("program week").with_resource_id(week_key))?;

        let Some(position) = week
            .assignments
            .iter()
            .position(|assignment| assignment.session_id == session_id)
        else {
            return Err(
                AppError::not_found("session assignment").with_resource_id(session_id.to_string())
            );
        };
        week.assignments.remove(position);
        program.updated_at = Utc::now();

        self.store
            .put(&paths::program_doc(creator_id, program_id), &program)
            .await?;
        Ok(program)
    }

    /// Count the creator's programs referencing a session
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn count_session_usage(&self, creator_id: Uuid, session_id: Uuid) -> AppResult<usize> {
        let programs = self.list_programs(creator_id).await?;
        Ok(programs
            .iter()
            .filter(|program| program.references_session(session_id))
            .count())
    }

    /// Count the creator's programs with a week built from a module
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn count_module_usage(&self, creator_id: Uuid, module_id: Uuid) -> AppResult<usize> {
        let programs = self.list_programs(creator_id).await?;
        Ok(programs
            .iter()
            .filter(|program| program.references_module(module_id))
            .count())
    }
}
