// ABOUTME: Main library entry point for the Coachforge content engine
// ABOUTME: Session/exercise editing with scoped copy-on-write override resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

#![deny(unsafe_code)]

//! # Coachforge Content Engine
//!
//! Storage-backed editing model for fitness coaching content. Creators build
//! libraries of sessions; clients receive overridable copies of them. The
//! engine resolves reads and writes against the right copy for each scope.
//!
//! ## Features
//!
//! - **Scoped editing**: library sessions, per-client copies, and
//!   per-plan-week copies share one repository interface
//! - **Copy-on-write**: client-facing scopes materialize a full copy of the
//!   library session on first write, never before
//! - **Read fallback**: until a copy exists, reads in client-facing scopes
//!   serve the canonical library content
//! - **Dense ordering**: exercises, sets, and modules keep contiguous
//!   zero-based positions through every insert, move, and delete
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coachforge::models::{EditScope, SessionRef};
//! use coachforge::repository::{ScopedRepository, SessionRepository};
//! use coachforge::store::InMemoryStore;
//! use coachforge::errors::AppResult;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = InMemoryStore::new();
//!     let source = SessionRef {
//!         library_id: Uuid::new_v4(),
//!         session_id: Uuid::new_v4(),
//!     };
//!     let scope = EditScope::Client {
//!         client_session_id: Uuid::new_v4(),
//!     };
//!
//!     let repo = ScopedRepository::for_scope(store, source, scope);
//!     let resolved = repo.get_session_with_exercises().await?;
//!     println!("editing {}", resolved.session.name);
//!     Ok(())
//! }
//! ```

/// Runtime configuration loaded from the environment
pub mod config;

/// Collection names, limits, and service identifiers
pub mod constants;

/// Content managers: libraries, sessions, modules, programs, presets, media, feedback
pub mod content;

/// Copy-on-write materialization of session trees
pub mod copy;

/// Error types and error codes
pub mod errors;

/// Structured logging initialization
pub mod logging;

/// Domain models: sessions, exercises, sets, libraries, programs, scopes
pub mod models;

/// Reps and intensity input normalization
pub mod normalize;

/// Dense zero-based ordering helpers
pub mod ordering;

/// Scope-aware session repositories
pub mod repository;

/// Exercise reference resolution with caching
pub mod resolver;

/// Document store abstraction, path layout, and in-memory backend
pub mod store;

/// Exercise draft validation and the save gate
pub mod validation;
