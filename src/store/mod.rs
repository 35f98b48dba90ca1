// ABOUTME: Document store abstraction with pluggable backends
// ABOUTME: Path-addressed CRUD over serde documents, following the cache-provider pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

//! # Document Store Seam
//!
//! All content persistence flows through [`DocumentStore`]. Documents are
//! addressed by slash-separated paths (`creator_libraries/{id}/sessions/{id}`)
//! and serialized through serde, so the concrete backend - remote document
//! database in production, [`memory::InMemoryStore`] in tests and local
//! development - is selected once at startup and injected everywhere else.

/// In-memory store implementation
pub mod memory;
/// Collection path builders for the content layout
pub mod paths;

use crate::errors::AppResult;
use serde::{de::DeserializeOwned, Serialize};

pub use memory::InMemoryStore;
pub use paths::SessionDocTree;

/// Document store trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust
/// use coachforge::store::{DocumentStore, InMemoryStore};
/// # async fn example() -> Result<(), coachforge::errors::AppError> {
///
/// let store = InMemoryStore::new();
/// store.put("creator_feedback/abc", &"hello").await?;
///
/// let value: Option<String> = store.get("creator_feedback/abc").await?;
/// assert_eq!(value.as_deref(), Some("hello"));
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync + Clone {
    /// Fetch a document, returning `None` if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or deserialization fails
    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<Option<T>>;

    /// Write a document, replacing any existing content at the path
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or serialization fails
    async fn put<T: Serialize + Send + Sync>(&self, path: &str, value: &T) -> AppResult<()>;

    /// Write a document only if nothing exists at the path yet.
    ///
    /// Returns `true` if this call created the document, `false` if a document
    /// was already present. This is the first-write-wins primitive behind
    /// copy-on-write.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or serialization fails
    async fn create<T: Serialize + Send + Sync>(&self, path: &str, value: &T) -> AppResult<bool>;

    /// Delete a document; deleting a missing document is a no-op
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Delete a document and everything stored beneath its path.
    /// Returns the number of documents removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable
    async fn delete_tree(&self, prefix: &str) -> AppResult<u64>;

    /// List the documents directly under a collection path
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or deserialization fails
    async fn list<T: DeserializeOwned>(&self, collection: &str) -> AppResult<Vec<T>>;

    /// Check whether a document exists at the path
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
