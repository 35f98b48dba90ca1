// ABOUTME: In-memory document store used by tests and local development
// ABOUTME: BTreeMap keyed by path behind a tokio RwLock; prefix scans back tree deletes and listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use super::DocumentStore;
use crate::errors::AppResult;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory document store.
///
/// Documents are kept as `serde_json::Value` so reads and writes exercise the
/// same serialization path the remote backend would. The `BTreeMap` keeps
/// paths ordered, which makes prefix scans (listing, tree deletes) cheap.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    docs: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held (for tests and diagnostics)
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryStore {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<Option<T>> {
        let docs = self.docs.read().await;
        match docs.get(path) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    async fn put<T: Serialize + Send + Sync>(&self, path: &str, value: &T) -> AppResult<()> {
        let serialized = serde_json::to_value(value)?;
        self.docs.write().await.insert(path.to_owned(), serialized);
        Ok(())
    }

    async fn create<T: Serialize + Send + Sync>(&self, path: &str, value: &T) -> AppResult<bool> {
        let serialized = serde_json::to_value(value)?;
        let mut docs = self.docs.write().await;
        if docs.contains_key(path) {
            return Ok(false);
        }
        docs.insert(path.to_owned(), serialized);
        Ok(true)
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        self.docs.write().await.remove(path);
        Ok(())
    }

    async fn delete_tree(&self, prefix: &str) -> AppResult<u64> {
        let child_prefix = format!("{prefix}/");
        let mut docs = self.docs.write().await;
        let doomed: Vec<String> = docs
            .range(prefix.to_owned()..)
            .take_while(|(path, _)| path.as_str() == prefix || path.starts_with(&child_prefix))
            .map(|(path, _)| path.clone())
            .collect();
        for path in &doomed {
            docs.remove(path);
        }
        Ok(doomed.len() as u64)
    }

    async fn list<T: DeserializeOwned>(&self, collection: &str) -> AppResult<Vec<T>> {
        let child_prefix = format!("{collection}/");
        let docs = self.docs.read().await;
        let mut items = Vec::new();
        for (path, value) in docs.range(child_prefix.clone()..) {
            if !path.starts_with(&child_prefix) {
                break;
            }
            // Only direct children; nested sub-collection docs have further slashes
            if path[child_prefix.len()..].contains('/') {
                continue;
            }
            items.push(serde_json::from_value(value.clone())?);
        }
        Ok(items)
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.docs.read().await.contains_key(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_is_first_write_wins() {
        let store = InMemoryStore::new();
        assert!(store.create("a/b", &1u32).await.unwrap());
        assert!(!store.create("a/b", &2u32).await.unwrap());

        let value: Option<u32> = store.get("a/b").await.unwrap();
        assert_eq!(value, Some(1));
    }

    #[tokio::test]
    async fn test_list_returns_only_direct_children() {
        let store = InMemoryStore::new();
        store.put("col/one", &1u32).await.unwrap();
        store.put("col/two", &2u32).await.unwrap();
        store.put("col/one/sub/deep", &3u32).await.unwrap();
        store.put("colx/other", &4u32).await.unwrap();

        let mut items: Vec<u32> = store.list("col").await.unwrap();
        items.sort_unstable();
        assert_eq!(items, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_tree_removes_root_and_descendants() {
        let store = InMemoryStore::new();
        store.put("t/root", &0u32).await.unwrap();
        store.put("t/root/a", &1u32).await.unwrap();
        store.put("t/root/a/b", &2u32).await.unwrap();
        store.put("t/rooted", &3u32).await.unwrap();

        let removed = store.delete_tree("t/root").await.unwrap();
        assert_eq!(removed, 3);
        assert!(store.exists("t/rooted").await.unwrap());
        assert!(!store.exists("t/root").await.unwrap());
    }
}
