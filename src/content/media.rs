// ABOUTME: Uploaded media - blob uploader seam plus per-creator metadata records
// ABOUTME: Bytes go to the blob backend; the document store only keeps metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

use crate::errors::{AppError, AppResult};
use crate::models::MediaFile;
use crate::store::{paths, DocumentStore};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

/// Progress callback for uploads, called with 0-100
pub type ProgressFn = dyn Fn(u8) + Send + Sync;

/// Backend storing raw file bytes.
///
/// The library stores metadata only; implementations put the bytes wherever
/// they live (object storage, local disk in tests) and hand back a URL.
#[async_trait]
pub trait BlobUploader: Send + Sync {
    /// Upload bytes to the given blob path and return a public URL
    ///
    /// # Errors
    ///
    /// Returns an error if the upload fails
    async fn upload(
        &self,
        storage_path: &str,
        bytes: &[u8],
        content_type: &str,
        on_progress: &ProgressFn,
    ) -> AppResult<String>;

    /// Remove the blob at the given path
    ///
    /// # Errors
    ///
    /// Returns an error if the removal fails
    async fn remove(&self, storage_path: &str) -> AppResult<()>;
}

/// Uploaded-file operations for a creator
#[derive(Clone)]
pub struct MediaManager<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> MediaManager<S> {
    /// Create a new media manager
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Upload a file and record its metadata.
    ///
    /// Progress is reported through `on_progress` as the uploader sees fit;
    /// the metadata document is written only after the upload succeeds.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty file names and propagates
    /// uploader failures
    pub async fn upload(
        &self,
        creator_id: Uuid,
        uploader: &dyn BlobUploader,
        file_name: &str,
        bytes: &[u8],
        content_type: &str,
        on_progress: &ProgressFn,
    ) -> AppResult<MediaFile> {
        if file_name.trim().is_empty() {
            return Err(AppError::missing_required_field("file name"));
        }

        let id = Uuid::new_v4();
        let storage_path = paths::media_blob_path(creator_id, &format!("{id}_{file_name}"));
        let url = uploader
            .upload(&storage_path, bytes, content_type, on_progress)
            .await?;

        let file = MediaFile {
            id,
            name: file_name.to_owned(),
            storage_path,
            url,
            content_type: content_type.to_owned(),
            size: bytes.len() as u64,
            created_at: Utc::now(),
        };
        self.store
            .put(&paths::media_doc(creator_id, id), &file)
            .await?;

        info!(%creator_id, file_id = %id, size = file.size, "uploaded media file");
        Ok(file)
    }

    /// List the creator's uploads, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails
    pub async fn list_files(&self, creator_id: Uuid) -> AppResult<Vec<MediaFile>> {
        let mut files: Vec<MediaFile> =
            self.store.list(&paths::media_collection(creator_id)).await?;
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(files)
    }

    /// Delete an upload's metadata and its blob.
    ///
    /// Blob removal is best effort; a failure is logged and the metadata
    /// record is deleted regardless.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file record is missing
    pub async fn delete_file(
        &self,
        creator_id: Uuid,
        uploader: &dyn BlobUploader,
        file_id: Uuid,
    ) -> AppResult<()> {
        let path = paths::media_doc(creator_id, file_id);
        let file: MediaFile = self
            .store
            .get(&path)
            .await?
            .ok_or_else(|| AppError::not_found("media file").with_resource_id(file_id.to_string()))?;

        if let Err(e) = uploader.remove(&file.storage_path).await {
            warn!(%file_id, error = %e, "failed to remove blob, keeping metadata delete");
        }
        self.store.delete(&path).await
    }
}
