//! Memory use-cases: posting photo/text memories and deleting them.
//!
//! # Invariants
//! - A photo is uploaded before its row is inserted; if the insert fails the
//!   upload is removed again (best effort).
//! - Deleting a memory removes its row first, then its photo (best effort).
//!   Blob cleanup failures are logged and never surfaced.

use crate::model::memory::Memory;
use crate::model::RecordId;
use crate::repo::memory_repo::MemoryRepository;
use crate::repo::ListQuery;
use crate::service::{ServiceError, ServiceResult};
use crate::storage::{upload_path_for, BlobStore};
use log::{info, warn};

/// Photo attached to a new memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name; only its extension is kept.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Form input for a new memory. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMemory {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<ImageUpload>,
}

pub struct MemoryService<R: MemoryRepository, B: BlobStore> {
    repo: R,
    blobs: B,
}

impl<R: MemoryRepository, B: BlobStore> MemoryService<R, B> {
    pub fn new(repo: R, blobs: B) -> Self {
        Self { repo, blobs }
    }

    /// Uploads the optional photo, then stores the memory row.
    pub fn add_memory(&self, input: NewMemory) -> ServiceResult<Memory> {
        let uploaded = match input.image.as_ref() {
            Some(image) => {
                let path = upload_path_for(&image.file_name);
                let url = self.blobs.upload(&path, &image.bytes)?;
                Some((path, url))
            }
            None => None,
        };

        let memory = Memory::new(
            input.title,
            input.body,
            uploaded.as_ref().map(|(_, url)| url.clone()),
        );

        if let Err(err) = self.repo.insert_memory(&memory) {
            if let Some((path, _)) = uploaded.as_ref() {
                self.discard_blob(path);
            }
            return Err(err.into());
        }

        info!(
            "event=memory_create module=service status=ok id={} has_image={}",
            memory.id,
            uploaded.is_some()
        );
        self.repo
            .get_memory(memory.id)?
            .ok_or(ServiceError::InconsistentState(
                "created memory not found in read-back",
            ))
    }

    /// Lists every memory, newest first.
    pub fn list_memories(&self) -> ServiceResult<Vec<Memory>> {
        Ok(self.repo.list_memories(&ListQuery::all())?)
    }

    /// Deletes one memory and returns the removed record.
    pub fn delete_memory(&self, id: RecordId) -> ServiceResult<Memory> {
        let memory = self.repo.get_memory(id)?.ok_or(ServiceError::NotFound(id))?;
        self.repo.delete_memory(id)?;

        if let Some(url) = memory.image_url.as_deref() {
            match self.blobs.path_from_public_url(url) {
                Some(path) => self.discard_blob(&path),
                None => warn!(
                    "event=memory_delete module=service status=ok id={id} blob_cleanup=skipped reason=foreign_url"
                ),
            }
        }

        info!("event=memory_delete module=service status=ok id={id}");
        Ok(memory)
    }

    fn discard_blob(&self, path: &str) {
        if let Err(err) = self.blobs.remove(path) {
            warn!(
                "event=blob_cleanup module=service status=error path={} error={}",
                path, err
            );
        }
    }
}
