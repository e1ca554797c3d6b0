//! Filesystem-backed photo bucket.

use super::{path_after_marker, validate_object_path, BlobStore, StorageError, StorageResult};
use super::PUBLIC_PHOTOS_MARKER;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Bucket rooted at a local directory, published under `public_base`.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_base: String,
}

impl LocalBlobStore {
    /// `public_base` is the origin the files are served from, without the
    /// photos marker (for example `file:///home/me/.local/share/redthread`).
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        let public_base = public_base.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            public_base,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL for an object path.
    pub fn public_url(&self, path: &str) -> String {
        format!("{}{PUBLIC_PHOTOS_MARKER}{path}", self.public_base)
    }

    fn object_file(&self, path: &str) -> StorageResult<PathBuf> {
        validate_object_path(path)?;
        Ok(path
            .split('/')
            .fold(self.root.clone(), |acc, segment| acc.join(segment)))
    }
}

impl BlobStore for LocalBlobStore {
    fn upload(&self, path: &str, bytes: &[u8]) -> StorageResult<String> {
        let file = self.object_file(path)?;
        let io_error = |source| StorageError::Io {
            path: path.to_string(),
            source,
        };
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(&file, bytes).map_err(io_error)?;

        info!(
            "event=blob_upload module=storage status=ok path={} bytes={}",
            path,
            bytes.len()
        );
        Ok(self.public_url(path))
    }

    fn remove(&self, path: &str) -> StorageResult<()> {
        let file = self.object_file(path)?;
        match std::fs::remove_file(&file) {
            Ok(()) => {
                info!("event=blob_remove module=storage status=ok path={path}");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("event=blob_remove module=storage status=ok path={path} missing=true");
                Ok(())
            }
            Err(source) => Err(StorageError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }

    fn path_from_public_url(&self, url: &str) -> Option<String> {
        let path = path_after_marker(url)?;
        validate_object_path(&path).ok()?;
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::LocalBlobStore;
    use crate::storage::BlobStore;

    #[test]
    fn upload_then_remove_round_trips_through_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path(), "http://localhost:8080/");

        let url = store.upload("uploads/one.jpg", b"jpeg-bytes").unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/storage/v1/object/public/photos/uploads/one.jpg"
        );
        assert_eq!(
            std::fs::read(dir.path().join("uploads").join("one.jpg")).unwrap(),
            b"jpeg-bytes"
        );

        let path = store.path_from_public_url(&url).unwrap();
        store.remove(&path).unwrap();
        assert!(!dir.path().join("uploads").join("one.jpg").exists());
    }

    #[test]
    fn removing_missing_object_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path(), "http://localhost");
        store.remove("uploads/never.jpg").unwrap();
    }

    #[test]
    fn traversal_urls_do_not_map_to_paths() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path(), "http://localhost");
        let url = store.public_url("../secret.txt");
        assert_eq!(store.path_from_public_url(&url), None);
        assert!(store.upload("../secret.txt", b"x").is_err());
    }
}
