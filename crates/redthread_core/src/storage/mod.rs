//! Photo blob storage.
//!
//! # Responsibility
//! - Define the bucket contract used by memory use-cases.
//! - Provide a filesystem-backed bucket that serves public URLs.
//!
//! # Invariants
//! - Object paths are relative, `/`-separated and never contain `..`.
//! - `path_from_public_url(upload(path, ..)?) == Some(path)`.

mod local;

pub use local::LocalBlobStore;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Marker separating the bucket base URL from the object path.
pub const PUBLIC_PHOTOS_MARKER: &str = "/storage/v1/object/public/photos/";

const UPLOAD_PREFIX: &str = "uploads";
const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    InvalidPath(String),
    Io { path: String, source: std::io::Error },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(path) => write!(f, "invalid object path `{path}`"),
            Self::Io { path, source } => write!(f, "blob `{path}`: {source}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPath(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Bucket contract for uploaded photos.
pub trait BlobStore {
    /// Stores `bytes` at `path` and returns the object's public URL.
    fn upload(&self, path: &str, bytes: &[u8]) -> StorageResult<String>;
    /// Removes the object at `path`. Removing a missing object succeeds.
    fn remove(&self, path: &str) -> StorageResult<()>;
    /// Recovers the object path from a public URL issued by this bucket.
    fn path_from_public_url(&self, url: &str) -> Option<String>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn upload(&self, path: &str, bytes: &[u8]) -> StorageResult<String> {
        (**self).upload(path, bytes)
    }

    fn remove(&self, path: &str) -> StorageResult<()> {
        (**self).remove(path)
    }

    fn path_from_public_url(&self, url: &str) -> Option<String> {
        (**self).path_from_public_url(url)
    }
}

/// Builds a fresh `uploads/<uuid>.<ext>` object path for a file name.
///
/// The extension is the text after the last `.`; names without one fall
/// back to `jpg`.
pub fn upload_path_for(file_name: &str) -> String {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string());
    format!("{UPLOAD_PREFIX}/{}.{extension}", Uuid::new_v4())
}

/// Returns everything after the public photos marker, if present.
pub fn path_after_marker(url: &str) -> Option<String> {
    let idx = url.find(PUBLIC_PHOTOS_MARKER)?;
    let path = &url[idx + PUBLIC_PHOTOS_MARKER.len()..];
    if path.is_empty() {
        return None;
    }
    Some(path.to_string())
}

pub(crate) fn validate_object_path(path: &str) -> StorageResult<()> {
    let invalid = path.is_empty()
        || path.starts_with('/')
        || path.contains('\\')
        || path
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");
    if invalid {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{path_after_marker, upload_path_for, validate_object_path, PUBLIC_PHOTOS_MARKER};

    #[test]
    fn upload_path_keeps_extension_and_is_unique() {
        let first = upload_path_for("beach.PNG");
        let second = upload_path_for("beach.PNG");
        assert!(first.starts_with("uploads/"));
        assert!(first.ends_with(".png"));
        assert_ne!(first, second);
    }

    #[test]
    fn upload_path_defaults_to_jpg() {
        assert!(upload_path_for("photo").ends_with(".jpg"));
        assert!(upload_path_for("photo.").ends_with(".jpg"));
        assert!(upload_path_for("odd.j/pg").ends_with(".jpg"));
    }

    #[test]
    fn marker_extraction_returns_object_path() {
        let url = format!("https://example.test{PUBLIC_PHOTOS_MARKER}uploads/a.jpg");
        assert_eq!(path_after_marker(&url).as_deref(), Some("uploads/a.jpg"));
        assert_eq!(path_after_marker("https://elsewhere.test/a.jpg"), None);
    }

    #[test]
    fn object_paths_reject_traversal_and_absolute_forms() {
        assert!(validate_object_path("uploads/a.jpg").is_ok());
        assert!(validate_object_path("../a.jpg").is_err());
        assert!(validate_object_path("/etc/passwd").is_err());
        assert!(validate_object_path("uploads//a.jpg").is_err());
        assert!(validate_object_path("").is_err());
    }
}
