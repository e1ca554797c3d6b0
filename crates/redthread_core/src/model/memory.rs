//! Photo/text memory record.

use super::{normalize_optional_text, RecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A posted memory with optional title, body and photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: RecordId,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Public URL of the uploaded photo, if any.
    pub image_url: Option<String>,
    /// Epoch milliseconds; assigned by storage on insert.
    pub created_at: i64,
}

impl Memory {
    /// Creates an unsaved memory with a fresh id. Blank text becomes `None`.
    pub fn new(title: Option<String>, body: Option<String>, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: normalize_optional_text(title),
            body: normalize_optional_text(body),
            image_url,
            created_at: 0,
        }
    }

    /// Title shown in lists.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}
