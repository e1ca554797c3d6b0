//! Shared checklist item.
//!
//! # Invariants
//! - `text` is trimmed and non-empty.

use super::{require_text, RecordId, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: RecordId,
    pub text: String,
    pub done: bool,
    pub created_at: i64,
}

impl Todo {
    /// Creates an open checklist item from trimmed input.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.as_ref().trim().to_string(),
            done: false,
            created_at: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("todo text", &self.text)
    }
}
