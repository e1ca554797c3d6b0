//! Per-partner pinned note.
//!
//! # Invariants
//! - `owner` is the slot key and is unique; saving replaces the row.
//! - `body` may be empty; an empty body is a cleared note, not a missing one.

use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedNote {
    /// Slot key, lowercase partner name (`keya`, `tai`).
    pub owner: String,
    pub body: String,
    /// Epoch milliseconds of the last save; `0` when never saved.
    pub updated_at: i64,
}

impl PinnedNote {
    pub fn new(owner: impl AsRef<str>, body: impl Into<String>) -> Self {
        Self {
            owner: normalize_owner(owner.as_ref()),
            body: body.into(),
            updated_at: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("pinned note owner", &self.owner)
    }
}

/// Slot keys are compared trimmed and lowercase.
pub fn normalize_owner(owner: &str) -> String {
    owner.trim().to_ascii_lowercase()
}
