//! Persisted journal records.
//!
//! # Responsibility
//! - Define the row shapes for memories, love notes, checklist items,
//!   pinned notes and events.
//! - Own the trivial required-field checks shared by every write path.
//!
//! # Invariants
//! - Every record except pinned notes is identified by a stable `RecordId`.
//! - Blank optional text is stored as `NULL`, never as an empty string.
//! - Timestamps are Unix epoch milliseconds assigned by storage.

pub mod event;
pub mod love_note;
pub mod memory;
pub mod pinned_note;
pub mod todo;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for memories, notes, checklist items and events.
pub type RecordId = Uuid;

/// Required-field violation detected before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field must contain non-whitespace text.
    BlankField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Maps blank input to `None`, keeping non-blank text unchanged.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{normalize_optional_text, require_text, ValidationError};

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(normalize_optional_text(Some(String::new())), None);
        assert_eq!(normalize_optional_text(Some("  \n".to_string())), None);
        assert_eq!(
            normalize_optional_text(Some(" hi ".to_string())).as_deref(),
            Some(" hi ")
        );
    }

    #[test]
    fn require_text_rejects_whitespace() {
        assert_eq!(
            require_text("text", "   "),
            Err(ValidationError::BlankField("text"))
        );
        assert!(require_text("text", "picnic").is_ok());
    }
}
