//! Calendar event record.
//!
//! # Invariants
//! - `title` is non-empty.
//! - `date` is a calendar day; events carry no time-of-day.

use super::{normalize_optional_text, require_text, RecordId, ValidationError};
use crate::calendar::CalendarDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub date: CalendarDate,
    pub note: Option<String>,
    pub created_at: i64,
}

impl Event {
    pub fn new(title: impl AsRef<str>, date: CalendarDate, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.as_ref().trim().to_string(),
            date,
            note: normalize_optional_text(note),
            created_at: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("event title", &self.title)
    }
}
