//! Love note record.

use super::{normalize_optional_text, RecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoveNote {
    pub id: RecordId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub created_at: i64,
}

impl LoveNote {
    pub fn new(title: Option<String>, body: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: normalize_optional_text(title),
            body: normalize_optional_text(body),
            created_at: 0,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}
