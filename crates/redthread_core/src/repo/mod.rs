//! Table access contracts and SQLite implementations.
//!
//! # Responsibility
//! - Expose one repository per journal table with list/insert/update/delete
//!   semantics.
//! - Keep SQL details behind the core persistence boundary.
//!
//! # Invariants
//! - Write paths run model validation before SQL mutations.
//! - Update/delete of an unknown id is `RepoError::NotFound`.
//! - Read paths reject malformed persisted rows instead of masking them.
//! - Lists are newest first; insertion order breaks timestamp ties.

pub mod event_repo;
pub mod love_note_repo;
pub mod memory_repo;
pub mod pinned_note_repo;
pub mod todo_repo;

use crate::db::DbError;
use crate::model::{RecordId, ValidationError};
use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every journal table.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound(RecordId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// List options shared by record tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Maximum rows to return; `None` returns everything.
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn limited(limit: u32) -> Self {
        Self { limit: Some(limit) }
    }
}

pub(crate) const NEWEST_FIRST_SQL: &str = " ORDER BY created_at DESC, rowid DESC";

pub(crate) fn push_limit(sql: &mut String, bind_values: &mut Vec<Value>, query: &ListQuery) {
    if let Some(limit) = query.limit {
        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(limit)));
    }
}

pub(crate) fn parse_record_id(value: &str, column: &str) -> RepoResult<RecordId> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

pub(crate) fn parse_flag(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in {column}"
        ))),
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
