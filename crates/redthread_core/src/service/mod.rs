//! Journal use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and bucket calls into the actions the journal
//!   offers (post a memory, tick a checklist item, save pinned notes, ...).
//! - Keep the CLI decoupled from storage details.
//!
//! # Invariants
//! - Services never bypass repository validation.
//! - Writes are read back so callers always see stored timestamps.

pub mod checklist_service;
pub mod dashboard;
pub mod event_service;
pub mod love_note_service;
pub mod memory_service;
pub mod pinned_note_service;

use crate::model::{RecordId, ValidationError};
use crate::repo::RepoError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surfaced by journal use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// A required field was blank.
    EmptyInput(&'static str),
    /// Target record does not exist.
    NotFound(RecordId),
    Repo(RepoError),
    Storage(StorageError),
    /// Write succeeded but read-back disagreed.
    InconsistentState(&'static str),
}

impl ServiceError {
    /// Short text suitable for showing next to the form that failed.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput(field) => format!("Please fill in the {field}."),
            Self::NotFound(_) => "That item no longer exists.".to_string(),
            other => other.to_string(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput(field) => write!(f, "{field} cannot be empty"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent journal state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => err.into(),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::BlankField(field) => Self::EmptyInput(field),
        }
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

pub(crate) fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
