//! Core of the Red Thread relationship journal.
//!
//! Owns the calendar engine (day distances, month grids, milestones), the
//! journal records and their SQLite tables, the photo bucket, the use-case
//! services and the configuration/logging bootstrap. The `redthread` binary
//! is a thin front end over this crate.

pub mod calendar;
pub mod config;
pub mod db;
pub mod gate;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;

pub use calendar::{
    build_month_grid, compute_milestones, day_distance, format_long, to_iso_date, CalendarDate,
    DateParseError, DayCell, DayCounter, Milestone, MonthGrid, MonthGridCell,
};
pub use config::{config_path, load_config, ConfigError, JournalConfig};
pub use gate::{GateError, PasswordGate};
pub use logging::{
    flush_logging, init_logging, logging_status, LogLevel, LogSettings, LoggingError,
};
pub use model::event::Event;
pub use model::love_note::LoveNote;
pub use model::memory::Memory;
pub use model::pinned_note::PinnedNote;
pub use model::todo::Todo;
pub use model::{RecordId, ValidationError};
pub use repo::event_repo::{EventRepository, SqliteEventRepository};
pub use repo::love_note_repo::{LoveNoteRepository, SqliteLoveNoteRepository};
pub use repo::memory_repo::{MemoryRepository, SqliteMemoryRepository};
pub use repo::pinned_note_repo::{PinnedNoteRepository, SqlitePinnedNoteRepository};
pub use repo::todo_repo::{SqliteTodoRepository, TodoRepository};
pub use repo::{ListQuery, RepoError, RepoResult};
pub use service::checklist_service::ChecklistService;
pub use service::dashboard::{build_dashboard, DashboardView};
pub use service::event_service::EventService;
pub use service::love_note_service::LoveNoteService;
pub use service::memory_service::{ImageUpload, MemoryService, NewMemory};
pub use service::pinned_note_service::PinnedNoteService;
pub use service::{ServiceError, ServiceResult};
pub use storage::{BlobStore, LocalBlobStore, StorageError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
