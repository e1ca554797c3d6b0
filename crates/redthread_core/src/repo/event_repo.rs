//! Event table contract and SQLite implementation.
//!
//! # Invariants
//! - `event_date` is stored as `YYYY-MM-DD`, so text order is date order.

use crate::calendar::{to_iso_date, CalendarDate};
use crate::model::event::Event;
use crate::model::RecordId;
use crate::repo::{parse_record_id, push_limit, ListQuery, RepoError, RepoResult, NEWEST_FIRST_SQL};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const EVENT_SELECT_SQL: &str = "SELECT id, title, event_date, note, created_at FROM events";

pub trait EventRepository {
    fn insert_event(&self, event: &Event) -> RepoResult<RecordId>;
    fn get_event(&self, id: RecordId) -> RepoResult<Option<Event>>;
    /// Newest-created first.
    fn list_events(&self, query: &ListQuery) -> RepoResult<Vec<Event>>;
    /// Events with `from <= date <= to`, ascending by date.
    fn list_events_between(&self, from: CalendarDate, to: CalendarDate) -> RepoResult<Vec<Event>>;
    fn delete_event(&self, id: RecordId) -> RepoResult<()>;
}

pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn insert_event(&self, event: &Event) -> RepoResult<RecordId> {
        event.validate()?;

        self.conn.execute(
            "INSERT INTO events (id, title, event_date, note) VALUES (?1, ?2, ?3, ?4);",
            params![
                event.id.to_string(),
                event.title.as_str(),
                to_iso_date(event.date),
                event.note.as_deref(),
            ],
        )?;
        Ok(event.id)
    }

    fn get_event(&self, id: RecordId) -> RepoResult<Option<Event>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row)?));
        }
        Ok(None)
    }

    fn list_events(&self, query: &ListQuery) -> RepoResult<Vec<Event>> {
        let mut sql = format!("{EVENT_SELECT_SQL}{NEWEST_FIRST_SQL}");
        let mut bind_values: Vec<Value> = Vec::new();
        push_limit(&mut sql, &mut bind_values, query);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }

    fn list_events_between(&self, from: CalendarDate, to: CalendarDate) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EVENT_SELECT_SQL}
             WHERE event_date >= ?1 AND event_date <= ?2
             ORDER BY event_date ASC, created_at ASC, rowid ASC;"
        ))?;
        let mut rows = stmt.query(params![to_iso_date(from), to_iso_date(to)])?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }
        Ok(events)
    }

    fn delete_event(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM events WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    let id_text: String = row.get("id")?;
    let date_text: String = row.get("event_date")?;
    let date = CalendarDate::parse_iso(&date_text).map_err(|err| {
        RepoError::InvalidData(format!("{err} in events.event_date"))
    })?;

    let event = Event {
        id: parse_record_id(&id_text, "events.id")?,
        title: row.get("title")?,
        date,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    };
    event.validate()?;
    Ok(event)
}
