//! Love note table contract and SQLite implementation.

use crate::model::love_note::LoveNote;
use crate::model::RecordId;
use crate::repo::{parse_record_id, push_limit, ListQuery, RepoError, RepoResult, NEWEST_FIRST_SQL};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT id, title, body, created_at FROM love_notes";

pub trait LoveNoteRepository {
    fn insert_note(&self, note: &LoveNote) -> RepoResult<RecordId>;
    fn get_note(&self, id: RecordId) -> RepoResult<Option<LoveNote>>;
    fn list_notes(&self, query: &ListQuery) -> RepoResult<Vec<LoveNote>>;
    fn delete_note(&self, id: RecordId) -> RepoResult<()>;
}

pub struct SqliteLoveNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLoveNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LoveNoteRepository for SqliteLoveNoteRepository<'_> {
    fn insert_note(&self, note: &LoveNote) -> RepoResult<RecordId> {
        self.conn.execute(
            "INSERT INTO love_notes (id, title, body) VALUES (?1, ?2, ?3);",
            params![note.id.to_string(), note.title.as_deref(), note.body.as_deref()],
        )?;
        Ok(note.id)
    }

    fn get_note(&self, id: RecordId) -> RepoResult<Option<LoveNote>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn list_notes(&self, query: &ListQuery) -> RepoResult<Vec<LoveNote>> {
        let mut sql = format!("{NOTE_SELECT_SQL}{NEWEST_FIRST_SQL}");
        let mut bind_values: Vec<Value> = Vec::new();
        push_limit(&mut sql, &mut bind_values, query);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn delete_note(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM love_notes WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<LoveNote> {
    let id_text: String = row.get("id")?;
    Ok(LoveNote {
        id: parse_record_id(&id_text, "love_notes.id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
    })
}
