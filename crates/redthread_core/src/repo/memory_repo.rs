//! Memory table contract and SQLite implementation.

use crate::model::memory::Memory;
use crate::model::RecordId;
use crate::repo::{parse_record_id, push_limit, ListQuery, RepoError, RepoResult, NEWEST_FIRST_SQL};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const MEMORY_SELECT_SQL: &str = "SELECT id, title, body, image_url, created_at FROM memories";

pub trait MemoryRepository {
    fn insert_memory(&self, memory: &Memory) -> RepoResult<RecordId>;
    fn get_memory(&self, id: RecordId) -> RepoResult<Option<Memory>>;
    fn list_memories(&self, query: &ListQuery) -> RepoResult<Vec<Memory>>;
    fn delete_memory(&self, id: RecordId) -> RepoResult<()>;
}

/// SQLite-backed memory repository.
pub struct SqliteMemoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MemoryRepository for SqliteMemoryRepository<'_> {
    fn insert_memory(&self, memory: &Memory) -> RepoResult<RecordId> {
        self.conn.execute(
            "INSERT INTO memories (id, title, body, image_url) VALUES (?1, ?2, ?3, ?4);",
            params![
                memory.id.to_string(),
                memory.title.as_deref(),
                memory.body.as_deref(),
                memory.image_url.as_deref(),
            ],
        )?;
        Ok(memory.id)
    }

    fn get_memory(&self, id: RecordId) -> RepoResult<Option<Memory>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMORY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_memory_row(row)?));
        }
        Ok(None)
    }

    fn list_memories(&self, query: &ListQuery) -> RepoResult<Vec<Memory>> {
        let mut sql = format!("{MEMORY_SELECT_SQL}{NEWEST_FIRST_SQL}");
        let mut bind_values: Vec<Value> = Vec::new();
        push_limit(&mut sql, &mut bind_values, query);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut memories = Vec::new();
        while let Some(row) = rows.next()? {
            memories.push(parse_memory_row(row)?);
        }
        Ok(memories)
    }

    fn delete_memory(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM memories WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_memory_row(row: &Row<'_>) -> RepoResult<Memory> {
    let id_text: String = row.get("id")?;
    Ok(Memory {
        id: parse_record_id(&id_text, "memories.id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        image_url: row.get("image_url")?,
        created_at: row.get("created_at")?,
    })
}
