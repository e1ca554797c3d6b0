//! Checklist table contract and SQLite implementation.

use crate::model::todo::Todo;
use crate::model::RecordId;
use crate::repo::{
    bool_to_int, parse_flag, parse_record_id, push_limit, ListQuery, RepoError, RepoResult,
    NEWEST_FIRST_SQL,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TODO_SELECT_SQL: &str = "SELECT id, text, done, created_at FROM todos";

pub trait TodoRepository {
    fn insert_todo(&self, todo: &Todo) -> RepoResult<RecordId>;
    fn get_todo(&self, id: RecordId) -> RepoResult<Option<Todo>>;
    fn list_todos(&self, query: &ListQuery) -> RepoResult<Vec<Todo>>;
    fn set_todo_done(&self, id: RecordId, done: bool) -> RepoResult<()>;
    fn delete_todo(&self, id: RecordId) -> RepoResult<()>;
}

pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn insert_todo(&self, todo: &Todo) -> RepoResult<RecordId> {
        todo.validate()?;

        self.conn.execute(
            "INSERT INTO todos (id, text, done) VALUES (?1, ?2, ?3);",
            params![todo.id.to_string(), todo.text.as_str(), bool_to_int(todo.done)],
        )?;
        Ok(todo.id)
    }

    fn get_todo(&self, id: RecordId) -> RepoResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }
        Ok(None)
    }

    fn list_todos(&self, query: &ListQuery) -> RepoResult<Vec<Todo>> {
        let mut sql = format!("{TODO_SELECT_SQL}{NEWEST_FIRST_SQL}");
        let mut bind_values: Vec<Value> = Vec::new();
        push_limit(&mut sql, &mut bind_values, query);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut todos = Vec::new();
        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }
        Ok(todos)
    }

    fn set_todo_done(&self, id: RecordId, done: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE todos SET done = ?2 WHERE id = ?1;",
            params![id.to_string(), bool_to_int(done)],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete_todo(&self, id: RecordId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let id_text: String = row.get("id")?;
    let todo = Todo {
        id: parse_record_id(&id_text, "todos.id")?,
        text: row.get("text")?,
        done: parse_flag(row.get("done")?, "todos.done")?,
        created_at: row.get("created_at")?,
    };
    todo.validate()?;
    Ok(todo)
}
