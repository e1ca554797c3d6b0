//! Shared checklist use-cases.
//!
//! # Invariants
//! - Item text is trimmed; blank input is rejected before storage.
//! - Toggling flips the stored flag, not a caller-supplied one.

use crate::model::todo::Todo;
use crate::model::RecordId;
use crate::repo::todo_repo::TodoRepository;
use crate::repo::ListQuery;
use crate::service::{ServiceError, ServiceResult};
use log::info;

pub struct ChecklistService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> ChecklistService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_item(&self, text: &str) -> ServiceResult<Todo> {
        let todo = Todo::new(text);
        todo.validate()?;
        self.repo.insert_todo(&todo)?;
        info!("event=todo_create module=service status=ok id={}", todo.id);
        self.read_back(todo.id, "created todo not found in read-back")
    }

    /// Newest first.
    pub fn list_items(&self) -> ServiceResult<Vec<Todo>> {
        Ok(self.repo.list_todos(&ListQuery::all())?)
    }

    /// Flips `done` and returns the updated item.
    pub fn toggle_item(&self, id: RecordId) -> ServiceResult<Todo> {
        let current = self.repo.get_todo(id)?.ok_or(ServiceError::NotFound(id))?;
        self.repo.set_todo_done(id, !current.done)?;
        info!(
            "event=todo_toggle module=service status=ok id={id} done={}",
            !current.done
        );
        self.read_back(id, "toggled todo not found in read-back")
    }

    pub fn remove_item(&self, id: RecordId) -> ServiceResult<()> {
        self.repo.delete_todo(id)?;
        info!("event=todo_delete module=service status=ok id={id}");
        Ok(())
    }

    fn read_back(&self, id: RecordId, details: &'static str) -> ServiceResult<Todo> {
        self.repo
            .get_todo(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}
