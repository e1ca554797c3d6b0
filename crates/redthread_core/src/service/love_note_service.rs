//! Love note use-cases.

use crate::model::love_note::LoveNote;
use crate::model::RecordId;
use crate::repo::love_note_repo::LoveNoteRepository;
use crate::repo::ListQuery;
use crate::service::{ServiceError, ServiceResult};
use log::info;

pub struct LoveNoteService<R: LoveNoteRepository> {
    repo: R,
}

impl<R: LoveNoteRepository> LoveNoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a note; blank title/body are kept as absent.
    pub fn add_note(&self, title: Option<String>, body: Option<String>) -> ServiceResult<LoveNote> {
        let note = LoveNote::new(title, body);
        self.repo.insert_note(&note)?;
        info!("event=love_note_create module=service status=ok id={}", note.id);
        self.repo
            .get_note(note.id)?
            .ok_or(ServiceError::InconsistentState(
                "created love note not found in read-back",
            ))
    }

    /// Newest first.
    pub fn list_notes(&self) -> ServiceResult<Vec<LoveNote>> {
        Ok(self.repo.list_notes(&ListQuery::all())?)
    }

    pub fn delete_note(&self, id: RecordId) -> ServiceResult<()> {
        self.repo.delete_note(id)?;
        info!("event=love_note_delete module=service status=ok id={id}");
        Ok(())
    }
}
