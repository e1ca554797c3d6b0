//! Pinned note use-cases: one free-text note per partner slot.

use crate::model::pinned_note::{normalize_owner, PinnedNote};
use crate::repo::pinned_note_repo::PinnedNoteRepository;
use crate::service::{now_epoch_ms, ServiceResult};
use log::info;
use std::collections::HashMap;

pub struct PinnedNoteService<R: PinnedNoteRepository> {
    repo: R,
}

impl<R: PinnedNoteRepository> PinnedNoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns one note per requested owner, in the requested order.
    ///
    /// Owners with no saved row get an empty note.
    pub fn load(&self, owners: &[String]) -> ServiceResult<Vec<PinnedNote>> {
        let mut saved: HashMap<String, PinnedNote> = self
            .repo
            .list_pinned()?
            .into_iter()
            .map(|note| (note.owner.clone(), note))
            .collect();

        Ok(owners
            .iter()
            .map(|owner| {
                let key = normalize_owner(owner);
                saved
                    .remove(&key)
                    .unwrap_or_else(|| PinnedNote::new(key, String::new()))
            })
            .collect())
    }

    /// Saves every slot together, stamping each with the same save time.
    pub fn save(&self, notes: Vec<PinnedNote>) -> ServiceResult<Vec<PinnedNote>> {
        let saved_at = now_epoch_ms();
        let notes: Vec<PinnedNote> = notes
            .into_iter()
            .map(|note| PinnedNote {
                owner: normalize_owner(&note.owner),
                body: note.body,
                updated_at: saved_at,
            })
            .collect();

        self.repo.upsert_pinned(&notes)?;
        info!(
            "event=pinned_save module=service status=ok slots={}",
            notes.len()
        );
        Ok(notes)
    }
}
