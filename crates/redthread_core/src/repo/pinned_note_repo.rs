//! Pinned note table contract and SQLite implementation.
//!
//! # Invariants
//! - `upsert_pinned` writes every slot in one transaction; a failure leaves
//!   all slots untouched.

use crate::model::pinned_note::PinnedNote;
use crate::repo::RepoResult;
use rusqlite::{params, Connection};

pub trait PinnedNoteRepository {
    /// Returns every saved slot ordered by owner.
    fn list_pinned(&self) -> RepoResult<Vec<PinnedNote>>;
    /// Inserts or replaces each slot keyed by owner.
    fn upsert_pinned(&self, notes: &[PinnedNote]) -> RepoResult<()>;
}

pub struct SqlitePinnedNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePinnedNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PinnedNoteRepository for SqlitePinnedNoteRepository<'_> {
    fn list_pinned(&self) -> RepoResult<Vec<PinnedNote>> {
        let mut stmt = self
            .conn
            .prepare("SELECT owner, body, updated_at FROM pinned_notes ORDER BY owner ASC;")?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            let note = PinnedNote {
                owner: row.get("owner")?,
                body: row.get("body")?,
                updated_at: row.get("updated_at")?,
            };
            note.validate()?;
            notes.push(note);
        }
        Ok(notes)
    }

    fn upsert_pinned(&self, notes: &[PinnedNote]) -> RepoResult<()> {
        for note in notes {
            note.validate()?;
        }

        let tx = self.conn.unchecked_transaction()?;
        for note in notes {
            tx.execute(
                "INSERT INTO pinned_notes (owner, body, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (owner) DO UPDATE SET
                    body = excluded.body,
                    updated_at = excluded.updated_at;",
                params![note.owner.as_str(), note.body.as_str(), note.updated_at],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
