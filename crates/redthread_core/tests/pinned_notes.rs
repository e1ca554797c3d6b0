use redthread_core::db::open_db_in_memory;
use redthread_core::{PinnedNote, PinnedNoteService, ServiceError, SqlitePinnedNoteRepository};

fn owners() -> Vec<String> {
    vec!["keya".to_string(), "tai".to_string()]
}

#[test]
fn load_returns_empty_slots_before_first_save() {
    let conn = open_db_in_memory().unwrap();
    let service = PinnedNoteService::new(SqlitePinnedNoteRepository::new(&conn));

    let notes = service.load(&owners()).unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].owner, "keya");
    assert_eq!(notes[1].owner, "tai");
    assert!(notes.iter().all(|note| note.body.is_empty() && note.updated_at == 0));
}

#[test]
fn save_upserts_every_slot_and_reload_sees_latest() {
    let conn = open_db_in_memory().unwrap();
    let service = PinnedNoteService::new(SqlitePinnedNoteRepository::new(&conn));

    service
        .save(vec![
            PinnedNote::new("Keya", "buy flowers"),
            PinnedNote::new("tai", "call grandma"),
        ])
        .unwrap();
    let saved = service
        .save(vec![
            PinnedNote::new("keya", "flowers bought"),
            PinnedNote::new("tai", "call grandma"),
        ])
        .unwrap();
    assert_eq!(saved[0].updated_at, saved[1].updated_at);
    assert!(saved[0].updated_at > 0);

    let notes = service.load(&owners()).unwrap();
    assert_eq!(notes[0].body, "flowers bought");
    assert_eq!(notes[1].body, "call grandma");

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM pinned_notes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 2);
}

#[test]
fn blank_owner_rejects_whole_save() {
    let conn = open_db_in_memory().unwrap();
    let service = PinnedNoteService::new(SqlitePinnedNoteRepository::new(&conn));

    let err = service
        .save(vec![
            PinnedNote::new("keya", "kept?"),
            PinnedNote::new("  ", "orphan"),
        ])
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyInput(_)));
    assert!(service.load(&owners()).unwrap()[0].body.is_empty());
}
