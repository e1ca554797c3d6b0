use redthread_core::db::open_db_in_memory;
use redthread_core::storage::BlobStore;
use redthread_core::{
    ImageUpload, LocalBlobStore, Memory, MemoryRepository, MemoryService, NewMemory, RecordId,
    ListQuery, RepoError, RepoResult, ServiceError, SqliteMemoryRepository,
};
use uuid::Uuid;

fn photo(name: &str) -> ImageUpload {
    ImageUpload {
        file_name: name.to_string(),
        bytes: b"\xFF\xD8\xFFjpeg".to_vec(),
    }
}

fn blob_file(store: &LocalBlobStore, memory: &Memory) -> std::path::PathBuf {
    let url = memory.image_url.as_deref().unwrap();
    let path = store.path_from_public_url(url).unwrap();
    store.root().join(path)
}

#[test]
fn add_memory_without_photo_normalizes_blank_fields() {
    let conn = open_db_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path(), "http://localhost");
    let service = MemoryService::new(SqliteMemoryRepository::new(&conn), &store);

    let memory = service
        .add_memory(NewMemory {
            title: Some(String::new()),
            body: Some("first picnic".to_string()),
            image: None,
        })
        .unwrap();

    assert_eq!(memory.title, None);
    assert_eq!(memory.display_title(), "Untitled");
    assert_eq!(memory.body.as_deref(), Some("first picnic"));
    assert_eq!(memory.image_url, None);
    assert!(memory.created_at > 0);
}

#[test]
fn add_memory_uploads_photo_and_stores_public_url() {
    let conn = open_db_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path(), "http://localhost");
    let service = MemoryService::new(SqliteMemoryRepository::new(&conn), &store);

    let memory = service
        .add_memory(NewMemory {
            title: Some("Beach".to_string()),
            body: None,
            image: Some(photo("sunset.jpeg")),
        })
        .unwrap();

    let url = memory.image_url.as_deref().unwrap();
    assert!(url.starts_with("http://localhost/storage/v1/object/public/photos/uploads/"));
    assert!(url.ends_with(".jpeg"));
    assert_eq!(std::fs::read(blob_file(&store, &memory)).unwrap(), photo("x").bytes);
}

#[test]
fn list_memories_is_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path(), "http://localhost");
    let service = MemoryService::new(SqliteMemoryRepository::new(&conn), &store);

    let first = service
        .add_memory(NewMemory {
            title: Some("first".to_string()),
            ..NewMemory::default()
        })
        .unwrap();
    let second = service
        .add_memory(NewMemory {
            title: Some("second".to_string()),
            ..NewMemory::default()
        })
        .unwrap();

    let ids: Vec<_> = service
        .list_memories()
        .unwrap()
        .into_iter()
        .map(|memory| memory.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn delete_memory_removes_row_and_photo() {
    let conn = open_db_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path(), "http://localhost");
    let service = MemoryService::new(SqliteMemoryRepository::new(&conn), &store);

    let memory = service
        .add_memory(NewMemory {
            image: Some(photo("kiss.png")),
            ..NewMemory::default()
        })
        .unwrap();
    let file = blob_file(&store, &memory);
    assert!(file.exists());

    let deleted = service.delete_memory(memory.id).unwrap();
    assert_eq!(deleted.id, memory.id);
    assert!(!file.exists());
    assert!(service.list_memories().unwrap().is_empty());
}

#[test]
fn delete_memory_with_foreign_url_still_deletes_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMemoryRepository::new(&conn);
    let foreign = Memory::new(
        Some("linked".to_string()),
        None,
        Some("https://elsewhere.test/pic.jpg".to_string()),
    );
    repo.insert_memory(&foreign).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path(), "http://localhost");
    let service = MemoryService::new(SqliteMemoryRepository::new(&conn), &store);

    service.delete_memory(foreign.id).unwrap();
    assert!(repo.get_memory(foreign.id).unwrap().is_none());
}

#[test]
fn delete_unknown_memory_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path(), "http://localhost");
    let service = MemoryService::new(SqliteMemoryRepository::new(&conn), &store);

    let id = Uuid::new_v4();
    let err = service.delete_memory(id).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(missing) if missing == id));
}

struct RejectingMemoryRepository;

impl MemoryRepository for RejectingMemoryRepository {
    fn insert_memory(&self, _memory: &Memory) -> RepoResult<RecordId> {
        Err(RepoError::InvalidData("table unavailable".to_string()))
    }

    fn get_memory(&self, _id: RecordId) -> RepoResult<Option<Memory>> {
        Ok(None)
    }

    fn list_memories(&self, _query: &ListQuery) -> RepoResult<Vec<Memory>> {
        Ok(Vec::new())
    }

    fn delete_memory(&self, id: RecordId) -> RepoResult<()> {
        Err(RepoError::NotFound(id))
    }
}

#[test]
fn failed_insert_removes_uploaded_photo() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path(), "http://localhost");
    let service = MemoryService::new(RejectingMemoryRepository, &store);

    let err = service
        .add_memory(NewMemory {
            image: Some(photo("lost.jpg")),
            ..NewMemory::default()
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepoError::InvalidData(_))));

    let uploads = dir.path().join("uploads");
    let leftover = std::fs::read_dir(&uploads)
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(leftover, 0);
}
