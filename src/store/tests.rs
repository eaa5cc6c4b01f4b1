use super::*;
use crate::catalog;
use crate::errors::{AppError, EntryError, LockError};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use std::io;

fn local_at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    let naive = date.and_hms_opt(hour, 0, 0).unwrap();
    Local
        .from_local_datetime(&naive)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

fn entry(description: &str, at: DateTime<Utc>) -> MoodEntry {
    MoodEntry::new(catalog::find(description).unwrap(), None, at)
}

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

/// Reads succeed, writes always fail.
struct ReadOnlyStore {
    inner: MemoryKeyValueStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(StorageError::Write {
            path: "memory".into(),
            source: io::Error::other("disk full"),
        }
        .into())
    }
}

/// Reads always fail.
struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into())
    }

    fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Ok(())
    }
}

#[test]
fn test_load_absent_key_is_empty() {
    let mut store = MoodStore::new(MemoryKeyValueStore::new());
    assert!(store.load().is_empty());
}

#[test]
fn test_load_malformed_blob_is_empty() {
    let backend = MemoryKeyValueStore::with_value(MOODS_STORAGE_KEY, "[{\"mood\": 12");
    let mut store = MoodStore::new(backend);
    assert!(store.load().is_empty());
}

#[test]
fn test_malformed_blob_is_kept_before_next_save() {
    let raw = "[{\"mood\": 12";
    let mut store = MoodStore::new(MemoryKeyValueStore::with_value(MOODS_STORAGE_KEY, raw));
    assert!(store.load().is_empty());

    store.append(entry("Calm", local_at(fixed_day(), 9))).unwrap();

    assert_eq!(store.corrupt_key(), "moods-corrupt");
    assert_eq!(
        store.backend().get("moods-corrupt").unwrap().as_deref(),
        Some(raw)
    );
    let saved = store.backend().get(MOODS_STORAGE_KEY).unwrap().unwrap();
    assert!(saved.contains("Calm"));
}

#[test]
fn test_load_read_failure_is_empty() {
    let mut store = MoodStore::new(UnreadableStore);
    assert!(store.load().is_empty());
}

#[test]
fn test_append_sorts_newest_first() {
    let day = fixed_day();
    let mut store = MoodStore::new(MemoryKeyValueStore::new());

    store.append(entry("Sad", local_at(day, 9))).unwrap();
    store.append(entry("Happy", local_at(day, 18))).unwrap();
    let entries = store.append(entry("Calm", local_at(day, 12))).unwrap();

    let order: Vec<&str> = entries.iter().map(|e| e.description()).collect();
    assert_eq!(order, vec!["Happy", "Calm", "Sad"]);
}

#[test]
fn test_append_is_visible_to_next_load() {
    let day = fixed_day();
    let mut store = MoodStore::new(MemoryKeyValueStore::new());
    store.append(entry("Tired", local_at(day, 7))).unwrap();
    store.append(entry("Grateful", local_at(day, 21))).unwrap();

    // A second store over the same data sees the persisted order.
    let mut reopened = MoodStore::new(store.backend().clone());
    let loaded = reopened.load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].description(), "Grateful");
    assert_eq!(loaded[1].description(), "Tired");
}

#[test]
fn test_equal_timestamps_put_new_entry_first() {
    let at = local_at(fixed_day(), 10);
    let mut store = MoodStore::new(MemoryKeyValueStore::new());
    store.append(entry("Sad", at)).unwrap();
    let entries = store.append(entry("Happy", at)).unwrap();

    assert_eq!(entries[0].description(), "Happy");
    assert_eq!(entries[1].description(), "Sad");
}

#[test]
fn test_write_failure_is_reported_and_rolled_back() {
    let day = fixed_day();
    let seeded = serde_json::to_string(&vec![entry("Calm", local_at(day, 8))]).unwrap();
    let backend = ReadOnlyStore {
        inner: MemoryKeyValueStore::with_value(MOODS_STORAGE_KEY, &seeded),
    };
    let mut store = MoodStore::new(backend);
    assert_eq!(store.load().len(), 1);

    let result = store.append(entry("Angry", local_at(day, 20)));
    match result {
        Err(AppError::Storage(StorageError::Write { .. })) => {}
        other => panic!("Expected a storage write error, got {:?}", other.map(|e| e.len())),
    }

    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].description(), "Calm");
}

#[test]
fn test_current_entry_for_returns_first_match_in_store_order() {
    let day = fixed_day();
    let mut store = MoodStore::new(MemoryKeyValueStore::new());
    store.append(entry("Sad", local_at(day, 8))).unwrap();
    store.append(entry("Happy", local_at(day, 19))).unwrap();
    store
        .append(entry("Angry", local_at(day - Duration::days(1), 12)))
        .unwrap();

    let current = store.current_entry_for(day).unwrap();
    assert_eq!(current.description(), "Happy");

    let yesterday = store.current_entry_for(day - Duration::days(1)).unwrap();
    assert_eq!(yesterday.description(), "Angry");

    assert!(store.current_entry_for(day + Duration::days(1)).is_none());
}

#[test]
fn test_merge_handoff_appends_decoded_entry() {
    let handed_over = entry("Thoughtful", local_at(fixed_day(), 11));
    let param = handed_over.to_handoff().unwrap();

    let mut store = MoodStore::new(MemoryKeyValueStore::new());
    let entries = store.merge_handoff(&param).unwrap();
    assert_eq!(entries, &[handed_over][..]);
}

#[test]
fn test_merge_handoff_rejects_bad_param_without_writing() {
    let mut store = MoodStore::new(MemoryKeyValueStore::new());
    let result = store.merge_handoff("not an entry");

    assert!(matches!(
        result,
        Err(AppError::Entry(EntryError::InvalidHandoff(_)))
    ));
    assert!(store.backend().get(MOODS_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_custom_key_is_used() {
    let mut store = MoodStore::with_key(MemoryKeyValueStore::new(), "moods-test");
    store.append(entry("Calm", local_at(fixed_day(), 9))).unwrap();

    assert!(store.backend().get("moods-test").unwrap().is_some());
    assert!(store.backend().get(MOODS_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn test_file_store_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("moodlog");

    let mut backend = FileKeyValueStore::open(&data_dir).unwrap();
    assert!(backend.get("moods").unwrap().is_none());

    backend.set("moods", "[]").unwrap();
    assert_eq!(backend.get("moods").unwrap().as_deref(), Some("[]"));

    backend.set("moods", "[1]").unwrap();
    assert_eq!(backend.get("moods").unwrap().as_deref(), Some("[1]"));
    assert!(data_dir.join("moods.json").exists());
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let temp_dir = tempfile::tempdir().unwrap();
    let backend = FileKeyValueStore::open(temp_dir.path()).unwrap();

    for key in ["", "../moods", "a/b", "moods.json"] {
        assert!(
            matches!(backend.path_for(key), Err(StorageError::InvalidKey(_))),
            "key {:?} should be rejected",
            key
        );
    }
}

#[test]
fn test_file_store_requires_absolute_dir() {
    let result = FileKeyValueStore::open(std::path::Path::new("relative/moodlog"));
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[cfg(unix)]
#[test]
fn test_file_store_creates_private_directory() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("private");
    FileKeyValueStore::open(&data_dir).unwrap();

    let mode = std::fs::metadata(&data_dir).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o700);
}

#[test]
fn test_file_store_busy_while_lock_is_held() {
    use fs2::FileExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let mut backend = FileKeyValueStore::open(temp_dir.path()).unwrap();
    backend.set("moods", "[]").unwrap();

    let holder = std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(temp_dir.path().join(".lock"))
        .unwrap();
    holder.lock_exclusive().unwrap();

    let result = backend.set("moods", "[1]");
    assert!(
        matches!(result, Err(AppError::Lock(LockError::StoreBusy { .. }))),
        "expected StoreBusy, got {:?}",
        result
    );
    assert_eq!(backend.get("moods").unwrap().as_deref(), Some("[]"));

    FileExt::unlock(&holder).unwrap();
    backend.set("moods", "[1]").unwrap();
    assert_eq!(backend.get("moods").unwrap().as_deref(), Some("[1]"));
}

#[cfg(unix)]
#[test]
fn test_file_store_writes_private_files() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().unwrap();
    let mut backend = FileKeyValueStore::open(temp_dir.path()).unwrap();
    backend.set("moods", "[]").unwrap();
    // Replacing the value must not widen the mode either.
    backend.set("moods", "[1]").unwrap();

    let path = temp_dir.path().join("moods.json");
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
