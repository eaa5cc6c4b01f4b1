//! The mood store: the authoritative, newest-first list of entries.
//!
//! The store reads and writes its list as one JSON blob through a
//! [`KeyValueStore`]. Every save rewrites the whole blob; there is no partial
//! update. Reads are forgiving (a missing or corrupt blob is an empty list),
//! writes are not (a failed write is returned to the caller).

use crate::constants::{CORRUPT_KEY_SUFFIX, MOODS_STORAGE_KEY};
use crate::entry::MoodEntry;
use crate::errors::{AppResult, StorageError};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

mod file;
mod memory;

#[cfg(test)]
mod tests;

pub use file::{ensure_data_directory_exists, FileKeyValueStore};
pub use memory::MemoryKeyValueStore;

/// A string blob store addressed by key.
///
/// `set` must replace the value atomically from the caller's point of view:
/// a later `get` returns either the old value or the new one, never a mix.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Ordered collection of mood entries backed by a [`KeyValueStore`].
///
/// # Examples
///
/// ```
/// use moodlog::store::{MemoryKeyValueStore, MoodStore};
/// use moodlog::{catalog, MoodEntry};
/// use chrono::{Duration, Utc};
///
/// let mut store = MoodStore::new(MemoryKeyValueStore::new());
/// assert!(store.load().is_empty());
///
/// let now = Utc::now();
/// store.append(MoodEntry::new(catalog::find("Sad").unwrap(), None, now - Duration::hours(3))).unwrap();
/// store.append(MoodEntry::new(catalog::find("Calm").unwrap(), None, now)).unwrap();
///
/// // Newest first, regardless of insertion order.
/// assert_eq!(store.entries()[0].description(), "Calm");
/// ```
pub struct MoodStore<S: KeyValueStore> {
    backend: S,
    key: String,
    entries: Vec<MoodEntry>,
}

impl<S: KeyValueStore> MoodStore<S> {
    /// Creates a store over `backend` using the standard `moods` key.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, MOODS_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: &str) -> Self {
        MoodStore {
            backend,
            key: key.to_string(),
            entries: Vec::new(),
        }
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// A missing blob yields an empty list. A blob that cannot be read or
    /// parsed is logged and also yields an empty list; this never fails.
    /// An unparsable blob is copied to `<key>-corrupt` first, so the next
    /// save does not destroy it. The stored order is kept as is.
    pub fn load(&mut self) -> &[MoodEntry] {
        self.entries = match self.backend.get(&self.key) {
            Ok(None) => {
                debug!(key = %self.key, "No stored moods yet");
                Vec::new()
            }
            Ok(Some(raw)) => match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
                Ok(entries) => {
                    debug!(key = %self.key, count = entries.len(), "Loaded moods");
                    entries
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "Stored moods are malformed, starting empty");
                    self.preserve_corrupt(&raw);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored moods, starting empty");
                Vec::new()
            }
        };
        &self.entries
    }

    /// Adds `entry`, re-sorts newest first and persists the whole list.
    ///
    /// Among entries with the same timestamp the newly added one comes first.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the list cannot be serialized or written.
    /// The in-memory list is left as it was before the call.
    pub fn append(&mut self, entry: MoodEntry) -> AppResult<&[MoodEntry]> {
        self.entries.insert(0, entry.clone());
        self.entries.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        if let Err(e) = self.persist() {
            if let Some(position) = self.entries.iter().position(|existing| *existing == entry) {
                self.entries.remove(position);
            }
            return Err(e);
        }

        info!(
            mood = entry.description(),
            total = self.entries.len(),
            "Saved mood entry"
        );
        Ok(&self.entries)
    }

    /// Decodes a hand-off parameter and appends the entry it carries.
    pub fn merge_handoff(&mut self, param: &str) -> AppResult<&[MoodEntry]> {
        let entry = MoodEntry::from_handoff(param)?;
        self.append(entry)
    }

    /// Key the last unparsable blob is copied to.
    pub fn corrupt_key(&self) -> String {
        format!("{}{}", self.key, CORRUPT_KEY_SUFFIX)
    }

    fn preserve_corrupt(&mut self, raw: &str) {
        let backup_key = self.corrupt_key();
        match self.backend.set(&backup_key, raw) {
            Ok(()) => warn!(key = %backup_key, "Kept a copy of the malformed moods"),
            Err(e) => warn!(
                key = %backup_key,
                error = %e,
                "Failed to keep a copy of the malformed moods"
            ),
        }
    }

    /// The first entry, in store order, logged on `date` (local calendar day).
    pub fn current_entry_for(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.local_day() == date)
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn persist(&mut self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.entries).map_err(StorageError::from)?;
        self.backend.set(&self.key, &raw)
    }
}
