//! Logging a new mood.

use crate::catalog;
use crate::entry::{EntryDraft, MoodEntry};
use crate::errors::{AppResult, EntryError};
use crate::store::{KeyValueStore, MoodStore};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Builds an entry from a mood description and note and saves it.
///
/// The store is reloaded first so the save merges into the latest persisted
/// list.
///
/// # Errors
///
/// - `EntryError::NoMoodSelected` if `mood` is `None`; nothing is written
/// - `EntryError::UnknownMood` if `mood` is not in the catalog
/// - storage errors from the write
pub fn log_mood<S: KeyValueStore>(
    store: &mut MoodStore<S>,
    mood: Option<&str>,
    note: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<MoodEntry> {
    let mut draft = EntryDraft::new();
    if let Some(description) = mood {
        let picked = catalog::find(description)
            .ok_or_else(|| EntryError::UnknownMood(description.to_string()))?;
        debug!(mood = %picked.description, "Mood selected");
        draft.select(picked);
    }
    if let Some(note) = note {
        draft.set_note(note);
    }

    let entry = draft.finalize(now)?;

    store.load();
    store.append(entry.clone())?;
    info!(mood = entry.description(), "Mood logged");
    Ok(entry)
}

/// Merges an entry handed over as JSON by another front end.
///
/// # Errors
///
/// - `EntryError::InvalidHandoff` if `param` is not a serialized entry
/// - storage errors from the write
pub fn log_handoff<S: KeyValueStore>(store: &mut MoodStore<S>, param: &str) -> AppResult<()> {
    store.load();
    let total = store.merge_handoff(param)?.len();
    info!(total, "Handed-over mood logged");
    Ok(())
}
