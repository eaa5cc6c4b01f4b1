//! Mood entries and the draft they are built from.
//!
//! A [`MoodEntry`] is immutable once created. Its JSON shape is the one stored
//! under the `moods` key:
//!
//! ```json
//! { "mood": { "emoji": "😊", "description": "Happy", "intensity": 1 },
//!   "note": "walked the dog",
//!   "date": "2024-01-15T14:30:00Z" }
//! ```
//!
//! `note` is omitted when absent, and a blank note in stored data reads back
//! as absent.

use crate::catalog::Mood;
use crate::constants::RELATIVE_DATE_FORMAT;
use crate::errors::{AppResult, EntryError, StorageError};
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single logged mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    mood: Mood,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    note: Option<String>,
    #[serde(rename = "date")]
    timestamp: DateTime<Utc>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let note = Option::<String>::deserialize(deserializer)?;
    Ok(note.filter(|text| !text.trim().is_empty()))
}

impl MoodEntry {
    /// Creates an entry. A note that is empty or only whitespace is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodlog::{catalog, MoodEntry};
    /// use chrono::Utc;
    ///
    /// let entry = MoodEntry::new(catalog::find("Calm").unwrap(), Some("  ".to_string()), Utc::now());
    /// assert!(entry.note().is_none());
    /// ```
    pub fn new(mood: Mood, note: Option<String>, timestamp: DateTime<Utc>) -> Self {
        MoodEntry {
            mood,
            note: note.filter(|text| !text.trim().is_empty()),
            timestamp,
        }
    }

    pub fn mood(&self) -> &Mood {
        &self.mood
    }

    pub fn description(&self) -> &str {
        &self.mood.description
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The calendar day of the entry in the local time zone.
    pub fn local_day(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    /// Label used when listing entries: "Today", "Yesterday", or a short date.
    pub fn relative_label(&self, today: NaiveDate) -> String {
        let day = self.local_day();
        if day == today {
            "Today".to_string()
        } else if day == today - Duration::days(1) {
            "Yesterday".to_string()
        } else {
            day.format(RELATIVE_DATE_FORMAT).to_string()
        }
    }

    /// Encodes the entry for handing it to the store from another part of the app.
    pub fn to_handoff(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self).map_err(StorageError::from)?)
    }

    /// Decodes an entry produced by [`MoodEntry::to_handoff`].
    pub fn from_handoff(param: &str) -> Result<Self, EntryError> {
        serde_json::from_str(param).map_err(EntryError::InvalidHandoff)
    }
}

/// An entry being composed: a mood may not have been picked yet.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    mood: Option<Mood>,
    note: String,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a mood, replacing any earlier pick.
    pub fn select(&mut self, mood: Mood) {
        self.mood = Some(mood);
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn selected(&self) -> Option<&Mood> {
        self.mood.as_ref()
    }

    /// Turns the draft into an entry stamped with `at`.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::NoMoodSelected` if no mood was picked.
    pub fn finalize(self, at: DateTime<Utc>) -> Result<MoodEntry, EntryError> {
        let mood = self.mood.ok_or(EntryError::NoMoodSelected)?;
        Ok(MoodEntry::new(mood, Some(self.note), at))
    }
}
