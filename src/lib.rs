/*!
# moodlog

moodlog is a small personal mood log. Pick a mood from a fixed catalog, add an
optional note, and moodlog keeps the entries newest first and derives a few
simple statistics from them: the current day streak, how many moods you logged
this week (or month, or year), how often each mood shows up, and an overall
sentiment.

## Architecture

- `catalog`: The static mood catalog and per-mood lookup tables
- `entry`: Mood entries, drafts and their JSON encoding
- `store`: The ordered entry list and its key-value persistence
- `stats`: Pure statistics over a snapshot of entries
- `ops`: The operation behind each command
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `logging`: tracing subscriber setup
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use moodlog::store::{FileKeyValueStore, MoodStore};
use moodlog::{catalog, stats, Config, MoodEntry};
use chrono::{Local, Utc};

fn main() -> moodlog::AppResult<()> {
    let config = Config::load()?;
    let mut store = MoodStore::new(FileKeyValueStore::open(&config.data_dir)?);

    store.load();
    store.append(MoodEntry::new(catalog::find("Calm").unwrap(), None, Utc::now()))?;

    let today = Local::now().date_naive();
    println!("Streak: {}", stats::streak(store.entries(), today, 30));
    Ok(())
}
```
*/

/// The static mood catalog
pub mod catalog;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Mood entries and drafts
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Logging setup
pub mod logging;
/// User-facing operations
pub mod ops;
/// Derived statistics
pub mod stats;
/// Entry storage
pub mod store;

// Re-export important types for convenience
pub use catalog::{Mood, MoodCategory, SentimentTable};
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{EntryDraft, MoodEntry};
pub use errors::{AppError, AppResult};
pub use stats::{MoodSummary, Period, Sentiment};
pub use store::MoodStore;
