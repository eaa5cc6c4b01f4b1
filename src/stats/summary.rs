use super::{
    average_sentiment, entries_in_period, ranked_distribution, streak, MoodCount, Period,
    Sentiment,
};
use crate::catalog::SentimentTable;
use crate::constants::{RECENT_ENTRIES_SHOWN, STREAK_MAX_LOOKBACK_DAYS};
use crate::entry::MoodEntry;
use crate::store::{KeyValueStore, MoodStore};
use chrono::{DateTime, Local, Utc};

/// Everything the statistics view shows, computed in one pass over a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub period: Period,
    pub total: usize,
    pub streak: u32,
    /// Entries inside the period's window.
    pub window_count: usize,
    /// The newest entries of the window, at most five.
    pub recent: Vec<MoodEntry>,
    /// Distribution over all entries, ranked for display.
    pub distribution: Vec<MoodCount>,
    pub sentiment: Sentiment,
    pub today: Option<MoodEntry>,
}

impl MoodSummary {
    /// Computes the summary over the store's current list.
    ///
    /// "Today" is the local calendar day of `now`; today's entry is the one
    /// [`MoodStore::current_entry_for`] reports.
    pub fn compute<S: KeyValueStore>(
        store: &MoodStore<S>,
        now: DateTime<Utc>,
        period: Period,
        table: &SentimentTable,
    ) -> Self {
        let entries = store.entries();
        let today = now.with_timezone(&Local).date_naive();
        let window = entries_in_period(entries, now, period);

        MoodSummary {
            period,
            total: entries.len(),
            streak: streak(entries, today, STREAK_MAX_LOOKBACK_DAYS),
            window_count: window.len(),
            recent: window
                .into_iter()
                .take(RECENT_ENTRIES_SHOWN)
                .cloned()
                .collect(),
            distribution: ranked_distribution(entries),
            sentiment: average_sentiment(entries, table),
            today: store.current_entry_for(today).cloned(),
        }
    }

    /// The top description of the distribution, if any.
    pub fn most_frequent(&self) -> Option<&str> {
        self.distribution
            .first()
            .map(|row| row.description.as_str())
    }
}
