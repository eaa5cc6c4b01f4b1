//! Plain-text views of the mood log.

use crate::catalog::{self, SentimentTable};
use crate::constants::{ENTRY_TIME_FORMAT, STREAK_MAX_LOOKBACK_DAYS};
use crate::entry::MoodEntry;
use crate::stats::{self, MoodSummary, Period};
use crate::store::{KeyValueStore, MoodStore};
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt::Write;

fn entry_line(entry: &MoodEntry, today: NaiveDate) -> String {
    let time = entry
        .timestamp()
        .with_timezone(&Local)
        .format(ENTRY_TIME_FORMAT);
    let mut line = format!(
        "{:<12} {}  {} {} ({})",
        entry.relative_label(today),
        time,
        catalog::emoji_for(entry.description()),
        entry.description(),
        entry.mood().tone()
    );
    if let Some(note) = entry.note() {
        let _ = write!(line, "\n{:>20}{}", "", note);
    }
    line
}

/// Newest-first list of at most `limit` entries.
pub fn render_list(entries: &[MoodEntry], today: NaiveDate, limit: usize) -> String {
    if entries.is_empty() {
        return "No moods logged yet. Start with `moodlog log --mood <MOOD>`.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries.iter().take(limit) {
        out.push_str(&entry_line(entry, today));
        out.push('\n');
    }
    if entries.len() > limit {
        let _ = writeln!(out, "... and {} older", entries.len() - limit);
    }
    out
}

/// Today's mood with the streak and this week's count.
pub fn render_today<S: KeyValueStore>(store: &MoodStore<S>, now: DateTime<Utc>) -> String {
    let entries = store.entries();
    let today = now.with_timezone(&Local).date_naive();
    let streak = stats::streak(entries, today, STREAK_MAX_LOOKBACK_DAYS);
    let this_week = stats::entries_in_period(entries, now, Period::Week).len();

    let mut out = String::new();
    match store.current_entry_for(today) {
        Some(entry) => {
            let _ = writeln!(
                out,
                "Today you're feeling {} {}",
                catalog::emoji_for(entry.description()),
                entry.description()
            );
            if let Some(note) = entry.note() {
                let _ = writeln!(out, "  \"{}\"", note);
            }
        }
        None => {
            out.push_str("No mood logged today yet.\n");
        }
    }
    let _ = writeln!(out, "Day streak: {}", streak);
    let _ = writeln!(out, "This week:  {}", this_week);
    out
}

/// The statistics view for `period`.
pub fn render_stats<S: KeyValueStore>(
    store: &MoodStore<S>,
    now: DateTime<Utc>,
    period: Period,
    table: &SentimentTable,
) -> String {
    let summary = MoodSummary::compute(store, now, period, table);
    let today = now.with_timezone(&Local).date_naive();

    let mut out = String::new();
    let _ = writeln!(out, "Mood statistics ({})", summary.period);
    let _ = writeln!(out, "  Total entries: {}", summary.total);
    let _ = writeln!(out, "  Day streak:    {}", summary.streak);
    let _ = writeln!(out, "  {:<15}{}", format!("{}:", period.label()), summary.window_count);
    let _ = writeln!(out, "  Average mood:  {}", summary.sentiment);

    if !summary.distribution.is_empty() {
        out.push_str("\nDistribution\n");
        for row in &summary.distribution {
            let _ = writeln!(
                out,
                "  {} {:<12} {:>4} {:>4}%",
                catalog::emoji_for(&row.description),
                row.description,
                row.count,
                row.percentage
            );
        }
    }

    if !summary.recent.is_empty() {
        out.push_str("\nRecent\n");
        for entry in &summary.recent {
            let _ = writeln!(out, "  {}", entry_line(entry, today));
        }
    }

    if let Some(top) = summary.most_frequent() {
        let _ = writeln!(out, "\nYour most frequent mood is {}", top);
    }
    out
}

/// The catalog grouped by category, with each mood's intensity and color.
pub fn render_catalog() -> String {
    let mut out = String::new();
    for category in catalog::categories() {
        let _ = writeln!(out, "{}", category.category);
        for mood in category.moods {
            let _ = writeln!(
                out,
                "  {} {:<12} {:>3}  {}",
                mood.emoji,
                mood.description,
                mood.intensity,
                catalog::color_for(mood.description)
            );
        }
    }
    out
}
