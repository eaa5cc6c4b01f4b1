//! Derived statistics over a snapshot of mood entries.
//!
//! Everything here is a pure function of its inputs. Callers pass the current
//! time explicitly so results are reproducible.

use crate::catalog::SentimentTable;
use crate::constants::{
    MONTH_WINDOW_MONTHS, NEUTRAL_SENTIMENT_THRESHOLD, POSITIVE_SENTIMENT_THRESHOLD,
    WEEK_WINDOW_DAYS, YEAR_WINDOW_MONTHS,
};
use crate::entry::MoodEntry;
use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

mod summary;

pub use summary::MoodSummary;

/// Counts consecutive days with at least one entry, walking back from `today`.
///
/// Stops at the first day without an entry and never checks more than
/// `max_lookback` days, so the result is at most `max_lookback`. Returns 0 when
/// `today` has no entry.
///
/// # Examples
///
/// ```
/// use moodlog::{catalog, stats, MoodEntry};
/// use chrono::{Duration, Local, TimeZone, Utc};
///
/// let today = Local::now().date_naive();
/// let at = |days_ago: i64| {
///     let naive = (today - Duration::days(days_ago)).and_hms_opt(12, 0, 0).unwrap();
///     Local.from_local_datetime(&naive).single().unwrap().with_timezone(&Utc)
/// };
/// let happy = catalog::find("Happy").unwrap();
/// let entries = vec![
///     MoodEntry::new(happy.clone(), None, at(0)),
///     MoodEntry::new(happy.clone(), None, at(1)),
///     MoodEntry::new(happy, None, at(3)),
/// ];
///
/// assert_eq!(stats::streak(&entries, today, 30), 2);
/// ```
pub fn streak(entries: &[MoodEntry], today: NaiveDate, max_lookback: u32) -> u32 {
    let logged_days: HashSet<NaiveDate> = entries.iter().map(MoodEntry::local_day).collect();
    (0..max_lookback)
        .take_while(|offset| logged_days.contains(&(today - Duration::days(i64::from(*offset)))))
        .count() as u32
}

/// Entries whose timestamp is at or after `reference - days`.
pub fn entries_since(entries: &[MoodEntry], reference: DateTime<Utc>, days: i64) -> Vec<&MoodEntry> {
    let cutoff = reference - Duration::days(days);
    entries
        .iter()
        .filter(|entry| entry.timestamp() >= cutoff)
        .collect()
}

/// The time windows statistics can be shown for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// The last 7 days.
    #[default]
    Week,
    /// The last calendar month.
    Month,
    /// The last twelve calendar months.
    Year,
}

impl Period {
    /// Earliest instant included in the window ending at `now`.
    pub fn window_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let months_back = |months: u32| {
            now.checked_sub_months(Months::new(months))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        };
        match self {
            Period::Week => now - Duration::days(WEEK_WINDOW_DAYS),
            Period::Month => months_back(MONTH_WINDOW_MONTHS),
            Period::Year => months_back(YEAR_WINDOW_MONTHS),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Year => "This Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        };
        f.write_str(name)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(format!(
                "Unknown period '{}'. Expected week, month or year",
                other
            )),
        }
    }
}

/// Entries inside `period`'s window ending at `now`.
pub fn entries_in_period(
    entries: &[MoodEntry],
    now: DateTime<Utc>,
    period: Period,
) -> Vec<&MoodEntry> {
    let start = period.window_start(now);
    entries
        .iter()
        .filter(|entry| entry.timestamp() >= start)
        .collect()
}

/// Number of entries per mood description.
pub fn distribution(entries: &[MoodEntry]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        *counts.entry(entry.description().to_string()).or_insert(0) += 1;
    }
    counts
}

/// One row of a ranked distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCount {
    pub description: String,
    pub count: usize,
    /// Share of all entries, rounded to the nearest whole percent.
    pub percentage: u32,
}

/// The distribution ordered for display.
///
/// Sorted by count descending; equal counts keep the order in which each
/// description first appears in `entries` (newest first for store order).
pub fn ranked_distribution(entries: &[MoodEntry]) -> Vec<MoodCount> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        let description = entry.description();
        let count = counts.entry(description).or_insert(0);
        if *count == 0 {
            first_seen.push(description);
        }
        *count += 1;
    }

    let total = entries.len();
    let mut ranked: Vec<(usize, MoodCount)> = first_seen
        .into_iter()
        .enumerate()
        .map(|(position, description)| {
            let count = counts[description];
            let percentage = (count as f64 * 100.0 / total as f64).round() as u32;
            (
                position,
                MoodCount {
                    description: description.to_string(),
                    count,
                    percentage,
                },
            )
        })
        .collect();

    ranked.sort_by_key(|(position, row)| (Reverse(row.count), *position));
    ranked.into_iter().map(|(_, row)| row).collect()
}

/// The description at the top of [`ranked_distribution`].
pub fn most_frequent(entries: &[MoodEntry]) -> Option<String> {
    ranked_distribution(entries)
        .into_iter()
        .next()
        .map(|row| row.description)
}

/// Coarse overall sentiment of a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Challenging,
    NoData,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Challenging => "Challenging",
            Sentiment::NoData => "No data",
        };
        f.write_str(label)
    }
}

/// Mean sentiment score, or `None` for no entries.
pub fn average_score(entries: &[MoodEntry], table: &SentimentTable) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: u32 = entries
        .iter()
        .map(|entry| u32::from(table.score(entry.description())))
        .sum();
    Some(f64::from(total) / entries.len() as f64)
}

/// Buckets the average score: at least 4 is positive, at least 2.5 neutral,
/// anything lower challenging.
pub fn average_sentiment(entries: &[MoodEntry], table: &SentimentTable) -> Sentiment {
    match average_score(entries, table) {
        None => Sentiment::NoData,
        Some(avg) if avg >= POSITIVE_SENTIMENT_THRESHOLD => Sentiment::Positive,
        Some(avg) if avg >= NEUTRAL_SENTIMENT_THRESHOLD => Sentiment::Neutral,
        Some(_) => Sentiment::Challenging,
    }
}
