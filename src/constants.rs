//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodlog application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A small personal mood log with streaks and statistics";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default number of entries printed by `moodlog list`.
pub const DEFAULT_LIST_LIMIT: usize = 20;

// Configuration Keys & Environment Variables
/// Environment variable for specifying the moodlog data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Environment variable for selecting the log format (`text` or `json`).
pub const ENV_VAR_MOODLOG_LOG_FORMAT: &str = "MOODLOG_LOG_FORMAT";
/// Environment variable for the default log level.
pub const ENV_VAR_MOODLOG_LOG_LEVEL: &str = "MOODLOG_LOG_LEVEL";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for mood data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/moodlog";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// Key under which the serialized mood list is stored.
pub const MOODS_STORAGE_KEY: &str = "moods";
/// Suffix of the key an unparsable mood list is copied to before it is replaced.
pub const CORRUPT_KEY_SUFFIX: &str = "-corrupt";
/// File extension for stored blobs.
pub const STORAGE_FILE_EXTENSION: &str = "json";
/// Name of the advisory lock file inside the data directory.
pub const STORAGE_LOCK_FILE: &str = ".lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Statistics
/// Maximum number of days the streak walks back from today.
pub const STREAK_MAX_LOOKBACK_DAYS: u32 = 30;
/// Length of the weekly window in days.
pub const WEEK_WINDOW_DAYS: i64 = 7;
/// Length of the monthly window in calendar months.
pub const MONTH_WINDOW_MONTHS: u32 = 1;
/// Length of the yearly window in calendar months.
pub const YEAR_WINDOW_MONTHS: u32 = 12;
/// Number of window entries shown as "recent" in a summary.
pub const RECENT_ENTRIES_SHOWN: usize = 5;
/// Sentiment score used for descriptions missing from the table.
pub const DEFAULT_SENTIMENT_SCORE: u8 = 3;
/// Averages at or above this value are "Positive".
pub const POSITIVE_SENTIMENT_THRESHOLD: f64 = 4.0;
/// Averages at or above this value (and below positive) are "Neutral".
pub const NEUTRAL_SENTIMENT_THRESHOLD: f64 = 2.5;

// Presentation fallbacks
/// Color used for descriptions missing from the color table.
pub const DEFAULT_MOOD_COLOR: &str = "#667eea";
/// Emoji used for descriptions missing from the emoji table.
pub const DEFAULT_MOOD_EMOJI: &str = "😊";
/// Date format for list labels older than yesterday (e.g. `Sat, Oct 17`).
pub const RELATIVE_DATE_FORMAT: &str = "%a, %b %-d";
/// Time format used next to list labels.
pub const ENTRY_TIME_FORMAT: &str = "%H:%M";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
