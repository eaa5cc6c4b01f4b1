use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_LIST_LIMIT};
use crate::logging::LogFormat;
use crate::stats::Period;
use clap::{Args, Parser, Subcommand};

/// A small personal mood log with streaks and statistics
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, author, version, long_about = None)]
pub struct CliArgs {
    /// Log output format (text or json); overrides MOODLOG_LOG_FORMAT
    #[arg(long, value_name = "FORMAT", global = true)]
    pub log_format: Option<LogFormat>,

    /// Print debug logs
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Log how you are feeling right now
    Log(LogArgs),

    /// List logged moods, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },

    /// Show today's mood, the current streak and this week's count
    Today,

    /// Show statistics for a period
    Stats {
        /// week, month or year
        #[arg(short = 'p', long, default_value = "week")]
        period: Period,
    },

    /// List the moods you can log
    Moods,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct LogArgs {
    /// Mood to log, e.g. Happy or Anxious (see `moodlog moods`)
    #[arg(short = 'm', long, conflicts_with = "handoff")]
    pub mood: Option<String>,

    /// Optional note to keep with the mood
    #[arg(short = 'n', long, conflicts_with = "handoff")]
    pub note: Option<String>,

    /// A complete entry as JSON, as produced by another moodlog front end
    #[arg(long, value_name = "JSON")]
    pub handoff: Option<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
