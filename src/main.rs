/*!
# moodlog - A Personal Mood Log

moodlog records how you feel and shows simple statistics about it.

## Usage

```
moodlog [OPTIONS] <COMMAND>

Commands:
  log    Log how you are feeling right now
  list   List logged moods, newest first
  today  Show today's mood, the current streak and this week's count
  stats  Show statistics for a period
  moods  List the moods you can log

Options:
      --log-format <FORMAT>  Log output format (text or json)
  -v, --verbose              Print debug logs
  -h, --help                 Print help
  -V, --version              Print version
```

## Configuration

- `MOODLOG_DIR`: Directory holding the mood data (defaults to "~/.local/share/moodlog")
- `MOODLOG_LOG_FORMAT`: `text` or `json`
- `MOODLOG_LOG_LEVEL`: Default log level; `RUST_LOG` takes precedence
*/

use chrono::{Local, Utc};
use moodlog::catalog::SentimentTable;
use moodlog::cli::{CliArgs, Command};
use moodlog::config::Config;
use moodlog::constants::{TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use moodlog::errors::AppResult;
use moodlog::logging;
use moodlog::ops;
use moodlog::store::{FileKeyValueStore, MoodStore};
use std::process::ExitCode;
use tracing::{debug, info, info_span};

fn open_store(config: &Config) -> AppResult<MoodStore<FileKeyValueStore>> {
    let backend = FileKeyValueStore::open(&config.data_dir)?;
    Ok(MoodStore::new(backend))
}

fn run(args: CliArgs, config: Config) -> AppResult<()> {
    debug!(command = ?args.command, "Dispatching command");

    // Obtain current date/time once at the beginning
    let now = Utc::now();

    match args.command {
        Command::Log(log) => {
            let mut store = open_store(&config)?;
            match log.handoff.as_deref() {
                Some(param) => {
                    ops::log_handoff(&mut store, param)?;
                    println!("Merged handed-over entry ({} total)", store.entries().len());
                }
                None => {
                    let entry =
                        ops::log_mood(&mut store, log.mood.as_deref(), log.note.as_deref(), now)?;
                    println!("Logged {} {}", entry.mood().emoji, entry.description());
                }
            }
            print!("{}", ops::render_today(&store, now));
        }
        Command::List { limit } => {
            let mut store = open_store(&config)?;
            let today = now.with_timezone(&Local).date_naive();
            print!("{}", ops::render_list(store.load(), today, limit));
        }
        Command::Today => {
            let mut store = open_store(&config)?;
            store.load();
            print!("{}", ops::render_today(&store, now));
        }
        Command::Stats { period } => {
            let mut store = open_store(&config)?;
            let table = SentimentTable::default();
            store.load();
            print!("{}", ops::render_stats(&store, now, period, &table));
        }
        Command::Moods => {
            print!("{}", ops::render_catalog());
        }
    }
    Ok(())
}

/// The main entry point for the moodlog application.
///
/// 1. Parses command-line arguments
/// 2. Loads and validates configuration
/// 3. Initializes logging inside a root span with a correlation id
/// 4. Runs the command, reporting any error once before exiting non-zero
fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut config = match Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(format) = args.log_format {
        config.log_format = format;
    }
    if args.verbose {
        config.log_level = "debug".to_string();
    }

    if let Err(e) = logging::init(config.log_format, &config.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let correlation_id = uuid::Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting moodlog");
    debug!(config = ?config, "Loaded configuration");

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
