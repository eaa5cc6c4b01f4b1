//! High-level operations behind each command.
//!
//! Operations take the store and the current time as arguments and return
//! the text to print, so they can be exercised without a terminal.

pub mod log;
pub mod report;

pub use log::{log_handoff, log_mood};
pub use report::{render_catalog, render_list, render_stats, render_today};
