// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   web-crawler [OPTIONS] <URL>
//
// The seed URL is a required positional argument. If it is missing, clap
// prints a usage error and exits with status 2 before any request is made.
// =============================================================================

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::DEFAULT_MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(
    name = "web-crawler",
    version,
    about = "Crawl a website depth-first and print every link found",
    long_about = "web-crawler downloads a page, prints each anchor it contains indented by \
                  crawl depth, and follows those links until the maximum depth is reached. \
                  Links go to stdout; diagnostics go to stderr."
)]
pub struct Cli {
    /// URL to start crawling from (e.g., https://example.com)
    pub url: String,

    /// Maximum crawl depth
    ///
    /// Links are printed for pages at depths 0 to max-depth - 1, and only
    /// links found above depth max-depth - 1 are followed.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Print each link as a JSON object, one per line
    #[arg(long)]
    pub json: bool,

    /// Verbosity of diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
