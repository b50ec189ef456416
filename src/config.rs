// src/config.rs
// =============================================================================
// Crawl configuration, built once from the command line and then passed
// explicitly to every part of the crawl. Nothing here changes mid-crawl.
// =============================================================================

use crate::cli::Cli;

/// Default maximum crawl depth
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// How discovered links are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<tabs><text> (<depth>) - <url>`
    #[default]
    Text,
    /// One JSON object per line
    JsonLines,
}

/// Settings for one crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Links are only recorded on pages shallower than this
    pub max_depth: usize,
    pub output: OutputFormat,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            output: OutputFormat::Text,
        }
    }
}

impl From<&Cli> for CrawlConfig {
    fn from(cli: &Cli) -> Self {
        CrawlConfig {
            max_depth: cli.max_depth,
            output: if cli.json {
                OutputFormat::JsonLines
            } else {
                OutputFormat::Text
            },
        }
    }
}
