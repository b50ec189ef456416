// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (a missing URL stops us here)
// 2. Set up logging on stderr at the requested level
// 3. Crawl from the seed URL, printing links to stdout
// 4. Exit with proper code (0 = crawl finished, 2 = error)
//
// A page that fails to download is not an error for the process: it is
// logged and the crawl carries on with the remaining links.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod extract;
mod fetch;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use config::CrawlConfig;
use crawl::Crawler;
use fetch::Fetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.log_level.into());
    log::debug!("{:?}", cli);

    let config = CrawlConfig::from(&cli);
    let fetcher = Fetcher::new().context("failed to create HTTP client")?;

    let mut crawler = Crawler::new(fetcher, config, std::io::stdout());
    crawler
        .crawl(&cli.url, 0)
        .await
        .context("failed to write crawl output")?;

    let stats = crawler.stats();
    log::info!(
        "Crawl finished: {} page(s) fetched, {} failed, {} link(s) printed",
        stats.pages_fetched,
        stats.pages_failed,
        stats.links_printed
    );

    Ok(0)
}

// Our own messages follow the requested level; dependencies stay at warn
// so that debug output is not flooded by the HTTP stack.
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn.min(level))
        .filter_module(module_path!(), level)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}
