// src/crawl/mod.rs
// =============================================================================
// This module handles the recursive crawl.
//
// Features:
// - Depth-first, pre-order traversal starting from a seed URL
// - Strictly sequential: one request in flight at a time
// - Configurable depth limit, passed in through `CrawlConfig`
// - Counters for a summary at the end of the run
// =============================================================================

mod driver;

pub use driver::Crawler;
