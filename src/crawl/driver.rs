// src/crawl/driver.rs
// =============================================================================
// This module implements the crawl itself: a depth-first, pre-order walk.
//
// How it works:
// 1. Fetch the page (on failure: log it, abandon this branch only)
// 2. Extract its links at the current depth
// 3. For each link, in document order:
//      print it, then crawl it at depth + 1 if depth + 1 < max_depth
//
// Each recursive call finishes its whole subtree before the next sibling is
// printed. There is no visited set: a page reachable twice is fetched twice,
// and cycles end only because of the depth bound.
//
// Rust concepts:
// - Recursive async: an `async fn` cannot call itself directly, because its
//   future would have infinite size. We return a `BoxFuture` instead.
// - Generic output: `W: Write` lets tests capture output in a Vec<u8>
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use std::io::{self, Write};

use crate::config::{CrawlConfig, OutputFormat};
use crate::extract::{extract_links_from_html, Link};
use crate::fetch::Fetcher;

/// Counters collected over one crawl
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_fetched: usize,
    pub pages_failed: usize,
    pub links_printed: usize,
}

/// Sequential, depth-bounded link crawler writing links to `W`
pub struct Crawler<W> {
    fetcher: Fetcher,
    config: CrawlConfig,
    out: W,
    stats: CrawlStats,
}

impl<W: Write + Send> Crawler<W> {
    pub fn new(fetcher: Fetcher, config: CrawlConfig, out: W) -> Self {
        Crawler {
            fetcher,
            config,
            out,
            stats: CrawlStats::default(),
        }
    }

    pub fn stats(&self) -> CrawlStats {
        self.stats
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Crawls `url`, found at `depth`, and everything below it.
    ///
    /// Fetch failures are logged and end only the branch they happen in.
    /// The only error returned is a failure to write to the output.
    pub fn crawl<'a>(&'a mut self, url: &'a str, depth: usize) -> BoxFuture<'a, io::Result<()>>
    where
        W: 'a,
    {
        self.visit(url, depth).boxed()
    }

    // One page: fetch, extract, then print and descend link by link
    async fn visit(&mut self, url: &str, depth: usize) -> io::Result<()> {
        log::info!("");

        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("{}", e);
                self.stats.pages_failed += 1;
                return Ok(());
            }
        };
        self.stats.pages_fetched += 1;

        let links = extract_links_from_html(&body, depth, self.config.max_depth);
        drop(body);

        for link in &links {
            self.emit(link)?;

            if depth + 1 < self.config.max_depth {
                self.crawl(link.url(), depth + 1).await?;
            }
        }

        Ok(())
    }

    // Writes one link in the configured format
    fn emit(&mut self, link: &Link) -> io::Result<()> {
        match self.config.output {
            OutputFormat::Text => writeln!(self.out, "{}", link)?,
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut self.out, link)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;

        self.stats.links_printed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Builds a page whose anchors are (text, href) pairs
    fn page(anchors: &[(&str, String)]) -> String {
        let items: String = anchors
            .iter()
            .map(|(text, href)| format!(r#"<li><a href="{}">{}</a></li>"#, href, text))
            .collect();
        format!("<html><body><ul>{}</ul></body></html>", items)
    }

    async fn serve(server: &MockServer, route: &str, status: u16, body: String, hits: u64) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(hits)
            .mount(server)
            .await;
    }

    async fn run(seed: &str, config: CrawlConfig) -> (Vec<String>, CrawlStats) {
        let mut crawler = Crawler::new(Fetcher::new().unwrap(), config, Vec::new());
        crawler.crawl(seed, 0).await.unwrap();

        let stats = crawler.stats();
        let output = String::from_utf8(crawler.into_output()).unwrap();
        (output.lines().map(str::to_string).collect(), stats)
    }

    fn depth(max_depth: usize) -> CrawlConfig {
        CrawlConfig {
            max_depth,
            ..CrawlConfig::default()
        }
    }

    #[tokio::test]
    async fn test_depth_first_pre_order() {
        let server = MockServer::start().await;
        let base = server.uri();

        let seed = page(&[("A", format!("{}/a", base)), ("B", format!("{}/b", base))]);
        serve(&server, "/", 200, seed, 1).await;
        serve(&server, "/a", 200, page(&[("C", format!("{}/c", base))]), 1).await;
        serve(&server, "/b", 200, page(&[]), 1).await;
        // Depth 1 links are printed but never followed with max depth 2
        serve(&server, "/c", 200, page(&[]), 0).await;

        let (lines, stats) = run(&format!("{}/", base), depth(2)).await;

        assert_eq!(
            lines,
            vec![
                format!("A (0) - {}/a", base),
                format!("\tC (1) - {}/c", base),
                format!("B (0) - {}/b", base),
            ]
        );
        assert_eq!(
            stats,
            CrawlStats {
                pages_fetched: 3,
                pages_failed: 0,
                links_printed: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_failed_branch_does_not_stop_siblings() {
        let server = MockServer::start().await;
        let base = server.uri();

        let seed = page(&[
            ("Missing", format!("{}/missing", base)),
            ("Ok", format!("{}/ok", base)),
        ]);
        serve(&server, "/", 200, seed, 1).await;
        serve(&server, "/missing", 404, page(&[("Hidden", format!("{}/h", base))]), 1).await;
        serve(&server, "/ok", 200, page(&[("D", format!("{}/d", base))]), 1).await;

        let (lines, stats) = run(&format!("{}/", base), depth(2)).await;

        assert_eq!(
            lines,
            vec![
                format!("Missing (0) - {}/missing", base),
                format!("Ok (0) - {}/ok", base),
                format!("\tD (1) - {}/d", base),
            ]
        );
        assert_eq!(stats.pages_failed, 1);
        assert!(lines.iter().all(|l| !l.contains("Hidden")));
    }

    #[tokio::test]
    async fn test_cycle_ends_at_depth_bound() {
        let server = MockServer::start().await;
        let base = server.uri();

        serve(&server, "/x", 200, page(&[("Y", format!("{}/y", base))]), 2).await;
        serve(&server, "/y", 200, page(&[("X", format!("{}/x", base))]), 1).await;

        let (lines, _) = run(&format!("{}/x", base), depth(3)).await;

        assert_eq!(
            lines,
            vec![
                format!("Y (0) - {}/y", base),
                format!("\tX (1) - {}/x", base),
                format!("\t\tY (2) - {}/y", base),
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_links_are_fetched_each_time() {
        let server = MockServer::start().await;
        let base = server.uri();

        let seed = page(&[
            ("Same", format!("{}/same", base)),
            ("Same again", format!("{}/same", base)),
        ]);
        serve(&server, "/", 200, seed, 1).await;
        serve(&server, "/same", 200, page(&[]), 2).await;

        let (lines, stats) = run(&format!("{}/", base), depth(2)).await;
        assert_eq!(lines.len(), 2);
        assert_eq!(stats.pages_fetched, 3);
    }

    #[tokio::test]
    async fn test_relative_links_are_printed_but_not_resolved() {
        let server = MockServer::start().await;
        let base = server.uri();

        let seed = page(&[("Docs", "/docs".to_string())]);
        serve(&server, "/", 200, seed, 1).await;
        serve(&server, "/docs", 200, page(&[]), 0).await;

        let (lines, stats) = run(&format!("{}/", base), depth(2)).await;
        assert_eq!(lines, vec!["Docs (0) - /docs".to_string()]);
        assert_eq!(stats.pages_failed, 1);
    }

    #[tokio::test]
    async fn test_zero_depth_prints_nothing() {
        let server = MockServer::start().await;
        let base = server.uri();
        serve(&server, "/", 200, page(&[("A", format!("{}/a", base))]), 1).await;

        let (lines, stats) = run(&format!("{}/", base), depth(0)).await;
        assert!(lines.is_empty());
        assert_eq!(stats.pages_fetched, 1);
    }

    #[tokio::test]
    async fn test_unreachable_seed() {
        let (lines, stats) = run("http://127.0.0.1:1/", depth(2)).await;
        assert!(lines.is_empty());
        assert_eq!(stats.pages_failed, 1);
        assert_eq!(stats.pages_fetched, 0);
    }

    #[tokio::test]
    async fn test_json_lines_output() {
        let server = MockServer::start().await;
        let base = server.uri();
        serve(&server, "/", 200, page(&[("A", format!("{}/a", base))]), 1).await;
        serve(&server, "/a", 200, page(&[]), 1).await;

        let config = CrawlConfig {
            max_depth: 2,
            output: OutputFormat::JsonLines,
        };
        let (lines, _) = run(&format!("{}/", base), config).await;

        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["url"], format!("{}/a", base));
        assert_eq!(value["text"], "A");
        assert_eq!(value["depth"], 0);
    }
}
