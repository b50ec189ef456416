// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - One GET per call, no retries
// - Any status above 299 counts as a failure and the body is discarded
// - On success the whole body is read before we return, so the connection
//   is released before link extraction starts
//
// Rust concepts:
// - async/await: the request is awaited on the tokio runtime
// - map_err + ?: turning library errors into our own FetchError
// =============================================================================

use reqwest::Client;
use url::Url;

use super::error::FetchError;

// Highest status code we still treat as a successful download
const LAST_SUCCESS_STATUS: u16 = 299;

/// Downloads pages with a shared HTTP client
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with the client's default timeouts and redirect policy
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Fetcher { client })
    }

    /// Fetches `url` and returns its body as text.
    ///
    /// The URL is passed through as given; a relative URL cannot be requested
    /// and is reported like any other transport failure.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("Downloading: {}", url);

        let target = Url::parse(url).map_err(|e| {
            log::debug!("Error: {}", e);
            FetchError::transport(url, e)
        })?;

        let response = self.client.get(target).send().await.map_err(|e| {
            log::debug!("Error: {}", e);
            FetchError::transport(url, e)
        })?;

        let status = response.status().as_u16();
        if status > LAST_SUCCESS_STATUS {
            let err = FetchError::status(status, url);
            log::debug!("{}", err);
            return Err(err);
        }

        // text() consumes the response, so it is released on every path
        response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e))
    }
}
