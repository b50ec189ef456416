// src/fetch/error.rs
// =============================================================================
// The error returned when a page cannot be downloaded.
//
// There is one error type for both failure modes:
// - transport failures (bad URL, DNS, refused connection, TLS, ...)
// - HTTP status failures (anything above 299)
// They differ only in their message. Callers log it and move on.
// =============================================================================

use thiserror::Error;

/// A failed fetch, described by a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// The request never produced a response
    pub fn transport(url: &str, reason: impl std::fmt::Display) -> Self {
        FetchError {
            message: format!("Request to {} failed: {}", url, reason),
        }
    }

    /// A response came back with a failure status
    pub fn status(code: u16, url: &str) -> Self {
        FetchError {
            message: format!("Error ({}): {}", code, url),
        }
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}
