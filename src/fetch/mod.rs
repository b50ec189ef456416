// src/fetch/mod.rs
// =============================================================================
// Page downloading.
//
// Submodules:
// - http: the `Fetcher`, a thin wrapper over a reqwest client
// - error: `FetchError`, returned for transport and HTTP status failures
// =============================================================================

mod error;
mod http;

pub use http::Fetcher;
