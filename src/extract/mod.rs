// src/extract/mod.rs
// =============================================================================
// Link extraction: from a downloaded HTML page to a list of `Link`s.
//
// Submodules:
// - tokens: HTML -> token stream (html5ever tokenizer, no DOM)
// - anchors: token stream -> links (two-state anchor machine)
// - link: the `Link` value type, its validity filter and its display format
// =============================================================================

mod anchors;
mod link;
mod tokens;

pub use anchors::extract_links_from_html;
pub use link::Link;
