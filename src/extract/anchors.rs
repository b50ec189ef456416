// src/extract/anchors.rs
// =============================================================================
// This module rebuilds anchors from a token stream.
//
// How it works:
// The extractor is a two-state machine:
//
//   Outside ──<a with attributes>──▶ Inside
//   Inside  ──</a>─────────────────▶ Outside   (emit a link if it is valid)
//
// While Inside, every text token is appended to a buffer with no separator,
// so `<a href="/x">Read <b>more</b></a>` yields the text "Read more".
// The buffer is trimmed once, when the anchor closes.
//
// Quirks we keep on purpose:
// - `<a>` with no attributes never opens capture (it cannot carry an href)
// - a second `<a ...>` before `</a>` replaces the captured tag but keeps the
//   text gathered so far
// - a stray `</a>` is logged and ignored
// =============================================================================

use super::link::Link;
use super::tokens::{self, Attr, HtmlToken};

const ANCHOR: &str = "a";

// The two states of the extractor
#[derive(Debug)]
enum State {
    Outside,
    Inside { attrs: Vec<Attr>, text: String },
}

/// Anchor state machine for one page
#[derive(Debug)]
pub struct LinkExtractor {
    depth: usize,
    max_depth: usize,
    state: State,
    links: Vec<Link>,
}

impl LinkExtractor {
    /// Creates an extractor for a page found at `depth`
    pub fn new(depth: usize, max_depth: usize) -> Self {
        LinkExtractor {
            depth,
            max_depth,
            state: State::Outside,
            links: Vec::new(),
        }
    }

    /// Feeds one token to the state machine.
    ///
    /// Returns `false` once the end of the stream has been reached.
    pub fn feed(&mut self, token: HtmlToken) -> bool {
        match token {
            HtmlToken::End => return false,

            HtmlToken::Text(data) => {
                if let State::Inside { text, .. } = &mut self.state {
                    text.push_str(&data);
                }
            }

            HtmlToken::StartTag { name, attrs } if name == ANCHOR => {
                if attrs.is_empty() {
                    return true;
                }
                self.state = match std::mem::replace(&mut self.state, State::Outside) {
                    State::Inside { text, .. } => State::Inside { attrs, text },
                    State::Outside => State::Inside {
                        attrs,
                        text: String::new(),
                    },
                };
            }

            HtmlToken::EndTag { name } if name == ANCHOR => self.close_anchor(),

            HtmlToken::StartTag { .. } | HtmlToken::EndTag { .. } | HtmlToken::Comment(_) => {}
        }

        true
    }

    fn close_anchor(&mut self) {
        match std::mem::replace(&mut self.state, State::Outside) {
            State::Outside => {
                log::warn!("Link End found without Start (depth {})", self.depth);
            }
            State::Inside { attrs, text } => {
                let link = Link::from_anchor(&attrs, &text, self.depth);
                if link.is_valid(self.max_depth) {
                    log::debug!("Link Found {:?}", link);
                    self.links.push(link);
                }
            }
        }
    }

    /// Returns the links collected so far, in document order
    pub fn finish(self) -> Vec<Link> {
        self.links
    }
}

/// Extracts every valid link from a token stream.
///
/// Stops at the first `HtmlToken::End` (or when the tokens run out) and
/// returns whatever was collected up to that point.
pub fn extract_links<I>(tokens: I, depth: usize, max_depth: usize) -> Vec<Link>
where
    I: IntoIterator<Item = HtmlToken>,
{
    let mut extractor = LinkExtractor::new(depth, max_depth);

    for token in tokens {
        if !extractor.feed(token) {
            break;
        }
    }

    let links = extractor.finish();
    log::debug!("{} link(s) extracted at depth {}", links.len(), depth);
    links
}

/// Tokenizes an HTML page and extracts its links
pub fn extract_links_from_html(html: &str, depth: usize, max_depth: usize) -> Vec<Link> {
    extract_links(tokens::tokenize(html), depth, max_depth)
}
