// src/extract/link.rs
// =============================================================================
// The `Link` value type: one anchor discovered on a crawled page.
//
// A Link remembers the raw href (trimmed, never resolved against the page
// URL), the anchor's text, and the depth of the page it was found on.
// Fields are private so a Link cannot change after it is built.
// =============================================================================

use serde::Serialize;
use std::fmt;

use super::tokens::Attr;

/// An anchor found on a page at a given crawl depth
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    url: String,
    text: String,
    depth: usize,
}

impl Link {
    /// Builds a link from the attributes of an `<a>` start tag and the text
    /// collected until its end tag.
    ///
    /// Both the href and the text are trimmed. If the tag has no `href` the
    /// url is left empty; if it has several, the last one wins.
    pub fn from_anchor(attrs: &[Attr], text: &str, depth: usize) -> Self {
        let url = attrs
            .iter()
            .filter(|attr| attr.key == "href")
            .last()
            .map(|attr| attr.value.trim().to_string())
            .unwrap_or_default();

        Link {
            url,
            text: text.trim().to_string(),
            depth,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Decides whether this link is worth printing and following.
    ///
    /// A link is valid when:
    /// - it was found on a page shallower than `max_depth`
    /// - its text is not empty
    /// - its url is not empty and does not mention "javascript" in any case
    pub fn is_valid(&self, max_depth: usize) -> bool {
        if self.depth >= max_depth {
            return false;
        }

        if self.text.is_empty() {
            return false;
        }

        if self.url.is_empty() || self.url.to_lowercase().contains("javascript") {
            return false;
        }

        true
    }
}

// Formats as `<tabs><text> (<depth>) - <url>`, one tab per level of depth
impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spacer = "\t".repeat(self.depth());
        write!(f, "{}{} ({}) - {}", spacer, self.text(), self.depth(), self.url())
    }
}
