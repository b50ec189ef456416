// src/extract/tokens.rs
// =============================================================================
// This module turns raw HTML into a flat stream of lexical tokens.
//
// We use html5ever's tokenizer (the same engine that powers `scraper`), but
// we never build a DOM. Instead a small `TokenSink` adapter copies each
// token into our own `HtmlToken` enum, so the anchor state machine in
// anchors.rs only ever sees five kinds of token:
//
//   StartTag, EndTag, Text, Comment, End
//
// Rust concepts:
// - Traits: html5ever calls back into our `TokenSink` implementation
// - Enums with data: each token kind carries its own payload
// - Ownership: tendrils are copied into owned Strings
// =============================================================================

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// One attribute of a start tag, e.g. `href="/docs"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub key: String,
    pub value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attr {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A single lexical unit of an HTML document.
///
/// Tag names and attribute keys are lowercase, and character references in
/// text and attribute values are already decoded by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlToken {
    /// `<name attr="value">`
    StartTag { name: String, attrs: Vec<Attr> },
    /// `</name>`
    EndTag { name: String },
    /// A run of character data between tags
    Text(String),
    /// `<!-- ... -->`
    Comment(String),
    /// End of input. Always the last token.
    End,
}

#[cfg(test)]
impl HtmlToken {
    pub fn start(name: &str, attrs: Vec<Attr>) -> Self {
        HtmlToken::StartTag {
            name: name.to_string(),
            attrs,
        }
    }

    pub fn end(name: &str) -> Self {
        HtmlToken::EndTag {
            name: name.to_string(),
        }
    }

    pub fn text(data: &str) -> Self {
        HtmlToken::Text(data.to_string())
    }
}

// Without a tree builder nobody else tells the tokenizer that the content
// of these elements is text, so the sink has to.
fn content_mode(name: &str) -> TokenSinkResult<()> {
    match name {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

// Collects html5ever tokens into our own token type
#[derive(Default)]
struct TokenCollector {
    tokens: Vec<HtmlToken>,
}

impl TokenCollector {
    fn push_tag(&mut self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();

        match tag.kind {
            TagKind::StartTag => {
                let mode = content_mode(&name);
                let attrs = tag
                    .attrs
                    .into_iter()
                    .map(|attr| Attr::new(&*attr.name.local, String::from(attr.value)))
                    .collect();
                self.tokens.push(HtmlToken::StartTag { name, attrs });
                mode
            }
            TagKind::EndTag => {
                self.tokens.push(HtmlToken::EndTag { name });
                TokenSinkResult::Continue
            }
        }
    }

    fn push_text(&mut self, data: StrTendril) {
        self.tokens.push(HtmlToken::Text(String::from(data)));
    }
}

impl TokenSink for TokenCollector {
    type Handle = ();

    fn process_token(&mut self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => return self.push_tag(tag),
            Token::CharacterTokens(data) => self.push_text(data),
            Token::CommentToken(data) => self.tokens.push(HtmlToken::Comment(String::from(data))),
            Token::EOFToken => self.tokens.push(HtmlToken::End),
            // Recoverable lexer errors; the tokenizer keeps going and so do we
            Token::ParseError(reason) => {
                log::debug!("HTML parse error on line {}: {}", line_number, reason);
            }
            Token::DoctypeToken(_) | Token::NullCharacterToken => {}
        }

        TokenSinkResult::Continue
    }
}

/// Splits an HTML document into tokens.
///
/// Never fails: malformed markup is handled by the tokenizer's error
/// recovery, and the returned sequence always ends with `HtmlToken::End`.
pub fn tokenize(html: &str) -> Vec<HtmlToken> {
    let mut tokenizer = Tokenizer::new(TokenCollector::default(), TokenizerOpts::default());

    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));

    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    let mut tokens = tokenizer.sink.tokens;
    if tokens.last() != Some(&HtmlToken::End) {
        tokens.push(HtmlToken::End);
    }
    tokens
}
