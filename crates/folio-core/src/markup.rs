//! Regex-level HTML tokenization used for counting and cutting.
//!
//! Nothing here parses HTML. A tag is any `<...>` run without a `>` inside it;
//! everything between tags is text. Malformed markup is passed through as-is.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// One piece of a tokenized document, borrowed from the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Tag(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(text) | Token::Tag(text) => *text,
        }
    }

    /// Words contributed by this token; tags never count.
    pub fn word_count(&self) -> usize {
        match self {
            Token::Text(text) => count_words(text),
            Token::Tag(_) => 0,
        }
    }
}

/// Split `html` into alternating text and tag tokens.
///
/// The sequence always starts and ends with a text token, which may be empty,
/// so `tokenize("<p>hi</p>")` yields `["", "<p>", "hi", "</p>", ""]`.
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0usize;
    for tag in RE_TAG.find_iter(html) {
        tokens.push(Token::Text(&html[cursor..tag.start()]));
        tokens.push(Token::Tag(tag.as_str()));
        cursor = tag.end();
    }
    tokens.push(Token::Text(&html[cursor..]));
    tokens
}

/// Remove every tag, leaving a space in its place so adjacent words stay apart.
pub fn strip_tags(html: &str) -> String {
    RE_TAG.replace_all(html, " ").into_owned()
}

/// Number of whitespace-separated words in plain text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word count of an HTML fragment, ignoring markup.
pub fn count_html_words(html: &str) -> usize {
    count_words(&strip_tags(html))
}
