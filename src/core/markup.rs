//! Restricted inline markup for descriptions
//!
//! Content strings may mark phrases with `*emphasis*` or `**strong**`; both
//! become highlighted spans. Any other markdown or HTML is kept as literal
//! source text and never interpreted by the renderer.

use pulldown_cmark::{Event, Options, Parser, Tag};
use serde::Deserialize;

/// A run of text with a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub highlight: bool,
}

/// Role of a source byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Literal,
    Highlight,
    Delimiter,
}

/// Plain text plus highlighted ranges
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct Markup {
    spans: Vec<Span>,
}

impl Markup {
    /// Text with no highlighting, taken verbatim
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut markup = Self::default();
        markup.push(&text, false);
        markup
    }

    /// Parse the restricted markup subset.
    ///
    /// Only emphasis delimiters are consumed. Every other byte of the source,
    /// including list markers, heading hashes, quotes, link syntax and HTML,
    /// is kept as literal text. Line breaks read as spaces.
    pub fn parse(source: &str) -> Self {
        let mut marks = vec![Mark::Literal; source.len()];

        for (event, range) in Parser::new_ext(source, Options::empty()).into_offset_iter() {
            let width = match event {
                Event::Start(Tag::Emphasis) => 1,
                Event::Start(Tag::Strong) => 2,
                _ => continue,
            };
            if range.len() < 2 * width {
                continue;
            }
            let inner = range.start + width..range.end - width;
            for i in range {
                if !inner.contains(&i) {
                    marks[i] = Mark::Delimiter;
                } else if marks[i] == Mark::Literal {
                    marks[i] = Mark::Highlight;
                }
            }
        }

        let mut markup = Self::default();
        let mut buf = [0u8; 4];
        for (i, c) in source.char_indices() {
            let highlight = match marks[i] {
                Mark::Delimiter => continue,
                Mark::Highlight => true,
                Mark::Literal => false,
            };
            match c {
                '\r' => {}
                '\n' => markup.push(" ", highlight),
                _ => markup.push(c.encode_utf8(&mut buf), highlight),
            }
        }

        markup
    }

    fn push(&mut self, text: &str, highlight: bool) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.highlight == highlight => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                highlight,
            }),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Concatenated text without styling
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Highlighted phrases in order
    #[cfg(test)]
    pub fn highlights(&self) -> impl Iterator<Item = &str> {
        self.spans
            .iter()
            .filter(|span| span.highlight)
            .map(|span| span.text.as_str())
    }
}

impl From<String> for Markup {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl From<&str> for Markup {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}
