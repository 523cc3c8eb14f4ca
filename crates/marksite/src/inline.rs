//! Inline span tokenization.
//!
//! Text is split into typed fragments by a fixed pipeline: `**`, `*` and
//! `` ` `` delimiter passes, then image extraction, then link extraction.
//! Each pass only looks at fragments that are still plain text, so markup is
//! never nested: `**a *b* c**` yields one bold fragment containing `a *b* c`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{MarksiteError, Result};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image regex"));

// The regex crate has no look-behind; the optional `!` is captured and
// image matches are filtered out instead.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link regex"));

/// A run of text tagged with its inline markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Text between `**` delimiters
    Bold(String),

    /// Text between `*` delimiters
    Italic(String),

    /// Text between backticks
    Code(String),

    /// `[text](url)`
    Link { text: String, url: String },

    /// `![alt](url)`
    Image { alt: String, url: String },
}

/// The markup category of an [`Inline`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl Inline {
    pub fn kind(&self) -> InlineKind {
        match self {
            Inline::Text(_) => InlineKind::Plain,
            Inline::Bold(_) => InlineKind::Bold,
            Inline::Italic(_) => InlineKind::Italic,
            Inline::Code(_) => InlineKind::Code,
            Inline::Link { .. } => InlineKind::Link,
            Inline::Image { .. } => InlineKind::Image,
        }
    }

    /// Visible text: the link text for links, the alt text for images
    pub fn content(&self) -> &str {
        match self {
            Inline::Text(text) | Inline::Bold(text) | Inline::Italic(text) | Inline::Code(text) => {
                text.as_str()
            }
            Inline::Link { text, .. } => text.as_str(),
            Inline::Image { alt, .. } => alt.as_str(),
        }
    }

    /// URL of a link or image
    pub fn target(&self) -> Option<&str> {
        match self {
            Inline::Link { url, .. } | Inline::Image { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }
}

impl InlineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InlineKind::Plain => "text",
            InlineKind::Bold => "bold",
            InlineKind::Italic => "italic",
            InlineKind::Code => "code",
            InlineKind::Link => "link",
            InlineKind::Image => "image",
        }
    }
}

impl fmt::Display for InlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InlineKind {
    type Err = MarksiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(InlineKind::Plain),
            "bold" => Ok(InlineKind::Bold),
            "italic" => Ok(InlineKind::Italic),
            "code" => Ok(InlineKind::Code),
            "link" => Ok(InlineKind::Link),
            "image" => Ok(InlineKind::Image),
            _ => Err(MarksiteError::UnrecognizedInlineKind(s.to_string())),
        }
    }
}

/// Paired delimiters, in the order their passes run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub const PASSES: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    fn wrap(self, text: &str) -> Inline {
        match self {
            Delimiter::Bold => Inline::Bold(text.to_string()),
            Delimiter::Italic => Inline::Italic(text.to_string()),
            Delimiter::Code => Inline::Code(text.to_string()),
        }
    }
}

/// Tokenize a single text unit into inline fragments
pub fn tokenize(text: &str) -> Result<Vec<Inline>> {
    let mut fragments = vec![Inline::text(text)];
    for delimiter in Delimiter::PASSES {
        fragments = split_delimiter(fragments, delimiter)?;
        log::trace!("after `{}` pass: {} fragments", delimiter.marker(), fragments.len());
    }
    let fragments = split_images(fragments)?;
    split_links(fragments)
}

/// Split plain fragments on a delimiter.
///
/// Segments alternate plain and delimited, starting with plain. Empty
/// segments are kept. Fragments already tagged are passed through.
pub fn split_delimiter(fragments: Vec<Inline>, delimiter: Delimiter) -> Result<Vec<Inline>> {
    let marker = delimiter.marker();
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        let Inline::Text(text) = &fragment else {
            result.push(fragment);
            continue;
        };

        let count = text.matches(marker).count();
        if count % 2 != 0 {
            return Err(MarksiteError::UnterminatedDelimiter(marker.to_string()));
        }
        if count == 0 {
            result.push(fragment);
            continue;
        }

        for (i, segment) in text.split(marker).enumerate() {
            if i % 2 == 0 {
                result.push(Inline::text(segment));
            } else {
                result.push(delimiter.wrap(segment));
            }
        }
    }

    Ok(result)
}

/// `(alt, url)` pairs of every image in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// `(text, url)` pairs of every link in `text`, excluding images
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| caps[1].is_empty())
        .map(|caps| (caps[2].to_string(), caps[3].to_string()))
        .collect()
}

/// Pull images out of plain fragments
pub fn split_images(fragments: Vec<Inline>) -> Result<Vec<Inline>> {
    split_matches(
        fragments,
        extract_markdown_images,
        |alt, url| format!("![{alt}]({url})"),
        |alt, url| Inline::Image { alt, url },
        MarksiteError::UnclosedImage,
    )
}

/// Pull links out of plain fragments
pub fn split_links(fragments: Vec<Inline>) -> Result<Vec<Inline>> {
    split_matches(
        fragments,
        extract_markdown_links,
        |text, url| format!("[{text}]({url})"),
        |text, url| Inline::Link { text, url },
        MarksiteError::UnclosedLink,
    )
}

fn split_matches(
    fragments: Vec<Inline>,
    extract: fn(&str) -> Vec<(String, String)>,
    literal: fn(&str, &str) -> String,
    make: fn(String, String) -> Inline,
    unclosed: fn(String) -> MarksiteError,
) -> Result<Vec<Inline>> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        let Inline::Text(text) = &fragment else {
            result.push(fragment);
            continue;
        };

        let matches = extract(text);
        if matches.is_empty() {
            result.push(fragment);
            continue;
        }

        let mut remaining = text.as_str();
        for (label, url) in matches {
            let needle = literal(&label, &url);
            let Some((before, after)) = remaining.split_once(needle.as_str()) else {
                return Err(unclosed(needle));
            };
            if !before.is_empty() {
                result.push(Inline::text(before));
            }
            result.push(make(label, url));
            remaining = after;
        }
        if !remaining.is_empty() {
            result.push(Inline::text(remaining));
        }
    }

    Ok(result)
}
