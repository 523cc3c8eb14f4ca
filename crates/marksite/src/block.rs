//! Block segmentation.
//!
//! A document is cut into chunks of consecutive non-blank lines, and each
//! chunk is classified as a heading, code block, quote, list or paragraph.
//! Two refinements apply on top of the blank-line rule: a heading line is
//! always a chunk of its own, and a chunk opening with a code fence runs to
//! the closing fence even across blank lines.

use crate::utilities::{
    is_blank, is_fence, parse_heading, parse_ordered_marker, strip_bullet, strip_quote,
};
use crate::{MarksiteError, Result};

/// Structural category of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A classified block and its raw inline content.
///
/// Quote and list markers are already stripped from `lines`; code lines are
/// verbatim. A heading holds its text as the single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub lines: Vec<String>,
}

impl Block {
    pub fn new(kind: BlockKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    /// Inline content of the block as one string.
    ///
    /// Paragraph lines are joined with a space, everything else with a newline.
    pub fn text(&self) -> String {
        match self.kind {
            BlockKind::Paragraph => self.lines.join(" "),
            BlockKind::Heading(_)
            | BlockKind::Code
            | BlockKind::Quote
            | BlockKind::UnorderedList
            | BlockKind::OrderedList => self.lines.join("\n"),
        }
    }

    /// Item texts of a list block, in document order
    pub fn items(&self) -> &[String] {
        &self.lines
    }
}

/// Split a document into classified blocks
pub fn segment(document: &str) -> Result<Vec<Block>> {
    let blocks = chunk_lines(document)
        .iter()
        .map(|chunk| classify(chunk))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("segmented document into {} blocks", blocks.len());
    Ok(blocks)
}

/// Group lines into chunks of consecutive non-blank lines
fn chunk_lines(document: &str) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = document.lines().collect();
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if is_blank(line) {
            flush(&mut current, &mut chunks);
            i += 1;
            continue;
        }

        if current.is_empty() && is_fence(line) {
            if let Some(offset) = lines[i + 1..].iter().position(|l| is_fence(l)) {
                let end = i + 1 + offset;
                chunks.push(lines[i..=end].to_vec());
                i = end + 1;
                continue;
            }
        }

        if parse_heading(line).is_some() {
            flush(&mut current, &mut chunks);
            chunks.push(vec![line]);
            i += 1;
            continue;
        }

        current.push(line);
        i += 1;
    }
    flush(&mut current, &mut chunks);

    chunks
}

fn flush<'a>(current: &mut Vec<&'a str>, chunks: &mut Vec<Vec<&'a str>>) {
    if !current.is_empty() {
        chunks.push(std::mem::take(current));
    }
}

/// Classify a chunk of non-blank lines; the first matching rule wins
fn classify(lines: &[&str]) -> Result<Block> {
    let first = lines.first().copied().unwrap_or_default();
    let last = lines.last().copied().unwrap_or_default();

    if let Some((level, text)) = parse_heading(first) {
        return Ok(Block::new(BlockKind::Heading(level), vec![text.to_string()]));
    }

    if lines.len() >= 2 && is_fence(first) && is_fence(last) {
        let code = lines[1..lines.len() - 1]
            .iter()
            .map(|line| line.to_string())
            .collect();
        return Ok(Block::new(BlockKind::Code, code));
    }

    if let Some(quoted) = strip_all(lines, strip_quote) {
        return Ok(Block::new(BlockKind::Quote, quoted));
    }

    if let Some(items) = strip_all(lines, strip_bullet) {
        return Ok(Block::new(BlockKind::UnorderedList, items));
    }

    if let Some(numbered) = lines
        .iter()
        .map(|line| parse_ordered_marker(line))
        .collect::<Option<Vec<_>>>()
    {
        let mut items = Vec::with_capacity(numbered.len());
        for (index, (number, text)) in numbered.into_iter().enumerate() {
            let expected = index + 1;
            if number != expected {
                return Err(MarksiteError::MalformedList {
                    expected,
                    found: number,
                });
            }
            items.push(text.to_string());
        }
        return Ok(Block::new(BlockKind::OrderedList, items));
    }

    let paragraph = lines
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    Ok(Block::new(BlockKind::Paragraph, paragraph))
}

/// Apply `strip` to every line, or `None` if any line lacks the marker
fn strip_all(lines: &[&str], strip: fn(&str) -> Option<&str>) -> Option<Vec<String>> {
    lines
        .iter()
        .map(|line| strip(line).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(kind: BlockKind, lines: &[&str]) -> Block {
        Block::new(kind, lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_blank_lines_separate_blocks() {
        let doc = "\n\nFirst paragraph\nstill first\n\n\n\nSecond paragraph\n\n";
        let blocks = segment(doc).unwrap();
        assert_eq!(
            blocks,
            vec![
                block(BlockKind::Paragraph, &["First paragraph", "still first"]),
                block(BlockKind::Paragraph, &["Second paragraph"]),
            ]
        );
        assert_eq!(blocks[0].text(), "First paragraph still first");
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let blocks = segment("one\n   \ntwo").unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(segment("").unwrap(), Vec::new());
        assert_eq!(segment("\n \n\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_heading_levels() {
        let blocks = segment("# One\n\n### Three\n\n###### Six").unwrap();
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading(1),
                BlockKind::Heading(3),
                BlockKind::Heading(6)
            ]
        );
        assert_eq!(blocks[1].text(), "Three");
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        let blocks = segment("####### Too deep").unwrap();
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_heading_is_single_line() {
        let blocks = segment("# Title\nBody text right below").unwrap();
        assert_eq!(
            blocks,
            vec![
                block(BlockKind::Heading(1), &["Title"]),
                block(BlockKind::Paragraph, &["Body text right below"]),
            ]
        );
    }

    #[test]
    fn test_code_block_verbatim() {
        let blocks = segment("```\nfn main() {\n    *x* = **y**;\n}\n```").unwrap();
        assert_eq!(
            blocks,
            vec![block(
                BlockKind::Code,
                &["fn main() {", "    *x* = **y**;", "}"]
            )]
        );
        assert_eq!(blocks[0].text(), "fn main() {\n    *x* = **y**;\n}");
    }

    #[test]
    fn test_code_block_spans_blank_lines() {
        let blocks = segment("```\nfirst\n\nsecond\n```\n\nafter").unwrap();
        assert_eq!(
            blocks,
            vec![
                block(BlockKind::Code, &["first", "", "second"]),
                block(BlockKind::Paragraph, &["after"]),
            ]
        );
    }

    #[test]
    fn test_unclosed_fence_is_paragraph() {
        let blocks = segment("```\nno end").unwrap();
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_quote() {
        let blocks = segment("> first line\n>second line\n>  indented").unwrap();
        assert_eq!(
            blocks,
            vec![block(
                BlockKind::Quote,
                &["first line", "second line", " indented"]
            )]
        );
        assert_eq!(blocks[0].text(), "first line\nsecond line\n indented");
    }

    #[test]
    fn test_mixed_quote_falls_back_to_paragraph() {
        let blocks = segment("> quoted\nnot quoted").unwrap();
        assert_eq!(
            blocks,
            vec![block(BlockKind::Paragraph, &["> quoted", "not quoted"])]
        );
    }

    #[test]
    fn test_unordered_list() {
        let blocks = segment("- one\n* two\n- three").unwrap();
        assert_eq!(
            blocks,
            vec![block(BlockKind::UnorderedList, &["one", "two", "three"])]
        );
        assert_eq!(blocks[0].items(), ["one", "two", "three"]);
    }

    #[test]
    fn test_ordered_list() {
        let blocks = segment("1. first\n2. second\n3. third").unwrap();
        assert_eq!(
            blocks,
            vec![block(BlockKind::OrderedList, &["first", "second", "third"])]
        );
    }

    #[test]
    fn test_ordered_list_gap() {
        assert_eq!(
            segment("1. a\n3. b"),
            Err(MarksiteError::MalformedList {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_ordered_list_must_start_at_one() {
        assert_eq!(
            segment("2. a\n3. b"),
            Err(MarksiteError::MalformedList {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_ordered_list_reset() {
        assert!(matches!(
            segment("1. a\n2. b\n1. c"),
            Err(MarksiteError::MalformedList { .. })
        ));
    }

    #[test]
    fn test_ordered_list_number_overflow() {
        assert_eq!(
            segment("1. a\n2. b\n99999999999999999999999. c"),
            Err(MarksiteError::MalformedList {
                expected: 3,
                found: usize::MAX
            })
        );
    }

    #[test]
    fn test_paragraph_keeps_leading_indent() {
        let blocks = segment("first line  \n  indented second").unwrap();
        assert_eq!(
            blocks,
            vec![block(
                BlockKind::Paragraph,
                &["first line", "  indented second"]
            )]
        );
        assert_eq!(blocks[0].text(), "first line   indented second");
    }

    #[test]
    fn test_list_with_plain_line_is_paragraph() {
        let blocks = segment("1. a\nplain").unwrap();
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].text(), "1. a plain");
    }

    #[test]
    fn test_crlf_line_endings() {
        let blocks = segment("# Title\r\n\r\n- a\r\n- b\r\n").unwrap();
        assert_eq!(
            blocks,
            vec![
                block(BlockKind::Heading(1), &["Title"]),
                block(BlockKind::UnorderedList, &["a", "b"]),
            ]
        );
    }
}
