//! Line-level helpers shared by block segmentation and title extraction.

/// Fence that opens and closes a code block
pub const CODE_FENCE: &str = "```";

/// Deepest heading level
pub const MAX_HEADING_LEVEL: usize = 6;

/// Markers that start an unordered list item
pub const BULLET_MARKERS: &[&str] = &["- ", "* "];

/// Check if a line contains only whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Check if a line is a code fence
pub fn is_fence(line: &str) -> bool {
    line.trim_end() == CODE_FENCE
}

/// Split an ATX heading line into its level and text.
///
/// The line must start with 1-6 `#` characters followed by a space.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    Some((level as u8, text.trim_end()))
}

/// Heading level of a line, if it is a heading
pub fn heading_level(line: &str) -> Option<u8> {
    parse_heading(line).map(|(level, _)| level)
}

/// Strip a quote marker (`>` and at most one following space)
pub fn strip_quote(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Strip an unordered list marker and its following space
pub fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
}

/// Split an ordered list line into its number and item text.
///
/// The line must start with decimal digits followed by `. `. A number too
/// large for `usize` saturates to `usize::MAX`, which never matches a list
/// position.
pub fn parse_ordered_marker(line: &str) -> Option<(usize, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let text = line[digits..].strip_prefix(". ")?;
    let number = line[..digits].parse().unwrap_or(usize::MAX);
    Some((number, text))
}
