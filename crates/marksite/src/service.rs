//! Converter - the main entry point for Markdown to HTML conversion.

use marksite_core::{render_with, Node, RenderOptions};

use crate::block::segment;
use crate::builder::build;
use crate::utilities::parse_heading;
use crate::{MarksiteError, Result};

/// Converts Markdown documents to HTML with a fixed set of render options
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: RenderOptions,
}

impl Converter {
    /// Create a Converter with the baseline (unescaped) options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom render options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Convert a Markdown document to an HTML string
    pub fn convert(&self, markdown: &str) -> Result<String> {
        let root = self.to_node(markdown)?;
        Ok(render_with(&root, &self.options))
    }

    /// Convert a Markdown document to its span tree
    pub fn to_node(&self, markdown: &str) -> Result<Node> {
        let blocks = segment(markdown)?;
        build(&blocks)
    }

    /// Text of the first level-1 heading
    pub fn title(&self, markdown: &str) -> Result<String> {
        markdown
            .lines()
            .find_map(|line| match parse_heading(line) {
                Some((1, text)) => Some(text.trim().to_string()),
                _ => None,
            })
            .ok_or(MarksiteError::NoTitleFound)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }
}
