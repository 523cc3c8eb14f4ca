//! Build the HTML span tree from classified blocks.

use marksite_core::{Container, Leaf, Node};

use crate::block::{Block, BlockKind};
use crate::inline::{tokenize, Inline};
use crate::Result;

/// Build the root `div` for a document's blocks.
///
/// Fails on the first block whose content does not tokenize, and with
/// `InvalidContainer` when there are no blocks at all.
pub fn build(blocks: &[Block]) -> Result<Node> {
    let children = blocks
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(Container::new("div", children)?.into())
}

/// Convert a single block to its container
pub fn block_to_node(block: &Block) -> Result<Node> {
    let node = match block.kind {
        BlockKind::Heading(level) => {
            Container::new(format!("h{level}"), text_to_children(&block.text())?)?
        }
        BlockKind::Code => {
            let code = Container::new("code", vec![Leaf::raw(block.text()).into()])?;
            Container::new("pre", vec![code.into()])?
        }
        BlockKind::Quote => Container::new("blockquote", text_to_children(&block.text())?)?,
        BlockKind::UnorderedList => Container::new("ul", list_items(block.items())?)?,
        BlockKind::OrderedList => Container::new("ol", list_items(block.items())?)?,
        BlockKind::Paragraph => Container::new("p", text_to_children(&block.text())?)?,
    };
    Ok(node.into())
}

fn list_items(items: &[String]) -> Result<Vec<Node>> {
    items
        .iter()
        .map(|item| -> Result<Node> {
            Ok(Container::new("li", text_to_children(item)?)?.into())
        })
        .collect()
}

/// Tokenize text and map each fragment to a leaf
pub fn text_to_children(text: &str) -> Result<Vec<Node>> {
    tokenize(text)?
        .into_iter()
        .map(|inline| inline_to_leaf(inline).map(Node::from))
        .collect()
}

/// Map an inline fragment to its leaf node
pub fn inline_to_leaf(inline: Inline) -> Result<Leaf> {
    let leaf = match inline {
        Inline::Text(text) => Leaf::raw(text),
        Inline::Bold(text) => Leaf::tagged("b", text),
        Inline::Italic(text) => Leaf::tagged("i", text),
        Inline::Code(text) => Leaf::tagged("code", text),
        Inline::Link { text, url } => Leaf::builder().tag("a").text(text).attr("href", url).build()?,
        Inline::Image { alt, url } => Leaf::builder()
            .tag("img")
            .text("")
            .attr("src", url)
            .attr("alt", alt)
            .build()?,
    };
    Ok(leaf)
}
