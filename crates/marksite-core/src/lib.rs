//! marksite-core - HTML span tree and serialization
//!
//! This crate provides the tree that the `marksite` converter builds from
//! Markdown, and the serializer that turns it into HTML text.
//!
//! # Architecture
//!
//! ```text
//!                        ┌───────────┐
//! Markdown ──marksite──▶ │ Span Tree │ ──render──▶ HTML String
//!                        └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use marksite_core::{render, Container, Leaf, Node};
//!
//! let paragraph = Container::new(
//!     "p",
//!     vec![
//!         Node::from(Leaf::raw("This is ")),
//!         Node::from(Leaf::tagged("b", "bold")),
//!         Node::from(Leaf::raw(" text.")),
//!     ],
//! )
//! .unwrap();
//!
//! let html = render(&Node::from(paragraph));
//! assert_eq!(html, "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod options;
mod serialize;

pub use node::{Attributes, Container, Leaf, LeafBuilder, Node};
pub use options::RenderOptions;
pub use serialize::{render, render_with};

/// Error type for span tree construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Leaf node requires text")]
    EmptyLeafText,

    #[error("Invalid container: {0}")]
    InvalidContainer(&'static str),
}

pub type Result<T> = std::result::Result<T, NodeError>;
