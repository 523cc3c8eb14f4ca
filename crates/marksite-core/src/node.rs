//! HTML span tree
//!
//! This module defines the nodes that make up a rendered document fragment.
//! A tree is built once by the converter and then only read by the serializer.

use indexmap::IndexMap;

use crate::{NodeError, Result};

/// Ordered attribute map, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML span tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text with an optional wrapping tag
    Leaf(Leaf),

    /// Tag wrapping one or more child nodes
    Container(Container),
}

/// A node without children.
///
/// A leaf without a tag renders as its raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: Option<String>,
    text: String,
    attributes: Attributes,
}

/// A node wrapping at least one child under a non-empty tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    tag: String,
    children: Vec<Node>,
    attributes: Attributes,
}

impl Leaf {
    /// Create an untagged leaf holding raw text
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf without attributes
    pub fn tagged(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    /// Start building a leaf whose parts are supplied piecemeal
    pub fn builder() -> LeafBuilder {
        LeafBuilder::default()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Incremental constructor for [`Leaf`].
///
/// The text is the only required part; [`LeafBuilder::build`] fails with
/// [`NodeError::EmptyLeafText`] when it was never set. An empty string is
/// valid text.
#[derive(Debug, Clone, Default)]
pub struct LeafBuilder {
    tag: Option<String>,
    text: Option<String>,
    attributes: Attributes,
}

impl LeafBuilder {
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an attribute, replacing any previous value under the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Leaf> {
        let text = self.text.ok_or(NodeError::EmptyLeafText)?;
        Ok(Leaf {
            tag: self.tag,
            text,
            attributes: self.attributes,
        })
    }
}

impl Container {
    /// Create a container, rejecting an empty tag or an empty child list
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self> {
        Self::with_attributes(tag, children, Attributes::new())
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(NodeError::InvalidContainer("container tag must not be empty"));
        }
        if children.is_empty() {
            return Err(NodeError::InvalidContainer(
                "container must have at least one child",
            ));
        }
        Ok(Self {
            tag,
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Node {
    /// Tag of this node, `None` for raw text leaves
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Container(container) => Some(container.tag()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Child nodes; empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Container(container) => container.children(),
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Leaf(leaf) => leaf.text.clone(),
            Node::Container(container) => container
                .children
                .iter()
                .map(Node::text_content)
                .collect(),
        }
    }

    /// Render with the default (unescaped) options
    pub fn to_html(&self) -> String {
        crate::serialize::render(self)
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Container> for Node {
    fn from(container: Container) -> Self {
        Node::Container(container)
    }
}
