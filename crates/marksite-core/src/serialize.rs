//! Span tree serialization
//!
//! Converts span tree nodes into HTML text.

use std::borrow::Cow;

use crate::node::{Attributes, Container, Leaf, Node};
use crate::options::RenderOptions;

/// Render a node to an HTML string with default options
pub fn render(node: &Node) -> String {
    render_with(node, &RenderOptions::default())
}

/// Render a node to an HTML string
pub fn render_with(node: &Node, options: &RenderOptions) -> String {
    let mut output = String::with_capacity(256);
    render_node(node, options, &mut output);
    output
}

fn render_node(node: &Node, options: &RenderOptions, out: &mut String) {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, options, out),
        Node::Container(container) => render_container(container, options, out),
    }
}

fn render_leaf(leaf: &Leaf, options: &RenderOptions, out: &mut String) {
    let Some(tag) = leaf.tag() else {
        out.push_str(&encode_text(leaf.text(), options));
        return;
    };

    out.push('<');
    out.push_str(tag);
    render_attributes(leaf.attributes(), options, out);
    out.push('>');
    out.push_str(&encode_text(leaf.text(), options));
    close_tag(tag, out);
}

fn render_container(container: &Container, options: &RenderOptions, out: &mut String) {
    out.push('<');
    out.push_str(container.tag());
    if options.container_attributes {
        render_attributes(container.attributes(), options, out);
    }
    out.push('>');

    for child in container.children() {
        render_node(child, options, out);
    }

    close_tag(container.tag(), out);
}

fn render_attributes(attributes: &Attributes, options: &RenderOptions, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        if options.escape_html {
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
        } else {
            out.push_str(value);
        }
        out.push('"');
    }
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn encode_text<'a>(text: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_html {
        html_escape::encode_text(text)
    } else {
        Cow::Borrowed(text)
    }
}
