//! # marksite
//!
//! Convert a constrained Markdown dialect to HTML.
//!
//! ## Design
//!
//! Conversion is a pure function of its input, run in three stages:
//!
//! - **Segmentation**: the document is split into blocks (headings,
//!   paragraphs, code, quotes, lists) by [`segment`]
//! - **Building**: each block becomes a span tree container; text is
//!   tokenized into bold, italic, code, link and image spans by [`tokenize`]
//! - **Rendering**: the tree is serialized by `marksite-core`
//!
//! Inline markup does not nest, and output is not HTML-escaped unless
//! [`RenderOptions::escape_html`] is set.
//!
//! ## Example
//!
//! ```rust
//! use marksite::{convert_document, extract_title};
//!
//! let markdown = "# Hi\n\nThis is **bold** and *italic*.";
//!
//! let html = convert_document(markdown).unwrap();
//! assert_eq!(
//!     html,
//!     "<div><h1>Hi</h1><p>This is <b>bold</b> and <i>italic</i>.</p></div>"
//! );
//! assert_eq!(extract_title(markdown).unwrap(), "Hi");
//! ```

pub mod block;
pub mod builder;
pub mod inline;
mod service;
mod utilities;

pub use block::{segment, Block, BlockKind};
pub use builder::build;
pub use inline::{
    extract_markdown_images, extract_markdown_links, tokenize, Delimiter, Inline, InlineKind,
};
pub use marksite_core::{Node, NodeError, RenderOptions};
pub use service::Converter;
pub use utilities::heading_level;

/// Error type for marksite operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarksiteError {
    #[error("Unterminated delimiter: `{0}` occurs an odd number of times")]
    UnterminatedDelimiter(String),

    #[error("Unclosed image: `{0}` does not split its text")]
    UnclosedImage(String),

    #[error("Unclosed link: `{0}` does not split its text")]
    UnclosedLink(String),

    #[error("Malformed ordered list: expected item {expected}, found {found}")]
    MalformedList { expected: usize, found: usize },

    #[error("No level 1 heading found")]
    NoTitleFound,

    #[error("Unrecognized inline kind: {0}")]
    UnrecognizedInlineKind(String),

    #[error(transparent)]
    Node(#[from] NodeError),
}

pub type Result<T> = std::result::Result<T, MarksiteError>;

/// Convert a Markdown document to an HTML string
pub fn convert_document(markdown: &str) -> Result<String> {
    Converter::new().convert(markdown)
}

/// Convert a Markdown document to its span tree
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    Converter::new().to_node(markdown)
}

/// Text of the first `# ` heading in a document
pub fn extract_title(markdown: &str) -> Result<String> {
    Converter::new().title(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_is_one_paragraph() {
        let text = "Just some words, nothing special.";
        assert_eq!(convert_document(text).unwrap(), format!("<div><p>{text}</p></div>"));
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            convert_document("- one\n- two").unwrap(),
            "<div><ul><li>one</li><li>two</li></ul></div>"
        );
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# Main\n## Sub").unwrap(), "Main");
        assert_eq!(extract_title("## Sub"), Err(MarksiteError::NoTitleFound));
    }

    #[test]
    fn test_malformed_list() {
        assert_eq!(
            convert_document("1. a\n3. b"),
            Err(MarksiteError::MalformedList {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_full_document() {
        let markdown = "\
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. Gandalf
2. Bilbo

```
func main(){
    fmt.Println(\"Aiya, Ambar!\")
}
```";
        let expected = concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>"#,
            "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
            "<blockquote>\"I am in fact a Hobbit in all but size.\"\n\n-- J.R.R. Tolkien</blockquote>",
            "<h2>Blog posts</h2>",
            "<ul>",
            r#"<li><a href="/blog/glorfindel">Why Glorfindel is More Impressive than Legolas</a></li>"#,
            r#"<li><a href="/blog/tom">Why Tom Bombadil Was a Mistake</a></li>"#,
            "</ul>",
            "<ol><li>Gandalf</li><li>Bilbo</li></ol>",
            "<pre><code>func main(){\n    fmt.Println(\"Aiya, Ambar!\")\n}</code></pre>",
            "</div>",
        );
        assert_eq!(convert_document(markdown).unwrap(), expected);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let markdown = "## Notes\n\n* `a`\n* [b](c)";
        let first = convert_document(markdown).unwrap();
        let second = convert_document(markdown).unwrap();
        assert_eq!(first, second);

        let tree = markdown_to_node(markdown).unwrap();
        assert_eq!(tree.to_html(), tree.to_html());
        assert_eq!(tree.to_html(), first);
    }

    #[test]
    fn test_public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Node>();
        assert_send_sync::<Converter>();
        assert_send_sync::<MarksiteError>();
        assert_send_sync::<RenderOptions>();
        assert_send_sync::<Block>();
        assert_send_sync::<Inline>();
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(
            convert_document("\n\n"),
            Err(MarksiteError::Node(NodeError::InvalidContainer(_)))
        ));
    }
}
