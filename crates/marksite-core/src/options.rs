//! Configuration options for HTML serialization

/// Options for HTML serialization.
///
/// The default renders text and attribute values verbatim and leaves
/// container attributes out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Escape leaf text and attribute values
    pub escape_html: bool,

    /// Emit attributes stored on containers
    pub container_attributes: bool,
}

