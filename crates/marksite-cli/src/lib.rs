//! # marksite-cli
//!
//! Static site generation on top of the `marksite` converter.
//!
//! Every `.md` file under a content directory is converted to HTML, inserted
//! into a template at the `{{ Title }}` and `{{ Content }}` placeholders, and
//! written to the mirrored path under an output directory. Static assets are
//! copied over verbatim.
//!
//! ## Example
//!
//! ```rust
//! use marksite::Converter;
//! use marksite_cli::render_page;
//!
//! let template = "<title>{{ Title }}</title>{{ Content }}";
//! let page = render_page("# Hello\n\nWorld", template, &Converter::new()).unwrap();
//! assert_eq!(page, "<title>Hello</title><div><h1>Hello</h1><p>World</p></div>");
//! ```

pub mod config;
mod generate;

use std::path::PathBuf;

pub use config::{RenderConfig, SiteConfig};
pub use generate::{
    check_output_dir, copy_static, generate_page, generate_pages_recursive, render_page,
    GenerationReport, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER,
};

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to convert {}: {source}", .path.display())]
    Convert {
        path: PathBuf,
        source: marksite::MarksiteError,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Output directory {} overlaps {}", .dest.display(), .protected.display())]
    OverlappingOutput { dest: PathBuf, protected: PathBuf },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
