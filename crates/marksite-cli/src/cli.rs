use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marksite")]
#[command(author, version)]
#[command(about = "Generate a static site from Markdown files")]
#[command(after_help = "\
EXAMPLES:

    # Build the site described by ./marksite.toml
    marksite build

    # Build with explicit directories
    marksite build --content docs --output public --template page.html

    # Convert one file to HTML on stdout
    marksite convert README.md

CONFIGURATION:

marksite reads marksite.toml from the current directory unless --config is
given. Command-line flags override values from the file.

Example marksite.toml:

    content_dir = \"content\"
    template = \"template.html\"
    output_dir = \"public\"
    static_dir = \"static\"

    [render]
    escape_html = false
    container_attributes = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, env = "MARKSITE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every page and copy static assets
    Build {
        /// Directory holding the Markdown sources
        #[arg(long, env = "MARKSITE_CONTENT")]
        content: Option<PathBuf>,

        /// Page template file
        #[arg(long, env = "MARKSITE_TEMPLATE")]
        template: Option<PathBuf>,

        /// Output directory
        #[arg(long, env = "MARKSITE_OUTPUT")]
        output: Option<PathBuf>,

        /// Static assets directory
        #[arg(long = "static", env = "MARKSITE_STATIC")]
        static_dir: Option<PathBuf>,

        /// HTML-escape text and attribute values
        #[arg(long)]
        escape_html: bool,
    },

    /// Convert a single Markdown file and print the HTML
    Convert {
        /// Markdown file to convert
        file: PathBuf,

        /// HTML-escape text and attribute values
        #[arg(long)]
        escape_html: bool,
    },
}
