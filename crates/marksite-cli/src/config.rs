//! Site configuration loaded from `marksite.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use marksite::RenderOptions;
use serde::Deserialize;

use crate::{Result, SiteError};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "marksite.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the Markdown sources
    pub content_dir: PathBuf,
    /// Page template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,
    /// Directory the site is written to
    pub output_dir: PathBuf,
    /// Directory of assets copied verbatim, if any
    pub static_dir: Option<PathBuf>,
    pub render: RenderConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            static_dir: Some(PathBuf::from("static")),
            render: RenderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    pub escape_html: bool,
    pub container_attributes: bool,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            escape_html: config.escape_html,
            container_attributes: config.container_attributes,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, else `marksite.toml` in `dir` if present, else defaults
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            log::debug!("Using config from: {}", path.display());
            return Self::from_file(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            log::debug!("Using config from: {}", candidate.display());
            Self::from_file(&candidate)
        } else {
            log::debug!("Using default config");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            output_dir = "docs"

            [render]
            escape_html = true
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert!(config.render.escape_html);
        assert!(!config.render.container_attributes);
    }

    #[test]
    fn test_render_config_into_options() {
        let options: RenderOptions = RenderConfig {
            escape_html: true,
            container_attributes: false,
        }
        .into();
        assert!(options.escape_html);
        assert!(!options.container_attributes);
    }

    #[test]
    fn test_load_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "template = \"page.html\"\n").unwrap();
        let config = SiteConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.template, PathBuf::from("page.html"));
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "content_dir = [").unwrap();
        assert!(matches!(
            SiteConfig::load(Some(&path), dir.path()),
            Err(SiteError::Config { .. })
        ));
    }
}
