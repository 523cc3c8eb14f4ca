//! Page generation: template substitution, directory mirroring and static
//! asset copying.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use marksite::Converter;
use walkdir::WalkDir;

use crate::{Result, SiteError};

/// Placeholder replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the page body
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Outcome of a directory-wide generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Pages written, by destination path
    pub generated: Vec<PathBuf>,
    /// Source pages that could not be generated, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Fill a template with a document's title and HTML
pub fn render_page(markdown: &str, template: &str, converter: &Converter) -> marksite::Result<String> {
    let title = converter.title(markdown)?;
    let content = converter.convert(markdown)?;
    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Generate one page from a Markdown file and a template file
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    converter: &Converter,
) -> Result<()> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    write_page(from, &template, dest, converter)
}

fn write_page(from: &Path, template: &str, dest: &Path, converter: &Converter) -> Result<()> {
    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let page = render_page(&markdown, template, converter).map_err(|source| SiteError::Convert {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

/// Generate a page for every `.md` file under `content_dir`.
///
/// The directory structure is mirrored under `dest_dir` and each page is
/// written with an `.html` extension. A page that fails is recorded in the
/// report and the walk continues; a failure to read the tree itself aborts.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    converter: &Converter,
) -> Result<GenerationReport> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    let mut report = GenerationReport::default();

    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            log::debug!("Skipping non-Markdown file {}", path.display());
            continue;
        }
        let Ok(relative) = path.strip_prefix(content_dir) else {
            continue;
        };

        let dest = dest_dir.join(relative).with_extension("html");
        log::debug!("Generating {} -> {}", path.display(), dest.display());

        match write_page(path, &template, &dest, converter) {
            Ok(()) => report.generated.push(dest),
            Err(err) => {
                log::warn!("Skipping {}: {}", path.display(), err);
                report.failed.push((path.to_path_buf(), err.to_string()));
            }
        }
    }

    log::info!(
        "Generated {} pages, {} failed",
        report.generated.len(),
        report.failed.len()
    );
    Ok(report)
}

/// Fail when `dest` is `protected` or one of its ancestors.
///
/// The output directory is wiped before static files are copied, so it must
/// never hold the sources a build reads from.
pub fn check_output_dir(dest: &Path, protected: &Path) -> Result<()> {
    if resolve(protected)?.starts_with(resolve(dest)?) {
        return Err(SiteError::OverlappingOutput {
            dest: dest.to_path_buf(),
            protected: protected.to_path_buf(),
        });
    }
    Ok(())
}

/// Absolute, symlink-free form of a path that may not exist yet
fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(io_error(path))?;
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = fs::canonicalize(existing).map_err(io_error(existing))?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

/// Replace `dest` with a recursive copy of `src`, returning the number of
/// files copied
pub fn copy_static(src: &Path, dest: &Path) -> Result<u64> {
    check_output_dir(dest, src)?;
    if resolve(dest)?.starts_with(resolve(src)?) {
        return Err(SiteError::OverlappingOutput {
            dest: dest.to_path_buf(),
            protected: src.to_path_buf(),
        });
    }

    if dest.exists() {
        log::debug!("Removing {}", dest.display());
        fs::remove_dir_all(dest).map_err(io_error(dest))?;
    }
    fs::create_dir_all(dest).map_err(io_error(dest))?;

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else if entry.file_type().is_file() {
            log::debug!("Copying {} -> {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(io_error(entry.path()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
