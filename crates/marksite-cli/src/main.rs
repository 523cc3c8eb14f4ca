use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;

use marksite::{Converter, RenderOptions};
use marksite_cli::{check_output_dir, copy_static, generate_pages_recursive, SiteConfig};

mod cli;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut config = SiteConfig::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Build {
            content,
            template,
            output,
            static_dir,
            escape_html,
        } => {
            if let Some(content) = content {
                config.content_dir = content;
            }
            if let Some(template) = template {
                config.template = template;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if static_dir.is_some() {
                config.static_dir = static_dir;
            }
            config.render.escape_html |= escape_html;
            build(&config)
        }
        Commands::Convert { file, escape_html } => {
            let mut options = RenderOptions::from(config.render);
            options.escape_html |= escape_html;
            convert(&file, options)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build(config: &SiteConfig) -> anyhow::Result<ExitCode> {
    let converter = Converter::with_options(config.render.into());
    check_output_dir(&config.output_dir, &config.content_dir)?;
    check_output_dir(&config.output_dir, &config.template)?;

    match config.static_dir.as_deref() {
        Some(dir) if dir.is_dir() => {
            let copied = copy_static(dir, &config.output_dir)
                .with_context(|| format!("Failed to copy static files from {}", dir.display()))?;
            log::info!("Copied {} static files", copied);
        }
        Some(dir) => log::debug!("No static directory at {}", dir.display()),
        None => {}
    }

    let report = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &converter,
    )?;

    for (path, reason) in &report.failed {
        eprintln!("Error: {}: {}", path.display(), reason);
    }
    println!(
        "Generated {} pages into {}",
        report.generated.len(),
        config.output_dir.display()
    );

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn convert(file: &Path, options: RenderOptions) -> anyhow::Result<()> {
    let markdown =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    if markdown.trim().is_empty() {
        bail!("{} is empty", file.display());
    }
    let html = Converter::with_options(options)
        .convert(&markdown)
        .with_context(|| format!("Failed to convert {}", file.display()))?;
    println!("{html}");
    Ok(())
}
