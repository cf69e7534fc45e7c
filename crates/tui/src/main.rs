mod app;
mod cli;
mod renderer;

use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use showcase_core::{Document, HtmlOptions, PhaseIndex, Showcase, render_document};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(&cli.log_level, command.log_file().as_deref())?;

    match command {
        Commands::Html {
            out,
            theme,
            no_styles,
            phase,
        } => {
            let showcase = showcase_at(phase)?;
            let options = HtmlOptions {
                theme: theme.into(),
                include_styles: !no_styles,
            };
            let html = render_document(&Document::for_showcase(&showcase), &options);
            match out {
                Some(path) => {
                    std::fs::write(&path, &html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), bytes = html.len(), "wrote page");
                }
                None => write_stdout(html.as_bytes())?,
            }
        }
        Commands::Commands { phase, pretty } => {
            let commands = showcase_at(phase)?.render();
            let json = if pretty {
                serde_json::to_string_pretty(&commands)?
            } else {
                serde_json::to_string(&commands)?
            };
            write_stdout(json.as_bytes())?;
            write_stdout(b"\n")?;
        }
        Commands::Tui => {
            let mut showcase = Showcase::new();
            renderer::render_tui(&mut showcase)?;
        }
    }
    Ok(())
}

fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn showcase_at(phase: usize) -> Result<Showcase> {
    let mut showcase = Showcase::new();
    showcase.select_phase(PhaseIndex::new(phase)?);
    Ok(showcase)
}

fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(bytes).context("failed to write to stdout")?;
    out.flush()?;
    Ok(())
}
