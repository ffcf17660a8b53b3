//! `tabula`: print records as an aligned terminal table.
//!
//! ```text
//! tabula servers.json --auto Description --fmt CPU=.1 --underline
//! kubectl get pods -o json | jq .items | tabula --width 100
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod args;
mod input;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tabula_render::tabular::{HeaderOptions, Overrides, Table, UnderlineLayout};
use tabula_render::{target_width_or_default, OutputMode, Theme};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let text = read_input(args)?;
    let rows = input::parse_records(&text, args.input_format())?;
    let overrides = build_overrides(args)?;
    let theme = build_theme(args)?;
    let mode = if args.plain {
        OutputMode::Text
    } else {
        OutputMode::Auto
    };
    let width = args.width.unwrap_or_else(target_width_or_default);

    debug!(rows = rows.len(), width, ?mode, "rendering table");

    let header = header_options(args, &theme);
    let table = Table::from_rows(&rows, &overrides, width)
        .theme(theme)
        .header_options(header)
        .mode(mode);
    let stdout = std::io::stdout();
    table
        .write_to(&mut stdout.lock(), &rows)
        .context("writing table")
}

fn read_input(args: &Args) -> Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Overrides from `--overrides`, then the per-column flags on top.
fn build_overrides(args: &Args) -> Result<Overrides> {
    let mut overrides = match &args.overrides {
        Some(path) => Overrides::from_file(path)
            .with_context(|| format!("loading overrides from {}", path.display()))?,
        None => Overrides::new(),
    };

    if let Some(column) = &args.auto {
        overrides.entry(column.as_str()).auto_width = true;
    }
    for (column, width) in &args.fixed {
        overrides.entry(column.as_str()).fixed_width = Some(*width);
    }
    for (column, spec) in &args.formats {
        overrides.entry(column.as_str()).format = Some(spec.clone());
    }
    Ok(overrides)
}

/// Theme from `--theme`, or the default, adjusted by the header flags.
fn build_theme(args: &Args) -> Result<Theme> {
    let mut theme = match &args.theme {
        Some(path) => Theme::from_file(path)
            .with_context(|| format!("loading theme from {}", path.display()))?,
        None => Theme::new(),
    };

    if args.underline {
        theme = theme.underline_header(true);
    }
    if !args.header_words.is_empty() {
        theme = theme.header_words(args.header_words.iter().copied());
    }
    Ok(theme)
}

fn header_options(args: &Args, theme: &Theme) -> HeaderOptions {
    let mut options = HeaderOptions::from_theme(theme);
    if args.aligned_underline {
        options.underline = true;
        options.underline_layout = UnderlineLayout::Aligned;
    }
    options
}
