//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tabula_render::style::RangeStyle;
use tabula_render::tabular::FormatSpec;

/// Print JSON, YAML or CSV records as an aligned terminal table.
#[derive(Parser, Debug)]
#[command(name = "tabula", version, about)]
pub struct Args {
    /// Input file. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Input format. Guessed from the file extension, else JSON.
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Target table width. Defaults to the terminal width.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Column that stretches or shrinks to fit the width.
    #[arg(long = "auto", value_name = "COLUMN")]
    pub auto: Option<String>,

    /// Fixed width for a column.
    #[arg(long = "fixed", value_name = "COLUMN=WIDTH", value_parser = parse_fixed)]
    pub fixed: Vec<(String, usize)>,

    /// Format spec for a column: `.2`, `date:%Y-%m-%d` or a `{}` template.
    #[arg(long = "fmt", value_name = "COLUMN=SPEC", value_parser = parse_format)]
    pub formats: Vec<(String, FormatSpec)>,

    /// YAML file with per-column overrides.
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// YAML theme file.
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// Draw a dash row under the header.
    #[arg(long)]
    pub underline: bool,

    /// Put underline dashes under right-aligned header words. Implies
    /// `--underline`.
    #[arg(long)]
    pub aligned_underline: bool,

    /// Never emit escape codes.
    #[arg(long)]
    pub plain: bool,

    /// Attributes for each header word, comma separated.
    #[arg(long, value_delimiter = ',', value_parser = parse_style)]
    pub header_words: Vec<RangeStyle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
    Csv,
}

impl InputFormat {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

impl Args {
    /// The explicit format, else the file extension, else JSON.
    pub fn input_format(&self) -> InputFormat {
        self.format
            .or_else(|| self.file.as_deref().and_then(InputFormat::from_path))
            .unwrap_or(InputFormat::Json)
    }
}

fn split_assignment(s: &str) -> Result<(&str, &str), String> {
    match s.split_once('=') {
        Some((column, value)) if !column.is_empty() => Ok((column, value)),
        _ => Err(format!("expected COLUMN=VALUE, got '{}'", s)),
    }
}

fn parse_fixed(s: &str) -> Result<(String, usize), String> {
    let (column, width) = split_assignment(s)?;
    let width = width
        .parse()
        .map_err(|_| format!("invalid width '{}' for column '{}'", width, column))?;
    Ok((column.to_string(), width))
}

fn parse_format(s: &str) -> Result<(String, FormatSpec), String> {
    let (column, spec) = split_assignment(s)?;
    let spec = FormatSpec::parse(spec).map_err(|e| e.to_string())?;
    Ok((column.to_string(), spec))
}

fn parse_style(s: &str) -> Result<RangeStyle, String> {
    RangeStyle::parse(s).ok_or_else(|| {
        format!(
            "unknown style '{}' (expected underline, bold, italic or blink)",
            s
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_options() {
        let args = Args::try_parse_from([
            "tabula",
            "hosts.csv",
            "--auto",
            "Notes",
            "--fixed",
            "Name=12",
            "--fmt",
            "Load=.2",
            "--header-words",
            "bold,underline",
        ])
        .unwrap();

        assert_eq!(args.input_format(), InputFormat::Csv);
        assert_eq!(args.auto.as_deref(), Some("Notes"));
        assert_eq!(args.fixed, vec![("Name".to_string(), 12)]);
        assert_eq!(
            args.formats,
            vec![("Load".to_string(), FormatSpec::Precision(2))]
        );
        assert_eq!(
            args.header_words,
            vec![RangeStyle::Bold, RangeStyle::Underline]
        );
    }

    #[test]
    fn explicit_format_beats_extension() {
        let args = Args::try_parse_from(["tabula", "data.csv", "--format", "yaml"]).unwrap();
        assert_eq!(args.input_format(), InputFormat::Yaml);
    }

    #[test]
    fn stdin_defaults_to_json() {
        let args = Args::try_parse_from(["tabula"]).unwrap();
        assert_eq!(args.input_format(), InputFormat::Json);
        assert!(!args.plain);
    }

    #[test]
    fn rejects_bad_assignments() {
        assert!(parse_fixed("Name").is_err());
        assert!(parse_fixed("=3").is_err());
        assert!(parse_fixed("Name=wide").is_err());
        assert!(parse_format("Load=nope").is_err());
        assert!(parse_style("sparkle").is_err());
    }
}
