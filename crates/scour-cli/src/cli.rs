//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// scour: tabular cleaning pipeline for delimited datasets
#[derive(Parser)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a data file and print its schema summary and head preview
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Read at most this many data rows
        #[arg(long)]
        max_rows: Option<usize>,

        /// Number of preview rows to print
        #[arg(long, default_value = "5")]
        head: usize,
    },

    /// Clean a data file and write the result
    Clean {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the cleaned data
        #[arg(short, long)]
        output: PathBuf,

        /// Read at most this many data rows
        #[arg(long)]
        max_rows: Option<usize>,

        /// Fill missing values in a column with a literal (COLUMN=VALUE, repeatable)
        #[arg(long = "fill", value_name = "COLUMN=VALUE", value_parser = parse_fill)]
        fills: Vec<(String, String)>,

        /// Fill missing values in a column with its mean (repeatable)
        #[arg(long = "fill-mean", value_name = "COLUMN")]
        mean_fills: Vec<String>,

        /// Load additional operations from a JSON rule file
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Do not drop duplicate rows
        #[arg(long)]
        keep_duplicates: bool,

        /// Output delimiter
        #[arg(short, long, default_value = "tab")]
        delimiter: OutputDelimiter,
    },
}

/// Parse a `COLUMN=VALUE` fill specification.
fn parse_fill(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((column, value)) if !column.is_empty() => {
            Ok((column.to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid fill '{}': expected COLUMN=VALUE", s)),
    }
}

/// Output delimiter choice.
#[derive(Clone, Copy, Debug, Default)]
pub enum OutputDelimiter {
    #[default]
    Tab,
    Comma,
    Semicolon,
    Pipe,
}

impl OutputDelimiter {
    /// Get the delimiter byte.
    pub fn as_byte(&self) -> u8 {
        match self {
            OutputDelimiter::Tab => b'\t',
            OutputDelimiter::Comma => b',',
            OutputDelimiter::Semicolon => b';',
            OutputDelimiter::Pipe => b'|',
        }
    }
}

impl std::str::FromStr for OutputDelimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "tsv" => Ok(OutputDelimiter::Tab),
            "comma" | "csv" => Ok(OutputDelimiter::Comma),
            "semicolon" => Ok(OutputDelimiter::Semicolon),
            "pipe" => Ok(OutputDelimiter::Pipe),
            _ => Err(format!(
                "Unknown delimiter: {}. Use tab, comma, semicolon, or pipe.",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputDelimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputDelimiter::Tab => write!(f, "tab"),
            OutputDelimiter::Comma => write!(f, "comma"),
            OutputDelimiter::Semicolon => write!(f, "semicolon"),
            OutputDelimiter::Pipe => write!(f, "pipe"),
        }
    }
}
