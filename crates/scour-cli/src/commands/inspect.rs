//! Inspect command - load a file and print its schema summary and preview.

use std::path::PathBuf;

use colored::Colorize;
use scour::{Parser, ParserConfig, TableProfile, report};

pub fn run(
    file: PathBuf,
    max_rows: Option<usize>,
    head: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Inspecting".cyan().bold(),
        file.display().to_string().white()
    );

    let parser = Parser::with_config(ParserConfig {
        max_rows,
        ..ParserConfig::default()
    });
    let (table, source) = parser.parse_file(&file)?;

    println!(
        "{} rows x {} columns ({}, {} bytes)",
        source.row_count.to_string().white().bold(),
        source.column_count.to_string().white().bold(),
        source.format,
        source.size_bytes
    );
    if verbose {
        println!("hash: {}", source.hash);
    }

    let profile = TableProfile::of(&table);

    println!();
    println!("{}", "Schema:".yellow().bold());
    report::render_info(&profile, &mut std::io::stdout())?;

    println!();
    println!("{}", "Head:".yellow().bold());
    report::render_head(&table, head, &mut std::io::stdout())?;

    Ok(())
}
