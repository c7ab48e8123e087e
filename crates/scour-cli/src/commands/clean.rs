//! Clean command - run the full pipeline and write the cleaned file.

use std::path::PathBuf;

use colored::Colorize;
use scour::{
    CleanOperation, ParserConfig, Pipeline, PipelineConfig, WriterConfig, report,
};

use crate::cli::OutputDelimiter;

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    output: PathBuf,
    max_rows: Option<usize>,
    fills: Vec<(String, String)>,
    mean_fills: Vec<String>,
    rules: Option<PathBuf>,
    keep_duplicates: bool,
    delimiter: OutputDelimiter,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    // Assemble the operation sequence: constant fills, mean fills, rules
    // from file, then deduplication.
    let mut operations: Vec<CleanOperation> = Vec::new();
    for (column, value) in fills {
        operations.push(CleanOperation::FillConstant { column, value });
    }
    for column in mean_fills {
        operations.push(CleanOperation::FillMean { column });
    }
    if let Some(rules_path) = rules {
        operations.extend(CleanOperation::load_rules(&rules_path)?);
    }
    if !keep_duplicates {
        operations.push(CleanOperation::DropDuplicates);
    }

    if verbose {
        println!();
        println!("{}", "Operations:".yellow().bold());
        for op in &operations {
            println!("  {}", op.description());
        }
    }

    let config = PipelineConfig {
        parser: ParserConfig {
            max_rows,
            ..ParserConfig::default()
        },
        operations,
        writer: WriterConfig {
            delimiter: delimiter.as_byte(),
            ..WriterConfig::default()
        },
        ..PipelineConfig::default()
    };

    let report_data = Pipeline::with_config(config).run(&file, &output)?;

    println!();
    println!("{}", "Schema:".yellow().bold());
    report::render_info(&report_data.profile, &mut std::io::stdout())?;

    println!();
    println!(
        "Applied {} operation(s): {} value(s) filled, {} duplicate row(s) removed",
        report_data.changes.operations_applied.to_string().white().bold(),
        report_data.changes.values_filled.to_string().white().bold(),
        report_data.changes.rows_removed.to_string().white().bold()
    );
    if verbose {
        for change in &report_data.changes.changes {
            println!("  {}", change.description);
        }
    }

    println!();
    println!("{}", "Cleaned data:".yellow().bold());
    report::render_table(&report_data.table, &mut std::io::stdout())?;

    println!();
    println!(
        "{} {} ({} rows, {}-delimited)",
        "Saved to".green().bold(),
        report_data.output_path.display().to_string().white(),
        report_data.rows_written,
        delimiter
    );

    Ok(())
}
