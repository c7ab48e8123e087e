//! scour CLI - tabular cleaning pipeline.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect {
            file,
            max_rows,
            head,
        } => commands::inspect::run(file, max_rows, head, cli.verbose),

        Commands::Clean {
            file,
            output,
            max_rows,
            fills,
            mean_fills,
            rules,
            keep_duplicates,
            delimiter,
        } => commands::clean::run(
            file,
            output,
            max_rows,
            fills,
            mean_fills,
            rules,
            keep_duplicates,
            delimiter,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
