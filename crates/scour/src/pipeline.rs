//! Pipeline orchestration: Load -> Profile -> Clean -> Persist.

use std::path::{Path, PathBuf};

use crate::clean::{CleanEngine, CleanOperation, CleanResult};
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::output::{Writer, WriterConfig};
use crate::schema::TableProfile;

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Parser configuration (delimiter, header, row truncation).
    pub parser: ParserConfig,
    /// Cleaning operations, applied in order.
    pub operations: Vec<CleanOperation>,
    /// Writer configuration (output delimiter).
    pub writer: WriterConfig,
    /// Number of rows captured for the pre-clean preview.
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            operations: Vec::new(),
            writer: WriterConfig::default(),
            preview_rows: 5,
        }
    }
}

/// Report produced by a completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Profile of the table as loaded, before cleaning.
    pub profile: TableProfile,
    /// Preview of the first rows as loaded, before cleaning.
    pub preview: Vec<Vec<String>>,
    /// Changes made by the cleaning operations.
    pub changes: CleanResult,
    /// The cleaned table, as it was written.
    pub table: DataTable,
    /// Number of data rows written to the output file.
    pub rows_written: usize,
    /// Where the output was written.
    pub output_path: PathBuf,
}

/// The tabular cleaning pipeline.
///
/// A fixed, single-threaded sequence with no branching and no retries:
/// the first error aborts the run and nothing is written.
pub struct Pipeline {
    config: PipelineConfig,
    parser: Parser,
    engine: CleanEngine,
    writer: Writer,
}

impl Pipeline {
    /// Create a pipeline with default configuration (no operations).
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let writer = Writer::with_config(config.writer.clone());

        Self {
            config,
            parser,
            engine: CleanEngine::new(),
            writer,
        }
    }

    /// Run the pipeline: load the input file, profile it, apply the
    /// cleaning operations, and write the result to the output path.
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<PipelineReport> {
        let output = output.as_ref();

        // Load
        let (mut table, source) = self.parser.parse_file(input)?;

        // Inspect (no mutation)
        let profile = TableProfile::of(&table);
        let preview: Vec<Vec<String>> = table
            .rows
            .iter()
            .take(self.config.preview_rows)
            .cloned()
            .collect();

        // Impute + deduplicate, in place
        let changes = self.engine.apply(&self.config.operations, &mut table)?;

        // Persist
        let rows_written = self.writer.write_file(&table, output)?;

        Ok(PipelineReport {
            source,
            profile,
            preview,
            changes,
            table,
            rows_written,
            output_path: output.to_path_buf(),
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
