//! scour: a tabular cleaning pipeline for delimited datasets.
//!
//! scour loads a bounded slice of a CSV/TSV file, profiles its columns,
//! imputes missing values per column (constant or mean fill), drops
//! full-row duplicates, and writes the cleaned table back out with its own
//! delimiter settings.
//!
//! # Core Principles
//!
//! - **Linear**: one fixed sequence — Load, Inspect, Impute, Deduplicate,
//!   Persist — with no branching and no retries
//! - **Fail-fast**: the first error aborts the run; output is written in
//!   full or not at all
//! - **Explicit**: paths, truncation limits, and fill rules are
//!   configuration, never hardcoded
//!
//! # Example
//!
//! ```no_run
//! use scour::{CleanOperation, Pipeline, PipelineConfig, ParserConfig};
//!
//! let config = PipelineConfig {
//!     parser: ParserConfig { max_rows: Some(5), ..ParserConfig::default() },
//!     operations: vec![
//!         CleanOperation::FillConstant {
//!             column: "State".into(),
//!             value: "No State".into(),
//!         },
//!         CleanOperation::FillMean { column: "Apt".into() },
//!         CleanOperation::DropDuplicates,
//!     ],
//!     ..PipelineConfig::default()
//! };
//!
//! let report = Pipeline::with_config(config)
//!     .run("employeeInfo.csv", "updatedEmployeeInfo.tsv")
//!     .unwrap();
//! println!("Wrote {} rows", report.rows_written);
//! ```

pub mod clean;
pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod schema;

mod pipeline;

pub use clean::{CleanChange, CleanEngine, CleanOperation, CleanResult};
pub use error::{Result, ScourError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use output::{Writer, WriterConfig};
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport};
pub use schema::{ColumnProfile, ColumnStats, ColumnType, NumericStats, TableProfile};
