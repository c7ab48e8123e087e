//! Cleaning operations that can be applied to a table.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScourError};

/// A cleaning operation to apply to a table.
///
/// Operations are applied in sequence and mutate the table in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CleanOperation {
    /// Replace every missing value in a column with a literal value.
    FillConstant { column: String, value: String },

    /// Replace every missing value in a column with the arithmetic mean
    /// of the column's non-missing numeric values.
    FillMean { column: String },

    /// Remove full-row duplicates, keeping the first occurrence.
    DropDuplicates,
}

impl CleanOperation {
    /// Get a human-readable description of the operation.
    pub fn description(&self) -> String {
        match self {
            CleanOperation::FillConstant { column, value } => {
                format!("Fill missing in '{}' with '{}'", column, value)
            }
            CleanOperation::FillMean { column } => {
                format!("Fill missing in '{}' with column mean", column)
            }
            CleanOperation::DropDuplicates => "Drop duplicate rows".to_string(),
        }
    }

    /// Load a list of operations from a JSON rule file.
    pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<CleanOperation>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save a list of operations to a JSON rule file.
    pub fn save_rules(ops: &[CleanOperation], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ScourError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, ops)?;
        Ok(())
    }
}

/// Result of applying a sequence of cleaning operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanResult {
    /// Number of operations applied.
    pub operations_applied: usize,

    /// Total number of cell values filled.
    pub values_filled: usize,

    /// Total number of duplicate rows removed.
    pub rows_removed: usize,

    /// Detailed changes for each operation.
    pub changes: Vec<CleanChange>,
}

/// A single change made during cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanChange {
    /// Description of the change.
    pub description: String,

    /// Column affected (empty for row-level operations).
    pub column: String,

    /// Number of cell values changed.
    pub values_changed: usize,

    /// Number of rows removed.
    pub rows_removed: usize,
}

impl CleanResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a change to the result.
    pub fn add_change(&mut self, change: CleanChange) {
        self.operations_applied += 1;
        self.values_filled += change.values_changed;
        self.rows_removed += change.rows_removed;
        self.changes.push(change);
    }
}
