//! Column profile definition and statistics.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Statistics computed for a column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Total number of values (including missing).
    pub count: usize,
    /// Number of missing values.
    pub null_count: usize,
    /// Number of unique non-missing values.
    pub unique_count: usize,
    /// Sample of values for display (first-seen order).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sample_values: Vec<String>,
    /// Numeric statistics (for numeric columns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericStats>,
}

impl ColumnStats {
    /// Number of non-missing values.
    pub fn non_null_count(&self) -> usize {
        self.count - self.null_count
    }
}

/// Statistics for numeric columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Profile of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Inferred data type.
    pub inferred_type: ColumnType,
    /// Whether missing values are present.
    pub nullable: bool,
    /// Computed statistics.
    pub stats: ColumnStats,
}

impl ColumnProfile {
    /// Get the missing-value percentage.
    pub fn null_percentage(&self) -> f64 {
        if self.stats.count == 0 {
            0.0
        } else {
            (self.stats.null_count as f64 / self.stats.count as f64) * 100.0
        }
    }
}
