//! Table profiling: type inference and per-column statistics.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::{ColumnProfile, ColumnStats, NumericStats};
use super::types::ColumnType;
use crate::input::DataTable;

/// Profile of an entire table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    /// Profiles for each column, in table order.
    pub columns: Vec<ColumnProfile>,
}

impl TableProfile {
    /// Profile every column of a table.
    pub fn of(table: &DataTable) -> Self {
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(position, name)| profile_column(table, name, position))
            .collect();

        Self { columns }
    }

    /// Get a column profile by name.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Profile a single column: type, missing counts, basic statistics.
fn profile_column(table: &DataTable, name: &str, position: usize) -> ColumnProfile {
    let values: Vec<&str> = table.column_values(position).collect();
    let count = values.len();

    let non_null: Vec<&str> = values
        .iter()
        .copied()
        .filter(|v| !DataTable::is_null_value(v))
        .collect();
    let null_count = count - non_null.len();

    // Unique counts and display samples, first-seen order.
    let mut value_counts: IndexMap<&str, usize> = IndexMap::new();
    for v in &non_null {
        *value_counts.entry(v).or_insert(0) += 1;
    }
    let unique_count = value_counts.len();
    let sample_values: Vec<String> = value_counts.keys().take(5).map(|v| v.to_string()).collect();

    let inferred_type = infer_type(&non_null);

    let numeric = if inferred_type.is_numeric() {
        numeric_stats(&non_null)
    } else {
        None
    };

    ColumnProfile {
        name: name.to_string(),
        position,
        inferred_type,
        nullable: null_count > 0,
        stats: ColumnStats {
            count,
            null_count,
            unique_count,
            sample_values,
            numeric,
        },
    }
}

/// Infer the column type from its non-missing values by majority vote.
///
/// An integer column containing any float values is promoted to Float.
fn infer_type(values: &[&str]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::Unknown;
    }

    let mut type_counts: HashMap<ColumnType, usize> = HashMap::new();
    for &value in values {
        *type_counts.entry(ColumnType::of_value(value)).or_insert(0) += 1;
    }

    let best_type = type_counts
        .iter()
        .max_by_key(|&(_, count)| *count)
        .map(|(t, _)| *t)
        .unwrap_or(ColumnType::String);

    if best_type == ColumnType::Integer && type_counts.contains_key(&ColumnType::Float) {
        return ColumnType::Float;
    }

    best_type
}

/// Compute min/max/mean over the values that parse as numbers.
fn numeric_stats(values: &[&str]) -> Option<NumericStats> {
    let numbers: Vec<f64> = values
        .iter()
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect();

    if numbers.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &n in &numbers {
        if n < min {
            min = n;
        }
        if n > max {
            max = n;
        }
        sum += n;
    }

    Some(NumericStats {
        min,
        max,
        mean: sum / numbers.len() as f64,
    })
}
