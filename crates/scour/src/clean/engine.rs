//! Cleaning engine that applies operations to a table in place.

use indexmap::IndexSet;

use crate::error::{Result, ScourError};
use crate::input::DataTable;

use super::operations::{CleanChange, CleanOperation, CleanResult};

/// Engine for applying cleaning operations to a table.
pub struct CleanEngine;

impl CleanEngine {
    /// Create a new clean engine.
    pub fn new() -> Self {
        Self
    }

    /// Apply a sequence of operations to the table, in order.
    ///
    /// The table is mutated in place. The first failing operation aborts
    /// the run; the table may then hold the effects of earlier operations,
    /// and the caller is expected to discard it.
    pub fn apply(&self, operations: &[CleanOperation], data: &mut DataTable) -> Result<CleanResult> {
        let mut result = CleanResult::new();

        for op in operations {
            let change = match op {
                CleanOperation::FillConstant { column, value } => {
                    self.apply_fill_constant(column, value, data)?
                }
                CleanOperation::FillMean { column } => self.apply_fill_mean(column, data)?,
                CleanOperation::DropDuplicates => self.apply_drop_duplicates(data),
            };
            result.add_change(change);
        }

        Ok(result)
    }

    /// Replace every missing value in the column with a literal value.
    fn apply_fill_constant(
        &self,
        column: &str,
        value: &str,
        data: &mut DataTable,
    ) -> Result<CleanChange> {
        let col_idx = data
            .column_index(column)
            .ok_or_else(|| ScourError::ColumnNotFound(column.to_string()))?;

        let changed = self.fill_missing(data, col_idx, value);

        Ok(CleanChange {
            description: format!("Filled {} missing value(s) in '{}' with '{}'", changed, column, value),
            column: column.to_string(),
            values_changed: changed,
            rows_removed: 0,
        })
    }

    /// Replace every missing value in the column with the column mean.
    ///
    /// The mean is computed from the column's state before any fill is
    /// applied, so the fills do not influence the value being substituted.
    fn apply_fill_mean(&self, column: &str, data: &mut DataTable) -> Result<CleanChange> {
        let col_idx = data
            .column_index(column)
            .ok_or_else(|| ScourError::ColumnNotFound(column.to_string()))?;

        let numbers: Vec<f64> = data
            .column_values(col_idx)
            .filter(|v| !DataTable::is_null_value(v))
            .filter_map(|v| v.trim().parse::<f64>().ok())
            .collect();

        if numbers.is_empty() {
            return Err(ScourError::EmptyColumn(column.to_string()));
        }

        let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
        let fill = format_mean(mean);
        let changed = self.fill_missing(data, col_idx, &fill);

        Ok(CleanChange {
            description: format!(
                "Filled {} missing value(s) in '{}' with mean {}",
                changed, column, fill
            ),
            column: column.to_string(),
            values_changed: changed,
            rows_removed: 0,
        })
    }

    /// Set every missing cell of the column to `value`, returning the count.
    fn fill_missing(&self, data: &mut DataTable, col_idx: usize, value: &str) -> usize {
        let mut changed = 0;
        for row_idx in 0..data.row_count() {
            let current = data.get(row_idx, col_idx).unwrap_or_default();
            if DataTable::is_null_value(current) {
                data.set(row_idx, col_idx, value.to_string());
                changed += 1;
            }
        }
        changed
    }

    /// Remove full-row duplicates, keeping the first occurrence in order.
    fn apply_drop_duplicates(&self, data: &mut DataTable) -> CleanChange {
        let before = data.row_count();

        let mut seen: IndexSet<Vec<String>> = IndexSet::with_capacity(before);
        data.retain_rows(|row| seen.insert(row.clone()));

        let removed = before - data.row_count();

        CleanChange {
            description: format!("Dropped {} duplicate row(s)", removed),
            column: String::new(),
            values_changed: 0,
            rows_removed: removed,
        }
    }
}

impl Default for CleanEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a mean for cell substitution.
///
/// Whole-number means keep one decimal place so a filled cell reads as a
/// float (`20.0`, not `20`); other means use the shortest exact rendering.
fn format_mean(mean: f64) -> String {
    if mean.fract() == 0.0 {
        format!("{:.1}", mean)
    } else {
        format!("{}", mean)
    }
}
