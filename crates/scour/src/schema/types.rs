//! Core type definitions for schema representation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Date patterns compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap(), // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap(), // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(), // Alt ISO
    ]
});

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text/string values.
    String,
    /// Boolean values (true/false).
    Boolean,
    /// Date values.
    Date,
    /// Unable to determine type (e.g., all values missing).
    #[default]
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Detect the type of a single non-missing value.
    pub fn of_value(value: &str) -> ColumnType {
        let trimmed = value.trim();

        if matches!(
            trimmed.to_lowercase().as_str(),
            "true" | "false" | "yes" | "no"
        ) {
            return ColumnType::Boolean;
        }

        if trimmed.parse::<i64>().is_ok() {
            return ColumnType::Integer;
        }

        if trimmed.parse::<f64>().is_ok() {
            return ColumnType::Float;
        }

        if DATE_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
            return ColumnType::Date;
        }

        ColumnType::String
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::Unknown => write!(f, "unknown"),
        }
    }
}
