//! Schema types for representing the inferred shape of a table.

mod column;
mod profile;
mod types;

pub use column::{ColumnProfile, ColumnStats, NumericStats};
pub use profile::TableProfile;
pub use types::ColumnType;
