//! Delimited output writer.

use std::fs::File;
use std::path::Path;

use crate::error::{Result, ScourError};
use crate::input::DataTable;

/// Writer configuration.
///
/// Output is always UTF-8. The header row is always written; a row index
/// never is.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Delimiter for the output file. Defaults to tab.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            quote: b'"',
        }
    }
}

/// Writes a [`DataTable`] to a delimited file.
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    /// Create a new writer with default configuration (tab-delimited).
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Create a writer with custom configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write the table to the given path, overwriting any existing file.
    ///
    /// Returns the number of data rows written (excluding the header).
    pub fn write_file(&self, table: &DataTable, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();

        let file = File::create(path).map_err(|e| ScourError::Write {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .from_writer(file);

        writer
            .write_record(&table.headers)
            .map_err(|e| ScourError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;

        for row in &table.rows {
            writer.write_record(row).map_err(|e| ScourError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        writer.flush().map_err(|e| ScourError::Write {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        Ok(table.row_count())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
