//! Error type for table construction, CSV reading, and normalization.

use std::io;
use std::path::PathBuf;

/// Errors produced while building, reading, or normalizing tables.
#[derive(Debug, thiserror::Error)]
pub enum TabularError {
    /// A column required by the normalizer (a list column, an IRI source
    /// column, or a projection column) is absent from the table.
    #[error("required column `{name}` is missing from the source table")]
    MissingColumn {
        /// Name of the absent column.
        name: String,
    },

    /// A derived column would shadow an existing column.
    #[error("column `{name}` already exists in the table")]
    DuplicateColumn {
        /// Name of the conflicting column.
        name: String,
    },

    /// A row's cell count does not match the table's column count.
    #[error("row has {actual} cells but the table has {expected} columns")]
    RowArity {
        /// Number of columns in the table.
        expected: usize,
        /// Number of cells in the offending row.
        actual: usize,
    },

    /// The source table contains no rows and the normalizer was configured
    /// to reject empty input.
    #[error("the source table contains no rows")]
    EmptyDataset,

    /// The resource namespace prefix is empty.
    #[error("the resource prefix must be a non-empty IRI prefix")]
    EmptyResourcePrefix,

    /// The CSV reader reported a malformed record.
    #[error("failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// A file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
