use alloc::string::String;

use seq_reflect::AttributeError;
use thiserror::Error;

/// Errors raised by the SQLite backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RowError {
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// A statement failed, or the database could not be opened.
    #[error("sqlite operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// An embedded nested document could not be decoded.
    #[error("malformed embedded document in `{name}`: {reason}")]
    Embedded { name: String, reason: String },

    #[error("index {index} is out of bounds for {len} rows")]
    Index { index: usize, len: usize },

    /// Flushing a record without any cell.
    #[error("cannot flush a record without columns")]
    EmptyRow,

    /// A table or column name that is not a plain SQL identifier.
    #[error("`{name}` is not a valid SQL identifier")]
    Identifier { name: String },
}
