//! Error types for rowdup-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rowdup-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid column letters
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Operation would grow the sheet past the row limit
    #[error("Operation would produce {0} rows (max: {1})")]
    TooManyRows(u64, u32),

    /// Row is wider than the column limit
    #[error("Row has {0} columns (max: {1})")]
    TooManyColumns(u64, u16),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
