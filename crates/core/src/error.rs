//! Error types for opldb.
//!
//! Errors only arise at the construction boundary (building tables, parsing
//! column or direction names). Query operations over a built table are
//! infallible.

use alloc::string::String;
use core::fmt;

/// Result type alias for opldb operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for opldb operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A row does not have one cell per column of its table.
    RowWidth {
        table: &'static str,
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Column not found.
    ColumnNotFound {
        table: &'static str,
        column: String,
    },
    /// Invalid operation.
    InvalidOperation {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RowWidth {
                table,
                row,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Row {} of table {} has {} cells, expected {}",
                    row, table, got, expected
                )
            }
            Error::ColumnNotFound { table, column } => {
                write!(f, "Column {} not found in table {}", column, table)
            }
            Error::InvalidOperation { message } => {
                write!(f, "Invalid operation: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates a row width error.
    pub fn row_width(table: &'static str, row: usize, expected: usize, got: usize) -> Self {
        Error::RowWidth {
            table,
            row,
            expected,
            got,
        }
    }

    /// Creates a column not found error.
    pub fn column_not_found(table: &'static str, column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            table,
            column: column.into(),
        }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }
}
