//! Error types for the column binding layer.

use std::panic::Location;
use thiserror::Error;

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for binding and fetch operations.
///
/// Column descriptions never produce these; they come from the buffer,
/// the cursor and the driver boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// SQL type number the binding layer has no description for.
    #[error("Unsupported SQL data type: {sql_type}")]
    UnsupportedType { sql_type: i16 },

    /// C type number outside the known vocabulary.
    #[error("Unsupported C data type: {c_type}")]
    UnsupportedCType { c_type: i16 },

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Row index outside the bound row set.
    #[error("Row index {index} out of bounds (capacity: {capacity})")]
    RowIndexOutOfBounds { index: usize, capacity: usize },

    /// Buffer too small.
    #[error("Buffer too small: need {needed} bytes, have {available} filed at {location}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// Row set whose data area would not fit in memory.
    #[error("Row set too large: {capacity} rows of {element_size} bytes")]
    RowSetTooLarge { element_size: usize, capacity: usize },

    /// Column not found.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Null value error.
    #[error("Unexpected NULL value in column {column}")]
    NullValue { column: String },

    /// Type conversion error.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },

    /// Invalid cursor option string.
    #[error("Invalid cursor options: {message}")]
    InvalidOptions { message: String },

    /// Statement produced no result set to bind.
    #[error("Statement did not produce a result set")]
    NoResultSet,

    /// Operation on a closed cursor.
    #[error("Cursor is closed")]
    CursorClosed,

    /// Error reported by the driver layer.
    #[error("[{state}] ({native_code}) {message}")]
    Driver {
        state: String,
        native_code: i32,
        message: String,
    },
}

impl Error {
    /// Create a driver error from an SQLSTATE, native code and message.
    pub fn driver(state: impl Into<String>, native_code: i32, message: impl Into<String>) -> Self {
        Self::Driver {
            state: state.into(),
            native_code,
            message: message.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }

    /// Create an options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Create a buffer error pointing at the caller.
    #[track_caller]
    pub(crate) fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self::BufferTooSmall {
            needed,
            available,
            location: Location::caller(),
        }
    }
}
