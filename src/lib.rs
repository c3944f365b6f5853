//! Typed column binding for ODBC-style result sets.
//!
//! A generic binder fetches rows into untyped, column-wise buffers. A
//! [`Description`] per column tells it how wide each slot is, which C and
//! SQL types to declare to the driver, and how to decode a populated slot
//! into a [`Field`]. [`RowCursor`] puts the pieces together over any
//! driver that implements [`RowSource`].
//!
//! # Example
//!
//! ```
//! use odbc_column_bind::{Description, Field, FloatingPointDescription};
//!
//! let description = FloatingPointDescription::new();
//! assert_eq!(description.element_size(), 8);
//!
//! let buffer = 3.5f64.to_ne_bytes();
//! assert_eq!(description.make_field(&buffer), Field::FloatingPoint(3.5));
//! ```
//!
//! Fetching through a cursor:
//!
//! ```no_run
//! use odbc_column_bind::{Cursor, CursorOptions, Result, RowCursor, RowSource};
//!
//! async fn print_first_column<S: RowSource>(statement: S) -> Result<()> {
//!     let mut cursor = RowCursor::open(statement, &CursorOptions::default())?;
//!     while let Some(row) = cursor.next().await? {
//!         if let Some(value) = row.get(0) {
//!             println!("{}", value);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod binding;
pub mod cursor;
pub mod error;
pub mod options;
pub mod statement;

// Re-export main types
pub use binding::{
    description_for, BooleanDescription, CType, Column, ColumnBuffer, ColumnInfo,
    ColumnMetadata, DateDescription, Description, Field, FloatingPointDescription,
    IntegerDescription, Row, RowSet, SqlType, StringDescription, TimestampDescription,
};
pub use cursor::{Cursor, CursorStreamExt, RowCursor};
pub use error::{Error, Result};
pub use options::CursorOptions;
pub use statement::RowSource;
