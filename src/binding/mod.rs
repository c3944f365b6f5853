//! Column binding: type tags, descriptions, bound buffers and decoders.

pub mod buffer;
pub mod constants;
pub mod decode;
pub mod descriptions;
pub mod types;

pub use buffer::{ColumnBuffer, RowSet};
pub use descriptions::{
    description_for, BooleanDescription, DateDescription, Description, FloatingPointDescription,
    IntegerDescription, StringDescription, TimestampDescription,
};
pub use types::{CType, Column, ColumnInfo, ColumnMetadata, Field, Row, SqlType};
