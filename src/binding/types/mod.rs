//! Types shared by the binding layer and query results.

mod column;
mod field;
mod metadata;
mod row;
mod type_tag;

pub use column::{Column, ColumnInfo};
pub use field::Field;
pub use metadata::ColumnMetadata;
pub use row::Row;
pub use type_tag::{CType, SqlType};
