//! Column descriptions.
//!
//! A description is the policy a binder needs to treat an untyped buffer
//! column as a typed one: how wide each slot is, which C type the driver
//! should write, which SQL type the column is declared as, and how to turn
//! the bytes of one slot into a [`Field`].
//!
//! Descriptions own nothing and never change after construction, so one
//! instance can be shared behind an `Arc` by any number of statements.
//!
//! | Description | Slot bytes | C type | SQL type |
//! |-------------|-----------:|--------|----------|
//! | [`BooleanDescription`] | 1 | `SQL_C_BIT` | `SQL_BIT` |
//! | [`IntegerDescription`] | 8 | `SQL_C_SBIGINT` | `SQL_BIGINT` |
//! | [`FloatingPointDescription`] | 8 | `SQL_C_DOUBLE` | `SQL_DOUBLE` |
//! | [`StringDescription`] | max length + 1 | `SQL_C_CHAR` | `SQL_VARCHAR` |
//! | [`DateDescription`] | 6 | `SQL_C_TYPE_DATE` | `SQL_TYPE_DATE` |
//! | [`TimestampDescription`] | 16 | `SQL_C_TYPE_TIMESTAMP` | `SQL_TYPE_TIMESTAMP` |

mod boolean;
mod date;
mod floating_point;
mod integer;
mod string;
mod timestamp;

use std::fmt;
use std::sync::Arc;

pub use boolean::BooleanDescription;
pub use date::DateDescription;
pub use floating_point::FloatingPointDescription;
pub use integer::IntegerDescription;
pub use string::StringDescription;
pub use timestamp::TimestampDescription;

use crate::binding::types::{CType, ColumnMetadata, Field, SqlType};
use crate::error::{Error, Result};
use crate::options::CursorOptions;

/// How to bind and decode one result-set column.
pub trait Description: fmt::Debug + Send + Sync {
    /// Byte width of one buffer slot. Constant for the instance.
    fn element_size(&self) -> usize;

    /// In-memory representation the driver is told to write.
    fn c_type_tag(&self) -> CType;

    /// SQL type the column is declared as.
    fn sql_type_tag(&self) -> SqlType;

    /// Interpret a populated slot.
    ///
    /// `slot` must hold at least [`element_size`](Self::element_size) bytes
    /// the driver has written. The slot is only read. NULL indicators and
    /// truncation are the caller's concern.
    fn make_field(&self, slot: &[u8]) -> Field;
}

/// Pick the description for a column the driver described.
///
/// NUMERIC and DECIMAL columns are bound as strings so values keep their
/// full precision. Character columns are capped at
/// `options.max_string_length` bytes; a column size of 0 means the driver
/// does not know and the cap is used as-is.
///
/// Returns `Err(Error::UnsupportedType)` for types with no description and
/// `Err(Error::InvalidOptions)` when the string cap leaves no room for the
/// terminator.
pub fn description_for(
    meta: &ColumnMetadata,
    options: &CursorOptions,
) -> Result<Arc<dyn Description>> {
    let sql_type = SqlType::from_raw(meta.sql_type)?;
    let description: Arc<dyn Description> = match sql_type {
        SqlType::Bit => Arc::new(BooleanDescription::new()),
        SqlType::TinyInt | SqlType::SmallInt | SqlType::Integer | SqlType::BigInt => {
            Arc::new(IntegerDescription::new())
        }
        SqlType::Real | SqlType::Float | SqlType::Double => {
            Arc::new(FloatingPointDescription::new())
        }
        SqlType::Date | SqlType::TypeDate => Arc::new(DateDescription::new()),
        SqlType::Timestamp | SqlType::TypeTimestamp => Arc::new(TimestampDescription::new()),
        SqlType::Numeric | SqlType::Decimal => {
            // sign and decimal point on top of the digits
            let digits = meta.column_size.saturating_add(2);
            Arc::new(StringDescription::new(string_length(digits, options)?))
        }
        SqlType::Char | SqlType::VarChar | SqlType::LongVarChar => {
            Arc::new(StringDescription::new(string_length(meta.column_size, options)?))
        }
        SqlType::WChar | SqlType::WVarChar | SqlType::WLongVarChar => {
            // wide columns report characters; UTF-8 needs up to 4 bytes each
            let bytes = meta.column_size.saturating_mul(4);
            Arc::new(StringDescription::new(string_length(bytes, options)?))
        }
        SqlType::Unknown => {
            return Err(Error::UnsupportedType {
                sql_type: meta.sql_type,
            })
        }
    };
    Ok(description)
}

fn string_length(column_size: usize, options: &CursorOptions) -> Result<usize> {
    let length = if column_size == 0 {
        options.max_string_length
    } else {
        column_size.min(options.max_string_length)
    };
    // slot holds the terminator too
    length.checked_add(1).ok_or_else(|| {
        Error::invalid_options(format!(
            "max_string_length {} leaves no room for the terminator",
            options.max_string_length
        ))
    })?;
    Ok(length)
}
