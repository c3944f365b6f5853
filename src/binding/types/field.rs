//! Field values decoded from bound buffers.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// A single column value for one row.
///
/// Produced by a column description from the bytes the driver wrote, or
/// `Null` when the driver's indicator marks the slot as NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// NULL value.
    Null,
    /// Boolean value (BIT).
    Boolean(bool),
    /// Integer value (TINYINT through BIGINT).
    Integer(i64),
    /// Double precision value (REAL, FLOAT, DOUBLE).
    FloatingPoint(f64),
    /// String value (character types, and NUMERIC/DECIMAL to keep precision).
    String(String),
    /// Date value.
    Date(NaiveDate),
    /// Timestamp value (no timezone).
    Timestamp(NaiveDateTime),
}

impl Field {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Try to get the value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Field::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Field::Integer(i) => Some(*i),
            Field::Boolean(b) => Some(*b as i64),
            _ => None,
        }
    }

    /// Try to convert to f64.
    ///
    /// Integers widen; numeric strings (bound NUMERIC/DECIMAL) are parsed.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Field::FloatingPoint(f) => Some(*f),
            Field::Integer(i) => Some(*i as f64),
            Field::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Field::Date(d) => Some(*d),
            Field::Timestamp(ts) => Some(ts.date()),
            _ => None,
        }
    }

    /// Try to get the value as a timestamp.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Field::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => write!(f, "NULL"),
            Field::Boolean(b) => write!(f, "{}", b),
            Field::Integer(i) => write!(f, "{}", i),
            Field::FloatingPoint(v) => write!(f, "{}", v),
            Field::String(s) => write!(f, "{}", s),
            Field::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Field::Timestamp(ts) => {
                if ts.nanosecond() == 0 {
                    write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S"))
                } else {
                    write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f"))
                }
            }
        }
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::FloatingPoint(v)
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Field::Integer(v)
    }
}

impl From<bool> for Field {
    fn from(v: bool) -> Self {
        Field::Boolean(v)
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Field::String(v)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(v: Option<T>) -> Self {
        v.map_or(Field::Null, Into::into)
    }
}
