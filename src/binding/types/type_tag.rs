//! C and SQL type tags.
//!
//! A C type tag names the in-memory representation a driver writes into a
//! bound buffer. A SQL type tag names the type the database declares for a
//! column. Both are a fixed ODBC vocabulary of `SQLSMALLINT` numbers.

use std::fmt;

use crate::binding::constants::*;
use crate::error::{Error, Result};

/// In-memory representation of a bound value (`SQL_C_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum CType {
    /// NUL-terminated narrow character string.
    Char = SQL_C_CHAR,
    /// Single byte, 0 or 1.
    Bit = SQL_C_BIT,
    /// Signed 64-bit integer.
    SBigInt = SQL_C_SBIGINT,
    /// IEEE-754 double.
    Double = SQL_C_DOUBLE,
    /// `SQL_DATE_STRUCT`.
    TypeDate = SQL_C_TYPE_DATE,
    /// `SQL_TIMESTAMP_STRUCT`.
    TypeTimestamp = SQL_C_TYPE_TIMESTAMP,
}

impl CType {
    /// Create from a raw `SQL_C_*` number.
    pub fn from_raw(c_type: i16) -> Result<Self> {
        match c_type {
            SQL_C_CHAR => Ok(CType::Char),
            SQL_C_BIT => Ok(CType::Bit),
            SQL_C_SBIGINT => Ok(CType::SBigInt),
            SQL_C_DOUBLE => Ok(CType::Double),
            SQL_C_TYPE_DATE => Ok(CType::TypeDate),
            SQL_C_TYPE_TIMESTAMP => Ok(CType::TypeTimestamp),
            _ => Err(Error::UnsupportedCType { c_type }),
        }
    }

    /// Raw number passed to `SQLBindCol`.
    pub fn as_raw(self) -> i16 {
        self as i16
    }

    /// Byte width of one value, or `None` for variable-width types.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            CType::Char => None,
            CType::Bit => Some(1),
            CType::SBigInt | CType::Double => Some(8),
            CType::TypeDate => Some(SQL_DATE_STRUCT_SIZE),
            CType::TypeTimestamp => Some(SQL_TIMESTAMP_STRUCT_SIZE),
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CType::Char => "SQL_C_CHAR",
            CType::Bit => "SQL_C_BIT",
            CType::SBigInt => "SQL_C_SBIGINT",
            CType::Double => "SQL_C_DOUBLE",
            CType::TypeDate => "SQL_C_TYPE_DATE",
            CType::TypeTimestamp => "SQL_C_TYPE_TIMESTAMP",
        };
        f.write_str(name)
    }
}

/// Declared SQL type of a column (`SQL_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum SqlType {
    Unknown = SQL_UNKNOWN_TYPE,
    Char = SQL_CHAR,
    Numeric = SQL_NUMERIC,
    Decimal = SQL_DECIMAL,
    Integer = SQL_INTEGER,
    SmallInt = SQL_SMALLINT,
    Float = SQL_FLOAT,
    Real = SQL_REAL,
    Double = SQL_DOUBLE,
    /// ODBC 2.x date.
    Date = SQL_DATE,
    /// ODBC 2.x timestamp.
    Timestamp = SQL_TIMESTAMP,
    VarChar = SQL_VARCHAR,
    TypeDate = SQL_TYPE_DATE,
    TypeTimestamp = SQL_TYPE_TIMESTAMP,
    LongVarChar = SQL_LONGVARCHAR,
    BigInt = SQL_BIGINT,
    TinyInt = SQL_TINYINT,
    Bit = SQL_BIT,
    WChar = SQL_WCHAR,
    WVarChar = SQL_WVARCHAR,
    WLongVarChar = SQL_WLONGVARCHAR,
}

impl SqlType {
    /// Create from a raw `SQL_*` number as reported by `SQLDescribeCol`.
    ///
    /// Returns `Err(Error::UnsupportedType)` for numbers outside the vocabulary.
    pub fn from_raw(sql_type: i16) -> Result<Self> {
        let t = match sql_type {
            SQL_UNKNOWN_TYPE => SqlType::Unknown,
            SQL_CHAR => SqlType::Char,
            SQL_NUMERIC => SqlType::Numeric,
            SQL_DECIMAL => SqlType::Decimal,
            SQL_INTEGER => SqlType::Integer,
            SQL_SMALLINT => SqlType::SmallInt,
            SQL_FLOAT => SqlType::Float,
            SQL_REAL => SqlType::Real,
            SQL_DOUBLE => SqlType::Double,
            SQL_DATE => SqlType::Date,
            SQL_TIMESTAMP => SqlType::Timestamp,
            SQL_VARCHAR => SqlType::VarChar,
            SQL_TYPE_DATE => SqlType::TypeDate,
            SQL_TYPE_TIMESTAMP => SqlType::TypeTimestamp,
            SQL_LONGVARCHAR => SqlType::LongVarChar,
            SQL_BIGINT => SqlType::BigInt,
            SQL_TINYINT => SqlType::TinyInt,
            SQL_BIT => SqlType::Bit,
            SQL_WCHAR => SqlType::WChar,
            SQL_WVARCHAR => SqlType::WVarChar,
            SQL_WLONGVARCHAR => SqlType::WLongVarChar,
            _ => return Err(Error::UnsupportedType { sql_type }),
        };
        Ok(t)
    }

    /// Raw `SQLSMALLINT` number.
    pub fn as_raw(self) -> i16 {
        self as i16
    }

    /// Check if this is a character type (narrow or wide).
    pub fn is_character(self) -> bool {
        matches!(
            self,
            SqlType::Char
                | SqlType::VarChar
                | SqlType::LongVarChar
                | SqlType::WChar
                | SqlType::WVarChar
                | SqlType::WLongVarChar
        )
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::Unknown => "SQL_UNKNOWN_TYPE",
            SqlType::Char => "SQL_CHAR",
            SqlType::Numeric => "SQL_NUMERIC",
            SqlType::Decimal => "SQL_DECIMAL",
            SqlType::Integer => "SQL_INTEGER",
            SqlType::SmallInt => "SQL_SMALLINT",
            SqlType::Float => "SQL_FLOAT",
            SqlType::Real => "SQL_REAL",
            SqlType::Double => "SQL_DOUBLE",
            SqlType::Date => "SQL_DATE",
            SqlType::Timestamp => "SQL_TIMESTAMP",
            SqlType::VarChar => "SQL_VARCHAR",
            SqlType::TypeDate => "SQL_TYPE_DATE",
            SqlType::TypeTimestamp => "SQL_TYPE_TIMESTAMP",
            SqlType::LongVarChar => "SQL_LONGVARCHAR",
            SqlType::BigInt => "SQL_BIGINT",
            SqlType::TinyInt => "SQL_TINYINT",
            SqlType::Bit => "SQL_BIT",
            SqlType::WChar => "SQL_WCHAR",
            SqlType::WVarChar => "SQL_WVARCHAR",
            SqlType::WLongVarChar => "SQL_WLONGVARCHAR",
        };
        f.write_str(name)
    }
}
