//! ODBC binding constants.
//!
//! These values are fixed by the ODBC headers (`sql.h`, `sqlext.h`) and are
//! what drivers expect in `SQLBindCol` / `SQLDescribeCol`.

// SQL data types
pub const SQL_UNKNOWN_TYPE: i16 = 0;
pub const SQL_CHAR: i16 = 1;
pub const SQL_NUMERIC: i16 = 2;
pub const SQL_DECIMAL: i16 = 3;
pub const SQL_INTEGER: i16 = 4;
pub const SQL_SMALLINT: i16 = 5;
pub const SQL_FLOAT: i16 = 6;
pub const SQL_REAL: i16 = 7;
pub const SQL_DOUBLE: i16 = 8;
pub const SQL_DATE: i16 = 9;
pub const SQL_TIMESTAMP: i16 = 11;
pub const SQL_VARCHAR: i16 = 12;
pub const SQL_TYPE_DATE: i16 = 91;
pub const SQL_TYPE_TIMESTAMP: i16 = 93;
pub const SQL_LONGVARCHAR: i16 = -1;
pub const SQL_BIGINT: i16 = -5;
pub const SQL_TINYINT: i16 = -6;
pub const SQL_BIT: i16 = -7;
pub const SQL_WCHAR: i16 = -8;
pub const SQL_WVARCHAR: i16 = -9;
pub const SQL_WLONGVARCHAR: i16 = -10;

// C data types
pub const SQL_SIGNED_OFFSET: i16 = -20;
pub const SQL_C_CHAR: i16 = SQL_CHAR;
pub const SQL_C_DOUBLE: i16 = SQL_DOUBLE;
pub const SQL_C_BIT: i16 = SQL_BIT;
pub const SQL_C_SBIGINT: i16 = SQL_BIGINT + SQL_SIGNED_OFFSET;
pub const SQL_C_TYPE_DATE: i16 = SQL_TYPE_DATE;
pub const SQL_C_TYPE_TIMESTAMP: i16 = SQL_TYPE_TIMESTAMP;

// Length/indicator values
pub const SQL_NULL_DATA: isize = -1;
pub const SQL_NO_TOTAL: isize = -4;

// Sizes of the C structs bound for temporal types
pub const SQL_DATE_STRUCT_SIZE: usize = 6;
pub const SQL_TIMESTAMP_STRUCT_SIZE: usize = 16;

// Cursor defaults
pub const DEFAULT_FETCH_SIZE: usize = 100;
pub const DEFAULT_MAX_STRING_LENGTH: usize = 1024;
pub const MAX_FETCH_SIZE: usize = 1 << 20;
pub const MAX_STRING_LENGTH: usize = 1 << 30;
pub const MAX_COLUMN_BUFFER_BYTES: usize = 1 << 31;
