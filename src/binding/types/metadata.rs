//! Column metadata as reported by the driver.
//!
//! This struct mirrors what `SQLDescribeCol` returns. For the bound,
//! user-facing view, use `Column`.

/// Driver-reported column metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Column name. May be empty if the driver does not know it.
    pub name: String,
    /// SQL data type number (raw `SQLSMALLINT`).
    pub sql_type: i16,
    /// Column size: characters for text, precision for numerics.
    pub column_size: usize,
    /// Decimal digits (scale).
    pub decimal_digits: i16,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

impl ColumnMetadata {
    /// Create new column metadata with minimal info.
    pub fn new(name: String, sql_type: i16) -> Self {
        Self {
            name,
            sql_type,
            column_size: 0,
            decimal_digits: 0,
            nullable: true,
        }
    }

    /// Set the column size.
    pub fn with_column_size(mut self, column_size: usize) -> Self {
        self.column_size = column_size;
        self
    }

    /// Set nullability.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}
