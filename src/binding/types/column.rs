//! Column and ColumnInfo types for user-facing API.
//!
//! A `Column` pairs what the driver reported about a result-set column
//! with the description chosen to bind it.

use std::sync::Arc;

use crate::binding::descriptions::{description_for, Description};
use crate::error::Result;
use crate::options::CursorOptions;

use super::metadata::ColumnMetadata;
use super::type_tag::SqlType;

/// A bound column in a result set.
#[derive(Debug, Clone)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Declared SQL type.
    pub sql_type: SqlType,
    /// Description used to bind and decode the column.
    pub description: Arc<dyn Description>,
}

impl Column {
    /// Create a column from driver metadata.
    ///
    /// Returns error if no description supports the column's type.
    pub fn from_metadata(meta: &ColumnMetadata, options: &CursorOptions) -> Result<Self> {
        Ok(Self {
            name: meta.name.clone(),
            nullable: meta.nullable,
            sql_type: SqlType::from_raw(meta.sql_type)?,
            description: description_for(meta, options)?,
        })
    }
}

/// Shared column information for all rows in a result set.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<Column>,
}

impl ColumnInfo {
    /// Create new column info from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Create column info from driver metadata.
    ///
    /// Returns error if any column has an unsupported type.
    pub fn from_metadata(metadata: &[ColumnMetadata], options: &CursorOptions) -> Result<Self> {
        let columns = metadata
            .iter()
            .map(|meta| Column::from_metadata(meta, options))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { columns })
    }

    /// Descriptions in column order, for sizing a row set.
    pub fn descriptions(&self) -> Vec<Arc<dyn Description>> {
        self.columns.iter().map(|c| c.description.clone()).collect()
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}
