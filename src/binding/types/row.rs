//! Row type for query results.

use std::sync::Arc;

use super::column::{Column, ColumnInfo};
use super::field::Field;
use crate::error::{Error, Result};

/// A row of query results.
#[derive(Debug, Clone)]
pub struct Row {
    /// Column values.
    values: Vec<Field>,
    /// Shared column information (reference counted).
    column_info: Arc<ColumnInfo>,
}

impl Row {
    /// Create a new row with values and shared column info.
    pub fn new(values: Vec<Field>, column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values,
            column_info,
        }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.values.get(index)
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&Field> {
        self.column_info
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a non-NULL value by column name.
    ///
    /// Unlike `get_by_name`, this reports which lookup failed.
    pub fn try_get(&self, name: &str) -> Result<&Field> {
        let field = self.get_by_name(name).ok_or_else(|| Error::ColumnNotFound {
            name: name.to_string(),
        })?;
        if field.is_null() {
            return Err(Error::NullValue {
                column: name.to_string(),
            });
        }
        Ok(field)
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get column information.
    pub fn columns(&self) -> &[Column] {
        &self.column_info.columns
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }
}

impl IntoIterator for Row {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
