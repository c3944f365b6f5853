//! Driver boundary for executed statements.
//!
//! A `RowSource` is an executed statement with a result set. It reports
//! the result set's columns and fills bound row sets on request. The
//! cursor decides how to bind; the source only writes what the driver
//! produced.

use std::future::Future;

use crate::binding::buffer::RowSet;
use crate::binding::types::ColumnMetadata;
use crate::error::Result;

/// An executed statement whose result set can be fetched.
///
/// # Example
///
/// ```
/// use odbc_column_bind::{ColumnMetadata, Result, RowSet, RowSource};
///
/// /// One DOUBLE column, one row.
/// struct Single(bool);
///
/// impl RowSource for Single {
///     fn describe(&self) -> Result<Vec<ColumnMetadata>> {
///         Ok(vec![ColumnMetadata::new("VALUE".to_string(), 8)])
///     }
///
///     fn row_count(&self) -> Option<u64> {
///         None
///     }
///
///     async fn fetch(&mut self, rows: &mut RowSet) -> Result<usize> {
///         if self.0 {
///             return Ok(0);
///         }
///         self.0 = true;
///         let col = rows.column_mut(0)?;
///         col.slot_mut(0)?.copy_from_slice(&2.5f64.to_ne_bytes());
///         col.set_indicator(0, 8)?;
///         Ok(1)
///     }
///
///     async fn close(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait RowSource: Send {
    /// Describe the result-set columns (`SQLNumResultCols` + `SQLDescribeCol`).
    fn describe(&self) -> Result<Vec<ColumnMetadata>>;

    /// Rows affected as reported by the driver (`SQLRowCount`).
    ///
    /// `None` when the driver reports -1, i.e. does not know.
    fn row_count(&self) -> Option<u64>;

    /// Fill `rows` with the next rowset.
    ///
    /// Writes at most `rows.capacity()` rows into the column buffers,
    /// setting each row's indicator (`SQL_NULL_DATA` for NULL), and returns
    /// how many rows were written. Returns 0 once the result set is
    /// exhausted.
    fn fetch(&mut self, rows: &mut RowSet) -> impl Future<Output = Result<usize>> + Send;

    /// Release the statement's result set.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;
}
