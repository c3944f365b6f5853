//! Cursor for iterating over query results with buffering.
//!
//! The `Cursor` trait defines the common interface. `RowCursor` binds a
//! result set through column descriptions, fetches it rowset by rowset
//! from a `RowSource` and decodes each row.

use std::future::Future;
use std::sync::Arc;

use crate::binding::buffer::RowSet;
use crate::binding::constants::MAX_FETCH_SIZE;
use crate::binding::types::{Column, ColumnInfo, Row};
use crate::error::{Error, Result};
use crate::options::CursorOptions;
use crate::statement::RowSource;
use futures::Stream;
use tracing::{debug, trace};

/// Base trait for all cursor types.
///
/// Each cursor implementation specifies its Item type and implements
/// the async methods for fetching items.
///
/// # Example
///
/// ```no_run
/// use odbc_column_bind::{Cursor, Result, Row};
///
/// // Generic function that works with any cursor type
/// async fn count_rows<C: Cursor<Item = Row>>(cursor: &mut C) -> Result<u64> {
///     let mut count = 0;
///     while cursor.next().await?.is_some() {
///         count += 1;
///     }
///     Ok(count)
/// }
/// ```
pub trait Cursor {
    /// The type of item this cursor yields.
    type Item;

    /// Bound columns of this cursor.
    fn columns(&self) -> &[Column];

    /// Number of rows fetched from the source so far.
    ///
    /// Grows as rowsets arrive; see `RowCursor::affected_rows` for the
    /// count the driver reports.
    fn rowcount(&self) -> u64;

    /// Check if cursor is closed (exhausted or closed explicitly).
    fn is_closed(&self) -> bool;

    /// Check if more items are available (buffered or at the source).
    fn has_more(&self) -> bool;

    /// Rows per fetch.
    fn fetch_size(&self) -> usize;

    /// Set fetch size for subsequent fetches (clamped to `1..=MAX_FETCH_SIZE`).
    fn set_fetch_size(&mut self, size: usize);

    /// Close the cursor and release the source's result set.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Get the next item, fetching from the source if the buffer is exhausted.
    ///
    /// Returns `Ok(None)` when exhausted.
    fn next(&mut self) -> impl Future<Output = Result<Option<Self::Item>>> + Send;

    /// Fetch all remaining items into a vector.
    ///
    /// The cursor is exhausted after this call.
    fn fetch_all(&mut self) -> impl Future<Output = Result<Vec<Self::Item>>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    /// Source ran dry; further `next` calls return `None`.
    Exhausted,
    /// Closed by the caller; further `next` calls fail.
    Closed,
}

/// Row-by-row cursor over a bound result set.
///
/// # Lifecycle
///
/// 1. Created by `RowCursor::open()`, which describes the result set and
///    binds one description per column
/// 2. Iterated via `next()`, `fetch_many()` or `fetch_all()`
/// 3. Closed automatically when exhausted or explicitly via `close()`
pub struct RowCursor<S: RowSource> {
    /// Executed statement rows come from.
    source: S,
    /// Bound columns, shared with every row.
    column_info: Arc<ColumnInfo>,
    /// Bound buffer the source writes into.
    rows: RowSet,
    /// Decoded rows not yet handed out.
    buffer: Vec<Row>,
    /// Current position in buffer.
    buffer_pos: usize,
    /// Rows per fetch; applied on the next fetch.
    fetch_size: usize,
    /// Total rows fetched so far.
    rows_fetched: u64,
    state: State,
}

impl<S: RowSource> RowCursor<S> {
    /// Bind the source's result set.
    ///
    /// Returns `Error::InvalidOptions` for out-of-range options,
    /// `Error::NoResultSet` if the statement has no columns,
    /// `Error::UnsupportedType` if a column cannot be bound and
    /// `Error::RowSetTooLarge` if the row set cannot be allocated.
    pub fn open(source: S, options: &CursorOptions) -> Result<Self> {
        options.validate()?;
        let metadata = source.describe()?;
        if metadata.is_empty() {
            return Err(Error::NoResultSet);
        }

        let column_info = Arc::new(ColumnInfo::from_metadata(&metadata, options)?);
        let fetch_size = options.fetch_size;

        debug!(columns = column_info.len(), fetch_size, "binding result set");
        for column in &column_info.columns {
            trace!(
                name = %column.name,
                c_type = %column.description.c_type_tag(),
                sql_type = %column.description.sql_type_tag(),
                element_size = column.description.element_size(),
                "bound column"
            );
        }

        let rows = RowSet::new(&column_info.descriptions(), fetch_size)?;

        Ok(Self {
            source,
            column_info,
            rows,
            buffer: Vec::new(),
            buffer_pos: 0,
            fetch_size,
            rows_fetched: 0,
            state: State::Open,
        })
    }

    /// Internal: Fetch and decode the next rowset.
    async fn do_fetch(&mut self) -> Result<()> {
        // Reuse buffer capacity
        if self.buffer_pos >= self.buffer.len() {
            self.buffer.clear();
            self.buffer_pos = 0;
        }

        if self.rows.capacity() != self.fetch_size {
            self.rows = RowSet::new(&self.column_info.descriptions(), self.fetch_size)?;
        } else {
            self.rows.clear();
        }

        let fetched = self.source.fetch(&mut self.rows).await?;
        self.rows.set_rows_fetched(fetched)?;
        trace!(rows = fetched, "fetched rowset");

        if fetched == 0 {
            self.finish().await?;
            return Ok(());
        }

        for row in 0..fetched {
            let values = self.rows.row_fields(row)?;
            self.buffer.push(Row::new(values, Arc::clone(&self.column_info)));
        }
        self.rows_fetched += fetched as u64;

        Ok(())
    }

    /// Internal: Mark exhausted and release the source.
    async fn finish(&mut self) -> Result<()> {
        if self.state == State::Open {
            self.state = State::Exhausted;
            debug!(rows = self.rows_fetched, "result set exhausted");
            self.source.close().await?;
        }
        Ok(())
    }

    fn take_buffered(&mut self) -> Option<Row> {
        let row = self.buffer.get(self.buffer_pos).cloned()?;
        self.buffer_pos += 1;
        Some(row)
    }

    /// Get the next row. Same as `next()`.
    pub async fn fetch_one(&mut self) -> Result<Option<Row>> {
        self.next().await
    }

    /// Fetch up to `n` rows. Fewer are returned only at the end of the
    /// result set.
    pub async fn fetch_many(&mut self, n: usize) -> Result<Vec<Row>> {
        let mut out = Vec::with_capacity(n.min(self.fetch_size));
        while out.len() < n {
            match self.next().await? {
                Some(row) => out.push(row),
                None => break,
            }
        }
        Ok(out)
    }

    /// Rows affected as reported by the driver, `None` if unknown.
    ///
    /// Unlike `rowcount`, this does not change while fetching.
    pub fn affected_rows(&self) -> Option<u64> {
        self.source.row_count()
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    /// Get the number of columns.
    pub fn num_columns(&self) -> usize {
        self.column_info.len()
    }

    /// Get the shared column information.
    pub fn column_info(&self) -> &Arc<ColumnInfo> {
        &self.column_info
    }

    /// Get the number of rows currently buffered.
    pub fn buffered_count(&self) -> usize {
        self.buffer.len().saturating_sub(self.buffer_pos)
    }

    /// Consume the cursor and return its source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: RowSource> Cursor for RowCursor<S> {
    type Item = Row;

    fn columns(&self) -> &[Column] {
        &self.column_info.columns
    }

    fn rowcount(&self) -> u64 {
        self.rows_fetched
    }

    fn is_closed(&self) -> bool {
        self.state != State::Open
    }

    fn has_more(&self) -> bool {
        self.buffer_pos < self.buffer.len() || self.state == State::Open
    }

    fn fetch_size(&self) -> usize {
        self.fetch_size
    }

    fn set_fetch_size(&mut self, size: usize) {
        self.fetch_size = size.clamp(1, MAX_FETCH_SIZE);
    }

    async fn close(&mut self) -> Result<()> {
        let was_open = self.state == State::Open;
        self.state = State::Closed;
        self.buffer.clear();
        self.buffer_pos = 0;
        if was_open {
            debug!(rows = self.rows_fetched, "closing cursor");
            self.source.close().await?;
        }
        Ok(())
    }

    async fn next(&mut self) -> Result<Option<Self::Item>> {
        if let Some(row) = self.take_buffered() {
            return Ok(Some(row));
        }

        match self.state {
            State::Closed => return Err(Error::CursorClosed),
            State::Exhausted => return Ok(None),
            State::Open => {}
        }

        // A rowset may decode to nothing only when the source is done
        self.do_fetch().await?;
        Ok(self.take_buffered())
    }

    async fn fetch_all(&mut self) -> Result<Vec<Self::Item>> {
        if self.state == State::Closed {
            return Err(Error::CursorClosed);
        }

        let mut all_rows = std::mem::take(&mut self.buffer);
        let consumed = self.buffer_pos.min(all_rows.len());
        all_rows.drain(..consumed);
        self.buffer_pos = 0;

        while self.state == State::Open {
            self.do_fetch().await?;
            all_rows.append(&mut self.buffer);
        }

        Ok(all_rows)
    }
}

/// Extension trait for converting Cursor to Stream.
///
/// # Example
///
/// ```no_run
/// use futures::stream::TryStreamExt;
/// use odbc_column_bind::{CursorStreamExt, Result, RowCursor, RowSource};
///
/// async fn names<S: RowSource + Unpin>(source: S) -> Result<Vec<String>> {
///     let cursor = RowCursor::open(source, &Default::default())?;
///     cursor
///         .into_stream()
///         .map_ok(|row| row.get(1).map(ToString::to_string).unwrap_or_default())
///         .try_collect()
///         .await
/// }
/// ```
pub trait CursorStreamExt: Cursor + Sized {
    /// Convert this cursor into a Stream yielding `Result<Item>`.
    ///
    /// The stream takes ownership of the cursor. Each call to `poll_next`
    /// will call `cursor.next()` internally. The stream ends after the
    /// first error.
    fn into_stream(self) -> impl Stream<Item = Result<Self::Item>>;
}

impl<C: Cursor + Unpin> CursorStreamExt for C {
    fn into_stream(self) -> impl Stream<Item = Result<Self::Item>> {
        use futures::stream;

        stream::unfold(Some(self), |opt_cursor| async move {
            let mut cursor = opt_cursor?;
            match cursor.next().await {
                Ok(Some(item)) => Some((Ok(item), Some(cursor))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}
