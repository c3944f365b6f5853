//! Column-wise buffers bound to a statement for one fetch.
//!
//! Each column gets one contiguous data area of
//! `element_size * capacity` bytes and one length/indicator per row, the
//! layout `SQLBindCol` expects with column-wise binding.

use std::sync::Arc;

use crate::binding::constants::{MAX_COLUMN_BUFFER_BYTES, SQL_NULL_DATA};
use crate::binding::descriptions::Description;
use crate::binding::types::Field;
use crate::error::{Error, Result};
use bytes::BytesMut;

/// Bound buffer for a single column.
#[derive(Debug)]
pub struct ColumnBuffer {
    description: Arc<dyn Description>,
    data: BytesMut,
    indicators: Vec<isize>,
}

impl ColumnBuffer {
    /// Allocate a zeroed buffer for `capacity` rows.
    ///
    /// Returns `Error::RowSetTooLarge` if the data area would exceed
    /// `MAX_COLUMN_BUFFER_BYTES`.
    pub fn new(description: Arc<dyn Description>, capacity: usize) -> Result<Self> {
        let element_size = description.element_size();
        let limit = MAX_COLUMN_BUFFER_BYTES.min(isize::MAX as usize);
        let len = element_size
            .checked_mul(capacity)
            .filter(|len| *len <= limit && capacity <= limit / std::mem::size_of::<isize>())
            .ok_or(Error::RowSetTooLarge {
                element_size,
                capacity,
            })?;
        Ok(Self {
            description,
            data: BytesMut::zeroed(len),
            indicators: vec![0; capacity],
        })
    }

    /// Description this buffer was sized and tagged from.
    pub fn description(&self) -> &Arc<dyn Description> {
        &self.description
    }

    /// Number of rows the buffer holds.
    pub fn capacity(&self) -> usize {
        self.indicators.len()
    }

    /// Whole data area, as handed to the driver.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Whole data area, mutable.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Indicator array, as handed to the driver.
    pub fn indicators(&self) -> &[isize] {
        &self.indicators
    }

    /// Indicator array, mutable.
    pub fn indicators_mut(&mut self) -> &mut [isize] {
        &mut self.indicators
    }

    #[track_caller]
    fn slot_range(&self, row: usize) -> Result<std::ops::Range<usize>> {
        if row >= self.capacity() {
            return Err(Error::RowIndexOutOfBounds {
                index: row,
                capacity: self.capacity(),
            });
        }
        let size = self.description.element_size();
        let start = row * size;
        if start + size > self.data.len() {
            return Err(Error::buffer_too_small(start + size, self.data.len()));
        }
        Ok(start..start + size)
    }

    /// Bytes of one row's slot, exactly `element_size` long.
    #[track_caller]
    pub fn slot(&self, row: usize) -> Result<&[u8]> {
        let range = self.slot_range(row)?;
        Ok(&self.data[range])
    }

    /// Mutable bytes of one row's slot.
    #[track_caller]
    pub fn slot_mut(&mut self, row: usize) -> Result<&mut [u8]> {
        let range = self.slot_range(row)?;
        Ok(&mut self.data[range])
    }

    /// Length/indicator for one row.
    pub fn indicator(&self, row: usize) -> Result<isize> {
        self.indicators
            .get(row)
            .copied()
            .ok_or(Error::RowIndexOutOfBounds {
                index: row,
                capacity: self.capacity(),
            })
    }

    /// Set the length/indicator for one row.
    pub fn set_indicator(&mut self, row: usize, value: isize) -> Result<()> {
        let capacity = self.capacity();
        let slot = self
            .indicators
            .get_mut(row)
            .ok_or(Error::RowIndexOutOfBounds {
                index: row,
                capacity,
            })?;
        *slot = value;
        Ok(())
    }

    /// Decode one row.
    ///
    /// A `SQL_NULL_DATA` indicator yields `Field::Null` without consulting
    /// the description.
    pub fn field(&self, row: usize) -> Result<Field> {
        if self.indicator(row)? == SQL_NULL_DATA {
            return Ok(Field::Null);
        }
        Ok(self.description.make_field(self.slot(row)?))
    }

    fn clear(&mut self) {
        self.data.fill(0);
        self.indicators.fill(0);
    }
}

/// Buffers for every column of a result set, plus the fetched row count.
#[derive(Debug)]
pub struct RowSet {
    columns: Vec<ColumnBuffer>,
    capacity: usize,
    rows_fetched: usize,
}

impl RowSet {
    /// Allocate buffers for `capacity` rows, one per description.
    pub fn new(descriptions: &[Arc<dyn Description>], capacity: usize) -> Result<Self> {
        let columns = descriptions
            .iter()
            .map(|d| ColumnBuffer::new(d.clone(), capacity))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            columns,
            capacity,
            rows_fetched: 0,
        })
    }

    /// Rows per fetch.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Rows written by the last fetch.
    pub fn rows_fetched(&self) -> usize {
        self.rows_fetched
    }

    /// Record how many rows the driver wrote.
    #[track_caller]
    pub fn set_rows_fetched(&mut self, rows: usize) -> Result<()> {
        if rows > self.capacity {
            return Err(Error::buffer_too_small(rows, self.capacity));
        }
        self.rows_fetched = rows;
        Ok(())
    }

    /// Get a column buffer by index.
    pub fn column(&self, index: usize) -> Result<&ColumnBuffer> {
        let count = self.columns.len();
        self.columns
            .get(index)
            .ok_or(Error::ColumnIndexOutOfBounds { index, count })
    }

    /// Get a mutable column buffer by index.
    pub fn column_mut(&mut self, index: usize) -> Result<&mut ColumnBuffer> {
        let count = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or(Error::ColumnIndexOutOfBounds { index, count })
    }

    /// Iterate over column buffers.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnBuffer> {
        self.columns.iter()
    }

    /// Decode one cell.
    pub fn field(&self, row: usize, column: usize) -> Result<Field> {
        self.column(column)?.field(row)
    }

    /// Decode every column of one fetched row.
    pub fn row_fields(&self, row: usize) -> Result<Vec<Field>> {
        if row >= self.rows_fetched {
            return Err(Error::RowIndexOutOfBounds {
                index: row,
                capacity: self.rows_fetched,
            });
        }
        self.columns.iter().map(|c| c.field(row)).collect()
    }

    /// Zero all data and indicators and forget fetched rows.
    pub fn clear(&mut self) {
        self.columns.iter_mut().for_each(ColumnBuffer::clear);
        self.rows_fetched = 0;
    }
}
