//! Scripted in-memory statement used by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{Datelike, Timelike};
use odbc_column_bind::binding::constants::SQL_NULL_DATA;
use odbc_column_bind::{CType, ColumnBuffer, ColumnMetadata, Error, Field, Result, RowSet, RowSource};

/// Counters a test keeps after handing the source to a cursor.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    pub fetches: Arc<AtomicUsize>,
    pub closed: Arc<AtomicBool>,
}

impl Counters {
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Writes pre-scripted rows into bound buffers the way a driver would.
#[derive(Debug)]
pub struct ScriptedSource {
    columns: Vec<ColumnMetadata>,
    rows: VecDeque<Vec<Field>>,
    row_count: Option<u64>,
    fail_on_fetch: Option<usize>,
    counters: Counters,
}

impl ScriptedSource {
    pub fn new(columns: Vec<ColumnMetadata>, rows: Vec<Vec<Field>>) -> Self {
        Self {
            columns,
            rows: rows.into(),
            row_count: None,
            fail_on_fetch: None,
            counters: Counters::default(),
        }
    }

    /// Single-column result set.
    pub fn single(name: &str, sql_type: i16, column_size: usize, values: Vec<Field>) -> Self {
        let meta = ColumnMetadata::new(name.to_string(), sql_type).with_column_size(column_size);
        Self::new(vec![meta], values.into_iter().map(|v| vec![v]).collect())
    }

    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = Some(row_count);
        self
    }

    /// Fail the n-th fetch call (1-based) with a driver error.
    pub fn failing_on_fetch(mut self, n: usize) -> Self {
        self.fail_on_fetch = Some(n);
        self
    }

    pub fn counters(&self) -> Counters {
        self.counters.clone()
    }
}

fn write_field(column: &mut ColumnBuffer, row: usize, field: &Field) -> Result<()> {
    if field.is_null() {
        return column.set_indicator(row, SQL_NULL_DATA);
    }

    let c_type = column.description().c_type_tag();
    let slot = column.slot_mut(row)?;
    let written = match (c_type, field) {
        (CType::Double, Field::FloatingPoint(v)) => {
            slot.copy_from_slice(&v.to_ne_bytes());
            8
        }
        (CType::SBigInt, Field::Integer(v)) => {
            slot.copy_from_slice(&v.to_ne_bytes());
            8
        }
        (CType::Bit, Field::Boolean(v)) => {
            slot[0] = *v as u8;
            1
        }
        (CType::Char, Field::String(s)) => {
            // truncate like a driver, always leaving room for the NUL
            let n = s.len().min(slot.len() - 1);
            slot[..n].copy_from_slice(&s.as_bytes()[..n]);
            slot[n] = 0;
            s.len()
        }
        (CType::TypeDate, Field::Date(d)) => {
            write_date(slot, d.year() as i16, d.month() as u16, d.day() as u16);
            6
        }
        (CType::TypeTimestamp, Field::Timestamp(ts)) => {
            write_date(slot, ts.year() as i16, ts.month() as u16, ts.day() as u16);
            slot[6..8].copy_from_slice(&(ts.hour() as u16).to_ne_bytes());
            slot[8..10].copy_from_slice(&(ts.minute() as u16).to_ne_bytes());
            slot[10..12].copy_from_slice(&(ts.second() as u16).to_ne_bytes());
            slot[12..16].copy_from_slice(&ts.nanosecond().to_ne_bytes());
            16
        }
        (c_type, field) => {
            return Err(Error::type_conversion(format!(
                "cannot write {:?} as {}",
                field, c_type
            )))
        }
    };
    column.set_indicator(row, written as isize)
}

fn write_date(slot: &mut [u8], year: i16, month: u16, day: u16) {
    slot[0..2].copy_from_slice(&year.to_ne_bytes());
    slot[2..4].copy_from_slice(&month.to_ne_bytes());
    slot[4..6].copy_from_slice(&day.to_ne_bytes());
}

impl RowSource for ScriptedSource {
    fn describe(&self) -> Result<Vec<ColumnMetadata>> {
        Ok(self.columns.clone())
    }

    fn row_count(&self) -> Option<u64> {
        self.row_count
    }

    async fn fetch(&mut self, rows: &mut RowSet) -> Result<usize> {
        let call = self.counters.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_fetch == Some(call) {
            return Err(Error::driver("HY000", 1205, "Lock wait timeout exceeded"));
        }

        let mut written = 0;
        while written < rows.capacity() {
            let Some(values) = self.rows.pop_front() else {
                break;
            };
            for (col, value) in values.iter().enumerate() {
                write_field(rows.column_mut(col)?, written, value)?;
            }
            written += 1;
        }
        Ok(written)
    }

    async fn close(&mut self) -> Result<()> {
        self.counters.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
