//! ODBC date and timestamp struct decoders.
//!
//! Drivers write these structs in host byte order:
//!
//! `SQL_DATE_STRUCT` (6 bytes):
//! - bytes[0..2]: year (i16)
//! - bytes[2..4]: month (u16, 1-12)
//! - bytes[4..6]: day (u16, 1-31)
//!
//! `SQL_TIMESTAMP_STRUCT` (16 bytes): the date fields, then
//! - bytes[6..8]: hour (u16, 0-23)
//! - bytes[8..10]: minute (u16, 0-59)
//! - bytes[10..12]: second (u16, 0-59)
//! - bytes[12..16]: fraction (u32, nanoseconds)

use crate::binding::constants::{SQL_DATE_STRUCT_SIZE, SQL_TIMESTAMP_STRUCT_SIZE};
use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_ne_bytes([data[at], data[at + 1]])
}

/// Decode an `SQL_DATE_STRUCT`.
///
/// # Errors
/// Returns `Error::BufferTooSmall` if `data` is shorter than 6 bytes and
/// `Error::TypeConversion` if the fields do not form a calendar date.
pub fn decode_date_struct(data: &[u8]) -> Result<NaiveDate> {
    if data.len() < SQL_DATE_STRUCT_SIZE {
        return Err(Error::buffer_too_small(SQL_DATE_STRUCT_SIZE, data.len()));
    }

    let year = i16::from_ne_bytes([data[0], data[1]]) as i32;
    let month = read_u16(data, 2);
    let day = read_u16(data, 4);

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(|| {
        Error::type_conversion(format!(
            "Invalid DATE: year={}, month={}, day={}",
            year, month, day
        ))
    })
}

/// Decode an `SQL_TIMESTAMP_STRUCT`.
///
/// # Errors
/// Returns `Error::BufferTooSmall` if `data` is shorter than 16 bytes and
/// `Error::TypeConversion` if any field is out of range.
pub fn decode_timestamp_struct(data: &[u8]) -> Result<NaiveDateTime> {
    if data.len() < SQL_TIMESTAMP_STRUCT_SIZE {
        return Err(Error::buffer_too_small(
            SQL_TIMESTAMP_STRUCT_SIZE,
            data.len(),
        ));
    }

    let date = decode_date_struct(&data[..SQL_DATE_STRUCT_SIZE])?;

    let hour = read_u16(data, 6);
    let minute = read_u16(data, 8);
    let second = read_u16(data, 10);
    let fraction = u32::from_ne_bytes([data[12], data[13], data[14], data[15]]);

    // chrono treats nanos >= 1e9 as a leap second; ODBC never does
    if fraction >= 1_000_000_000 {
        return Err(Error::type_conversion(format!(
            "Invalid TIMESTAMP fraction: {}",
            fraction
        )));
    }

    let time = NaiveTime::from_hms_nano_opt(hour as u32, minute as u32, second as u32, fraction)
        .ok_or_else(|| {
            Error::type_conversion(format!(
                "Invalid TIME: hour={}, minute={}, second={}",
                hour, minute, second
            ))
        })?;
    Ok(NaiveDateTime::new(date, time))
}
