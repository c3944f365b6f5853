//! Decoders for the C structs drivers write into bound buffers.
//!
//! ## Currently Supported
//!
//! | C type | Module |
//! |--------|--------|
//! | SQL_C_TYPE_DATE      | `date` |
//! | SQL_C_TYPE_TIMESTAMP | `date` |
//!
//! Scalar C types (BIT, SBIGINT, DOUBLE) are plain native-endian values and
//! are read directly by their descriptions with `read_array`.

mod date;

pub use date::{decode_date_struct, decode_timestamp_struct};

#[cfg(test)]
pub(crate) use date::tests as date_tests;

/// Copy the first `N` bytes of a slot into an array.
///
/// A slot shorter than `N` violates the binding contract; the missing
/// bytes read as zero rather than panicking.
pub(crate) fn read_array<const N: usize>(slot: &[u8]) -> [u8; N] {
    debug_assert!(
        slot.len() >= N,
        "slot holds {} bytes, element needs {}",
        slot.len(),
        N
    );
    let mut out = [0u8; N];
    let n = slot.len().min(N);
    out[..n].copy_from_slice(&slot[..n]);
    out
}
