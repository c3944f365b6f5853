//! Character column description.

use super::Description;
use crate::binding::types::{CType, Field, SqlType};

/// Binds a column to NUL-terminated narrow character slots.
///
/// Each slot holds up to `max_length` bytes plus the terminator the
/// driver appends. Longer values are truncated by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDescription {
    max_length: usize,
}

impl StringDescription {
    /// Create a description for strings of at most `max_length` bytes.
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Maximum string length in bytes, without the terminator.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Description for StringDescription {
    fn element_size(&self) -> usize {
        self.max_length.saturating_add(1)
    }

    fn c_type_tag(&self) -> CType {
        CType::Char
    }

    fn sql_type_tag(&self) -> SqlType {
        SqlType::VarChar
    }

    fn make_field(&self, slot: &[u8]) -> Field {
        debug_assert!(slot.len() >= self.element_size(), "short string slot");
        let slot = &slot[..slot.len().min(self.element_size())];
        let end = slot.iter().position(|b| *b == 0).unwrap_or(slot.len());
        Field::String(String::from_utf8_lossy(&slot[..end]).into_owned())
    }
}
