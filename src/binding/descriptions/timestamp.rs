//! Timestamp column description.

use super::Description;
use crate::binding::constants::SQL_TIMESTAMP_STRUCT_SIZE;
use crate::binding::decode::decode_timestamp_struct;
use crate::binding::types::{CType, Field, SqlType};

/// Binds a column to `SQL_TIMESTAMP_STRUCT` slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampDescription;

impl TimestampDescription {
    pub fn new() -> Self {
        Self
    }
}

impl Description for TimestampDescription {
    fn element_size(&self) -> usize {
        SQL_TIMESTAMP_STRUCT_SIZE
    }

    fn c_type_tag(&self) -> CType {
        CType::TypeTimestamp
    }

    fn sql_type_tag(&self) -> SqlType {
        SqlType::TypeTimestamp
    }

    fn make_field(&self, slot: &[u8]) -> Field {
        debug_assert!(slot.len() >= self.element_size(), "short timestamp slot");
        decode_timestamp_struct(slot).map_or(Field::Null, Field::Timestamp)
    }
}
