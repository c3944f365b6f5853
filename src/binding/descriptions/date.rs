//! Date column description.

use super::Description;
use crate::binding::constants::SQL_DATE_STRUCT_SIZE;
use crate::binding::decode::decode_date_struct;
use crate::binding::types::{CType, Field, SqlType};

/// Binds a column to `SQL_DATE_STRUCT` slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateDescription;

impl DateDescription {
    pub fn new() -> Self {
        Self
    }
}

impl Description for DateDescription {
    fn element_size(&self) -> usize {
        SQL_DATE_STRUCT_SIZE
    }

    fn c_type_tag(&self) -> CType {
        CType::TypeDate
    }

    fn sql_type_tag(&self) -> SqlType {
        SqlType::TypeDate
    }

    /// A struct that is not a calendar date (e.g. an unpopulated slot)
    /// yields `Field::Null`.
    fn make_field(&self, slot: &[u8]) -> Field {
        debug_assert!(slot.len() >= self.element_size(), "short date slot");
        decode_date_struct(slot).map_or(Field::Null, Field::Date)
    }
}
