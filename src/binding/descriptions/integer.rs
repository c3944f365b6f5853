//! Integer column description.

use super::Description;
use crate::binding::decode::read_array;
use crate::binding::types::{CType, Field, SqlType};

/// Binds a column to a buffer of native `i64` values.
///
/// Drivers convert TINYINT, SMALLINT and INTEGER columns up to 64 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerDescription;

impl IntegerDescription {
    pub fn new() -> Self {
        Self
    }
}

impl Description for IntegerDescription {
    fn element_size(&self) -> usize {
        std::mem::size_of::<i64>()
    }

    fn c_type_tag(&self) -> CType {
        CType::SBigInt
    }

    fn sql_type_tag(&self) -> SqlType {
        SqlType::BigInt
    }

    fn make_field(&self, slot: &[u8]) -> Field {
        Field::Integer(i64::from_ne_bytes(read_array(slot)))
    }
}
