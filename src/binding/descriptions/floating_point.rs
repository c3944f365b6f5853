//! Double precision floating point column description.

use super::Description;
use crate::binding::decode::read_array;
use crate::binding::types::{CType, Field, SqlType};

/// Binds a column to a buffer of native `f64` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatingPointDescription;

impl FloatingPointDescription {
    pub fn new() -> Self {
        Self
    }
}

impl Description for FloatingPointDescription {
    fn element_size(&self) -> usize {
        std::mem::size_of::<f64>()
    }

    fn c_type_tag(&self) -> CType {
        CType::Double
    }

    fn sql_type_tag(&self) -> SqlType {
        SqlType::Double
    }

    fn make_field(&self, slot: &[u8]) -> Field {
        Field::FloatingPoint(f64::from_ne_bytes(read_array(slot)))
    }
}
