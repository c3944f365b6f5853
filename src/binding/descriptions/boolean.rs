//! Boolean column description.

use super::Description;
use crate::binding::types::{CType, Field, SqlType};

/// Binds a BIT column to one byte per row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanDescription;

impl BooleanDescription {
    pub fn new() -> Self {
        Self
    }
}

impl Description for BooleanDescription {
    fn element_size(&self) -> usize {
        1
    }

    fn c_type_tag(&self) -> CType {
        CType::Bit
    }

    fn sql_type_tag(&self) -> SqlType {
        SqlType::Bit
    }

    fn make_field(&self, slot: &[u8]) -> Field {
        debug_assert!(!slot.is_empty(), "empty bit slot");
        Field::Boolean(slot.first().is_some_and(|b| *b != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_description() {
        let description = BooleanDescription::new();
        assert_eq!(description.element_size(), 1);
        assert_eq!(description.c_type_tag(), CType::Bit);
        assert_eq!(description.sql_type_tag(), SqlType::Bit);
        assert_eq!(description.make_field(&[1]), Field::Boolean(true));
        assert_eq!(description.make_field(&[0]), Field::Boolean(false));
    }
}
