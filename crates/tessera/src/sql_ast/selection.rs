use super::Expression;

use tessera_core::stmt::Type;

/// An expression placed in the select list.
///
/// `jdbc_position` is the 1-based column index drivers use;
/// `values_array_position` is the 0-based index into the row buffer
/// materialization reads from. The two always differ by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlSelection {
    jdbc_position: usize,
    values_array_position: usize,
    expression: Expression,

    /// Type of the raw value read from the column.
    java_type: Type,
}

impl SqlSelection {
    pub(crate) fn new(values_array_position: usize, expression: Expression, java_type: Type) -> Self {
        Self {
            jdbc_position: values_array_position + 1,
            values_array_position,
            expression,
            java_type,
        }
    }

    pub fn jdbc_position(&self) -> usize {
        self.jdbc_position
    }

    pub fn values_array_position(&self) -> usize {
        self.values_array_position
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn java_type(&self) -> &Type {
        &self.java_type
    }
}
