use super::{Column, Identifier, QualifiedTableName};
use crate::stmt::Direction;

use indexmap::IndexMap;

/// A named unique constraint over an ordered list of columns.
///
/// `columns` keeps the declaration order and DDL reproduces it exactly.
/// `column_order` is sparse: only columns with an explicit sort order have an
/// entry, the rest use the database default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueKey {
    /// Constraint name, unique within its table.
    pub name: Identifier,

    /// The table the constraint belongs to.
    pub table: QualifiedTableName,

    /// Member columns in declaration order.
    pub columns: Vec<Column>,

    /// Explicit sort order, keyed by member column name.
    pub column_order: IndexMap<Identifier, Direction>,
}

impl UniqueKey {
    pub fn new(
        name: impl Into<Identifier>,
        table: QualifiedTableName,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            name: name.into(),
            table,
            columns,
            column_order: IndexMap::new(),
        }
    }

    pub fn with_order(mut self, column: impl Into<Identifier>, direction: Direction) -> Self {
        self.column_order.insert(column.into(), direction);
        self
    }

    /// The explicit sort order of `column`, if one was declared.
    pub fn order_of(&self, column: &Column) -> Option<Direction> {
        self.column_order.get(&column.name).copied()
    }

    pub fn contains(&self, column: &Column) -> bool {
        self.columns.iter().any(|c| c.name == column.name)
    }
}
