use tessera_core::{
    schema::db::{Identifier, UniqueKey},
    stmt::Direction,
};

/// The `constraint <name> unique (...)` part shared by `alter table` and
/// `create table`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueConstraint {
    /// Name of the constraint
    pub name: Identifier,

    /// Member columns, in declaration order
    pub columns: Vec<UniqueColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniqueColumn {
    pub name: Identifier,

    /// Explicit sort order; `None` leaves the database default.
    pub order: Option<Direction>,
}

impl UniqueConstraint {
    pub fn from_unique_key(unique_key: &UniqueKey) -> Self {
        UniqueConstraint {
            name: unique_key.name.clone(),
            columns: unique_key
                .columns
                .iter()
                .map(|column| UniqueColumn {
                    name: column.name.clone(),
                    order: unique_key.order_of(column),
                })
                .collect(),
        }
    }
}
