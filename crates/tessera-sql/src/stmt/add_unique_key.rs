use super::{Statement, UniqueConstraint};

use tessera_core::schema::db::{QualifiedTableName, UniqueKey};

/// `alter table <table> add constraint <name> unique (...)`
#[derive(Debug, Clone, PartialEq)]
pub struct AddUniqueKey {
    /// Table the constraint is added to.
    pub table: QualifiedTableName,

    pub constraint: UniqueConstraint,
}

impl Statement {
    pub fn add_unique_key(unique_key: &UniqueKey) -> Self {
        AddUniqueKey {
            table: unique_key.table.clone(),
            constraint: UniqueConstraint::from_unique_key(unique_key),
        }
        .into()
    }
}

impl From<AddUniqueKey> for Statement {
    fn from(value: AddUniqueKey) -> Self {
        Self::AddUniqueKey(value)
    }
}
