use super::Statement;

use tessera_core::schema::db::{Identifier, QualifiedTableName, UniqueKey};

/// A statement to drop a unique constraint.
///
/// Whether `if exists` is emitted, and where, is decided by the dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct DropUniqueKey {
    /// Table owning the constraint.
    pub table: QualifiedTableName,

    /// Name of the constraint.
    pub name: Identifier,
}

impl Statement {
    pub fn drop_unique_key(unique_key: &UniqueKey) -> Self {
        DropUniqueKey {
            table: unique_key.table.clone(),
            name: unique_key.name.clone(),
        }
        .into()
    }
}

impl From<DropUniqueKey> for Statement {
    fn from(value: DropUniqueKey) -> Self {
        Self::DropUniqueKey(value)
    }
}
