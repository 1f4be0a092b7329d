use super::NavigablePath;

use tessera_core::schema::db::QualifiedTableName;

use std::collections::HashMap;

/// A table joined into the statement, addressed by the domain path that
/// introduced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    path: NavigablePath,
    table: QualifiedTableName,

    /// Alias columns of this table are qualified with, e.g. `a1_0`.
    qualifier: String,
}

/// Table groups registered so far in the current pass.
#[derive(Debug, Default)]
pub struct FromClauseAccess {
    table_groups: HashMap<NavigablePath, TableGroup>,
}

impl TableGroup {
    pub fn new(path: NavigablePath, table: QualifiedTableName, qualifier: impl Into<String>) -> Self {
        Self {
            path,
            table,
            qualifier: qualifier.into(),
        }
    }

    pub fn navigable_path(&self) -> &NavigablePath {
        &self.path
    }

    pub fn table(&self) -> &QualifiedTableName {
        &self.table
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }
}

impl FromClauseAccess {
    /// Registers a table group, replacing any group previously registered for
    /// the same path.
    pub fn register(&mut self, table_group: TableGroup) {
        self.table_groups
            .insert(table_group.path.clone(), table_group);
    }

    pub fn table_group(&self, path: &NavigablePath) -> Option<&TableGroup> {
        self.table_groups.get(path)
    }

    pub fn contains(&self, path: &NavigablePath) -> bool {
        self.table_groups.contains_key(path)
    }
}
