use super::{Column, Identifier, QualifiedTableName, UniqueKey};
use crate::{stmt::Direction, Error, Result};

use std::collections::HashSet;

/// A database table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Qualified name; also the table's identity
    pub name: QualifiedTableName,

    /// The table's columns
    pub columns: Vec<Column>,

    /// Named unique constraints, in declaration order
    pub unique_keys: Vec<UniqueKey>,
}

/// Builds a [`Table`], checking that its unique keys are well formed.
#[derive(Debug)]
pub struct TableBuilder {
    name: QualifiedTableName,
    columns: Vec<Column>,
    unique_keys: Vec<PendingUniqueKey>,
}

#[derive(Debug)]
struct PendingUniqueKey {
    name: Identifier,
    columns: Vec<(Identifier, Option<Direction>)>,
}

impl Table {
    pub fn builder(name: QualifiedTableName) -> TableBuilder {
        TableBuilder {
            name,
            columns: vec![],
            unique_keys: vec![],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        let name = Identifier::new(name);
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn unique_key(&self, name: &str) -> Option<&UniqueKey> {
        let name = Identifier::new(name);
        self.unique_keys.iter().find(|key| key.name == name)
    }
}

impl TableBuilder {
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Declares a unique key over `columns` with the database's default
    /// ordering.
    pub fn unique_key(self, name: &str, columns: &[&str]) -> Self {
        self.unique_key_ordered(name, columns.iter().map(|column| (*column, None)))
    }

    /// Declares a unique key where some columns carry an explicit sort order.
    pub fn unique_key_ordered<'a>(
        mut self,
        name: &str,
        columns: impl IntoIterator<Item = (&'a str, Option<Direction>)>,
    ) -> Self {
        self.unique_keys.push(PendingUniqueKey {
            name: Identifier::new(name),
            columns: columns
                .into_iter()
                .map(|(column, direction)| (Identifier::new(column), direction))
                .collect(),
        });
        self
    }

    pub fn build(self) -> Result<Table> {
        let mut names = HashSet::new();
        let mut unique_keys = Vec::with_capacity(self.unique_keys.len());

        for pending in self.unique_keys {
            if !names.insert(pending.name.clone()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate unique key `{}` on table `{}`",
                    pending.name, self.name
                )));
            }

            let mut unique_key = UniqueKey::new(pending.name, self.name.clone(), vec![]);

            for (column_name, direction) in pending.columns {
                let Some(column) = self.columns.iter().find(|c| c.name == column_name) else {
                    return Err(Error::invalid_schema(format!(
                        "unique key `{}` references unknown column `{}` on table `{}`",
                        unique_key.name, column_name, self.name
                    )));
                };

                if let Some(direction) = direction {
                    unique_key
                        .column_order
                        .insert(column.name.clone(), direction);
                }
                unique_key.columns.push(column.clone());
            }

            unique_keys.push(unique_key);
        }

        Ok(Table {
            name: self.name,
            columns: self.columns,
            unique_keys,
        })
    }
}
