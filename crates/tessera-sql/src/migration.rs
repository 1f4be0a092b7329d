use crate::{SqlStringGenerationContext, UniqueDelegate};

use tessera_core::schema::db::Table;

/// The unique-constraint commands schema tooling runs for a set of tables.
#[derive(Debug)]
pub struct UniqueKeyStatements<'a> {
    delegate: UniqueDelegate,
    context: &'a SqlStringGenerationContext,
}

impl<'a> UniqueKeyStatements<'a> {
    pub fn new(delegate: UniqueDelegate, context: &'a SqlStringGenerationContext) -> Self {
        Self { delegate, context }
    }

    /// `alter table ... add constraint` for every unique key, tables and keys
    /// in declaration order. Dialects that declare constraints in
    /// `create table` produce nothing.
    pub fn create_for(&self, tables: &[Table]) -> Vec<String> {
        let mut result = Vec::new();
        for table in tables {
            for unique_key in &table.unique_keys {
                let sql = self
                    .delegate
                    .alter_table_add_unique_key(unique_key, self.context);
                if !sql.is_empty() {
                    result.push(sql);
                }
            }
        }
        result
    }

    /// `alter table ... drop constraint` for every unique key.
    pub fn drop_for(&self, tables: &[Table]) -> Vec<String> {
        tables
            .iter()
            .flat_map(|table| &table.unique_keys)
            .map(|unique_key| {
                self.delegate
                    .alter_table_drop_unique_key(unique_key, self.context)
            })
            .collect()
    }
}
