use crate::{
    stmt::{Statement, UniqueConstraint},
    Dialect, Serializer, SqlStringGenerationContext, UniqueStrategy,
};

use tessera_core::schema::db::{Column, Table, UniqueKey};

/// Generates the DDL that declares and removes unique constraints.
///
/// The SQL skeleton is the same for every database; the [`Dialect`] supplies
/// quoting, the `alter table` prefix, the drop keyword and the placement of
/// `if exists`. Nothing here validates the unique key: an empty column list
/// renders as `unique ()` and is left for the database to reject.
#[derive(Debug, Clone, Copy)]
pub struct UniqueDelegate {
    dialect: Dialect,
}

impl UniqueDelegate {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Fragment appended to a column definition in `create table`.
    pub fn column_definition_uniqueness_fragment(
        &self,
        column: &Column,
        _context: &SqlStringGenerationContext,
    ) -> String {
        match self.dialect.unique_strategy {
            UniqueStrategy::AlterTable => String::new(),
            UniqueStrategy::CreateTable if column.unique => " unique".to_string(),
            UniqueStrategy::CreateTable => String::new(),
        }
    }

    /// Fragment appended inside `create table`, after the column definitions.
    pub fn table_creation_unique_constraints_fragment(
        &self,
        table: &Table,
        context: &SqlStringGenerationContext,
    ) -> String {
        match self.dialect.unique_strategy {
            UniqueStrategy::AlterTable => String::new(),
            UniqueStrategy::CreateTable => {
                let serializer = Serializer::new(&self.dialect, context);
                let mut ret = String::new();

                for unique_key in &table.unique_keys {
                    let constraint = UniqueConstraint::from_unique_key(unique_key);
                    ret.push_str(", ");
                    ret.push_str(&serializer.fragment(&constraint));
                }

                ret
            }
        }
    }

    /// `alter table ... add constraint <name> unique (...)`
    ///
    /// Empty when the dialect declares unique constraints in `create table`.
    pub fn alter_table_add_unique_key(
        &self,
        unique_key: &UniqueKey,
        context: &SqlStringGenerationContext,
    ) -> String {
        if self.dialect.unique_strategy == UniqueStrategy::CreateTable {
            return String::new();
        }

        let sql = Serializer::new(&self.dialect, context)
            .serialize(&Statement::add_unique_key(unique_key));

        tracing::debug!(dialect = self.dialect.name, %sql, "add unique key");
        sql
    }

    /// `alter table ...<drop keyword>[if exists ]<name>[ if exists]`
    pub fn alter_table_drop_unique_key(
        &self,
        unique_key: &UniqueKey,
        context: &SqlStringGenerationContext,
    ) -> String {
        let sql = Serializer::new(&self.dialect, context)
            .serialize(&Statement::drop_unique_key(unique_key));

        tracing::debug!(dialect = self.dialect.name, %sql, "drop unique key");
        sql
    }
}
