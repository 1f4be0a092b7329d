use pretty_assertions::assert_eq;
use tessera_core::{
    schema::db::{Column, QualifiedTableName, Table},
    stmt::Direction,
    types::JdbcType,
};
use tessera_sql::{Dialect, SqlStringGenerationContext, UniqueDelegate, UniqueStrategy};

fn accounts() -> Table {
    Table::builder(QualifiedTableName::new("accounts"))
        .column(Column::new("id", JdbcType::BigInt).not_null())
        .column(Column::new("login", JdbcType::VarChar).unique())
        .column(Column::new("region", JdbcType::Char))
        .unique_key("uk_login", &["login"])
        .unique_key_ordered(
            "uk_region_login",
            [("region", None), ("login", Some(Direction::Asc))],
        )
        .build()
        .unwrap()
}

#[test]
fn sqlite_declares_constraints_in_create_table() {
    assert_eq!(Dialect::SQLITE.unique_strategy, UniqueStrategy::CreateTable);

    let table = accounts();
    let context = SqlStringGenerationContext::new();
    let delegate = UniqueDelegate::new(Dialect::SQLITE);

    assert_eq!(
        delegate.table_creation_unique_constraints_fragment(&table, &context),
        ", constraint uk_login unique (login), constraint uk_region_login unique (region, login asc)"
    );
    assert_eq!(
        delegate.alter_table_add_unique_key(&table.unique_keys[0], &context),
        ""
    );
}

#[test]
fn column_fragment_reflects_unique_flag() {
    let table = accounts();
    let context = SqlStringGenerationContext::new();
    let delegate = UniqueDelegate::new(Dialect::SQLITE);

    assert_eq!(
        delegate.column_definition_uniqueness_fragment(table.column("login").unwrap(), &context),
        " unique"
    );
    assert_eq!(
        delegate.column_definition_uniqueness_fragment(table.column("region").unwrap(), &context),
        ""
    );
}
