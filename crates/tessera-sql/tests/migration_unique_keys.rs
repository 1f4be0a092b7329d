use pretty_assertions::assert_eq;
use tessera_core::{
    schema::db::{Column, QualifiedTableName, Table},
    types::JdbcType,
};
use tessera_sql::{Dialect, SqlStringGenerationContext, UniqueDelegate, UniqueKeyStatements};

fn tables() -> Vec<Table> {
    vec![
        Table::builder(QualifiedTableName::new("users"))
            .column(Column::new("email", JdbcType::VarChar))
            .column(Column::new("handle", JdbcType::VarChar))
            .unique_key("uk_email", &["email"])
            .unique_key("uk_handle", &["handle"])
            .build()
            .unwrap(),
        Table::builder(QualifiedTableName::new("teams"))
            .column(Column::new("slug", JdbcType::VarChar))
            .unique_key("uk_slug", &["slug"])
            .build()
            .unwrap(),
    ]
}

#[test]
fn create_for_tables_in_order() {
    let context = SqlStringGenerationContext::new();
    let statements = UniqueKeyStatements::new(UniqueDelegate::new(Dialect::ANSI), &context);

    assert_eq!(
        statements.create_for(&tables()),
        [
            "alter table users add constraint uk_email unique (email)",
            "alter table users add constraint uk_handle unique (handle)",
            "alter table teams add constraint uk_slug unique (slug)",
        ]
    );
}

#[test]
fn drop_for_tables_in_order() {
    let context = SqlStringGenerationContext::new();
    let statements = UniqueKeyStatements::new(UniqueDelegate::new(Dialect::POSTGRESQL), &context);

    assert_eq!(
        statements.drop_for(&tables()),
        [
            "alter table if exists users drop constraint if exists uk_email",
            "alter table if exists users drop constraint if exists uk_handle",
            "alter table if exists teams drop constraint if exists uk_slug",
        ]
    );
}

#[test]
fn create_table_strategy_emits_no_alter_commands() {
    let context = SqlStringGenerationContext::new();
    let statements = UniqueKeyStatements::new(UniqueDelegate::new(Dialect::SQLITE), &context);

    assert!(statements.create_for(&tables()).is_empty());
}
