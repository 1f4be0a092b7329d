use std_util::assert_err;
use tessera_core::{
    schema::db::{Column, Identifier, QualifiedTableName, Table},
    stmt::Direction,
    types::JdbcType,
};

fn users() -> tessera_core::schema::db::TableBuilder {
    Table::builder(QualifiedTableName::new("users"))
        .column(Column::new("id", JdbcType::BigInt).not_null())
        .column(Column::new("email", JdbcType::VarChar))
        .column(Column::new("tenant", JdbcType::Integer))
        .column(Column::new("`order`", JdbcType::Integer))
}

#[test]
fn unique_key_keeps_declared_column_order() {
    let table = users()
        .unique_key("uk_tenant_email", &["tenant", "email"])
        .build()
        .unwrap();

    let key = table.unique_key("uk_tenant_email").unwrap();
    let names: Vec<_> = key.columns.iter().map(|c| c.name.text()).collect();
    assert_eq!(names, ["tenant", "email"]);
    assert!(key.column_order.is_empty());
    assert_eq!(key.table, QualifiedTableName::new("users"));
}

#[test]
fn unique_key_records_sparse_order() {
    let table = users()
        .unique_key_ordered(
            "uk_ordered",
            [
                ("email", None),
                ("tenant", Some(Direction::Desc)),
                ("id", None),
            ],
        )
        .build()
        .unwrap();

    let key = &table.unique_keys[0];
    assert_eq!(key.column_order.len(), 1);
    assert_eq!(key.order_of(&key.columns[0]), None);
    assert_eq!(key.order_of(&key.columns[1]), Some(Direction::Desc));
    assert_eq!(key.order_of(&key.columns[2]), None);
}

#[test]
fn quoted_column_names_resolve() {
    let table = users().unique_key("uk_order", &["`order`"]).build().unwrap();

    let key = &table.unique_keys[0];
    assert!(key.columns[0].is_quoted());
    assert_eq!(key.columns[0].name, Identifier::quoted("order"));
}

#[test]
fn empty_unique_key_is_accepted() {
    let table = users().unique_key("uk_empty", &[]).build().unwrap();
    assert!(table.unique_keys[0].columns.is_empty());
}

#[test]
fn duplicate_unique_key_name_is_rejected() {
    let err = assert_err!(users()
        .unique_key("uk_email", &["email"])
        .unique_key("uk_email", &["tenant"])
        .build());

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate unique key `uk_email` on table `users`"
    );
}

#[test]
fn unknown_column_is_rejected() {
    let err = assert_err!(users().unique_key("uk_missing", &["missing"]).build());

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: unique key `uk_missing` references unknown column `missing` on table `users`"
    );
}

#[test]
fn qualified_name_display() {
    let name = QualifiedTableName::new("users")
        .with_schema("app")
        .with_catalog("`Main`");
    assert_eq!(name.to_string(), "`Main`.app.users");
    assert_eq!(name.parts().count(), 3);
}
