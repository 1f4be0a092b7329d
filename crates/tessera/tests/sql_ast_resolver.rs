use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tessera::sql_ast::{
    ColumnReference, Expression, ExpressionKey, FromClauseAccess, NavigablePath,
    SqlExpressionResolver, TableGroup,
};
use tessera_core::{
    err,
    schema::db::{Identifier, QualifiedTableName},
    stmt::Type,
    types::{BasicType, JdbcType},
    TypeConfiguration,
};

fn column(qualifier: &str, name: &str) -> Expression {
    Expression::Column(ColumnReference {
        qualifier: qualifier.to_string(),
        column: Identifier::new(name),
        jdbc_mapping: BasicType::new(Type::String, JdbcType::VarChar),
    })
}

#[test]
fn expressions_are_created_once_per_key() {
    let mut resolver = SqlExpressionResolver::new();
    let key = ExpressionKey::column("p1_0", &Identifier::new("name"));

    let mut calls = 0;
    let first = assert_ok!(resolver.resolve_sql_expression(key.clone(), || {
        calls += 1;
        Ok(column("p1_0", "name"))
    }));
    let second = assert_ok!(resolver.resolve_sql_expression(key, || {
        calls += 1;
        Ok(column("p1_0", "other"))
    }));

    assert_eq!(calls, 1);
    assert_eq!(first, second);
}

#[test]
fn failed_creation_registers_nothing() {
    let mut resolver = SqlExpressionResolver::new();

    assert_err!(resolver.resolve_sql_expression(ExpressionKey::alias("x"), || Err(err!("boom"))));
    assert_eq!(resolver.expression_count(), 0);

    assert_ok!(resolver.resolve_sql_expression(ExpressionKey::alias("x"), || Ok(column("t", "x"))));
    assert_eq!(resolver.expression_count(), 1);
}

#[test]
fn selections_are_numbered_in_request_order() {
    let types = TypeConfiguration::default();
    let mut resolver = SqlExpressionResolver::new();

    let a = assert_ok!(resolver.resolve_sql_selection(column("t", "a"), &Type::String, None, &types));
    let b = assert_ok!(resolver.resolve_sql_selection(column("t", "b"), &Type::String, None, &types));
    let a_again =
        assert_ok!(resolver.resolve_sql_selection(column("t", "a"), &Type::String, None, &types));

    assert_eq!((a.jdbc_position(), a.values_array_position()), (1, 0));
    assert_eq!((b.jdbc_position(), b.values_array_position()), (2, 1));
    assert_eq!(a_again, a);
    assert_eq!(resolver.selections().len(), 2);
}

#[test]
fn result_set_columns_keep_their_position() {
    let types = TypeConfiguration::default();
    let mut resolver = SqlExpressionResolver::new();

    let expression = Expression::ResultSetColumn {
        values_array_position: 4,
        jdbc_mapping: BasicType::new(Type::I64, JdbcType::BigInt),
    };
    let selection =
        assert_ok!(resolver.resolve_sql_selection(expression, &Type::I64, None, &types));

    assert_eq!(selection.values_array_position(), 4);
    assert_eq!(selection.jdbc_position(), 5);
}

fn result_set_column(values_array_position: usize) -> Expression {
    Expression::ResultSetColumn {
        values_array_position,
        jdbc_mapping: BasicType::new(Type::I64, JdbcType::BigInt),
    }
}

#[test]
fn mixed_selections_never_share_a_position() {
    let types = TypeConfiguration::default();
    let mut resolver = SqlExpressionResolver::new();

    let id = assert_ok!(resolver.resolve_sql_selection(
        result_set_column(1),
        &Type::I64,
        None,
        &types
    ));
    let name =
        assert_ok!(resolver.resolve_sql_selection(column("t", "name"), &Type::String, None, &types));
    let kind =
        assert_ok!(resolver.resolve_sql_selection(column("t", "kind"), &Type::String, None, &types));

    let positions: Vec<_> = resolver
        .selections()
        .iter()
        .map(|selection| selection.jdbc_position())
        .collect();
    assert_eq!(positions, [2, 3, 4]);
    assert_eq!(id.values_array_position(), 1);
    assert_eq!(name.values_array_position(), 2);
    assert_eq!(kind.values_array_position(), 3);
}

#[test]
fn result_set_column_cannot_claim_a_taken_position() {
    let types = TypeConfiguration::default();
    let mut resolver = SqlExpressionResolver::new();

    assert_ok!(resolver.resolve_sql_selection(column("t", "name"), &Type::String, None, &types));

    let err = assert_err!(resolver.resolve_sql_selection(
        result_set_column(0),
        &Type::I64,
        None,
        &types
    ));
    assert!(err.is_result_mapping());
    assert_eq!(
        err.to_string(),
        "result mapping error: result column at position 1 is already selected"
    );
    assert_eq!(resolver.selections().len(), 1);
}

#[test]
fn selection_type_must_be_known() {
    struct Unregistered;

    let types = TypeConfiguration::default();
    let mut resolver = SqlExpressionResolver::new();

    let err = assert_err!(resolver.resolve_sql_selection(
        column("t", "a"),
        &Type::of::<Unregistered>(),
        None,
        &types
    ));
    assert!(err.is_unknown_type());
    assert!(resolver.selections().is_empty());
}

#[test]
fn from_clause_tracks_table_groups_by_path() {
    let mut from_clause = FromClauseAccess::default();
    let path = NavigablePath::new("Person");

    assert_none!(from_clause.table_group(&path));

    from_clause.register(TableGroup::new(
        path.clone(),
        QualifiedTableName::new("people"),
        "p1_0",
    ));

    let table_group = assert_some!(from_clause.table_group(&path));
    assert_eq!(table_group.qualifier(), "p1_0");
    assert_eq!(table_group.table(), &QualifiedTableName::new("people"));
    assert!(!from_clause.contains(&path.append("address")));
}
