use pretty_assertions::assert_eq;
use std::sync::Arc;
use std_util::prelude::*;
use tessera::{
    results::{BasicResultBuilder, DynamicFetchBuilderLegacy, ResultSetMetadata},
    ConvertedResultBuilder, CreationContext, DynamicResultBuilder, ResultSetMapping,
    SqlAstCreationState,
};
use tessera_core::{
    stmt::{Type, Value},
    types::{AttributeConverter, JdbcType},
    Result,
};

/// Stores booleans as `Y`/`N`.
#[derive(Default)]
struct YesNoConverter;

impl AttributeConverter for YesNoConverter {
    fn to_relational(&self, domain: Value) -> Result<Value> {
        Ok(match domain {
            Value::Bool(true) => Value::from("Y"),
            Value::Bool(false) => Value::from("N"),
            other => other,
        })
    }

    fn to_domain(&self, relational: Value) -> Result<Value> {
        Ok(match relational.as_str() {
            Some("Y") => Value::Bool(true),
            Some("N") => Value::Bool(false),
            _ => Value::Null,
        })
    }
}

fn metadata() -> ResultSetMetadata {
    ResultSetMetadata::new()
        .column("id", JdbcType::SmallInt)
        .column("active", JdbcType::Char)
        .column("name", JdbcType::VarChar)
}

fn active_builder(cx: &CreationContext) -> ConvertedResultBuilder {
    ConvertedResultBuilder::with_converter(
        Some("active"),
        &Type::Bool,
        &Type::String,
        YesNoConverter,
        cx,
    )
    .unwrap()
}

#[test]
fn empty_mapping_returns_every_column() {
    let cx = Arc::new(CreationContext::default());
    let mut state = SqlAstCreationState::new(cx);

    let mapping = ResultSetMapping::new();
    let resolved = assert_ok!(mapping.resolve(&metadata(), &mut state));

    let types: Vec<_> = resolved
        .results()
        .iter()
        .map(|result| (result.values_array_position(), result.java_type().clone()))
        .collect();
    assert_eq!(types, [(0, Type::I16), (1, Type::String), (2, Type::String)]);

    let row = [Value::I16(7), Value::from("Y"), Value::from("ada")];
    assert_eq!(
        assert_ok!(resolved.assemble_row(&row)),
        [Value::I16(7), Value::from("Y"), Value::from("ada")]
    );
}

#[test]
fn builders_resolve_in_order() {
    let cx = Arc::new(CreationContext::default());
    let mut state = SqlAstCreationState::new(cx.clone());

    let mut mapping = ResultSetMapping::new();
    mapping
        .add_result_builder(BasicResultBuilder::new(Some("name")))
        .add_result_builder(active_builder(&cx))
        .add_result_builder(BasicResultBuilder::new(Some("id")).with_type(Type::I64));

    let resolved = assert_ok!(mapping.resolve(&metadata(), &mut state));

    let positions: Vec<_> = resolved
        .results()
        .iter()
        .map(|result| result.values_array_position())
        .collect();
    assert_eq!(positions, [2, 1, 0]);

    let jdbc_positions: Vec<_> = resolved
        .selections()
        .iter()
        .map(|selection| selection.jdbc_position())
        .collect();
    assert_eq!(jdbc_positions, [3, 2, 1]);

    let row = [Value::I16(7), Value::from("N"), Value::from("ada")];
    assert_eq!(
        assert_ok!(resolved.assemble_row(&row)),
        [Value::from("ada"), Value::Bool(false), Value::I64(7)]
    );
}

#[test]
fn short_row_is_a_result_mapping_error() {
    let cx = Arc::new(CreationContext::default());
    let mut state = SqlAstCreationState::new(cx);

    let mut mapping = ResultSetMapping::new();
    mapping.add_result_builder(BasicResultBuilder::new(Some("name")));
    let resolved = assert_ok!(mapping.resolve(&metadata(), &mut state));

    let err = assert_err!(resolved.assemble_row(&[Value::I16(7)]));
    assert!(err.is_result_mapping());
}

#[test]
fn equal_mappings_are_equal_cache_keys() {
    let cx = Arc::new(CreationContext::default());

    let build = || {
        let mut mapping = ResultSetMapping::new();
        mapping
            .add_result_builder(active_builder(&cx))
            .add_result_builder(BasicResultBuilder::new(None));
        mapping
    };

    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(a.cache_key_instance(), b);

    let mut c = build();
    c.add_result_builder(BasicResultBuilder::new(Some("name")));
    assert_ne!(a, c);
}

#[test]
fn dynamic_builder_accessors() {
    let cx = Arc::new(CreationContext::default());

    let converted = DynamicResultBuilder::from(active_builder(&cx));
    assert_eq!(converted.column_alias(), Some("active"));
    assert_eq!(converted.java_type(), Some(&Type::Bool));

    let basic = DynamicResultBuilder::from(BasicResultBuilder::new(None));
    assert_eq!(basic.column_alias(), None);
    assert_eq!(basic.java_type(), None);
    assert_eq!(basic.cache_key_instance(), basic);
}

#[test]
fn legacy_fetch_builders_are_looked_up_by_owner_and_attribute() {
    let mut mapping = ResultSetMapping::new();
    mapping
        .add_legacy_fetch_builder(
            DynamicFetchBuilderLegacy::new("o", "c", "orders").column("order_id"),
        )
        .add_legacy_fetch_builder(DynamicFetchBuilderLegacy::new("a", "c", "address"))
        .add_legacy_fetch_builder(
            DynamicFetchBuilderLegacy::new("o2", "c", "orders").column("id"),
        );

    let fetches = mapping.legacy_fetch_builders();
    assert_eq!(fetches.len(), 2);

    let orders = assert_some!(fetches.resolve("c", "orders"));
    assert_eq!(orders.table_alias(), "o2");
    assert_eq!(orders.column_names(), ["id".to_string()]);

    assert_none!(fetches.resolve("o", "orders"));
}
