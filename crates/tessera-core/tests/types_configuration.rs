use std_util::{assert_err, assert_ok};
use tessera_core::{
    stmt::{Type, Value},
    types::{BasicType, JdbcMapping, JdbcType},
    TypeConfiguration,
};

struct Money;

#[test]
fn scalar_descriptors_are_builtin() {
    let types = TypeConfiguration::default();

    let descriptor = assert_ok!(types.descriptor(&Type::I64));
    assert_eq!(descriptor.ty(), &Type::I64);
    assert_eq!(descriptor.recommended_jdbc_type(), Some(JdbcType::BigInt));
}

#[test]
fn object_descriptor_requires_registration() {
    let types = TypeConfiguration::default();
    let err = assert_err!(types.descriptor(&Type::of::<Money>()));
    assert!(err.is_unknown_type());

    let types = TypeConfiguration::builder().register_object::<Money>().build();
    let descriptor = assert_ok!(types.descriptor(&Type::of::<Money>()));
    assert_eq!(descriptor.recommended_jdbc_type(), None);
    assert!(descriptor.name().ends_with("Money"));
}

#[test]
fn resolve_basic_type_without_hint_uses_column_type() {
    let types = TypeConfiguration::default();
    let basic = assert_ok!(types.resolve_basic_type(1, JdbcType::SmallInt, None));
    assert_eq!(basic, BasicType::new(Type::I16, JdbcType::SmallInt));
}

#[test]
fn resolve_basic_type_widens_integers() {
    let types = TypeConfiguration::default();
    let hint = types.descriptor(&Type::I64).unwrap();

    let basic = assert_ok!(types.resolve_basic_type(2, JdbcType::Integer, Some(&hint)));
    assert_eq!(basic.java_type(), &Type::I64);
    assert_eq!(basic.jdbc_type(), JdbcType::Integer);
    assert_eq!(basic.extract(Value::I32(7)).unwrap(), Value::I64(7));
}

#[test]
fn resolve_basic_type_rejects_conflicting_hint() {
    let types = TypeConfiguration::default();
    let hint = types.descriptor(&Type::String).unwrap();

    let err = assert_err!(types.resolve_basic_type(4, JdbcType::Integer, Some(&hint)));
    assert!(err.is_type_mismatch());
    assert_eq!(
        err.to_string(),
        "type mismatch: column 4 of JDBC type INTEGER cannot be read as String"
    );
}

#[test]
fn narrowing_is_not_readable() {
    assert!(!JdbcType::BigInt.can_read_as(&Type::I32));
    assert!(JdbcType::SmallInt.can_read_as(&Type::I64));
    assert!(JdbcType::VarChar.can_read_as(&Type::EntityName));
    assert!(!JdbcType::VarChar.can_read_as(&Type::of::<Money>()));
}

#[test]
fn extract_rejects_wrong_value() {
    let basic = BasicType::new(Type::I32, JdbcType::Integer);
    let err = assert_err!(basic.extract(Value::from("x")));
    assert!(err.is_type_mismatch());
    assert_eq!(basic.extract(Value::Null).unwrap(), Value::Null);
}
