use tessera_core::stmt::{Type, Value};

#[test]
fn widening_casts() {
    assert_eq!(Value::I16(3).cast(&Type::I64).unwrap(), Value::I64(3));
    assert_eq!(Value::I32(-1).cast(&Type::I64).unwrap(), Value::I64(-1));
    assert_eq!(Value::I32(9).cast(&Type::I32).unwrap(), Value::I32(9));
}

#[test]
fn narrowing_is_rejected() {
    let err = Value::I64(3).cast(&Type::I32).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn strings_are_entity_names() {
    assert!(Value::from("Dog").is_a(&Type::EntityName));
    assert!(!Value::I32(1).is_a(&Type::EntityName));
}

#[test]
fn null_is_an_instance_of_everything() {
    for ty in [Type::Bool, Type::I64, Type::String, Type::of::<u8>()] {
        assert!(Value::Null.is_a(&ty));
    }
}

#[test]
fn objects_compare_by_identity() {
    let a = Value::object(5u8);
    let b = Value::object(5u8);
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    assert!(a.is_a(&Type::of::<u8>()));
    assert!(!a.is_a(&Type::of::<u16>()));
}
