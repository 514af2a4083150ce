use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_number_types() {
    assert_eq!(42_i8.into_value().ty(), Type::Int(IntTy::I8));
    assert_eq!(42_usize.into_value().ty(), Type::Uint(UintTy::Usize));
    assert_eq!(1.5_f32.into_value().ty(), Type::Float(FloatTy::F32));
    assert_eq!(Value::complex128(1.0, 2.0).ty(), Type::Complex(ComplexTy::C128));
}

#[test]
fn test_typed_nils_keep_their_type() {
    let none = Option::<String>::None.into_value();
    assert_eq!(none.ty(), Type::option(Type::Str));
    assert!(none.is_typed_nil());

    let empty = Vec::<u8>::new().into_value();
    assert_eq!(empty.ty(), Type::list(Type::Uint(UintTy::U8)));
    assert!(!empty.is_typed_nil());

    let nil_map = Value::nil_of::<HashMap<String, i32>>();
    assert_eq!(nil_map.ty(), Type::map(Type::Str, Type::Int(IntTy::I32)));
    assert!(nil_map.is_typed_nil());
}

#[test]
fn test_untyped_nil_is_not_typed_nil() {
    assert!(!Value::Nil.is_typed_nil());
    assert_eq!(Value::Nil.ty(), Type::Nil);
}

#[test]
fn test_zero_valued_record_counts_as_nil() {
    let zero = Value::record("Point").field("x", 0_i32).field("y", 0_i32);
    assert!(Value::Struct(zero).is_typed_nil());

    let point = Value::record("Point").field("x", 1_i32).field("y", 0_i32);
    assert!(!Value::Struct(point).is_typed_nil());
}

#[test]
fn test_map_entries_keep_insertion_order() {
    let map = BTreeMap::from([("b", 2_i64), ("a", 1_i64)]).into_value();
    let keys: Vec<String> = map
        .as_map()
        .map(|m| m.entries().iter().map(|(k, _)| k.to_string()).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["\"a\"", "\"b\""]);
}

#[test]
fn test_bytes_are_not_lists() {
    assert_eq!(Bytes::new(*b"abc").into_value().ty(), Type::Bytes);
    assert_eq!(
        vec![1_u8, 2].into_value().ty(),
        Type::list(Type::Uint(UintTy::U8))
    );
    assert!(Bytes::nil().into_value().is_typed_nil());
}

#[test]
fn test_value_display() {
    assert_eq!(42_i32.into_value().to_string(), "42");
    assert_eq!(42.0_f64.into_value().to_string(), "42.0");
    assert_eq!("hi".into_value().to_string(), "\"hi\"");
    assert_eq!('x'.into_value().to_string(), "'x'");
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(vec![1_u8, 2].into_value().to_string(), "[1, 2]");
    assert_eq!(Some(3_i32).into_value().to_string(), "Some(3)");
    assert_eq!(Option::<i32>::None.into_value().to_string(), "None");
    assert_eq!(Value::nil_of::<Vec<i32>>().to_string(), "nil");
    assert_eq!(Value::complex64(1.0, 2.0).to_string(), "(1.0+2.0i)");
    assert_eq!(
        BTreeMap::from([("a", 1_i32)]).into_value().to_string(),
        "{\"a\": 1}"
    );
    assert_eq!(
        Value::Struct(Value::record("Point").field("x", 1_i32).field("y", 2_i32)).to_string(),
        "Point { x: 1, y: 2 }"
    );
}

#[test]
fn test_struct_get() {
    let point = Value::record("Point").field("x", 1_i32);
    assert_eq!(point.get("x").map(ToString::to_string), Some("1".to_owned()));
    assert!(point.get("z").is_none());
}
