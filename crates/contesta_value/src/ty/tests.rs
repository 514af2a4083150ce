use pretty_assertions::assert_eq;

use super::*;
use crate::value::{IntoValue, StaticType};

#[test]
fn test_type_display() {
    assert_eq!(Type::Int(IntTy::I32).to_string(), "i32");
    assert_eq!(Type::Uint(UintTy::Usize).to_string(), "usize");
    assert_eq!(Type::Str.to_string(), "String");
    assert_eq!(Type::list(Type::Bool).to_string(), "Vec<bool>");
    assert_eq!(
        Type::map(Type::Str, Type::map(Type::Str, Type::Int(IntTy::I64))).to_string(),
        "Map<String, Map<String, i64>>"
    );
    assert_eq!(Type::option(Type::Char).to_string(), "Option<char>");
}

#[test]
fn test_kind_names() {
    assert_eq!(Type::Int(IntTy::Isize).kind().to_string(), "int");
    assert_eq!(Type::Int(IntTy::I8).kind().to_string(), "int8");
    assert_eq!(Type::Uint(UintTy::Usize).kind().to_string(), "uint");
    assert_eq!(Type::Uint(UintTy::U64).kind().to_string(), "uint64");
    assert_eq!(Type::Float(FloatTy::F32).kind().to_string(), "float32");
    assert_eq!(Type::Complex(ComplexTy::C128).kind().to_string(), "complex128");
    assert_eq!(Type::Str.kind().to_string(), "string");
    assert_eq!(Type::map(Type::Str, Type::Bool).kind().to_string(), "map");
}

#[test]
fn test_unsized_width_is_pointer_width() {
    assert_eq!(IntTy::Isize.bits(), usize::BITS);
    assert_eq!(UintTy::Usize.bits(), usize::BITS);
}

#[test]
fn test_zero_values() {
    assert_eq!(Type::Int(IntTy::I16).zero_value().to_string(), "0");
    assert_eq!(Type::Str.zero_value().to_string(), "\"\"");
    assert!(Type::map(Type::Str, Type::Bool).zero_value().is_typed_nil());
    assert!(Type::option(Type::Bool).zero_value().is_typed_nil());
    assert_eq!(Type::Bool.zero_value().ty(), Type::Bool);
}

#[test]
fn test_struct_zero_value() {
    let point = Value::record("Point").field("x", 3_i32).field("label", "p");
    let ty = point.ty();
    let zero = Type::Struct(ty.clone()).zero_value();
    assert_eq!(zero.to_string(), "Point { x: 0, label: \"\" }");
    assert_eq!(zero.ty(), Type::Struct(ty));
}

#[test]
fn test_same_layout_ignores_name() {
    let a = Value::record("A").field("x", 1_i32).ty();
    let b = Value::record("B").field("x", 2_i32).ty();
    let c = Value::record("C").field("x", 2_i64).ty();
    assert!(a.same_layout(&b));
    assert!(!a.same_layout(&c));
}

#[test]
fn test_static_type_matches_value_type() {
    assert_eq!(Vec::<Option<u16>>::static_type(), vec![Some(1_u16)].into_value().ty());
    assert_eq!(String::static_type(), "s".into_value().ty());
}

#[test]
fn test_nilable() {
    assert!(Type::Bytes.is_nilable());
    assert!(Type::list(Type::Bool).is_nilable());
    assert!(!Type::Str.is_nilable());
    assert!(!Type::Nil.is_nilable());
}
