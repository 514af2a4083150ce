//! Lowering native Rust values into [`Value`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{ListValue, MapValue, Number, OptionValue, StructValue, Value};
use crate::ty::{FloatTy, IntTy, Type, UintTy};

/// Conversion into a runtime [`Value`].
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Types whose [`Type`] is known without a value in hand.
///
/// Container conversions need this for their element types so that an empty
/// `Vec<u8>` is still a `Vec<u8>`.
pub trait StaticType {
    fn static_type() -> Type;
}

/// A byte buffer.
///
/// `Vec<u8>` lowers to a list of `u8`; wrap it in `Bytes` to get a byte
/// buffer compared by content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bytes(pub Option<Vec<u8>>);

impl Bytes {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Bytes(Some(bytes.into()))
    }

    /// A nil buffer.
    pub const fn nil() -> Self {
        Bytes(None)
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for StructValue {
    fn into_value(self) -> Value {
        Value::Struct(self)
    }
}

macro_rules! number_values {
    ($($ty:ty => $variant:ident, $static:expr;)*) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::Number(Number::$variant(self))
                }
            }

            impl StaticType for $ty {
                fn static_type() -> Type {
                    $static
                }
            }
        )*
    };
}

number_values! {
    i8 => I8, Type::Int(IntTy::I8);
    i16 => I16, Type::Int(IntTy::I16);
    i32 => I32, Type::Int(IntTy::I32);
    i64 => I64, Type::Int(IntTy::I64);
    isize => Isize, Type::Int(IntTy::Isize);
    u8 => U8, Type::Uint(UintTy::U8);
    u16 => U16, Type::Uint(UintTy::U16);
    u32 => U32, Type::Uint(UintTy::U32);
    u64 => U64, Type::Uint(UintTy::U64);
    usize => Usize, Type::Uint(UintTy::Usize);
    f32 => F32, Type::Float(FloatTy::F32);
    f64 => F64, Type::Float(FloatTy::F64);
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl StaticType for bool {
    fn static_type() -> Type {
        Type::Bool
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Char(self)
    }
}

impl StaticType for char {
    fn static_type() -> Type {
        Type::Char
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_owned())
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::Str(self.clone())
    }
}

impl StaticType for String {
    fn static_type() -> Type {
        Type::Str
    }
}

impl StaticType for &str {
    fn static_type() -> Type {
        Type::Str
    }
}

impl IntoValue for Bytes {
    fn into_value(self) -> Value {
        Value::Bytes(self.0)
    }
}

impl StaticType for Bytes {
    fn static_type() -> Type {
        Type::Bytes
    }
}

impl<T: IntoValue + StaticType> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(ListValue::new(
            T::static_type(),
            self.into_iter().map(IntoValue::into_value).collect(),
        ))
    }
}

impl<T: StaticType> StaticType for Vec<T> {
    fn static_type() -> Type {
        Type::list(T::static_type())
    }
}

impl<T: IntoValue + StaticType> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(inner) => Value::Option(OptionValue::some(T::static_type(), inner.into_value())),
            None => Value::Option(OptionValue::none(T::static_type())),
        }
    }
}

impl<T: StaticType> StaticType for Option<T> {
    fn static_type() -> Type {
        Type::option(T::static_type())
    }
}

impl<K, V, S> IntoValue for HashMap<K, V, S>
where
    K: IntoValue + StaticType,
    V: IntoValue + StaticType,
    S: BuildHasher,
{
    fn into_value(self) -> Value {
        map_value::<K, V>(self)
    }
}

impl<K: StaticType, V: StaticType, S> StaticType for HashMap<K, V, S> {
    fn static_type() -> Type {
        Type::map(K::static_type(), V::static_type())
    }
}

impl<K, V> IntoValue for BTreeMap<K, V>
where
    K: IntoValue + StaticType,
    V: IntoValue + StaticType,
{
    fn into_value(self) -> Value {
        map_value::<K, V>(self)
    }
}

impl<K: StaticType, V: StaticType> StaticType for BTreeMap<K, V> {
    fn static_type() -> Type {
        Type::map(K::static_type(), V::static_type())
    }
}

fn map_value<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
where
    K: IntoValue + StaticType,
    V: IntoValue + StaticType,
{
    Value::Map(MapValue::new(
        K::static_type(),
        V::static_type(),
        entries
            .into_iter()
            .map(|(k, v)| (k.into_value(), v.into_value()))
            .collect(),
    ))
}
