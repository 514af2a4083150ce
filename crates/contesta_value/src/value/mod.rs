//! Runtime values compared by assertions.
//!
//! Nil-capable values (`Bytes`, lists, maps, options) distinguish nil from
//! empty the way the equality testers expect: a nil map is not an empty map,
//! and an untyped [`Value::Nil`] is not a typed nil.

mod convert;

use std::fmt;

use crate::ty::{ComplexTy, FloatTy, IntTy, StructTy, Type, UintTy};

pub use convert::{Bytes, IntoValue, StaticType};

/// A complex number with real and imaginary parts of type `F`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Complex<F> {
    pub re: F,
    pub im: F,
}

impl<F> Complex<F> {
    pub const fn new(re: F, im: F) -> Self {
        Complex { re, im }
    }
}

impl<F: fmt::Debug> fmt::Display for Complex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}+{:?}i)", self.re, self.im)
    }
}

/// A typed numeric scalar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    C64(Complex<f32>),
    C128(Complex<f64>),
}

impl Number {
    pub fn ty(&self) -> Type {
        match self {
            Number::I8(_) => Type::Int(IntTy::I8),
            Number::I16(_) => Type::Int(IntTy::I16),
            Number::I32(_) => Type::Int(IntTy::I32),
            Number::I64(_) => Type::Int(IntTy::I64),
            Number::Isize(_) => Type::Int(IntTy::Isize),
            Number::U8(_) => Type::Uint(UintTy::U8),
            Number::U16(_) => Type::Uint(UintTy::U16),
            Number::U32(_) => Type::Uint(UintTy::U32),
            Number::U64(_) => Type::Uint(UintTy::U64),
            Number::Usize(_) => Type::Uint(UintTy::Usize),
            Number::F32(_) => Type::Float(FloatTy::F32),
            Number::F64(_) => Type::Float(FloatTy::F64),
            Number::C64(_) => Type::Complex(ComplexTy::C64),
            Number::C128(_) => Type::Complex(ComplexTy::C128),
        }
    }

    pub(crate) fn zero_int(ty: IntTy) -> Self {
        match ty {
            IntTy::I8 => Number::I8(0),
            IntTy::I16 => Number::I16(0),
            IntTy::I32 => Number::I32(0),
            IntTy::I64 => Number::I64(0),
            IntTy::Isize => Number::Isize(0),
        }
    }

    pub(crate) fn zero_uint(ty: UintTy) -> Self {
        match ty {
            UintTy::U8 => Number::U8(0),
            UintTy::U16 => Number::U16(0),
            UintTy::U32 => Number::U32(0),
            UintTy::U64 => Number::U64(0),
            UintTy::Usize => Number::Usize(0),
        }
    }

    pub(crate) fn zero_complex(ty: ComplexTy) -> Self {
        match ty {
            ComplexTy::C64 => Number::C64(Complex::new(0.0, 0.0)),
            ComplexTy::C128 => Number::C128(Complex::new(0.0, 0.0)),
        }
    }

    /// The value of a signed integer, widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::I8(n) => Some(i64::from(n)),
            Number::I16(n) => Some(i64::from(n)),
            Number::I32(n) => Some(i64::from(n)),
            Number::I64(n) => Some(n),
            Number::Isize(n) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    /// The value of an unsigned integer, widened to `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::U8(n) => Some(u64::from(n)),
            Number::U16(n) => Some(u64::from(n)),
            Number::U32(n) => Some(u64::from(n)),
            Number::U64(n) => Some(n),
            Number::Usize(n) => u64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Whether this is the zero of its type.
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::F32(n) => n == 0.0,
            Number::F64(n) => n == 0.0,
            Number::C64(c) => c.re == 0.0 && c.im == 0.0,
            Number::C128(c) => c.re == 0.0 && c.im == 0.0,
            _ => self.as_i64() == Some(0) || self.as_u64() == Some(0),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => write!(f, "{n}"),
            Number::I16(n) => write!(f, "{n}"),
            Number::I32(n) => write!(f, "{n}"),
            Number::I64(n) => write!(f, "{n}"),
            Number::Isize(n) => write!(f, "{n}"),
            Number::U8(n) => write!(f, "{n}"),
            Number::U16(n) => write!(f, "{n}"),
            Number::U32(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::Usize(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: `42.0`, not `42`.
            Number::F32(n) => write!(f, "{n:?}"),
            Number::F64(n) => write!(f, "{n:?}"),
            Number::C64(c) => write!(f, "{c}"),
            Number::C128(c) => write!(f, "{c}"),
        }
    }
}

/// A typed, nil-capable sequence.
#[derive(Clone, Debug)]
pub struct ListValue {
    pub elem: Type,
    pub items: Option<Vec<Value>>,
}

impl ListValue {
    pub fn new(elem: Type, items: Vec<Value>) -> Self {
        ListValue {
            elem,
            items: Some(items),
        }
    }

    pub fn nil(elem: Type) -> Self {
        ListValue { elem, items: None }
    }
}

/// A typed, nil-capable mapping.
///
/// Entries keep insertion order; keys are found by structural equality.
#[derive(Clone, Debug)]
pub struct MapValue {
    pub key: Type,
    pub value: Type,
    pub entries: Option<Vec<(Value, Value)>>,
}

impl MapValue {
    pub fn new(key: Type, value: Type, entries: Vec<(Value, Value)>) -> Self {
        MapValue {
            key,
            value,
            entries: Some(entries),
        }
    }

    pub fn nil(key: Type, value: Type) -> Self {
        MapValue {
            key,
            value,
            entries: None,
        }
    }

    /// Entries of the map. A nil map has none.
    pub fn entries(&self) -> &[(Value, Value)] {
        self.entries.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// A typed nullable reference (`Option<T>`).
#[derive(Clone, Debug)]
pub struct OptionValue {
    pub inner_ty: Type,
    pub inner: Option<Box<Value>>,
}

impl OptionValue {
    pub fn some(inner_ty: Type, value: Value) -> Self {
        OptionValue {
            inner_ty,
            inner: Some(Box::new(value)),
        }
    }

    pub fn none(inner_ty: Type) -> Self {
        OptionValue {
            inner_ty,
            inner: None,
        }
    }
}

/// A named record with ordered fields.
#[derive(Clone, Debug)]
pub struct StructValue {
    pub name: String,
    pub fields: Vec<(String, Value)>,
}

impl StructValue {
    pub fn new(name: impl Into<String>, fields: Vec<(String, Value)>) -> Self {
        StructValue {
            name: name.into(),
            fields,
        }
    }

    /// Add a field, builder style.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl IntoValue) -> Self {
        self.fields.push((name.into(), value.into_value()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(field, value)| (field == name).then_some(value))
    }

    pub fn ty(&self) -> StructTy {
        StructTy {
            name: self.name.clone(),
            fields: self
                .fields
                .iter()
                .map(|(name, value)| (name.clone(), value.ty()))
                .collect(),
        }
    }
}

/// A runtime value under test.
#[derive(Clone, Debug)]
pub enum Value {
    /// Untyped absence. Distinct from a typed nil such as `None::<i32>`.
    Nil,
    Bool(bool),
    Char(char),
    Number(Number),
    Str(String),
    /// A byte buffer. `None` is a nil buffer.
    Bytes(Option<Vec<u8>>),
    List(ListValue),
    Map(MapValue),
    Option(OptionValue),
    Struct(StructValue),
}

impl Value {
    /// Start building a record value.
    pub fn record(name: impl Into<String>) -> StructValue {
        StructValue::new(name, Vec::new())
    }

    /// The zero value of `T`: nil for nil-capable types.
    ///
    /// `Value::nil_of::<HashMap<String, i32>>()` is a nil map, the analogue of
    /// a declared but unassigned map variable.
    pub fn nil_of<T: StaticType>() -> Self {
        T::static_type().zero_value()
    }

    pub fn complex64(re: f32, im: f32) -> Self {
        Value::Number(Number::C64(Complex::new(re, im)))
    }

    pub fn complex128(re: f64, im: f64) -> Self {
        Value::Number(Number::C128(Complex::new(re, im)))
    }

    /// The structural type of this value.
    pub fn ty(&self) -> Type {
        match self {
            Value::Nil => Type::Nil,
            Value::Bool(_) => Type::Bool,
            Value::Char(_) => Type::Char,
            Value::Number(n) => n.ty(),
            Value::Str(_) => Type::Str,
            Value::Bytes(_) => Type::Bytes,
            Value::List(list) => Type::list(list.elem.clone()),
            Value::Map(map) => Type::map(map.key.clone(), map.value.clone()),
            Value::Option(opt) => Type::option(opt.inner_ty.clone()),
            Value::Struct(st) => Type::Struct(st.ty()),
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is a nil of a nil-capable type, or a zero-valued record.
    ///
    /// The untyped [`Value::Nil`] is not included; callers treat that case
    /// separately.
    pub fn is_typed_nil(&self) -> bool {
        match self {
            Value::Bytes(bytes) => bytes.is_none(),
            Value::List(list) => list.items.is_none(),
            Value::Map(map) => map.entries.is_none(),
            Value::Option(opt) => opt.inner.is_none(),
            Value::Struct(st) => st.fields.iter().all(|(_, value)| value.is_zero()),
            _ => false,
        }
    }

    /// Whether this is the zero value of its type.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Bool(b) => !b,
            Value::Char(c) => *c == '\0',
            Value::Number(n) => n.is_zero(),
            Value::Str(s) => s.is_empty(),
            Value::Bytes(_)
            | Value::List(_)
            | Value::Map(_)
            | Value::Option(_)
            | Value::Struct(_) => self.is_typed_nil(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Bytes(None) | Value::List(ListValue { items: None, .. }) => write!(f, "nil"),
            Value::Bytes(Some(bytes)) => write!(f, "{bytes:?}"),
            Value::List(ListValue {
                items: Some(items), ..
            }) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => match &map.entries {
                None => write!(f, "nil"),
                Some(entries) => {
                    write!(f, "{{")?;
                    for (i, (key, value)) in entries.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{key}: {value}")?;
                    }
                    write!(f, "}}")
                }
            },
            Value::Option(opt) => match &opt.inner {
                None => write!(f, "None"),
                Some(inner) => write!(f, "Some({inner})"),
            },
            Value::Struct(st) => {
                write!(f, "{} {{", st.name)?;
                for (i, (name, value)) in st.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {name}: {value}")?;
                }
                if st.fields.is_empty() {
                    write!(f, "}}")
                } else {
                    write!(f, " }}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
