//! Type descriptors for runtime values.
//!
//! A [`Type`] is the structural identity of a value: two values have the same
//! type exactly when their `Type`s compare equal. [`Kind`] is the coarse
//! family used in user-facing messages ("expected a map but got an int").

use std::fmt;

use crate::value::{ListValue, MapValue, Number, OptionValue, StructValue, Value};

/// Bit width of `isize` and `usize` on the current target.
///
/// Unsized integers take this width when their numeric family is analysed.
/// It is fixed per target, never derived from data.
pub const POINTER_WIDTH: u32 = usize::BITS;

/// Signed integer types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntTy {
    I8,
    I16,
    I32,
    I64,
    Isize,
}

impl IntTy {
    /// Width in bits. `Isize` uses [`POINTER_WIDTH`].
    pub const fn bits(self) -> u32 {
        match self {
            IntTy::I8 => 8,
            IntTy::I16 => 16,
            IntTy::I32 => 32,
            IntTy::I64 => 64,
            IntTy::Isize => POINTER_WIDTH,
        }
    }

    fn name(self) -> &'static str {
        match self {
            IntTy::I8 => "i8",
            IntTy::I16 => "i16",
            IntTy::I32 => "i32",
            IntTy::I64 => "i64",
            IntTy::Isize => "isize",
        }
    }
}

/// Unsigned integer types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UintTy {
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl UintTy {
    /// Width in bits. `Usize` uses [`POINTER_WIDTH`].
    pub const fn bits(self) -> u32 {
        match self {
            UintTy::U8 => 8,
            UintTy::U16 => 16,
            UintTy::U32 => 32,
            UintTy::U64 => 64,
            UintTy::Usize => POINTER_WIDTH,
        }
    }

    fn name(self) -> &'static str {
        match self {
            UintTy::U8 => "u8",
            UintTy::U16 => "u16",
            UintTy::U32 => "u32",
            UintTy::U64 => "u64",
            UintTy::Usize => "usize",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FloatTy {
    F32,
    F64,
}

impl FloatTy {
    pub const fn bits(self) -> u32 {
        match self {
            FloatTy::F32 => 32,
            FloatTy::F64 => 64,
        }
    }
}

/// Complex types, named by total width like `complex64` (two `f32`s).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComplexTy {
    C64,
    C128,
}

impl ComplexTy {
    pub const fn bits(self) -> u32 {
        match self {
            ComplexTy::C64 => 64,
            ComplexTy::C128 => 128,
        }
    }
}

/// Shape of a named record: its name and ordered, typed fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructTy {
    pub name: String,
    pub fields: Vec<(String, Type)>,
}

impl StructTy {
    /// Whether `other` has the same fields (names, order and types),
    /// regardless of the record name.
    pub fn same_layout(&self, other: &StructTy) -> bool {
        self.fields == other.fields
    }
}

/// Structural type of a [`Value`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// The type of the untyped absence [`Value::Nil`].
    Nil,
    Bool,
    Char,
    Int(IntTy),
    Uint(UintTy),
    Float(FloatTy),
    Complex(ComplexTy),
    Str,
    Bytes,
    List(Box<Type>),
    Map(Box<Type>, Box<Type>),
    Option(Box<Type>),
    Struct(StructTy),
}

impl Type {
    pub fn list(elem: Type) -> Self {
        Type::List(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(Box::new(key), Box::new(value))
    }

    pub fn option(inner: Type) -> Self {
        Type::Option(Box::new(inner))
    }

    /// The coarse kind of this type.
    pub fn kind(&self) -> Kind {
        match self {
            Type::Nil => Kind::Nil,
            Type::Bool => Kind::Bool,
            Type::Char => Kind::Char,
            Type::Int(ty) => Kind::Int(*ty),
            Type::Uint(ty) => Kind::Uint(*ty),
            Type::Float(ty) => Kind::Float(*ty),
            Type::Complex(ty) => Kind::Complex(*ty),
            Type::Str => Kind::Str,
            Type::Bytes => Kind::Bytes,
            Type::List(_) => Kind::List,
            Type::Map(..) => Kind::Map,
            Type::Option(_) => Kind::Option,
            Type::Struct(_) => Kind::Struct,
        }
    }

    /// Whether values of this type can be nil (or, for records, zero-valued).
    pub fn is_nilable(&self) -> bool {
        matches!(
            self,
            Type::Bytes | Type::List(_) | Type::Map(..) | Type::Option(_) | Type::Struct(_)
        )
    }

    /// The zero value of this type.
    ///
    /// Nil-capable containers are nil, not empty.
    pub fn zero_value(&self) -> Value {
        match self {
            Type::Nil => Value::Nil,
            Type::Bool => Value::Bool(false),
            Type::Char => Value::Char('\0'),
            Type::Int(ty) => Value::Number(Number::zero_int(*ty)),
            Type::Uint(ty) => Value::Number(Number::zero_uint(*ty)),
            Type::Float(FloatTy::F32) => Value::Number(Number::F32(0.0)),
            Type::Float(FloatTy::F64) => Value::Number(Number::F64(0.0)),
            Type::Complex(ty) => Value::Number(Number::zero_complex(*ty)),
            Type::Str => Value::Str(String::new()),
            Type::Bytes => Value::Bytes(None),
            Type::List(elem) => Value::List(ListValue::nil((**elem).clone())),
            Type::Map(key, value) => {
                Value::Map(MapValue::nil((**key).clone(), (**value).clone()))
            }
            Type::Option(inner) => Value::Option(OptionValue::none((**inner).clone())),
            Type::Struct(st) => Value::Struct(StructValue::new(
                st.name.clone(),
                st.fields
                    .iter()
                    .map(|(name, ty)| (name.clone(), ty.zero_value()))
                    .collect(),
            )),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Nil => write!(f, "nil"),
            Type::Bool => write!(f, "bool"),
            Type::Char => write!(f, "char"),
            Type::Int(ty) => write!(f, "{}", ty.name()),
            Type::Uint(ty) => write!(f, "{}", ty.name()),
            Type::Float(FloatTy::F32) => write!(f, "f32"),
            Type::Float(FloatTy::F64) => write!(f, "f64"),
            Type::Complex(ComplexTy::C64) => write!(f, "complex64"),
            Type::Complex(ComplexTy::C128) => write!(f, "complex128"),
            Type::Str => write!(f, "String"),
            Type::Bytes => write!(f, "Bytes"),
            Type::List(elem) => write!(f, "Vec<{elem}>"),
            Type::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            Type::Option(inner) => write!(f, "Option<{inner}>"),
            Type::Struct(st) => write!(f, "{}", st.name),
        }
    }
}

/// Coarse classification of a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Char,
    Int(IntTy),
    Uint(UintTy),
    Float(FloatTy),
    Complex(ComplexTy),
    Str,
    Bytes,
    List,
    Map,
    Option,
    Struct,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Nil => write!(f, "nil"),
            Kind::Bool => write!(f, "bool"),
            Kind::Char => write!(f, "char"),
            Kind::Int(IntTy::Isize) => write!(f, "int"),
            Kind::Int(ty) => write!(f, "int{}", ty.bits()),
            Kind::Uint(UintTy::Usize) => write!(f, "uint"),
            Kind::Uint(ty) => write!(f, "uint{}", ty.bits()),
            Kind::Float(ty) => write!(f, "float{}", ty.bits()),
            Kind::Complex(ty) => write!(f, "complex{}", ty.bits()),
            Kind::Str => write!(f, "string"),
            Kind::Bytes => write!(f, "bytes"),
            Kind::List => write!(f, "list"),
            Kind::Map => write!(f, "map"),
            Kind::Option => write!(f, "option"),
            Kind::Struct => write!(f, "struct"),
        }
    }
}

#[cfg(test)]
mod tests;
