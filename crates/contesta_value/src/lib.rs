//! Runtime values for contesta assertions.
//!
//! Assertions compare an *actual* value against an *expected* one without
//! knowing either type up front. Both sides are lowered into [`Value`], a
//! closed tagged union that keeps enough type information to tell an `i32`
//! from an `i64`, or a `None::<String>` from a `None::<u8>`.
//!
//! # Construction
//!
//! ```text
//! let v = 42_i32.into_value();                   // Value::Number(Number::I32(42))
//! let m = HashMap::from([("a", 1)]).into_value(); // Map<String, i32>
//! let nil = Option::<u8>::None.into_value();      // typed nil
//! let untyped = Value::Nil;                       // untyped absence
//! ```
//!
//! Types with a statically known [`Type`] implement [`StaticType`], which is
//! what lets empty and nil collections keep their declared element type.

mod article;
mod ty;
mod value;

pub use article::{article, articleize};
pub use ty::{ComplexTy, FloatTy, IntTy, Kind, StructTy, Type, UintTy, POINTER_WIDTH};
pub use value::{
    Bytes, Complex, IntoValue, ListValue, MapValue, Number, OptionValue, StaticType, StructValue,
    Value,
};
