//! Numeric conversion analysis.
//!
//! Decides whether two numbers of different types can be compared as values,
//! and if so converts both into one representation:
//!
//! 1. Same family: widen the narrower to the wider width. Never narrow.
//! 2. Complex against anything else: not convertible.
//! 3. Either side float: the other side becomes a float of that width. Large
//!    64-bit integers may lose precision here; float always wins.
//! 4. Signed against unsigned of different widths: widen the narrower. If the
//!    unsigned side is the wider one and its value is above the signed type's
//!    maximum, the comparison fails as an overflow.
//! 5. Signed against unsigned of equal width: the unsigned value must fit the
//!    signed maximum, otherwise the conversion overflows.
//!
//! Swapping the operands swaps the converted pair and never changes the
//! verdict.

use contesta_value::{articleize, Complex, Number, Type, Value};
use thiserror::Error;

/// Numeric family of a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Int,
    Uint,
    Float,
    Complex,
}

/// Family and width of a numeric value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumericInfo {
    pub family: Family,
    pub bits: u32,
}

/// Why two values could not be reconciled.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error(
        "Cannot convert between {} and {}",
        articleize(&.actual.to_string()),
        articleize(&.expected.to_string())
    )]
    NotConvertible { actual: Type, expected: Type },

    #[error("Cannot convert {uint_bits}-bit uint ({value}) to {int_bits}-bit int without overflow")]
    Overflow {
        uint_bits: u32,
        int_bits: u32,
        value: u64,
    },
}

/// Two numbers converted to a common representation, `(actual, expected)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Reconciled {
    /// Integers of either signedness; `i128` holds every 64-bit value exactly.
    Int(i128, i128),
    Float32(f32, f32),
    Float64(f64, f64),
    Complex64(Complex<f32>, Complex<f32>),
    Complex128(Complex<f64>, Complex<f64>),
}

impl Reconciled {
    #[allow(clippy::float_cmp)]
    pub fn is_equal(&self) -> bool {
        match self {
            Reconciled::Int(a, b) => a == b,
            Reconciled::Float32(a, b) => a == b,
            Reconciled::Float64(a, b) => a == b,
            Reconciled::Complex64(a, b) => a == b,
            Reconciled::Complex128(a, b) => a == b,
        }
    }

    fn swap(self) -> Self {
        match self {
            Reconciled::Int(a, b) => Reconciled::Int(b, a),
            Reconciled::Float32(a, b) => Reconciled::Float32(b, a),
            Reconciled::Float64(a, b) => Reconciled::Float64(b, a),
            Reconciled::Complex64(a, b) => Reconciled::Complex64(b, a),
            Reconciled::Complex128(a, b) => Reconciled::Complex128(b, a),
        }
    }
}

/// A numeric payload tagged with its width.
#[derive(Copy, Clone, Debug)]
enum Operand {
    Int(i64, u32),
    Uint(u64, u32),
    F32(f32),
    F64(f64),
    C64(Complex<f32>),
    C128(Complex<f64>),
}

impl Operand {
    fn of(value: &Value) -> Option<Self> {
        let n = match value {
            // A `char` is a 32-bit code point.
            Value::Char(c) => return Some(Operand::Int(i64::from(u32::from(*c)), 32)),
            Value::Number(n) => *n,
            _ => return None,
        };
        let bits = match n.ty() {
            Type::Int(ty) => ty.bits(),
            Type::Uint(ty) => ty.bits(),
            _ => 0,
        };
        Some(match n {
            Number::F32(f) => Operand::F32(f),
            Number::F64(f) => Operand::F64(f),
            Number::C64(c) => Operand::C64(c),
            Number::C128(c) => Operand::C128(c),
            other => match (other.as_i64(), other.as_u64()) {
                (Some(i), _) => Operand::Int(i, bits),
                (None, Some(u)) => Operand::Uint(u, bits),
                (None, None) => return None,
            },
        })
    }

    fn info(self) -> NumericInfo {
        let (family, bits) = match self {
            Operand::Int(_, bits) => (Family::Int, bits),
            Operand::Uint(_, bits) => (Family::Uint, bits),
            Operand::F32(_) => (Family::Float, 32),
            Operand::F64(_) => (Family::Float, 64),
            Operand::C64(_) => (Family::Complex, 64),
            Operand::C128(_) => (Family::Complex, 128),
        };
        NumericInfo { family, bits }
    }

    #[allow(clippy::cast_precision_loss)]
    fn integer_as_f32(self) -> Option<f32> {
        match self {
            Operand::Int(i, _) => Some(i as f32),
            Operand::Uint(u, _) => Some(u as f32),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn integer_as_f64(self) -> Option<f64> {
        match self {
            Operand::Int(i, _) => Some(i as f64),
            Operand::Uint(u, _) => Some(u as f64),
            _ => None,
        }
    }
}

/// Classify `value`'s numeric family and width; `None` if it is not a number.
///
/// `char` counts as a 32-bit signed integer, `isize`/`usize` as the target
/// pointer width.
pub fn classify(value: &Value) -> Option<NumericInfo> {
    Operand::of(value).map(Operand::info)
}

/// Convert `actual` and `expected` to a common numeric representation.
pub fn reconcile(actual: &Value, expected: &Value) -> Result<Reconciled, ConversionError> {
    let not_convertible = || ConversionError::NotConvertible {
        actual: actual.ty(),
        expected: expected.ty(),
    };
    let (Some(a), Some(e)) = (Operand::of(actual), Operand::of(expected)) else {
        return Err(not_convertible());
    };

    use Operand::{Int, Uint, C128, C64, F32, F64};
    match (a, e) {
        (Int(x, _), Int(y, _)) => Ok(Reconciled::Int(i128::from(x), i128::from(y))),
        (Uint(x, _), Uint(y, _)) => Ok(Reconciled::Int(i128::from(x), i128::from(y))),

        (F32(x), F32(y)) => Ok(Reconciled::Float32(x, y)),
        (F32(x), F64(y)) => Ok(Reconciled::Float64(f64::from(x), y)),
        (F64(x), F32(y)) => Ok(Reconciled::Float64(x, f64::from(y))),
        (F64(x), F64(y)) => Ok(Reconciled::Float64(x, y)),

        (C64(x), C64(y)) => Ok(Reconciled::Complex64(x, y)),
        (C64(x), C128(y)) => Ok(Reconciled::Complex128(widen(x), y)),
        (C128(x), C64(y)) => Ok(Reconciled::Complex128(x, widen(y))),
        (C128(x), C128(y)) => Ok(Reconciled::Complex128(x, y)),
        (C64(_) | C128(_), _) | (_, C64(_) | C128(_)) => Err(not_convertible()),

        (F32(x), other) => other
            .integer_as_f32()
            .map(|y| Reconciled::Float32(x, y))
            .ok_or_else(not_convertible),
        (other, F32(y)) => other
            .integer_as_f32()
            .map(|x| Reconciled::Float32(x, y))
            .ok_or_else(not_convertible),
        (F64(x), other) => other
            .integer_as_f64()
            .map(|y| Reconciled::Float64(x, y))
            .ok_or_else(not_convertible),
        (other, F64(y)) => other
            .integer_as_f64()
            .map(|x| Reconciled::Float64(x, y))
            .ok_or_else(not_convertible),

        (Int(x, x_bits), Uint(y, y_bits)) => signed_against_unsigned(x, x_bits, y, y_bits),
        (Uint(x, x_bits), Int(y, y_bits)) => {
            signed_against_unsigned(y, y_bits, x, x_bits).map(Reconciled::swap)
        }
    }
}

fn signed_against_unsigned(
    int: i64,
    int_bits: u32,
    uint: u64,
    uint_bits: u32,
) -> Result<Reconciled, ConversionError> {
    if uint_bits >= int_bits && uint > signed_max(int_bits) {
        return Err(ConversionError::Overflow {
            uint_bits,
            int_bits,
            value: uint,
        });
    }
    Ok(Reconciled::Int(i128::from(int), i128::from(uint)))
}

/// Largest value of a signed integer `bits` wide.
fn signed_max(bits: u32) -> u64 {
    match bits {
        8 => i8::MAX.unsigned_abs().into(),
        16 => i16::MAX.unsigned_abs().into(),
        32 => i32::MAX.unsigned_abs().into(),
        _ => i64::MAX.unsigned_abs(),
    }
}

fn widen(c: Complex<f32>) -> Complex<f64> {
    Complex::new(f64::from(c.re), f64::from(c.im))
}

#[cfg(test)]
mod tests;
