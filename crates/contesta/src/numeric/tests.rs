use pretty_assertions::assert_eq;

use super::*;
use contesta_value::IntoValue;

fn v(value: impl IntoValue) -> Value {
    value.into_value()
}

// === Classification ===

#[test]
fn test_classify_families() {
    assert_eq!(
        classify(&v(1i8)),
        Some(NumericInfo {
            family: Family::Int,
            bits: 8
        })
    );
    assert_eq!(
        classify(&v(1u16)),
        Some(NumericInfo {
            family: Family::Uint,
            bits: 16
        })
    );
    assert_eq!(
        classify(&v(1.0f32)),
        Some(NumericInfo {
            family: Family::Float,
            bits: 32
        })
    );
    assert_eq!(
        classify(&Value::complex128(1.0, 0.0)),
        Some(NumericInfo {
            family: Family::Complex,
            bits: 128
        })
    );
    assert_eq!(classify(&v("1")), None);
    assert_eq!(classify(&v(true)), None);
}

#[test]
fn test_classify_char_and_pointer_sized() {
    assert_eq!(classify(&v('a')).map(|i| (i.family, i.bits)), Some((Family::Int, 32)));
    assert_eq!(classify(&v(1usize)).map(|i| i.bits), Some(usize::BITS));
    assert_eq!(classify(&v(1isize)).map(|i| i.bits), Some(usize::BITS));
}

// === Same family ===

#[test]
fn test_same_family_widens() {
    assert_eq!(reconcile(&v(1i8), &v(1i64)), Ok(Reconciled::Int(1, 1)));
    assert_eq!(reconcile(&v(u64::MAX), &v(1u8)), Ok(Reconciled::Int(i128::from(u64::MAX), 1)));
    assert_eq!(reconcile(&v(1.5f32), &v(1.5f64)), Ok(Reconciled::Float64(1.5, 1.5)));
    assert_eq!(
        reconcile(&Value::complex64(1.0, 2.0), &Value::complex128(1.0, 2.0)),
        Ok(Reconciled::Complex128(Complex::new(1.0, 2.0), Complex::new(1.0, 2.0)))
    );
}

#[test]
fn test_same_family_values_differ() {
    let reconciled = reconcile(&v(3i16), &v(4i32));
    assert_eq!(reconciled, Ok(Reconciled::Int(3, 4)));
    assert!(!reconciled.is_ok_and(|r| r.is_equal()));
}

// === Complex ===

#[test]
fn test_complex_against_other_family_fails() {
    assert_eq!(
        reconcile(&Value::complex64(1.0, 0.0), &v(1i32)),
        Err(ConversionError::NotConvertible {
            actual: Type::Complex(contesta_value::ComplexTy::C64),
            expected: Type::Int(contesta_value::IntTy::I32),
        })
    );
    assert!(reconcile(&v(1.0f64), &Value::complex128(1.0, 0.0)).is_err());
}

#[test]
fn test_not_convertible_message() {
    let err = reconcile(&Value::complex64(1.0, 0.0), &v(1u8)).unwrap_err();
    assert_eq!(err.to_string(), "Cannot convert between a complex64 and an u8");
}

// === Float wins ===

#[test]
fn test_float_against_integer() {
    assert_eq!(reconcile(&v(2i32), &v(2.0f32)), Ok(Reconciled::Float32(2.0, 2.0)));
    assert_eq!(reconcile(&v(2.5f64), &v(2u8)), Ok(Reconciled::Float64(2.5, 2.0)));
    assert!(reconcile(&v(7u64), &v(7.0f64)).is_ok_and(|r| r.is_equal()));
}

#[test]
fn test_float_conversion_may_lose_precision() {
    // 2^53 + 1 is not representable as f64 and rounds to 2^53.
    let big = (1i64 << 53) + 1;
    let reconciled = reconcile(&v(big), &v(9_007_199_254_740_992.0f64));
    assert!(reconciled.is_ok_and(|r| r.is_equal()));
}

// === Signed against unsigned ===

#[test]
fn test_mixed_sign_different_widths() {
    assert_eq!(reconcile(&v(-1i64), &v(255u8)), Ok(Reconciled::Int(-1, 255)));
    assert_eq!(reconcile(&v(200u8), &v(200i16)), Ok(Reconciled::Int(200, 200)));
    assert_eq!(reconcile(&v(300u32), &v(-128i64)), Ok(Reconciled::Int(300, -128)));
    assert_eq!(reconcile(&v(-1i8), &v(100u64)), Ok(Reconciled::Int(-1, 100)));
}

#[test]
fn test_wider_uint_above_signed_max_overflows() {
    assert_eq!(
        reconcile(&v(42i32), &v(3_000_000_000u64)),
        Err(ConversionError::Overflow {
            uint_bits: 64,
            int_bits: 32,
            value: 3_000_000_000,
        })
    );
    assert!(reconcile(&v(u32::MAX), &v(i8::MIN)).is_err());
}

#[test]
fn test_wider_uint_out_of_signed_range_is_overflow_not_value_mismatch() {
    // A wider unsigned operand outside the signed range never reaches the
    // widened comparison: it is reported as an overflow.
    let err = reconcile(&v(1i8), &v(300u16)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot convert 16-bit uint (300) to 8-bit int without overflow"
    );
    assert_eq!(reconcile(&v(300u16), &v(1i8)), Err(err));

    // A narrower unsigned operand widens and compares by value.
    let widened = reconcile(&v(1i16), &v(200u8));
    assert_eq!(widened, Ok(Reconciled::Int(1, 200)));
    assert!(!widened.unwrap().is_equal());
}

#[test]
fn test_mixed_sign_equal_width_in_range() {
    assert_eq!(reconcile(&v(127u8), &v(127i8)), Ok(Reconciled::Int(127, 127)));
    assert_eq!(reconcile(&v(-5i32), &v(5u32)), Ok(Reconciled::Int(-5, 5)));
}

#[test]
fn test_mixed_sign_equal_width_overflow() {
    let err = reconcile(&v(200u8), &v(100i8)).unwrap_err();
    assert_eq!(
        err,
        ConversionError::Overflow {
            uint_bits: 8,
            int_bits: 8,
            value: 200,
        }
    );
    assert_eq!(
        err.to_string(),
        "Cannot convert 8-bit uint (200) to 8-bit int without overflow"
    );
    assert_eq!(reconcile(&v(100i8), &v(200u8)), Err(err));
}

#[test]
fn test_char_compares_as_int32() {
    assert_eq!(reconcile(&v('a'), &v(97i32)), Ok(Reconciled::Int(97, 97)));
    assert_eq!(reconcile(&v('a'), &v(97u8)), Ok(Reconciled::Int(97, 97)));
}

#[test]
fn test_non_numeric_not_convertible() {
    assert_eq!(
        reconcile(&v("1"), &v(1i32)),
        Err(ConversionError::NotConvertible {
            actual: Type::Str,
            expected: Type::Int(contesta_value::IntTy::I32),
        })
    );
}

// === Property tests ===

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_reconcile {
    use super::{reconcile, v, Value};
    use proptest::prelude::*;

    fn any_number() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i8>().prop_map(v),
            any::<i16>().prop_map(v),
            any::<i32>().prop_map(v),
            any::<i64>().prop_map(v),
            any::<isize>().prop_map(v),
            any::<u8>().prop_map(v),
            any::<u16>().prop_map(v),
            any::<u32>().prop_map(v),
            any::<u64>().prop_map(v),
            any::<usize>().prop_map(v),
            (-1.0e6f32..1.0e6).prop_map(v),
            (-1.0e12f64..1.0e12).prop_map(v),
            (-1.0e6f32..1.0e6, -1.0e6f32..1.0e6).prop_map(|(re, im)| Value::complex64(re, im)),
            (-1.0e6f64..1.0e6, -1.0e6f64..1.0e6).prop_map(|(re, im)| Value::complex128(re, im)),
        ]
    }

    proptest! {
        #[test]
        fn reconcile_is_symmetric(a in any_number(), b in any_number()) {
            let forward = reconcile(&a, &b);
            let backward = reconcile(&b, &a);
            match (forward, backward) {
                (Ok(f), Ok(r)) => {
                    prop_assert_eq!(f.is_equal(), r.is_equal(), "{} vs {}", a, b);
                }
                (Err(_), Err(_)) => {}
                (f, r) => {
                    prop_assert!(false, "asymmetric verdict for {} vs {}: {:?} / {:?}", a, b, f, r);
                }
            }
        }

        #[test]
        fn reconcile_same_value_is_equal(a in any_number()) {
            let reconciled = reconcile(&a, &a);
            prop_assert!(reconciled.is_ok_and(|r| r.is_equal()), "{} not equal to itself", a);
        }
    }
}
