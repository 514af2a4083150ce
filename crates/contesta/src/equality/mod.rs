//! Exact and value equality testers.
//!
//! [`ExactEq`] requires both sides to have the same type. [`ValueEq`] also
//! accepts values whose types can be reconciled: numbers via the
//! [`numeric`](crate::numeric) rules, strings against byte buffers, and records
//! with identical layouts under different names.
//!
//! Both share the nil exception: an untyped [`Value::Nil`] on one side equals
//! a nil (or zero-valued) value of any nil-capable type on the other.

mod structural;

use contesta_diagnostic::{Locus, Record};
use contesta_stack::DepthLimit;
use contesta_value::{articleize, IntoValue, Value};

use crate::context::Context;
use crate::matcher::Matcher;
use crate::numeric;
use crate::ContestaError;

pub use structural::deep_equal;
pub(crate) use structural::map_get;

const EXACT_OP: &str = "==";
const VALUE_OP: &str = "== (value)";

/// Matches values of the same type that are structurally equal.
#[derive(Clone, Debug)]
pub struct ExactEq {
    expected: Value,
}

impl ExactEq {
    pub fn new(expected: Value) -> Self {
        ExactEq { expected }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

/// Matches values that are equal once their types are reconciled.
#[derive(Clone, Debug)]
pub struct ValueEq {
    expected: Value,
}

impl ValueEq {
    pub fn new(expected: Value) -> Self {
        ValueEq { expected }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

/// Exact equality against `expected`.
pub fn exact_eq(expected: impl IntoValue) -> ExactEq {
    ExactEq::new(expected.into_value())
}

/// Value equality against `expected`.
pub fn value_eq(expected: impl IntoValue) -> ValueEq {
    ValueEq::new(expected.into_value())
}

impl Matcher for ExactEq {
    fn evaluate(
        &self,
        cx: &mut Context<'_>,
        actual: &Value,
    ) -> Result<Vec<Record>, ContestaError> {
        evaluate_exact(cx, actual, &self.expected)
    }
}

impl Matcher for ValueEq {
    #[tracing::instrument(level = "trace", skip_all, fields(expected = %self.expected))]
    fn evaluate(
        &self,
        cx: &mut Context<'_>,
        actual: &Value,
    ) -> Result<Vec<Record>, ContestaError> {
        let record = value_record(actual, &self.expected, cx.depth_limit())?;
        Ok(vec![finish(record, cx, actual, &self.expected, VALUE_OP)])
    }
}

/// Exact equality of `actual` against a literal `expected`.
#[tracing::instrument(level = "trace", skip_all, fields(expected = %expected))]
pub(crate) fn evaluate_exact(
    cx: &mut Context<'_>,
    actual: &Value,
    expected: &Value,
) -> Result<Vec<Record>, ContestaError> {
    let record = exact_record(actual, expected, cx.depth_limit())?;
    Ok(vec![finish(record, cx, actual, expected, EXACT_OP)])
}

fn finish(
    record: Record,
    cx: &Context<'_>,
    actual: &Value,
    expected: &Value,
    op: &'static str,
) -> Record {
    let record = record
        .with_actual(actual.clone())
        .with_expected(expected.clone())
        .with_op(op)
        .with_paths(cx.current_path_chain());
    if !record.is_pass() {
        tracing::debug!(op, locus = ?record.locus(), "comparison failed");
    }
    record
}

/// Compare two values of the same type. Byte buffers compare by content.
pub fn exact_compare(
    actual: &Value,
    expected: &Value,
    limit: DepthLimit,
) -> Result<bool, ContestaError> {
    Ok(deep_equal(actual, expected, limit)?)
}

/// Whether an untyped nil on one side meets a nil of a nil-capable type (or
/// another untyped nil) on the other.
///
/// Two typed nils are never equal through this rule, even when both are nil.
pub fn nil_values_are_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Nil, Value::Nil) => true,
        (Value::Nil, other) | (other, Value::Nil) => other.is_typed_nil(),
        _ => false,
    }
}

fn exact_record(
    actual: &Value,
    expected: &Value,
    limit: DepthLimit,
) -> Result<Record, ContestaError> {
    let (actual_ty, expected_ty) = (actual.ty(), expected.ty());
    if actual_ty == expected_ty {
        let equal = exact_compare(actual, expected, limit)?;
        return Ok(Record::verdict(equal, Locus::InValue));
    }
    if nil_values_are_equal(actual, expected) {
        return Ok(Record::pass());
    }
    Ok(Record::fail(Locus::InType).with_description(format!(
        "expected {} but got {}",
        articleize(&expected_ty.to_string()),
        articleize(&actual_ty.to_string()),
    )))
}

fn value_record(
    actual: &Value,
    expected: &Value,
    limit: DepthLimit,
) -> Result<Record, ContestaError> {
    if actual.ty() == expected.ty() {
        let equal = exact_compare(actual, expected, limit)?;
        return Ok(Record::verdict(equal, Locus::InValue));
    }
    if nil_values_are_equal(actual, expected) {
        return Ok(Record::pass());
    }

    match (actual, expected) {
        (Value::Str(s), Value::Bytes(b)) | (Value::Bytes(b), Value::Str(s)) => {
            let equal = s.as_bytes() == b.as_deref().unwrap_or_default();
            Ok(Record::verdict(equal, Locus::InValue))
        }
        (Value::Struct(a), Value::Struct(e)) if a.ty().same_layout(&e.ty()) => {
            let equal = structural::fields_equal(a, e, limit)?;
            Ok(Record::verdict(equal, Locus::InValue))
        }
        _ => match numeric::reconcile(actual, expected) {
            Ok(reconciled) => Ok(Record::verdict(reconciled.is_equal(), Locus::InValue)),
            Err(err) => {
                tracing::debug!(%err, "values cannot be reconciled");
                Ok(Record::fail(Locus::InType).with_description(err.to_string()))
            }
        },
    }
}
