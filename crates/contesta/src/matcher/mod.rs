//! The matcher protocol.
//!
//! A [`Matcher`] evaluates an actual value and returns the records of every
//! comparison it made. Leaf matchers return one record; combinators such as
//! [`MapMatcher`] concatenate the records of their children, so one failing
//! key does not hide another.
//!
//! Wherever a matcher is expected, a plain literal works too: it becomes an
//! [`Expectation::Literal`] and is compared with exact equality.

mod map;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use contesta_diagnostic::Record;
use contesta_value::{Bytes, IntoValue, StaticType, StructValue, Value};

use crate::context::Context;
use crate::equality::{evaluate_exact, ExactEq, ValueEq};
use crate::ContestaError;

pub use map::{
    exhaustive, key, non_exhaustive, End, Key, KeyMatcher, MapEntry, MapMatcher, NonExhaustive,
};

/// Something that can judge an actual value.
///
/// Matchers hold no mutable state: one matcher may be evaluated any number of
/// times, from any thread, each time with its own [`Context`].
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Evaluate `actual`, returning one record per comparison made.
    ///
    /// Failed comparisons are records, not errors. `Err` is reserved for
    /// faults that make further evaluation pointless.
    fn evaluate(&self, cx: &mut Context<'_>, actual: &Value)
        -> Result<Vec<Record>, ContestaError>;

    /// Unqualified type name, shown when the matcher itself is reported.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// What an actual value is checked against: a literal or a matcher.
#[derive(Clone, Debug)]
pub enum Expectation {
    Literal(Value),
    Matcher(Arc<dyn Matcher>),
}

impl Expectation {
    pub fn matcher(matcher: impl Matcher + 'static) -> Self {
        Expectation::Matcher(Arc::new(matcher))
    }

    pub fn is_matcher(&self) -> bool {
        matches!(self, Expectation::Matcher(_))
    }

    /// Evaluate `actual`; literals use exact equality.
    pub fn evaluate(
        &self,
        cx: &mut Context<'_>,
        actual: &Value,
    ) -> Result<Vec<Record>, ContestaError> {
        match self {
            Expectation::Literal(expected) => evaluate_exact(cx, actual, expected),
            Expectation::Matcher(matcher) => matcher.evaluate(cx, actual),
        }
    }
}

macro_rules! literal_expectations {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expectation {
                fn from(value: $ty) -> Self {
                    Expectation::Literal(value.into_value())
                }
            }
        )*
    };
}

literal_expectations!(
    Value,
    StructValue,
    Bytes,
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    &str,
    &String,
);

impl<T: IntoValue + StaticType> From<Vec<T>> for Expectation {
    fn from(value: Vec<T>) -> Self {
        Expectation::Literal(value.into_value())
    }
}

impl<T: IntoValue + StaticType> From<Option<T>> for Expectation {
    fn from(value: Option<T>) -> Self {
        Expectation::Literal(value.into_value())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Expectation
where
    K: IntoValue + StaticType,
    V: IntoValue + StaticType,
    S: BuildHasher,
{
    fn from(value: HashMap<K, V, S>) -> Self {
        Expectation::Literal(value.into_value())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Expectation
where
    K: IntoValue + StaticType,
    V: IntoValue + StaticType,
{
    fn from(value: BTreeMap<K, V>) -> Self {
        Expectation::Literal(value.into_value())
    }
}

macro_rules! matcher_expectations {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expectation {
                fn from(matcher: $ty) -> Self {
                    Expectation::matcher(matcher)
                }
            }
        )*
    };
}

matcher_expectations!(ExactEq, ValueEq, MapMatcher, KeyMatcher, End, NonExhaustive);

impl From<Arc<dyn Matcher>> for Expectation {
    fn from(matcher: Arc<dyn Matcher>) -> Self {
        Expectation::Matcher(matcher)
    }
}
