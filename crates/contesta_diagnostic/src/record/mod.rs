//! The diagnostic record produced by every matcher evaluation.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use contesta_value::Value;

use crate::PathElement;

/// Where a failing comparison went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Locus {
    /// The types differ, or cannot be reconciled.
    InType,
    /// The types were reconciled but the values differ.
    InValue,
    /// A container-level rule was broken (e.g. keys nobody checked).
    InStructure,
    /// The assertion API itself was misused.
    InUsage,
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locus::InType => write!(f, "in type"),
            Locus::InValue => write!(f, "in value"),
            Locus::InStructure => write!(f, "in structure"),
            Locus::InUsage => write!(f, "in usage"),
        }
    }
}

/// A value shown in a record, with a lazily computed type description.
///
/// A record with no `Shown` for a side means that side was absent; a `Shown`
/// holding [`Value::Nil`] means it was present and nil.
#[derive(Clone, Debug)]
pub struct Shown {
    value: Value,
    desc: OnceLock<String>,
}

impl Shown {
    pub fn new(value: Value) -> Self {
        Shown {
            value,
            desc: OnceLock::new(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Type description, computed on first use.
    pub fn description(&self) -> &str {
        self.desc.get_or_init(|| {
            let desc = self.value.ty().to_string();
            if self.value.is_typed_nil() && !matches!(self.value, Value::Struct(_)) {
                format!("{desc} <nil>")
            } else {
                desc
            }
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Pass,
    Fail(Locus),
}

/// Outcome of evaluating one matcher against one value.
///
/// Built with [`Record::pass`] or [`Record::fail`], so a passing record never
/// carries a locus and a failing record always has exactly one.
#[derive(Clone, Debug)]
pub struct Record {
    outcome: Outcome,
    actual: Option<Shown>,
    expected: Option<Shown>,
    op: Option<Cow<'static, str>>,
    paths: Vec<PathElement>,
    description: Option<String>,
}

impl Record {
    fn with_outcome(outcome: Outcome) -> Self {
        Record {
            outcome,
            actual: None,
            expected: None,
            op: None,
            paths: Vec::new(),
            description: None,
        }
    }

    pub fn pass() -> Self {
        Self::with_outcome(Outcome::Pass)
    }

    pub fn fail(locus: Locus) -> Self {
        Self::with_outcome(Outcome::Fail(locus))
    }

    /// A passing record if `passed`, otherwise a failure at `locus`.
    pub fn verdict(passed: bool, locus: Locus) -> Self {
        if passed {
            Self::pass()
        } else {
            Self::fail(locus)
        }
    }

    #[must_use]
    pub fn with_actual(mut self, value: Value) -> Self {
        self.actual = Some(Shown::new(value));
        self
    }

    #[must_use]
    pub fn with_expected(mut self, value: Value) -> Self {
        self.expected = Some(Shown::new(value));
        self
    }

    /// Set the relational label, e.g. `==`.
    #[must_use]
    pub fn with_op(mut self, op: impl Into<Cow<'static, str>>) -> Self {
        self.op = Some(op.into());
        self
    }

    #[must_use]
    pub fn with_paths(mut self, paths: Vec<PathElement>) -> Self {
        self.paths = paths;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_pass(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    /// The failure locus; `None` for passing records.
    pub fn locus(&self) -> Option<Locus> {
        match self.outcome {
            Outcome::Pass => None,
            Outcome::Fail(locus) => Some(locus),
        }
    }

    pub fn actual(&self) -> Option<&Shown> {
        self.actual.as_ref()
    }

    pub fn expected(&self) -> Option<&Shown> {
        self.expected.as_ref()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Path chain, outermost first.
    pub fn paths(&self) -> &[PathElement] {
        &self.paths
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
