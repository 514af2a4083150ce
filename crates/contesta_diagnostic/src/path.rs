//! Path elements: one level of nesting in a matcher evaluation.

use std::fmt;

/// A position in the data structure plus who got us there.
///
/// `data` is a human-readable label: the root type name for the outermost
/// element, or the traversed key/field at nested levels. `callee` names the
/// matcher or entry point that pushed the element, `caller` the (resolved)
/// place that invoked it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathElement {
    pub data: String,
    pub callee: String,
    pub caller: String,
}

impl PathElement {
    pub fn new(
        data: impl Into<String>,
        callee: impl Into<String>,
        caller: impl Into<String>,
    ) -> Self {
        PathElement {
            data: data.into(),
            callee: callee.into(),
            caller: caller.into(),
        }
    }

    /// `"{caller} called {callee}"`.
    pub fn called_at(&self) -> String {
        format!("{} called {}", self.caller, self.callee)
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_called_at() {
        let path = PathElement::new("foo", "KeyMatcher", "tests/map.rs@12");
        assert_eq!(path.called_at(), "tests/map.rs@12 called KeyMatcher");
        assert_eq!(path.to_string(), "foo");
    }
}
