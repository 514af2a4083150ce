//! Map matcher, key matchers and the exhaustiveness sentinels.
//!
//! ```text
//! map![
//!     key("name").is("contesta"),
//!     key("tags").is(map![key("stable").is(false), non_exhaustive()]),
//!     exhaustive(),
//! ]
//! ```
//!
//! Entries are evaluated in order. [`End`] fails for every map key that no
//! earlier key matcher checked; [`NonExhaustive`] opts out of that check. A
//! map matcher with neither sentinel checks exhaustively at the end.

use contesta_diagnostic::{Locus, Record};
use contesta_value::{article, articleize, IntoValue, MapValue, Value};

use super::{Expectation, Matcher};
use crate::callsite::CallSite;
use crate::context::Context;
use crate::equality::{deep_equal, map_get};
use crate::ContestaError;

const MAP_CALLEE: &str = "MapMatcher";
const KEY_CALLEE: &str = "KeyMatcher";

/// Matches a map entry by entry.
#[derive(Clone, Debug)]
pub struct MapMatcher {
    entries: Vec<MapEntry>,
    site: CallSite,
}

/// One entry of a [`MapMatcher`].
#[derive(Clone, Debug)]
pub enum MapEntry {
    Key(KeyMatcher),
    End(End),
    NonExhaustive(NonExhaustive),
}

impl From<KeyMatcher> for MapEntry {
    fn from(matcher: KeyMatcher) -> Self {
        MapEntry::Key(matcher)
    }
}

impl From<End> for MapEntry {
    fn from(end: End) -> Self {
        MapEntry::End(end)
    }
}

impl From<NonExhaustive> for MapEntry {
    fn from(sentinel: NonExhaustive) -> Self {
        MapEntry::NonExhaustive(sentinel)
    }
}

impl MapMatcher {
    /// A map matcher built at the caller's location.
    #[track_caller]
    pub fn new(entries: impl IntoIterator<Item = MapEntry>) -> Self {
        MapMatcher {
            entries: entries.into_iter().collect(),
            site: CallSite::here(),
        }
    }

    /// Replace the recorded construction site.
    #[must_use]
    pub fn at(mut self, site: CallSite) -> Self {
        self.site = site;
        self
    }

    #[must_use]
    pub fn key(mut self, matcher: KeyMatcher) -> Self {
        self.entries.push(MapEntry::Key(matcher));
        self
    }

    #[must_use]
    pub fn exhaustive(mut self) -> Self {
        self.entries.push(MapEntry::End(End));
        self
    }

    #[must_use]
    pub fn non_exhaustive(mut self) -> Self {
        self.entries.push(MapEntry::NonExhaustive(NonExhaustive));
        self
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    fn has_sentinel(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, MapEntry::End(_) | MapEntry::NonExhaustive(_)))
    }
}

impl Matcher for MapMatcher {
    #[tracing::instrument(level = "trace", skip_all, fields(entries = self.entries.len()))]
    fn evaluate(
        &self,
        cx: &mut Context<'_>,
        actual: &Value,
    ) -> Result<Vec<Record>, ContestaError> {
        let caller = cx.resolve_caller(&self.site, MAP_CALLEE)?;
        let mut cx = cx.override_caller(caller);

        let Some(map) = actual.as_map() else {
            return Ok(vec![not_a_map(&cx, actual)]);
        };

        let mut records = Vec::new();
        let mut checked: Vec<&Value> = Vec::new();
        for entry in &self.entries {
            match entry {
                MapEntry::Key(matcher) => {
                    records.extend(matcher.evaluate_in(&mut cx, map)?);
                    checked.push(&matcher.key);
                }
                MapEntry::End(_) => records.push(unchecked_keys(&cx, actual, map, &checked)?),
                MapEntry::NonExhaustive(_) => {
                    records.push(Record::pass().with_paths(cx.current_path_chain()));
                }
            }
        }
        if !self.has_sentinel() {
            records.push(unchecked_keys(&cx, actual, map, &checked)?);
        }

        Ok(records)
    }
}

/// Build a [`MapMatcher`] from key matchers and sentinels.
///
/// ```text
/// map![key("a").is(1), key("b").is(2), exhaustive()]
/// ```
#[macro_export]
macro_rules! map {
    ($($entry:expr),* $(,)?) => {
        $crate::MapMatcher::new(::std::vec![$($crate::MapEntry::from($entry)),*])
    };
}

/// Start a key matcher for `key`.
pub fn key(key: impl IntoValue) -> Key {
    Key {
        key: key.into_value(),
    }
}

/// A key waiting for its expectation. Finish it with [`Key::is`].
#[derive(Clone, Debug)]
pub struct Key {
    key: Value,
}

impl Key {
    #[track_caller]
    pub fn is(self, expected: impl Into<Expectation>) -> KeyMatcher {
        KeyMatcher {
            key: self.key,
            expected: expected.into(),
            site: CallSite::here(),
        }
    }
}

/// Looks up one key and evaluates its expectation against the value found.
#[derive(Clone, Debug)]
pub struct KeyMatcher {
    key: Value,
    expected: Expectation,
    site: CallSite,
}

impl KeyMatcher {
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// Label used for this key in path chains.
    fn label(&self) -> String {
        match &self.key {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn evaluate_in(
        &self,
        cx: &mut Context<'_>,
        map: &MapValue,
    ) -> Result<Vec<Record>, ContestaError> {
        let element = cx.new_path(self.label(), KEY_CALLEE, &self.site)?;
        let mut cx = cx.enter(element);

        let key_ty = self.key.ty();
        if key_ty != map.key {
            return Ok(vec![Record::fail(Locus::InUsage)
                .with_actual(self.key.clone())
                .with_paths(cx.current_path_chain())
                .with_description(format!(
                    "Cannot look up {} key in a map with {} keys",
                    articleize(&key_ty.to_string()),
                    map.key,
                ))]);
        }

        let value = match map_get(map, &self.key, cx.depth_limit())? {
            Some(found) => found.clone(),
            None => map.value.zero_value(),
        };
        tracing::trace!(key = %self.key, %value, "key lookup");
        self.expected.evaluate(&mut cx, &value)
    }
}

impl Matcher for KeyMatcher {
    fn evaluate(
        &self,
        cx: &mut Context<'_>,
        actual: &Value,
    ) -> Result<Vec<Record>, ContestaError> {
        match actual.as_map() {
            Some(map) => self.evaluate_in(cx, map),
            None => Ok(vec![not_a_map(cx, actual)]),
        }
    }
}

/// Requires every key of the map to be checked by an earlier key matcher.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct End;

/// Allows keys that no key matcher checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NonExhaustive;

pub fn exhaustive() -> End {
    End
}

pub fn non_exhaustive() -> NonExhaustive {
    NonExhaustive
}

impl Matcher for End {
    /// On its own, no key counts as checked.
    fn evaluate(
        &self,
        cx: &mut Context<'_>,
        actual: &Value,
    ) -> Result<Vec<Record>, ContestaError> {
        match actual.as_map() {
            Some(map) => Ok(vec![unchecked_keys(cx, actual, map, &[])?]),
            None => Ok(vec![not_a_map(cx, actual)]),
        }
    }
}

impl Matcher for NonExhaustive {
    fn evaluate(
        &self,
        cx: &mut Context<'_>,
        _actual: &Value,
    ) -> Result<Vec<Record>, ContestaError> {
        Ok(vec![Record::pass().with_paths(cx.current_path_chain())])
    }
}

fn not_a_map(cx: &Context<'_>, actual: &Value) -> Record {
    let kind = actual.ty().kind().to_string();
    Record::fail(Locus::InType)
        .with_actual(actual.clone())
        .with_paths(cx.current_path_chain())
        .with_description(format!("Expected a map but got {} {kind}", article(&kind)))
}

/// Pass if every key of `map` is among `checked`, else fail listing the rest.
fn unchecked_keys(
    cx: &Context<'_>,
    actual: &Value,
    map: &MapValue,
    checked: &[&Value],
) -> Result<Record, ContestaError> {
    let limit = cx.depth_limit();
    let mut missing = Vec::new();
    for (candidate, _) in map.entries() {
        let mut covered = false;
        for key in checked {
            if deep_equal(candidate, key, limit)? {
                covered = true;
                break;
            }
        }
        if !covered {
            missing.push(candidate.to_string());
        }
    }

    let record = Record::verdict(missing.is_empty(), Locus::InStructure)
        .with_actual(actual.clone())
        .with_paths(cx.current_path_chain());
    if missing.is_empty() {
        return Ok(record);
    }

    missing.sort();
    let description = if missing.len() == 1 {
        format!("1 key in the map was not checked: {}", missing[0])
    } else {
        format!(
            "{} keys in the map were not checked: {}",
            missing.len(),
            missing.join(", ")
        )
    };
    tracing::debug!(count = missing.len(), "unchecked map keys");
    Ok(record.with_description(description))
}
