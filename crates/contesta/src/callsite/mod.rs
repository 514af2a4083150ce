//! Call-site capture and caller resolution.
//!
//! Instead of walking the live stack at every nesting level, each entry point
//! and matcher constructor captures a [`CallSite`] once via
//! `#[track_caller]`, and that descriptor is threaded down through
//! evaluation. A [`Resolve`] implementation turns a site into the caller
//! identifier shown in path chains.

use std::borrow::Cow;
use std::panic::Location;

use rustc_hash::FxHashSet;

use crate::ContestaError;

/// Where a matcher was built or an assertion was made.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: Cow<'static, str>,
    pub line: u32,
    /// Function name, when known. Used for internal call sites.
    pub function: Option<Cow<'static, str>>,
}

impl CallSite {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        CallSite {
            file: file.into(),
            line,
            function: None,
        }
    }

    /// The location of the caller of the current `#[track_caller]` chain.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        CallSite::new(location.file(), location.line())
    }

    /// Like [`CallSite::here`], recording the enclosing function's name.
    #[track_caller]
    pub fn here_in(function: &'static str) -> Self {
        CallSite::here().with_function(function)
    }

    #[must_use]
    pub fn with_function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.function = Some(function.into());
        self
    }
}

/// Turns call sites into caller identifiers.
pub trait Resolve {
    /// Whether `site` belongs to a registered internal module.
    fn is_internal(&self, site: &CallSite) -> bool;

    /// The caller identifier for `site`, on behalf of `callee`.
    fn caller_id(&self, site: &CallSite, callee: &str) -> Result<String, ContestaError>;
}

/// Resolves call sites against source paths.
///
/// Internal sites collapse to a bare function name; everything else is
/// reported as `file@line`, relative to the configured root.
#[derive(Clone, Debug, Default)]
pub struct SourceResolver {
    internal: FxHashSet<String>,
    root: Option<String>,
}

impl SourceResolver {
    pub fn new(internal: FxHashSet<String>, root: Option<String>) -> Self {
        SourceResolver { internal, root }
    }

    fn relative<'f>(&self, file: &'f str) -> &'f str {
        match &self.root {
            Some(root) => file
                .strip_prefix(root.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .unwrap_or(file),
            None => file,
        }
    }
}

impl Resolve for SourceResolver {
    fn is_internal(&self, site: &CallSite) -> bool {
        let file = site.file.replace('\\', "/");
        self.internal
            .iter()
            .any(|prefix| file.starts_with(prefix.as_str()))
    }

    fn caller_id(&self, site: &CallSite, callee: &str) -> Result<String, ContestaError> {
        if site.file.is_empty() {
            return Err(ContestaError::MissingFrame {
                callee: callee.to_owned(),
            });
        }

        if self.is_internal(site) {
            return Ok(match &site.function {
                Some(function) => bare_function_name(function).to_owned(),
                None => file_stem(&site.file).to_owned(),
            });
        }

        let file = site.file.replace('\\', "/");
        Ok(format!("{}@{}", self.relative(&file), site.line))
    }
}

/// Directory part of a source path, with forward slashes.
pub(crate) fn parent_dir(file: &str) -> String {
    let file = file.replace('\\', "/");
    match file.rsplit_once('/') {
        Some((dir, _)) => dir.to_owned(),
        None => String::new(),
    }
}

/// `contesta::matcher::MapMatcher::evaluate` -> `MapMatcher::evaluate`.
fn bare_function_name(function: &str) -> &str {
    let mut segments = function.rsplitn(3, "::");
    let last = segments.next();
    let owner = segments.next();
    match (owner, last) {
        (Some(owner), Some(last)) => {
            let start = function.len() - owner.len() - last.len() - 2;
            &function[start..]
        }
        _ => function,
    }
}

fn file_stem(file: &str) -> &str {
    let name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    name.strip_suffix(".rs").unwrap_or(name)
}
