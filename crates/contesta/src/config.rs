//! Assertion configuration.
//!
//! There is no process-wide registry: a [`Config`] is owned by one
//! [`Contesta`](crate::Contesta) and borrowed by every evaluation it runs.

use std::panic::Location;

use contesta_stack::{DepthLimit, DEFAULT_MAX_DEPTH};
use rustc_hash::FxHashSet;

use crate::callsite::{parent_dir, SourceResolver};

#[derive(Clone, Debug)]
pub struct Config {
    /// Source path prefixes whose call sites are reported by function name.
    internal: FxHashSet<String>,
    /// Prefix stripped from reported caller locations.
    root: Option<String>,
    max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        let mut internal = FxHashSet::default();
        internal.insert(parent_dir(file!()));
        Config {
            internal,
            root: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Mark every source file under `prefix` as internal.
    ///
    /// Callers located in internal files are shown as a bare function name
    /// instead of `file@line`, which keeps helper plumbing out of failure
    /// output.
    pub fn register_internal(&mut self, prefix: impl Into<String>) {
        self.internal.insert(prefix.into().replace('\\', "/"));
    }

    /// Mark the calling source file as internal.
    #[track_caller]
    pub fn register_caller_module(&mut self) {
        self.register_internal(Location::caller().file());
    }

    #[must_use]
    pub fn with_internal(mut self, prefix: impl Into<String>) -> Self {
        self.register_internal(prefix);
        self
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into().replace('\\', "/"));
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn depth_limit(&self) -> DepthLimit {
        DepthLimit::new(self.max_depth)
    }

    pub fn internal(&self) -> impl Iterator<Item = &str> {
        self.internal.iter().map(String::as_str)
    }

    /// A resolver honouring this configuration.
    pub fn resolver(&self) -> SourceResolver {
        SourceResolver::new(self.internal.clone(), self.root.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Config;
    use crate::callsite::{CallSite, Resolve};

    #[test]
    fn test_default_registers_own_sources() {
        let config = Config::default();
        let internal: Vec<&str> = config.internal().collect();
        assert_eq!(internal.len(), 1);
        assert!(internal[0].ends_with("src"), "{}", internal[0]);
        assert_eq!(config.depth_limit().max(), 256);
        assert_eq!(config.root(), None);
    }

    #[test]
    fn test_own_sources_resolve_to_function_names() {
        let resolver = Config::default().resolver();
        let site = CallSite::here_in("contesta::matcher::MapMatcher::evaluate");
        assert!(resolver.is_internal(&site));
        assert_eq!(
            resolver.caller_id(&site, "KeyMatcher"),
            Ok("MapMatcher::evaluate".to_owned())
        );
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_internal(r"crates\helpers")
            .with_root("crates/app/tests")
            .with_max_depth(8);
        assert!(config.internal().any(|p| p == "crates/helpers"));
        assert_eq!(config.root(), Some("crates/app/tests"));
        assert_eq!(config.depth_limit().max(), 8);

        let resolver = config.resolver();
        let site = CallSite::new("crates/app/tests/map.rs", 3);
        assert_eq!(resolver.caller_id(&site, "is"), Ok("map.rs@3".to_owned()));
    }

    #[test]
    fn test_register_caller_module() {
        let mut config = Config::default();
        config.register_caller_module();
        assert!(config.internal().any(|p| p.ends_with("config.rs")));
    }
}
