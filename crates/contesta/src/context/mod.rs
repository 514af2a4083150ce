//! Evaluation context: the path stack for one top-level assertion.
//!
//! Each assertion owns a fresh [`Context`]. Entering a nested evaluation
//! pushes a [`PathElement`]; the returned [`PathGuard`] pops it again when
//! dropped, so the stack unwinds on every exit path, including `?` returns
//! and panics.

use std::ops::{Deref, DerefMut};

use contesta_diagnostic::PathElement;
use contesta_stack::DepthLimit;
use smallvec::SmallVec;

use crate::callsite::{CallSite, Resolve};
use crate::ContestaError;

/// A caller identifier replacing the caller of the element that was on top
/// of the stack when the override was set.
#[derive(Clone, Debug)]
struct CallerOverride {
    caller: String,
    depth: usize,
}

pub struct Context<'a> {
    resolver: &'a dyn Resolve,
    depth_limit: DepthLimit,
    paths: SmallVec<[PathElement; 8]>,
    overrides: Overrides,
}

/// Active caller overrides, outermost first, at most one per depth.
type Overrides = SmallVec<[CallerOverride; 4]>;

impl<'a> Context<'a> {
    pub fn new(resolver: &'a dyn Resolve, depth_limit: DepthLimit) -> Self {
        Context {
            resolver,
            depth_limit,
            paths: SmallVec::new(),
            overrides: SmallVec::new(),
        }
    }

    /// Drop all path elements and any caller override.
    pub fn reset(&mut self) {
        self.paths.clear();
        self.overrides.clear();
    }

    pub fn depth_limit(&self) -> DepthLimit {
        self.depth_limit
    }

    /// Number of path elements currently on the stack.
    pub fn depth(&self) -> usize {
        self.paths.len()
    }

    /// Resolve the caller identifier for `site`.
    pub fn resolve_caller(&self, site: &CallSite, callee: &str) -> Result<String, ContestaError> {
        self.resolver.caller_id(site, callee)
    }

    /// Build a path element for `data`, pushed by `callee` and invoked at `site`.
    pub fn new_path(
        &self,
        data: impl Into<String>,
        callee: &str,
        site: &CallSite,
    ) -> Result<PathElement, ContestaError> {
        let caller = self.resolve_caller(site, callee)?;
        Ok(PathElement::new(data, callee, caller))
    }

    pub fn push(&mut self, element: PathElement) {
        tracing::trace!(data = %element.data, callee = %element.callee, "push path");
        self.paths.push(element);
    }

    /// Pop the innermost path element. Popping an empty stack is a no-op.
    pub fn pop(&mut self) -> Option<PathElement> {
        let popped = self.paths.pop();
        let depth = self.paths.len();
        self.overrides.retain(|o| o.depth <= depth);
        popped
    }

    /// Snapshot of the path stack, outermost first.
    ///
    /// Each active caller override replaces the caller of the element that
    /// was innermost when it was set, even while deeper elements sit on top
    /// of it.
    pub fn current_path_chain(&self) -> Vec<PathElement> {
        let mut chain = self.paths.to_vec();
        for o in &self.overrides {
            if let Some(enclosing) = o.depth.checked_sub(1).and_then(|i| chain.get_mut(i)) {
                enclosing.caller.clone_from(&o.caller);
            }
        }
        chain
    }

    /// Override the caller of the innermost element. Replaces an earlier
    /// override set at the same depth.
    pub fn set_caller_override(&mut self, caller: impl Into<String>) {
        let depth = self.paths.len();
        self.overrides.retain(|o| o.depth < depth);
        self.overrides.push(CallerOverride {
            caller: caller.into(),
            depth,
        });
    }

    /// Drop the innermost caller override.
    pub fn clear_caller_override(&mut self) {
        self.overrides.pop();
    }

    /// The innermost active caller override.
    pub fn caller_override(&self) -> Option<&str> {
        self.overrides.last().map(|o| o.caller.as_str())
    }

    /// Push `element` for the lifetime of the returned guard.
    pub fn enter(&mut self, element: PathElement) -> PathGuard<'_, 'a> {
        self.push(element);
        PathGuard { cx: self }
    }

    /// Set a caller override for the lifetime of the returned guard; the
    /// overrides active before it are restored afterwards.
    pub fn override_caller(&mut self, caller: impl Into<String>) -> OverrideGuard<'_, 'a> {
        let previous = self.overrides.clone();
        self.set_caller_override(caller);
        OverrideGuard { cx: self, previous }
    }

    /// Run `f` with `element` pushed.
    pub fn with_path<R>(&mut self, element: PathElement, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = self.enter(element);
        f(&mut *guard)
    }
}

/// Pops its path element on drop.
pub struct PathGuard<'c, 'a> {
    cx: &'c mut Context<'a>,
}

impl<'a> Deref for PathGuard<'_, 'a> {
    type Target = Context<'a>;

    fn deref(&self) -> &Self::Target {
        self.cx
    }
}

impl DerefMut for PathGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cx
    }
}

impl Drop for PathGuard<'_, '_> {
    fn drop(&mut self) {
        self.cx.pop();
    }
}

/// Restores the previous caller overrides on drop.
pub struct OverrideGuard<'c, 'a> {
    cx: &'c mut Context<'a>,
    previous: Overrides,
}

impl<'a> Deref for OverrideGuard<'_, 'a> {
    type Target = Context<'a>;

    fn deref(&self) -> &Self::Target {
        self.cx
    }
}

impl DerefMut for OverrideGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cx
    }
}

impl Drop for OverrideGuard<'_, '_> {
    fn drop(&mut self) {
        self.cx.overrides = std::mem::take(&mut self.previous);
    }
}
