//! Stack safety for recursive structural comparison.
//!
//! Deep equality walks arbitrarily nested values. Two things can go wrong
//! with a naive recursive walk: the native stack can overflow on very deep
//! (but finite) values, and a walk that never bottoms out never terminates.
//! This crate handles both:
//!
//! - [`ensure_sufficient_stack`] grows the stack on demand (native targets
//!   only, via `stacker`).
//! - [`DepthLimit`] bounds how many levels a walk may descend and reports a
//!   [`DepthExceeded`] error instead of looping forever.
//!
//! # Usage
//!
//! ```text
//! fn walk(&self, a: &Value, b: &Value, depth: usize) -> Result<bool, DepthExceeded> {
//!     self.limit.descend(depth, || {
//!         // ... compare children with `walk(.., depth + 1)` ...
//!     })?
//! }
//! ```
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space

use thiserror::Error;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Default number of nesting levels a structural walk may descend.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, this will
/// allocate additional stack space before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// A recursive walk went deeper than its [`DepthLimit`] allows.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("structural comparison exceeded the recursion limit of {limit} levels")]
pub struct DepthExceeded {
    /// The limit that was hit.
    pub limit: usize,
}

/// Upper bound on the nesting depth of a recursive walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DepthLimit {
    max: usize,
}

impl Default for DepthLimit {
    fn default() -> Self {
        DepthLimit::new(DEFAULT_MAX_DEPTH)
    }
}

impl DepthLimit {
    /// Create a limit allowing `max` levels of nesting.
    pub const fn new(max: usize) -> Self {
        DepthLimit { max }
    }

    /// The maximum allowed depth.
    pub const fn max(self) -> usize {
        self.max
    }

    /// Run `f` as the body of a walk step at `depth`.
    ///
    /// Fails with [`DepthExceeded`] without calling `f` once `depth` is past
    /// the limit. Otherwise `f` runs with enough stack to recurse further.
    #[inline]
    pub fn descend<R>(self, depth: usize, f: impl FnOnce() -> R) -> Result<R, DepthExceeded> {
        if depth > self.max {
            return Err(DepthExceeded { limit: self.max });
        }
        Ok(ensure_sufficient_stack(f))
    }
}
