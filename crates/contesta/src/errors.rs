//! Environment faults that abort an assertion.
//!
//! Comparison failures are never errors: they are failing
//! [`Record`](crate::Record)s. A [`ContestaError`] means evaluation could not
//! continue at all, and entry points report it through
//! [`TestingT::fatal`](crate::TestingT::fatal).

use contesta_stack::DepthExceeded;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContestaError {
    /// Structural comparison nested deeper than the configured limit.
    #[error("structural comparison exceeded the recursion limit of {limit} levels")]
    DepthExceeded { limit: usize },

    /// The call-site resolver had no frame to attribute `callee` to.
    #[error("cannot resolve the caller of {callee}: no call-site frame is available")]
    MissingFrame { callee: String },
}

impl From<DepthExceeded> for ContestaError {
    fn from(err: DepthExceeded) -> Self {
        ContestaError::DepthExceeded { limit: err.limit }
    }
}
