//! Diagnostic records for structural assertions.
//!
//! Every matcher evaluation produces [`Record`]s: a pass/fail verdict, the
//! values involved, the [`Locus`] of a failure, and the [`PathElement`] chain
//! that led to it. Records are plain data. Turning them into text is the job
//! of a [`RecordEmitter`](emitter::RecordEmitter).

pub mod emitter;
mod path;
mod record;

pub use path::PathElement;
pub use record::{Locus, Record, Shown};
