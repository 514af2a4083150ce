//! Record Emitters
//!
//! Rendering is kept out of the matcher core: entry points hand the records
//! of one assertion to a [`RecordEmitter`].
//! - Plain: human-readable text on any `io::Write`
//! - Capture: keeps records in memory for inspection in tests

mod capture;
mod plain;

pub use capture::{CaptureEmitter, Emitted};
pub use plain::PlainEmitter;

use crate::Record;

/// Trait for rendering the records of one assertion.
pub trait RecordEmitter {
    /// Emit every record produced by the assertion named `assertion`.
    fn emit(&mut self, assertion: &str, records: &[Record]);

    /// Flush any buffered output.
    fn flush(&mut self);
}
