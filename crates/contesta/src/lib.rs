//! Composable structural matchers and assertions.
//!
//! ```text
//! let mut t = DeferredFailure::new();
//! let mut c = Contesta::new(&mut t);
//!
//! c.is(42_i32, 42_i32);
//! c.value_is(42_i32, 42.0_f64);
//! c.is(
//!     config,
//!     map![
//!         key("name").is("contesta"),
//!         key("limits").is(map![key("depth").is(256_usize), non_exhaustive()]),
//!         exhaustive(),
//!     ],
//! );
//! ```
//!
//! # Architecture
//!
//! - [`numeric`]: decides whether two numbers of different types can be
//!   compared, and converts them
//! - [`equality`]: exact and value equality testers
//! - [`matcher`]: the [`Matcher`] protocol, the map matcher and its key
//!   matchers and exhaustiveness sentinels
//! - [`context`]: the path stack of one assertion, with caller overrides
//! - [`callsite`]: call-site capture and caller resolution
//! - [`Contesta`]: entry points that evaluate, emit and report to the host
//!
//! Failed comparisons are [`Record`]s; a [`ContestaError`] is a fault that
//! aborts the assertion.
//!
//! # Logging
//!
//! Evaluation is instrumented with `tracing`. Call [`init_tracing`] and set
//! `RUST_LOG=contesta=trace` to see every matcher evaluation and path push.

mod assert;
pub mod callsite;
mod config;
pub mod context;
pub mod equality;
mod errors;
mod host;
pub mod matcher;
pub mod numeric;

pub use assert::Contesta;
pub use callsite::{CallSite, Resolve, SourceResolver};
pub use config::Config;
pub use context::Context;
pub use equality::{exact_eq, value_eq, ExactEq, ValueEq};
pub use errors::ContestaError;
pub use host::{DeferredFailure, TestingT};
pub use matcher::{
    exhaustive, key, non_exhaustive, End, Expectation, Key, KeyMatcher, MapEntry, MapMatcher,
    Matcher, NonExhaustive,
};

pub use contesta_diagnostic::emitter::{CaptureEmitter, Emitted, PlainEmitter, RecordEmitter};
pub use contesta_diagnostic::{Locus, PathElement, Record, Shown};
pub use contesta_stack::DepthLimit;
pub use contesta_value::{Bytes, IntoValue, StaticType, StructValue, Type, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_test_writer())
                .with(filter)
                .init();
        }
    });
}
