//! Assertion entry points.
//!
//! A [`Contesta`] wraps one test's host, an emitter and a [`Config`]. Each
//! assertion builds a fresh [`Context`], pushes a root path element named
//! after the actual value's type, evaluates, then hands the records to the
//! emitter and reports failures to the host.

use std::panic::Location;

use contesta_diagnostic::emitter::{PlainEmitter, RecordEmitter};
use contesta_diagnostic::{Locus, Record};
use contesta_value::{IntoValue, Value};

use crate::callsite::{parent_dir, CallSite, Resolve};
use crate::context::Context;
use crate::equality::ValueEq;
use crate::host::TestingT;
use crate::matcher::{Expectation, Matcher};
use crate::{Config, ContestaError};

const IS_CALLEE: &str = "Contesta::is";
const VALUE_IS_CALLEE: &str = "Contesta::value_is";

pub struct Contesta<T: TestingT> {
    t: T,
    emitter: Box<dyn RecordEmitter>,
    config: Config,
    resolver: Box<dyn Resolve>,
}

impl<T: TestingT> Contesta<T> {
    /// Assertions reporting to `t`, printing to stdout.
    ///
    /// The directory of the calling file becomes the root stripped from
    /// caller locations.
    #[track_caller]
    pub fn new(t: T) -> Self {
        Self::with_emitter(t, PlainEmitter::stdout())
    }

    /// Assertions reporting to `t`, rendering through `emitter`.
    #[track_caller]
    pub fn with_emitter(t: T, emitter: impl RecordEmitter + 'static) -> Self {
        let config = Config::default().with_root(parent_dir(Location::caller().file()));
        let resolver = Box::new(config.resolver());
        Contesta {
            t,
            emitter: Box::new(emitter),
            config,
            resolver,
        }
    }

    /// Replace the configuration. The caller root captured at construction is
    /// kept unless `config` sets its own.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        let config = match (config.root(), self.config.root()) {
            (None, Some(root)) => config.with_root(root),
            _ => config,
        };
        self.resolver = Box::new(config.resolver());
        self.config = config;
        self
    }

    /// Use a custom call-site resolver instead of the configured one.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl Resolve + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &T {
        &self.t
    }

    pub fn host_mut(&mut self) -> &mut T {
        &mut self.t
    }

    pub fn into_host(self) -> T {
        self.t
    }

    /// Assert that `actual` matches `expected` exactly.
    ///
    /// `expected` is a literal (compared with exact equality, types
    /// included) or any matcher.
    #[track_caller]
    pub fn is(&mut self, actual: impl IntoValue, expected: impl Into<Expectation>) -> bool {
        self.is_named(actual, expected, "is")
    }

    #[track_caller]
    pub fn is_named(
        &mut self,
        actual: impl IntoValue,
        expected: impl Into<Expectation>,
        name: &str,
    ) -> bool {
        self.t.helper();
        let site = CallSite::here();
        let expected = expected.into();
        let result = self.run(&site, IS_CALLEE, &actual.into_value(), |cx, actual| {
            expected.evaluate(cx, actual)
        });
        self.report(name, result)
    }

    /// Assert that `actual` has the same value as `expected`, converting
    /// between compatible types (`42_i32` equals `42.0_f64`).
    ///
    /// Only literals are accepted; passing a matcher is a usage failure.
    #[track_caller]
    pub fn value_is(&mut self, actual: impl IntoValue, expected: impl Into<Expectation>) -> bool {
        self.value_is_named(actual, expected, "value_is")
    }

    #[track_caller]
    pub fn value_is_named(
        &mut self,
        actual: impl IntoValue,
        expected: impl Into<Expectation>,
        name: &str,
    ) -> bool {
        self.t.helper();
        let site = CallSite::here();
        let expected = expected.into();
        let result = self.run(&site, VALUE_IS_CALLEE, &actual.into_value(), |cx, actual| {
            match &expected {
                Expectation::Literal(value) => ValueEq::new(value.clone()).evaluate(cx, actual),
                Expectation::Matcher(matcher) => Ok(vec![Record::fail(Locus::InUsage)
                    .with_actual(actual.clone())
                    .with_expected(Value::Struct(Value::record(matcher.name())))
                    .with_paths(cx.current_path_chain())
                    .with_description(
                        "You cannot pass a matcher as the expected value to value_is",
                    )]),
            }
        });
        self.report(name, result)
    }

    /// Evaluate `f` in a fresh context holding only the root path element.
    fn run(
        &self,
        site: &CallSite,
        callee: &str,
        actual: &Value,
        f: impl FnOnce(&mut Context<'_>, &Value) -> Result<Vec<Record>, ContestaError>,
    ) -> Result<Vec<Record>, ContestaError> {
        let mut cx = Context::new(self.resolver.as_ref(), self.config.depth_limit());
        let root = cx.new_path(actual.ty().to_string(), callee, site)?;
        let mut cx = cx.enter(root);
        f(&mut *cx, actual)
    }

    /// Emit the records and tell the host about failures. A fault fails the
    /// test fatally.
    fn report(&mut self, name: &str, result: Result<Vec<Record>, ContestaError>) -> bool {
        let records = match result {
            Ok(records) => records,
            Err(err) => {
                tracing::debug!(%err, assertion = name, "assertion aborted");
                self.emitter.flush();
                self.t.fatal(&err.to_string());
                return false;
            }
        };

        self.emitter.emit(name, &records);
        let mut passed = true;
        for record in records.iter().filter(|record| !record.is_pass()) {
            tracing::debug!(assertion = name, locus = ?record.locus(), "assertion failed");
            self.t.fail();
            passed = false;
        }
        passed
    }
}
