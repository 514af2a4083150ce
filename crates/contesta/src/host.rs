//! Binding to the host test framework.

/// The part of a test framework's API that assertions use.
///
/// Only entry points call these methods; matcher evaluation never does.
pub trait TestingT {
    /// Mark the current test as failed and keep going.
    fn fail(&mut self);

    /// Fail the current test and stop it.
    fn fatal(&mut self, message: &str);

    /// Mark the calling function as a test helper. Most hosts have nothing to
    /// do here.
    fn helper(&mut self) {}
}

impl<T: TestingT + ?Sized> TestingT for &mut T {
    fn fail(&mut self) {
        (**self).fail();
    }

    fn fatal(&mut self, message: &str) {
        (**self).fatal(message);
    }

    fn helper(&mut self) {
        (**self).helper();
    }
}

/// A host for plain `#[test]` functions.
///
/// Failures are remembered and the test panics when the host is dropped, so
/// one test can report several failed assertions. A fatal failure panics at
/// once.
#[derive(Debug, Default)]
pub struct DeferredFailure {
    failures: usize,
}

impl DeferredFailure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of failed assertion records so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn has_failed(&self) -> bool {
        self.failures > 0
    }
}

impl TestingT for DeferredFailure {
    fn fail(&mut self) {
        self.failures += 1;
    }

    #[allow(clippy::panic)]
    fn fatal(&mut self, message: &str) {
        self.failures += 1;
        panic!("{message}");
    }
}

impl Drop for DeferredFailure {
    #[allow(clippy::panic)]
    fn drop(&mut self) {
        if self.failures > 0 && !std::thread::panicking() {
            panic!("{} assertion(s) failed", self.failures);
        }
    }
}
