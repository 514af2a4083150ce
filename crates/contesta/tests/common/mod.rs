//! Shared test host.

#![allow(dead_code)]

use contesta::{CaptureEmitter, Contesta, TestingT};

/// Records every call an entry point makes on its host.
#[derive(Debug, Default)]
pub struct MockT {
    pub failed: usize,
    pub fatal: Vec<String>,
    pub helper: usize,
}

impl TestingT for MockT {
    fn fail(&mut self) {
        self.failed += 1;
    }

    fn fatal(&mut self, message: &str) {
        self.fatal.push(message.to_owned());
    }

    fn helper(&mut self) {
        self.helper += 1;
    }
}

/// A `Contesta` over a fresh [`MockT`], plus a handle on its emitted records.
#[track_caller]
pub fn contesta() -> (Contesta<MockT>, CaptureEmitter) {
    let emitter = CaptureEmitter::new();
    let c = Contesta::with_emitter(MockT::default(), emitter.clone());
    (c, emitter)
}
