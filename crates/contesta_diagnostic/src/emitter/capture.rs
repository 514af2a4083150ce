//! In-memory emitter for tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::RecordEmitter;
use crate::Record;

/// One call to [`RecordEmitter::emit`].
#[derive(Clone, Debug)]
pub struct Emitted {
    pub assertion: String,
    pub records: Vec<Record>,
}

/// Keeps every emitted batch of records.
///
/// Clones share storage, so a test can keep one handle and give the other to
/// the assertion object.
#[derive(Clone, Debug, Default)]
pub struct CaptureEmitter {
    emitted: Rc<RefCell<Vec<Emitted>>>,
}

impl CaptureEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn emitted(&self) -> Vec<Emitted> {
        self.emitted.borrow().clone()
    }

    /// Records of the most recent assertion.
    pub fn last(&self) -> Vec<Record> {
        self.emitted
            .borrow()
            .last()
            .map(|e| e.records.clone())
            .unwrap_or_default()
    }

    /// Failing records across all assertions.
    pub fn failures(&self) -> Vec<Record> {
        self.emitted
            .borrow()
            .iter()
            .flat_map(|e| e.records.iter().filter(|r| !r.is_pass()).cloned())
            .collect()
    }
}

impl RecordEmitter for CaptureEmitter {
    fn emit(&mut self, assertion: &str, records: &[Record]) {
        self.emitted.borrow_mut().push(Emitted {
            assertion: assertion.to_owned(),
            records: records.to_vec(),
        });
    }

    fn flush(&mut self) {}
}
