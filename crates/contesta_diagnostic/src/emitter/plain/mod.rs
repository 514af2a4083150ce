//! Plain Emitter
//!
//! Human-readable record output without color or table layout.

use std::io::{self, Write};

use super::RecordEmitter;
use crate::{Record, Shown};

/// Writes one block per record.
pub struct PlainEmitter<W: Write> {
    writer: W,
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(writer: W) -> Self {
        PlainEmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_shown(&mut self, label: &str, shown: &Shown) {
        let _ = writeln!(
            self.writer,
            "  {label:<9} {} ({})",
            shown.value(),
            shown.description()
        );
    }

    fn write_failure(&mut self, assertion: &str, record: &Record) {
        let _ = writeln!(self.writer, "Assertion not ok: {assertion}");

        if !record.paths().is_empty() {
            let _ = writeln!(self.writer, "  path:");
            let width = record
                .paths()
                .iter()
                .map(|p| p.data.chars().count())
                .max()
                .unwrap_or(0);
            for path in record.paths() {
                let _ = writeln!(
                    self.writer,
                    "    {:<width$}  {}",
                    path.data,
                    path.called_at()
                );
            }
        }

        if let Some(actual) = record.actual() {
            self.write_shown("got:", actual);
        }
        if let Some(op) = record.op() {
            let _ = writeln!(self.writer, "  {:<9} {op}", "op:");
        }
        if let Some(expected) = record.expected() {
            self.write_shown("expected:", expected);
        }
        if let Some(locus) = record.locus() {
            let _ = writeln!(self.writer, "  {:<9} {locus}", "failure:");
        }
        if let Some(description) = record.description() {
            let _ = writeln!(self.writer, "  {description}");
        }
        let _ = writeln!(self.writer);
    }
}

impl PlainEmitter<io::Stdout> {
    pub fn stdout() -> Self {
        PlainEmitter::new(io::stdout())
    }
}

impl<W: Write> RecordEmitter for PlainEmitter<W> {
    fn emit(&mut self, assertion: &str, records: &[Record]) {
        for record in records {
            if record.is_pass() {
                let _ = writeln!(self.writer, "Assertion ok: {assertion}");
            } else {
                self.write_failure(assertion, record);
            }
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
