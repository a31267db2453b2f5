//! The `EventWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult};

/// Trait implemented by the text, CSV and SQLite writers.
///
/// Errors are stored by [`EventLogObserver`][crate::EventLogObserver] and
/// retrieved with `take_error`.
pub trait EventWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Sends every row to two writers, `A` first.
pub struct TeeWriter<A, B> {
    pub first:  A,
    pub second: B,
}

impl<A: EventWriter, B: EventWriter> TeeWriter<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: EventWriter, B: EventWriter> EventWriter for TeeWriter<A, B> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let a = self.first.write_event(row);
        let b = self.second.write_event(row);
        a.and(b)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let a = self.first.finish();
        let b = self.second.finish();
        a.and(b)
    }
}

impl<W: EventWriter + ?Sized> EventWriter for Box<W> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        (**self).write_event(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
