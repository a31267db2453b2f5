//! `EventLogObserver<W>` — bridges `DispatchObserver` to an `EventWriter`.

use log::error;

use mts_dispatch::{DispatchObserver, RunSummary, TrainEvent};

use crate::writer::EventWriter;
use crate::{EventRow, OutputError, OutputResult};

/// A [`DispatchObserver`] that writes every train event to any
/// [`EventWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After `run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of events successfully written.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    error!("event log write failed: {e}");
                    self.last_error = Some(e);
                }
                false
            }
        }
    }
}

impl<W: EventWriter> DispatchObserver for EventLogObserver<W> {
    fn on_event(&mut self, event: &TrainEvent) {
        let result = self.writer.write_event(&EventRow::from(event));
        if self.store_err(result) {
            self.written += 1;
        }
    }

    fn on_finish(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
