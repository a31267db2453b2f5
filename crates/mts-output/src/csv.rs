//! CSV output backend.
//!
//! Creates `events.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_CSV: &str = "events.csv";

/// Writes one CSV row per event.
pub struct CsvEventWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Open (or create) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_CSV))?;
        events.write_record(["elapsed_ms", "stamp", "kind", "train_id", "direction"])?;
        Ok(Self { events, finished: false })
    }
}

impl EventWriter for CsvEventWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.elapsed_ms.to_string(),
            row.stamp.clone(),
            row.kind.as_str().to_owned(),
            row.train.0.to_string(),
            row.direction.label().to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
