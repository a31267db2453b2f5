//! Plain-text event log.
//!
//! One line per event, flushed immediately so a crashed or interrupted run
//! still leaves a complete prefix on disk:
//!
//! ```text
//! 00:00:01.0 Train  2 is ready to go East
//! 00:00:01.0 Train  2 is ON the main track going East
//! 00:00:02.0 Train  2 is OFF the main track after going East
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

/// Writes log lines to `W` and, if `echo` is set, to stdout as well.
pub struct TextLogWriter<W: Write = File> {
    out:      W,
    echo:     bool,
    finished: bool,
}

impl TextLogWriter<File> {
    /// Create (truncating) the log file at `path`.
    pub fn create(path: &Path, echo: bool) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?, echo))
    }
}

impl<W: Write> TextLogWriter<W> {
    pub fn from_writer(out: W, echo: bool) -> Self {
        Self { out, echo, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventWriter for TextLogWriter<W> {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let line = row.line();
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        if self.echo {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{line}")?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
