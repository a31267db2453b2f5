//! Plain data row written by output backends.

use mts_core::{Direction, TrainId};
use mts_dispatch::{EventKind, TrainEvent};

/// One event, flattened for writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// Milliseconds since the run started.
    pub elapsed_ms: u64,
    /// `HH:MM:SS.t`, as printed at the start of each log line.
    pub stamp:      String,
    pub kind:       EventKind,
    pub train:      TrainId,
    pub direction:  Direction,
}

impl EventRow {
    /// The full log line: stamp followed by the event sentence.
    pub fn line(&self) -> String {
        format!("{} {}", self.stamp, self.kind.describe(self.train, self.direction))
    }
}

impl From<&TrainEvent> for EventRow {
    fn from(e: &TrainEvent) -> Self {
        Self {
            elapsed_ms: e.at.as_millis(),
            stamp:      e.at.to_string(),
            kind:       e.kind,
            train:      e.train,
            direction:  e.direction,
        }
    }
}
