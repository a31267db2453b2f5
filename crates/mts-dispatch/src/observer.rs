//! Observer hooks for event logging and run statistics.

use std::fmt;

use mts_core::{Direction, Elapsed, TrainId};

use crate::Decision;

// ── Events ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    /// Loading finished; the train is queued.
    Ready,
    /// The train took the crossing.
    Entering,
    /// The train cleared the crossing.
    Leaving,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Ready => "ready",
            EventKind::Entering => "entering",
            EventKind::Leaving => "leaving",
        }
    }

    /// The log sentence for this event, without the time stamp.
    pub fn describe(self, train: TrainId, direction: Direction) -> String {
        match self {
            EventKind::Ready => format!("Train {train:2} is ready to go {direction:>4}"),
            EventKind::Entering => format!("Train {train:2} is ON the main track going {direction:>4}"),
            EventKind::Leaving => {
                format!("Train {train:2} is OFF the main track after going {direction:>4}")
            }
        }
    }
}

/// One train state transition.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TrainEvent {
    pub at:        Elapsed,
    pub kind:      EventKind,
    pub train:     TrainId,
    pub direction: Direction,
}

/// `HH:MM:SS.t Train  N is ...`
impl fmt::Display for TrainEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.at, self.kind.describe(self.train, self.direction))
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Totals for a completed run.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RunSummary {
    pub total:                usize,
    pub finished:             usize,
    pub east_crossings:       usize,
    pub west_crossings:       usize,
    /// Longest streak of consecutive same-direction crossings.
    pub longest_run:          u32,
    pub starvation_overrides: usize,
    pub elapsed:              Elapsed,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Dispatch::run`][crate::Dispatch::run].
///
/// Hooks run on whichever thread produced the event and are serialized
/// through a lock, so implementations never see two calls at once.  All
/// methods default to no-ops.
///
/// `on_event` is called while the emitting thread holds the queue lock
/// (ready) or the track lock (entering/leaving); keep it short.
pub trait DispatchObserver {
    /// Called once before any thread is spawned.
    fn on_start(&mut self, _total: usize) {}

    fn on_event(&mut self, _event: &TrainEvent) {}

    /// Called by the dispatcher after it removes `train` from its lane and
    /// before it takes the track.
    fn on_decision(&mut self, _train: TrainId, _decision: &Decision) {}

    /// Called once after every thread has been joined.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

/// Keeps every event and decision in memory, in the order received.
#[derive(Default, Debug)]
pub struct RecordingObserver {
    pub events:    Vec<TrainEvent>,
    pub decisions: Vec<(TrainId, Decision)>,
    pub summary:   Option<RunSummary>,
}

impl RecordingObserver {
    /// Train ids in the order they took the crossing.
    pub fn dispatch_order(&self) -> Vec<TrainId> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Entering)
            .map(|e| e.train)
            .collect()
    }

    /// Events of one kind, in order.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &TrainEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }
}

impl DispatchObserver for RecordingObserver {
    fn on_event(&mut self, event: &TrainEvent) {
        self.events.push(*event);
    }

    fn on_decision(&mut self, train: TrainId, decision: &Decision) {
        self.decisions.push((train, *decision));
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        self.summary = Some(summary.clone());
    }
}
