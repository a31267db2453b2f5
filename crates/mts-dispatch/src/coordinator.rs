//! Shared state and the locking protocol between workers and the dispatcher.
//!
//! | Lock            | Guards                                          |
//! |-----------------|-------------------------------------------------|
//! | `queue`         | both wait lanes, exited-worker count            |
//! | `track`         | the crossing, dispatch history, finished count  |
//! | `observer`      | the caller's `DispatchObserver`                 |
//!
//! Lock order: `queue` and `track` are never held together.  `observer` is
//! only ever taken last, under one of the other two or alone.

use std::thread;
use std::time::Instant;

use log::trace;
use parking_lot::{Condvar, Mutex};

use mts_core::{Direction, ReadyTrain, SimClock, TimeScale, TrainId};
use mts_schedule::Lanes;

use crate::{Decision, DispatchHistory, DispatchObserver, DispatchPolicy, EventKind, Reason, RunSummary, TrainEvent};

// ── Lock-protected state ──────────────────────────────────────────────────────

pub(crate) struct QueueState {
    pub(crate) lanes:  Lanes,
    /// Workers that have returned or unwound.  Every train a worker queued
    /// was pushed before its worker counted itself here.
    pub(crate) exited: usize,
}

#[derive(Default)]
pub(crate) struct TrackState {
    pub(crate) occupant:       Option<TrainId>,
    pub(crate) history:        DispatchHistory,
    pub(crate) finished:       usize,
    pub(crate) east_crossings: usize,
    pub(crate) west_crossings: usize,
    pub(crate) longest_run:    u32,
    pub(crate) overrides:      usize,
}

/// What the dispatcher found after waiting on the queue lock.
pub(crate) enum Next {
    Cross(ReadyTrain, Decision),
    Done,
}

// ── Coordinator ───────────────────────────────────────────────────────────────

/// Everything the worker threads and the dispatcher share for one run.
pub(crate) struct Coordinator<'o, O: DispatchObserver> {
    queue:       Mutex<QueueState>,
    train_ready: Condvar,
    track:       Mutex<TrackState>,
    observer:    Mutex<&'o mut O>,
    clock:       SimClock,
    scale:       TimeScale,
    policy:      DispatchPolicy,
    total:       usize,
}

impl<'o, O: DispatchObserver> Coordinator<'o, O> {
    pub(crate) fn new(
        total:    usize,
        scale:    TimeScale,
        policy:   DispatchPolicy,
        clock:    SimClock,
        observer: &'o mut O,
    ) -> Self {
        Self {
            queue: Mutex::new(QueueState { lanes: Lanes::new(), exited: 0 }),
            train_ready: Condvar::new(),
            track: Mutex::new(TrackState::default()),
            observer: Mutex::new(observer),
            clock,
            scale,
            policy,
            total,
        }
    }

    pub(crate) fn scale(&self) -> TimeScale {
        self.scale
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    // ── Worker side ───────────────────────────────────────────────────────

    /// Queue a loaded train and wake the dispatcher.
    pub(crate) fn admit(&self, train: ReadyTrain) {
        let (id, direction) = (train.id(), train.direction());
        let mut queue = self.queue.lock();
        queue.lanes.push(train);
        self.emit(EventKind::Ready, id, direction);
        self.train_ready.notify_one();
        trace!("train {id} queued; {} waiting", queue.lanes.len());
    }

    /// Record that the worker for `id` is gone, whether or not it queued
    /// its train.
    pub(crate) fn retire(&self, id: TrainId) {
        let mut queue = self.queue.lock();
        queue.exited += 1;
        self.train_ready.notify_one();
        trace!("train {id} worker exited ({}/{})", queue.exited, self.total);
    }

    // ── Dispatcher side ───────────────────────────────────────────────────

    /// `(history, finished)` as last committed.
    pub(crate) fn track_snapshot(&self) -> (DispatchHistory, usize) {
        let track = self.track.lock();
        (track.history, track.finished)
    }

    /// Block until a train is waiting or every worker has exited, then
    /// select under the queue lock.
    ///
    /// `history` comes from [`Self::track_snapshot`]; only the dispatcher
    /// changes it, so it stays current while it waits.
    pub(crate) fn wait_next(&self, history: &DispatchHistory) -> Next {
        let mut queue = self.queue.lock();
        while queue.lanes.is_empty() && queue.exited < self.total {
            trace!("dispatcher waiting ({}/{} workers exited)", queue.exited, self.total);
            self.train_ready.wait(&mut queue);
        }
        if queue.lanes.is_empty() {
            // Every worker has exited, so nothing more can arrive.
            return Next::Done;
        }
        let (train, decision) = crate::select_next(&mut queue.lanes, history, &self.policy);
        Next::Cross(train, decision)
    }

    pub(crate) fn report_decision(&self, train: TrainId, decision: &Decision) {
        self.observer.lock().on_decision(train, decision);
    }

    /// Hold the track for the train's crossing time, then commit `decision`.
    pub(crate) fn cross(&self, train: ReadyTrain, decision: Decision) {
        let mut track = self.track.lock();
        debug_assert!(track.occupant.is_none(), "track occupied by {:?}", track.occupant);
        track.occupant = Some(train.id());

        self.emit(EventKind::Entering, train.id(), train.direction());
        thread::sleep(self.scale.duration(train.crossing_units()));
        self.emit(EventKind::Leaving, train.id(), train.direction());

        track.history = decision.history;
        track.finished += 1;
        debug_assert!(track.finished <= self.total);
        match train.direction() {
            Direction::East => track.east_crossings += 1,
            Direction::West => track.west_crossings += 1,
        }
        track.longest_run = track.longest_run.max(decision.history.run_length);
        if decision.reason == Reason::Starvation {
            track.overrides += 1;
        }
        track.occupant = None;
    }

    fn emit(&self, kind: EventKind, train: TrainId, direction: Direction) {
        let event = TrainEvent { at: self.clock.elapsed(), kind, train, direction };
        self.observer.lock().on_event(&event);
    }

    // ── Teardown ──────────────────────────────────────────────────────────

    /// Consume the coordinator, releasing the observer borrow.
    pub(crate) fn into_summary(self, finished_at: Instant) -> RunSummary {
        let track = self.track.into_inner();
        RunSummary {
            total:                self.total,
            finished:             track.finished,
            east_crossings:       track.east_crossings,
            west_crossings:       track.west_crossings,
            longest_run:          track.longest_run,
            starvation_overrides: track.overrides,
            elapsed:              self.clock.elapsed_at(finished_at),
        }
    }
}
