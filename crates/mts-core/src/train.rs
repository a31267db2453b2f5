//! Train records and their two observable states.
//!
//! # Lifecycle
//!
//! ```text
//! TrainSpec ──Train::new──▶ Train ──into_ready(at)──▶ ReadyTrain ──▶ crossing ──▶ dropped
//!  (manifest row)          (preparing)               (waiting)
//! ```
//!
//! The readiness instant lives only on `ReadyTrain`, and the only way to get
//! one is to consume a `Train` by value.  The preparing worker owns its
//! `Train` exclusively, so the instant is written exactly once and before any
//! other thread can see the train.

use std::cmp::Ordering;
use std::time::Instant;

use crate::{Direction, MtsError, MtsResult, Priority, TrainId};

// ── TrainSpec ─────────────────────────────────────────────────────────────────

/// One validated manifest row.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TrainSpec {
    pub direction:      Direction,
    pub priority:       Priority,
    /// Preparation time in abstract time units (≥ 1).
    pub loading_units:  u32,
    /// Crossing time in abstract time units (≥ 1).
    pub crossing_units: u32,
}

impl TrainSpec {
    pub fn new(
        direction:      Direction,
        priority:       Priority,
        loading_units:  u32,
        crossing_units: u32,
    ) -> MtsResult<Self> {
        if loading_units == 0 {
            return Err(MtsError::InvalidDuration { what: "loading", value: loading_units });
        }
        if crossing_units == 0 {
            return Err(MtsError::InvalidDuration { what: "crossing", value: crossing_units });
        }
        Ok(Self { direction, priority, loading_units, crossing_units })
    }

    /// Build from a raw direction code (`e`, `E`, `w`, `W`) and durations.
    pub fn parse(code: &str, loading_units: u32, crossing_units: u32) -> MtsResult<Self> {
        let (direction, priority) = Direction::parse_code(code)?;
        Self::new(direction, priority, loading_units, crossing_units)
    }

    /// The direction code this spec was (or would be) written with.
    pub fn code(&self) -> char {
        self.priority.code(self.direction)
    }
}

// ── Train ─────────────────────────────────────────────────────────────────────

/// A train that has not finished loading yet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Train {
    id:   TrainId,
    spec: TrainSpec,
}

impl Train {
    pub fn new(id: TrainId, spec: TrainSpec) -> Self {
        Self { id, spec }
    }

    #[inline]
    pub fn id(&self) -> TrainId {
        self.id
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.spec.direction
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.spec.priority
    }

    #[inline]
    pub fn spec(&self) -> &TrainSpec {
        &self.spec
    }

    /// Finish loading at `at`.  Consumes the train so the stamp can't be
    /// rewritten.
    pub fn into_ready(self, at: Instant) -> ReadyTrain {
        ReadyTrain { train: self, ready_at: at }
    }
}

// ── ReadyTrain ────────────────────────────────────────────────────────────────

/// A loaded train waiting for (or on) the crossing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReadyTrain {
    train:    Train,
    ready_at: Instant,
}

impl ReadyTrain {
    #[inline]
    pub fn id(&self) -> TrainId {
        self.train.id
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.train.spec.direction
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.train.spec.priority
    }

    #[inline]
    pub fn crossing_units(&self) -> u32 {
        self.train.spec.crossing_units
    }

    #[inline]
    pub fn ready_at(&self) -> Instant {
        self.ready_at
    }

    /// Dispatch rank: higher priority first, then earlier readiness.
    ///
    /// `Instant` compares at full clock resolution, so two trains ready in
    /// the same second are still ordered by their sub-second parts.
    pub fn rank_cmp(&self, other: &ReadyTrain) -> Ordering {
        other
            .priority()
            .cmp(&self.priority())
            .then_with(|| self.ready_at.cmp(&other.ready_at))
    }

    /// `true` if `self` must be served strictly before `other`.  Equal rank
    /// is not outranking.
    #[inline]
    pub fn outranks(&self, other: &ReadyTrain) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}
