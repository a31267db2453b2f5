//! Choosing which waiting train crosses next.
//!
//! [`decide`] is a pure function of the two lane heads and the dispatch
//! history.  [`select_next`] applies a decision to a [`Lanes`] by removing
//! the chosen head.  Neither touches a lock; the dispatcher calls them with
//! the queue lock held.

use log::debug;

use mts_core::{Direction, ReadyTrain};
use mts_schedule::Lanes;

use crate::{DispatchHistory, DispatchPolicy};

// ── Heads ─────────────────────────────────────────────────────────────────────

/// The fronts of the east and west lanes, at least one present.
///
/// Building one from two empty lanes yields `None`, so "decide with nothing
/// waiting" can't be expressed.
#[derive(Copy, Clone, Debug)]
pub enum Heads<'a> {
    East(&'a ReadyTrain),
    West(&'a ReadyTrain),
    Both { east: &'a ReadyTrain, west: &'a ReadyTrain },
}

impl<'a> Heads<'a> {
    pub fn new(east: Option<&'a ReadyTrain>, west: Option<&'a ReadyTrain>) -> Option<Heads<'a>> {
        if let Some(e) = east {
            debug_assert_eq!(e.direction(), Direction::East, "west-bound train {} on east lane", e.id());
        }
        if let Some(w) = west {
            debug_assert_eq!(w.direction(), Direction::West, "east-bound train {} on west lane", w.id());
        }
        match (east, west) {
            (None, None) => None,
            (Some(east), None) => Some(Heads::East(east)),
            (None, Some(west)) => Some(Heads::West(west)),
            (Some(east), Some(west)) => Some(Heads::Both { east, west }),
        }
    }

    pub fn from_lanes(lanes: &'a Lanes) -> Option<Heads<'a>> {
        let (east, west) = lanes.heads();
        Heads::new(east, west)
    }

    pub fn head(&self, direction: Direction) -> Option<&'a ReadyTrain> {
        match (*self, direction) {
            (Heads::East(t), Direction::East) | (Heads::West(t), Direction::West) => Some(t),
            (Heads::Both { east, .. }, Direction::East) => Some(east),
            (Heads::Both { west, .. }, Direction::West) => Some(west),
            _ => None,
        }
    }
}

// ── Decision ──────────────────────────────────────────────────────────────────

/// Which rule picked the direction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Reason {
    /// Only one lane had a train.
    OnlyCandidate,
    /// The run limit was reached; the waiting side was forced.
    Starvation,
    /// Heads differed in priority; the higher one won.
    Priority,
    /// Equal priority; served the side opposite the last crossing.
    Alternate,
    /// Equal priority with no history; served the policy's default side.
    FirstTie,
}

/// Outcome of one selection: the side to serve and the history to commit
/// once its train has crossed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Decision {
    pub direction: Direction,
    pub history:   DispatchHistory,
    pub reason:    Reason,
}

/// Pick the next direction to serve.
///
/// With both lanes occupied the rules apply in order:
///
/// 1. **Starvation**: if `run_length >= starvation_limit`, serve the side
///    opposite the last crossing and restart the run at 1.
/// 2. **Priority**: if the heads differ in priority, serve the higher one.
/// 3. **Tie**: serve the side opposite the last crossing, or
///    `policy.tie_default` if nothing has crossed yet; the run restarts at 1.
///
/// With one lane occupied, that lane is served.
pub fn decide(heads: Heads<'_>, history: &DispatchHistory, policy: &DispatchPolicy) -> Decision {
    let (east, west) = match heads {
        Heads::East(_) => return only(Direction::East, history),
        Heads::West(_) => return only(Direction::West, history),
        Heads::Both { east, west } => (east, west),
    };

    if let Some(last) = history.last {
        if history.run_length >= policy.starvation_limit {
            let direction = last.opposite();
            return Decision {
                direction,
                history: DispatchHistory::switched_to(direction),
                reason: Reason::Starvation,
            };
        }
    }

    if east.priority() != west.priority() {
        let direction = if east.priority() > west.priority() { Direction::East } else { Direction::West };
        return Decision { direction, history: history.after(direction), reason: Reason::Priority };
    }

    let (direction, reason) = match history.last {
        Some(last) => (last.opposite(), Reason::Alternate),
        None => (policy.tie_default, Reason::FirstTie),
    };
    Decision { direction, history: DispatchHistory::switched_to(direction), reason }
}

fn only(direction: Direction, history: &DispatchHistory) -> Decision {
    Decision { direction, history: history.after(direction), reason: Reason::OnlyCandidate }
}

/// Decide against the current lane heads and remove the chosen train.
///
/// # Panics
///
/// If both lanes are empty.  Callers check [`Lanes::is_empty`] first; there
/// is no decision to make without a waiting train.
pub fn select_next(
    lanes:   &mut Lanes,
    history: &DispatchHistory,
    policy:  &DispatchPolicy,
) -> (ReadyTrain, Decision) {
    let Some(heads) = Heads::from_lanes(lanes) else {
        panic!("select_next called with both lanes empty");
    };
    let decision = decide(heads, history, policy);
    let Some(train) = lanes.pop_front(decision.direction) else {
        unreachable!("decided {} but that lane is empty", decision.direction);
    };
    debug!(
        "selected train {} ({}, {:?}) by {:?}; run {} → {}",
        train.id(),
        decision.direction,
        train.priority(),
        decision.reason,
        history.run_length,
        decision.history.run_length,
    );
    (train, decision)
}
