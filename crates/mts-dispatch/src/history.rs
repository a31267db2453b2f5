//! Dispatch history and the tunables that govern selection.

use mts_core::Direction;

/// Which direction crossed last and how many times in a row.
///
/// Only the dispatcher writes it, and only while holding the track lock.
/// `run_length` is 0 before the first crossing and ≥ 1 afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct DispatchHistory {
    pub last:       Option<Direction>,
    pub run_length: u32,
}

impl DispatchHistory {
    /// History after one more crossing towards `direction`.
    pub fn after(self, direction: Direction) -> DispatchHistory {
        let run_length = match self.last {
            Some(last) if last == direction => self.run_length.saturating_add(1),
            _ => 1,
        };
        DispatchHistory { last: Some(direction), run_length }
    }

    /// History that starts a fresh run towards `direction`.
    pub fn switched_to(direction: Direction) -> DispatchHistory {
        DispatchHistory { last: Some(direction), run_length: 1 }
    }
}

/// Selection tunables.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchPolicy {
    /// Once this many consecutive crossings went one way and the other side
    /// has a train waiting, the other side goes next.  Must be ≥ 1.
    pub starvation_limit: u32,

    /// Direction served on an equal-priority tie before anything has
    /// crossed.
    pub tie_default: Direction,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self { starvation_limit: 2, tie_default: Direction::West }
    }
}
