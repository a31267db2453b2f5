//! Strongly typed train identifier.
//!
//! The id is the train's 0-based position in the manifest and is stable for
//! the whole run.  The inner integer is `pub` so callers can index
//! per-train `Vec`s directly, but `.index()` reads better.

use std::fmt;

/// Index of a train in manifest order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainId(pub u32);

impl TrainId {
    /// Sentinel meaning "no valid ID" (`u32::MAX`).
    pub const INVALID: TrainId = TrainId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for TrainId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

/// Renders the bare number, which is what the event log prints.
impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<usize> for TrainId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<TrainId, Self::Error> {
        u32::try_from(n).map(TrainId)
    }
}
