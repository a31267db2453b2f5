//! Time model.
//!
//! Manifest durations are abstract integer units.  `TimeScale` maps one unit
//! to a real `Duration` (0.1 s by default), and every sleep in the
//! simulation goes through it.  Event stamps are measured from a monotonic
//! `SimClock` started just before the first worker is spawned.

use std::fmt;
use std::time::{Duration, Instant};

// ── TimeScale ─────────────────────────────────────────────────────────────────

/// Real duration of one abstract manifest time unit.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeScale {
    pub unit: Duration,
}

impl TimeScale {
    pub const DEFAULT_UNIT: Duration = Duration::from_millis(100);

    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Real duration of `units` abstract units.
    #[inline]
    pub fn duration(&self, units: u32) -> Duration {
        self.unit.saturating_mul(units)
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UNIT)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Monotonic run clock.  Cheap to copy; share it by value.
#[derive(Copy, Clone, Debug)]
pub struct SimClock {
    start: Instant,
}

impl SimClock {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn started_at(start: Instant) -> Self {
        Self { start }
    }

    #[inline]
    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.start.elapsed())
    }

    /// Elapsed time at `at`; instants before the start read as zero.
    #[inline]
    pub fn elapsed_at(&self, at: Instant) -> Elapsed {
        Elapsed(at.saturating_duration_since(self.start))
    }
}

// ── Elapsed ───────────────────────────────────────────────────────────────────

/// Time since the run started.  Displays as `HH:MM:SS.t`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    /// Break into (hours, minutes, seconds, tenths).  Tenths are truncated.
    pub fn hmst(&self) -> (u64, u64, u64, u32) {
        let secs = self.0.as_secs();
        let hours = secs / 3_600;
        let minutes = (secs % 3_600) / 60;
        let seconds = secs % 60;
        let tenths = self.0.subsec_millis() / 100;
        (hours, minutes, seconds, tenths)
    }

    pub fn as_millis(&self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s, t) = self.hmst();
        write!(f, "{h:02}:{m:02}:{s:02}.{t}")
    }
}
