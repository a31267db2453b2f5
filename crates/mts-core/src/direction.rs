//! Travel directions and the priority classes derived from direction codes.
//!
//! A manifest names a direction with a single-letter code.  The letter is
//! matched case-insensitively to pick the direction, and its case picks the
//! priority class:
//!
//! | Code | Direction | Priority |
//! |------|-----------|----------|
//! | `E`  | East      | High     |
//! | `e`  | East      | Low      |
//! | `W`  | West      | High     |
//! | `w`  | West      | Low      |

use std::fmt;
use std::str::FromStr;

use crate::{MtsError, MtsResult};

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the two travel directions across the shared crossing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::East, Direction::West];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Label used in event lines.
    pub fn label(self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::West => "West",
        }
    }

    /// Parse a direction code into its direction and priority class.
    pub fn parse_code(code: &str) -> MtsResult<(Direction, Priority)> {
        let mut chars = code.trim().chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(MtsError::InvalidDirection(code.to_owned()));
        };
        let direction = match c.to_ascii_lowercase() {
            'e' => Direction::East,
            'w' => Direction::West,
            _ => return Err(MtsError::InvalidDirection(code.to_owned())),
        };
        let priority = if c.is_ascii_uppercase() { Priority::High } else { Priority::Low };
        Ok((direction, priority))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Direction {
    type Err = MtsError;

    /// Accepts a single-letter code or the full label, ignoring case.
    fn from_str(s: &str) -> MtsResult<Direction> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(MtsError::InvalidDirection(s.to_owned())),
        }
    }
}

// ── Priority ──────────────────────────────────────────────────────────────────

/// Priority class.  `High > Low`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Low,
    High,
}

impl Priority {
    /// The direction code that encodes `direction` at this priority.
    pub fn code(self, direction: Direction) -> char {
        let c = match direction {
            Direction::East => 'e',
            Direction::West => 'w',
        };
        match self {
            Priority::High => c.to_ascii_uppercase(),
            Priority::Low => c,
        }
    }
}
