//! Core validation error type.
//!
//! Sub-crates define their own error enums and wrap `MtsError` as one
//! variant where a core validation failure can surface.

use thiserror::Error;

/// Errors raised while turning raw manifest values into trains.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MtsError {
    #[error("invalid direction code {0:?}: expected one of e, E, w, W")]
    InvalidDirection(String),

    #[error("invalid {what} duration {value}: must be at least 1 time unit")]
    InvalidDuration { what: &'static str, value: u32 },
}

/// Shorthand result type for `mts-core`.
pub type MtsResult<T> = Result<T, MtsError>;
