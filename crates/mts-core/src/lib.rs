//! `mts-core` — foundational types for the `mts` single-crossing dispatcher.
//!
//! This crate is a dependency of every other `mts-*` crate.  It has no
//! `mts-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TrainId`                                             |
//! | [`direction`]   | `Direction`, `Priority`, direction-code parsing       |
//! | [`train`]       | `TrainSpec`, `Train` (preparing), `ReadyTrain` (waiting) |
//! | [`time`]        | `TimeScale`, `SimClock`, `Elapsed`                    |
//! | [`rng`]         | `ManifestRng` (seeded manifest generation)            |
//! | [`error`]       | `MtsError`, `MtsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, directions and      |
//! |         | `TimeScale`.                                               |

pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod train;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, Priority};
pub use error::{MtsError, MtsResult};
pub use ids::TrainId;
pub use rng::ManifestRng;
pub use time::{Elapsed, SimClock, TimeScale};
pub use train::{ReadyTrain, Train, TrainSpec};
