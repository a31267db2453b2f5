//! `mts-schedule` — directional wait queues and manifest loading.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`wait_queue`]  | `WaitQueue` (one direction, priority/readiness ordered) |
//! | [`lanes`]       | `Lanes` (the east/west pair)                            |
//! | [`loader`]      | `load_manifest`, `load_manifest_reader`, `MalformedPolicy` |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Ordering (summary)
//!
//! ```text
//! front ──▶ [High, t0] [High, t3] [Low, t1] [Low, t2] ◀── back
//! ```
//!
//! Higher priority first; within a priority, earlier readiness first; on an
//! exact tie the train inserted later goes behind.

pub mod error;
pub mod lanes;
pub mod loader;
pub mod wait_queue;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use lanes::Lanes;
pub use loader::{load_manifest, load_manifest_reader, MalformedPolicy};
pub use wait_queue::WaitQueue;
