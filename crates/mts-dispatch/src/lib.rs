//! `mts-dispatch` — runs trains across a single shared crossing.
//!
//! # Threads and locks
//!
//! ```text
//!  train-0 ─┐  sleep(loading)             dispatcher
//!  train-1 ─┼─▶ stamp ready_at            ┌────────────────────────────────┐
//!  train-N ─┘   lock(queue) ─ push ─ notify ─▶ wait(train_ready) on queue lock │
//!                                         │ decide + pop     (queue lock)  │
//!                                         │ unlock(queue)                  │
//!                                         │ lock(track) ─ cross ─ commit   │
//!                                         └────────────────────────────────┘
//! ```
//!
//! * **queue lock** — both wait queues; the `train_ready` condvar waits on it.
//! * **track lock** — the crossing itself, dispatch history and the finished
//!   count.  Never acquired while the queue lock is held.
//!
//! # Selection rules
//!
//! See [`selection::decide`].  In short: starvation override first (after
//! `starvation_limit` same-direction crossings, the other side goes), then
//! priority, then alternate directions on a tie.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mts_dispatch::{DispatchBuilder, RecordingObserver};
//! use mts_schedule::{load_manifest, MalformedPolicy};
//!
//! let trains = load_manifest(path, MalformedPolicy::Fail)?;
//! let mut obs = RecordingObserver::default();
//! let summary = DispatchBuilder::new(trains).build()?.run(&mut obs)?;
//! assert_eq!(summary.finished, summary.total);
//! ```

pub mod builder;
mod coordinator;
mod dispatcher;
pub mod error;
pub mod history;
pub mod observer;
pub mod selection;
mod worker;


pub use builder::{Dispatch, DispatchBuilder};
pub use error::{DispatchError, DispatchResult};
pub use history::{DispatchHistory, DispatchPolicy};
pub use observer::{DispatchObserver, EventKind, NoopObserver, RecordingObserver, RunSummary, TrainEvent};
pub use selection::{decide, select_next, Decision, Heads, Reason};
