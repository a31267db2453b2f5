//! The dispatcher loop.
//!
//! ```text
//!            ┌──────────────────────┐
//!   ┌──────▶ │   waiting-for-work   │ ── lanes empty, all workers exited ──▶ done
//!   │        └──────────┬───────────┘
//!   │                   │ train waiting
//!   │        ┌──────────▼───────────┐
//!   │        │      selecting       │  (queue lock held)
//!   │        └──────────┬───────────┘
//!   │                   │ queue lock released
//!   │        ┌──────────▼───────────┐
//!   └─────── │       crossing       │  (track lock held)
//!            └──────────────────────┘
//! ```

use log::{info, warn};

use crate::coordinator::{Coordinator, Next};
use crate::DispatchObserver;

/// Serve trains until every one has crossed.
pub(crate) fn run<O: DispatchObserver>(coord: &Coordinator<'_, O>) {
    loop {
        let (history, _) = coord.track_snapshot();
        let (train, decision) = match coord.wait_next(&history) {
            Next::Cross(train, decision) => (train, decision),
            Next::Done => break,
        };
        coord.report_decision(train.id(), &decision);
        coord.cross(train, decision);
    }

    let (_, finished) = coord.track_snapshot();
    if finished == coord.total() {
        info!("dispatcher done: {finished} trains crossed");
    } else {
        warn!("dispatcher done: {finished} of {} trains crossed", coord.total());
    }
}
