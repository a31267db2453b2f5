//! Preparation worker: one thread per train.

use std::thread;
use std::time::Instant;

use log::warn;

use mts_core::{Train, TrainId};

use crate::coordinator::Coordinator;
use crate::DispatchObserver;

/// Load `train`, stamp its readiness and queue it.  Runs once per train.
pub(crate) fn prepare<O: DispatchObserver>(coord: &Coordinator<'_, O>, train: Train) {
    let _retire = Retire { coord, id: train.id() };

    thread::sleep(coord.scale().duration(train.spec().loading_units));

    // Stamped before the train is visible to any other thread.
    let ready = train.into_ready(Instant::now());
    coord.admit(ready);
}

/// Reports the worker's exit to the dispatcher, including on unwind.
struct Retire<'a, 'o, O: DispatchObserver> {
    coord: &'a Coordinator<'o, O>,
    id:    TrainId,
}

impl<O: DispatchObserver> Drop for Retire<'_, '_, O> {
    fn drop(&mut self) {
        if thread::panicking() {
            warn!("worker for train {} panicked", self.id);
        }
        self.coord.retire(self.id);
    }
}
