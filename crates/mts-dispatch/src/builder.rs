//! Fluent builder for constructing a [`Dispatch`].

use std::thread;
use std::time::Instant;

use log::info;

use mts_core::{SimClock, TimeScale, Train};

use crate::coordinator::Coordinator;
use crate::{dispatcher, worker};
use crate::{DispatchError, DispatchObserver, DispatchPolicy, DispatchResult, RunSummary};

/// Fluent builder for [`Dispatch`].
///
/// | Method             | Default                                  |
/// |--------------------|------------------------------------------|
/// | `.time_scale(s)`   | `TimeScale::default()` (100 ms per unit) |
/// | `.policy(p)`       | `DispatchPolicy::default()`              |
///
/// # Example
///
/// ```rust,ignore
/// let summary = DispatchBuilder::new(trains)
///     .time_scale(TimeScale::from_millis(10))
///     .build()?
///     .run(&mut NoopObserver)?;
/// ```
pub struct DispatchBuilder {
    trains: Vec<Train>,
    scale:  TimeScale,
    policy: DispatchPolicy,
}

impl DispatchBuilder {
    /// `trains` must be in id order with ids `0..n`, as the manifest loader
    /// produces them.
    pub fn new(trains: Vec<Train>) -> Self {
        Self { trains, scale: TimeScale::default(), policy: DispatchPolicy::default() }
    }

    pub fn time_scale(mut self, scale: TimeScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate inputs and return a ready-to-run [`Dispatch`].
    pub fn build(self) -> DispatchResult<Dispatch> {
        if self.policy.starvation_limit == 0 {
            return Err(DispatchError::Config("starvation limit must be at least 1".to_owned()));
        }
        for (i, train) in self.trains.iter().enumerate() {
            if train.id().index() != i {
                return Err(DispatchError::Config(format!(
                    "train at position {i} has id {}; ids must be 0..{} in order",
                    train.id(),
                    self.trains.len()
                )));
            }
        }
        Ok(Dispatch { trains: self.trains, scale: self.scale, policy: self.policy })
    }
}

/// A validated set of trains, ready to run once.
pub struct Dispatch {
    trains: Vec<Train>,
    scale:  TimeScale,
    policy: DispatchPolicy,
}

impl Dispatch {
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Spawn one worker per train plus the dispatcher, and block until every
    /// train has crossed.
    ///
    /// Workers are spawned before the dispatcher so a failed spawn never
    /// leaves the dispatcher waiting for a train that will not come.
    pub fn run<O: DispatchObserver + Send>(self, observer: &mut O) -> DispatchResult<RunSummary> {
        let total = self.trains.len();
        info!(
            "dispatching {total} trains (unit {:?}, starvation limit {})",
            self.scale.unit, self.policy.starvation_limit
        );
        observer.on_start(total);

        let clock = SimClock::start();
        let coord = Coordinator::new(total, self.scale, self.policy, clock, observer);

        let outcome = thread::scope(|scope| {
            let coord = &coord;
            let mut handles = Vec::with_capacity(total + 1);
            let mut first_err: Option<DispatchError> = None;

            for train in self.trains {
                let name = format!("train-{}", train.id());
                match thread::Builder::new()
                    .name(name.clone())
                    .spawn_scoped(scope, move || worker::prepare(coord, train))
                {
                    Ok(handle) => handles.push((name, handle)),
                    Err(source) => {
                        first_err = Some(DispatchError::Spawn { what: name, source });
                        break;
                    }
                }
            }

            if first_err.is_none() {
                match thread::Builder::new()
                    .name("dispatcher".to_owned())
                    .spawn_scoped(scope, move || dispatcher::run(coord))
                {
                    Ok(handle) => handles.push(("dispatcher".to_owned(), handle)),
                    Err(source) => {
                        first_err = Some(DispatchError::Spawn { what: "dispatcher".to_owned(), source });
                    }
                }
            }

            // Join everything so no panic escapes the scope unobserved.
            for (name, handle) in handles {
                if handle.join().is_err() && first_err.is_none() {
                    first_err = Some(DispatchError::WorkerPanicked(name));
                }
            }
            first_err.map_or(Ok(()), Err)
        });

        let summary = coord.into_summary(Instant::now());
        outcome?;

        info!(
            "{} of {} trains crossed in {} ({} east, {} west, {} starvation overrides)",
            summary.finished,
            summary.total,
            summary.elapsed,
            summary.east_crossings,
            summary.west_crossings,
            summary.starvation_overrides,
        );
        observer.on_finish(&summary);
        Ok(summary)
    }
}
