//! `WaitQueue` — the holding area for loaded trains bound in one direction.
//!
//! A `VecDeque` kept in dispatch order.  The dispatcher peeks both heads
//! before deciding which side to serve, and equal ranks must keep their
//! insertion order.  Insertion is an O(n) front-to-back scan; removal from
//! the front is O(1).

use std::collections::VecDeque;

use mts_core::{Direction, ReadyTrain};

/// Trains waiting to cross in a single direction, front = next to go.
#[derive(Debug)]
pub struct WaitQueue {
    direction: Direction,
    inner:     VecDeque<ReadyTrain>,
}

impl WaitQueue {
    pub fn new(direction: Direction) -> Self {
        Self { direction, inner: VecDeque::new() }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Insert `train` before the first queued train it outranks, or at the
    /// back if it outranks none.
    ///
    /// A train only moves ahead of another when it has strictly higher
    /// priority, or equal priority and a strictly earlier readiness instant.
    /// Exact ties keep insertion order.
    pub fn push(&mut self, train: ReadyTrain) {
        debug_assert_eq!(
            train.direction(),
            self.direction,
            "train {} queued on the {} lane",
            train.id(),
            self.direction
        );
        let at = self
            .inner
            .iter()
            .position(|queued| train.outranks(queued))
            .unwrap_or(self.inner.len());
        self.inner.insert(at, train);
    }

    /// Remove and return the next train, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<ReadyTrain> {
        self.inner.pop_front()
    }

    pub fn peek_front(&self) -> Option<&ReadyTrain> {
        self.inner.front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &ReadyTrain> {
        self.inner.iter()
    }
}
