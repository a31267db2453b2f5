//! `Lanes` — the east and west wait queues as one unit.
//!
//! Both queues sit behind the same lock in the dispatcher, so they are
//! bundled here.  Trains are routed by their own direction, which is what
//! keeps every queue single-direction.

use mts_core::{Direction, ReadyTrain};

use crate::WaitQueue;

#[derive(Debug)]
pub struct Lanes {
    east: WaitQueue,
    west: WaitQueue,
}

impl Default for Lanes {
    fn default() -> Self {
        Self::new()
    }
}

impl Lanes {
    pub fn new() -> Self {
        Self {
            east: WaitQueue::new(Direction::East),
            west: WaitQueue::new(Direction::West),
        }
    }

    pub fn lane(&self, direction: Direction) -> &WaitQueue {
        match direction {
            Direction::East => &self.east,
            Direction::West => &self.west,
        }
    }

    pub fn lane_mut(&mut self, direction: Direction) -> &mut WaitQueue {
        match direction {
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        }
    }

    /// Queue `train` on the lane for its direction.
    pub fn push(&mut self, train: ReadyTrain) {
        self.lane_mut(train.direction()).push(train);
    }

    /// `(east head, west head)`.
    pub fn heads(&self) -> (Option<&ReadyTrain>, Option<&ReadyTrain>) {
        (self.east.peek_front(), self.west.peek_front())
    }

    pub fn pop_front(&mut self, direction: Direction) -> Option<ReadyTrain> {
        self.lane_mut(direction).pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.east.is_empty() && self.west.is_empty()
    }

    pub fn len(&self) -> usize {
        self.east.len() + self.west.len()
    }
}
