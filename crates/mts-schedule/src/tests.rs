//! Unit tests for mts-schedule.

use std::time::{Duration, Instant};

use mts_core::{ReadyTrain, Train, TrainId, TrainSpec};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A ready train with direction code `code`, ready `offset_ms` after `base`.
fn ready(id: u32, code: &str, base: Instant, offset_ms: u64) -> ReadyTrain {
    Train::new(TrainId(id), TrainSpec::parse(code, 1, 1).unwrap())
        .into_ready(base + Duration::from_millis(offset_ms))
}

fn ids<'a>(it: impl Iterator<Item = &'a ReadyTrain>) -> Vec<u32> {
    it.map(|t| t.id().0).collect()
}

// ── WaitQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wait_queue {
    use mts_core::Direction;

    use super::*;
    use crate::WaitQueue;

    #[test]
    fn empty_queue() {
        let mut q = WaitQueue::new(Direction::East);
        assert!(q.is_empty());
        assert!(q.peek_front().is_none());
        assert!(q.pop_front().is_none());
    }

    #[test]
    fn first_insert_is_sole_element() {
        let t0 = Instant::now();
        let mut q = WaitQueue::new(Direction::East);
        q.push(ready(4, "e", t0, 0));
        assert_eq!(q.len(), 1);
        assert_eq!(q.peek_front().unwrap().id(), TrainId(4));
    }

    #[test]
    fn high_priority_jumps_ahead_of_low() {
        let t0 = Instant::now();
        let mut q = WaitQueue::new(Direction::East);
        q.push(ready(0, "e", t0, 0));
        q.push(ready(1, "e", t0, 10));
        q.push(ready(2, "E", t0, 20));
        assert_eq!(ids(q.iter()), vec![2, 0, 1]);
    }

    #[test]
    fn earlier_readiness_first_within_class() {
        let t0 = Instant::now();
        let mut q = WaitQueue::new(Direction::West);
        // Pushed out of readiness order (lock acquisition can reorder).
        q.push(ready(0, "W", t0, 30));
        q.push(ready(1, "W", t0, 10));
        q.push(ready(2, "W", t0, 20));
        assert_eq!(ids(q.iter()), vec![1, 2, 0]);
    }

    #[test]
    fn low_priority_goes_behind_all_high() {
        let t0 = Instant::now();
        let mut q = WaitQueue::new(Direction::West);
        q.push(ready(0, "W", t0, 50));
        q.push(ready(1, "W", t0, 60));
        q.push(ready(2, "w", t0, 0));
        assert_eq!(ids(q.iter()), vec![0, 1, 2]);
    }

    #[test]
    fn exact_tie_keeps_insertion_order() {
        let t0 = Instant::now();
        let mut q = WaitQueue::new(Direction::East);
        q.push(ready(5, "E", t0, 0));
        q.push(ready(3, "E", t0, 0));
        q.push(ready(9, "E", t0, 0));
        assert_eq!(ids(q.iter()), vec![5, 3, 9]);
    }

    #[test]
    fn nanosecond_tie_break() {
        let t0 = Instant::now();
        let mut q = WaitQueue::new(Direction::East);
        q.push(ready(0, "E", t0 + Duration::from_nanos(2), 0));
        q.push(ready(1, "E", t0 + Duration::from_nanos(1), 0));
        assert_eq!(ids(q.iter()), vec![1, 0]);
    }

    #[test]
    fn pop_front_follows_order() {
        let t0 = Instant::now();
        let mut q = WaitQueue::new(Direction::East);
        q.push(ready(0, "e", t0, 0));
        q.push(ready(1, "E", t0, 5));
        assert_eq!(q.pop_front().unwrap().id(), TrainId(1));
        assert_eq!(q.pop_front().unwrap().id(), TrainId(0));
        assert!(q.pop_front().is_none());
    }
}

// ── Lanes ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lanes {
    use mts_core::Direction;

    use super::*;
    use crate::Lanes;

    #[test]
    fn routes_by_direction() {
        let t0 = Instant::now();
        let mut lanes = Lanes::new();
        lanes.push(ready(0, "e", t0, 0));
        lanes.push(ready(1, "W", t0, 0));
        lanes.push(ready(2, "E", t0, 0));
        assert_eq!(ids(lanes.lane(Direction::East).iter()), vec![2, 0]);
        assert_eq!(ids(lanes.lane(Direction::West).iter()), vec![1]);
        assert_eq!(lanes.len(), 3);
    }

    #[test]
    fn heads_reflect_each_lane() {
        let t0 = Instant::now();
        let mut lanes = Lanes::new();
        assert!(lanes.is_empty());
        assert_eq!(lanes.heads(), (None, None));

        lanes.push(ready(7, "w", t0, 0));
        let (east, west) = lanes.heads();
        assert!(east.is_none());
        assert_eq!(west.unwrap().id(), TrainId(7));

        assert_eq!(lanes.pop_front(Direction::West).unwrap().id(), TrainId(7));
        assert!(lanes.is_empty());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use mts_core::{Direction, Priority};

    use super::*;
    use crate::{load_manifest, load_manifest_reader, MalformedPolicy, ScheduleError};

    #[test]
    fn parses_rows_in_order() {
        let input = "e 10 6\nW 6 7\nE 3 10\n";
        let trains = load_manifest_reader(Cursor::new(input), MalformedPolicy::Fail).unwrap();
        assert_eq!(trains.len(), 3);

        assert_eq!(trains[0].id(), TrainId(0));
        assert_eq!(trains[0].direction(), Direction::East);
        assert_eq!(trains[0].priority(), Priority::Low);
        assert_eq!(trains[0].spec().loading_units, 10);
        assert_eq!(trains[0].spec().crossing_units, 6);

        assert_eq!(trains[1].direction(), Direction::West);
        assert_eq!(trains[1].priority(), Priority::High);
        assert_eq!(trains[2].id(), TrainId(2));
    }

    #[test]
    fn extra_whitespace_and_blank_lines() {
        let input = "  e   1  2\n\n\tw\t3\t4\r\n   \n";
        let trains = load_manifest_reader(Cursor::new(input), MalformedPolicy::Fail).unwrap();
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[1].direction(), Direction::West);
        assert_eq!(trains[1].spec().crossing_units, 4);
    }

    #[test]
    fn empty_manifest_is_ok() {
        let trains = load_manifest_reader(Cursor::new(""), MalformedPolicy::Fail).unwrap();
        assert!(trains.is_empty());
    }

    #[test]
    fn malformed_row_fails_with_line() {
        let input = "e 1 1\nx 2 2\n";
        let err = load_manifest_reader(Cursor::new(input), MalformedPolicy::Fail).unwrap_err();
        match err {
            ScheduleError::Invalid { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn wrong_field_count_fails() {
        let err = load_manifest_reader(Cursor::new("e 1\n"), MalformedPolicy::Fail).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { line: 1, .. }), "{err:?}");
    }

    #[test]
    fn skip_policy_drops_bad_rows_and_keeps_ids_dense() {
        let input = "e 1 1\nE one 2\nw 0 3\nW 2 2\n";
        let trains = load_manifest_reader(Cursor::new(input), MalformedPolicy::Skip).unwrap();
        assert_eq!(trains.len(), 2);
        assert_eq!(trains[0].id(), TrainId(0));
        assert_eq!(trains[1].id(), TrainId(1));
        assert_eq!(trains[1].direction(), Direction::West);
        assert_eq!(trains[1].priority(), Priority::High);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "W 2 3").unwrap();
        let trains = load_manifest(file.path(), MalformedPolicy::Fail).unwrap();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].spec().code(), 'W');
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_manifest(std::path::Path::new("/nonexistent/manifest.txt"), MalformedPolicy::Fail)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}
