//! Tests for mts-output.

use std::time::Duration;

use mts_core::{Direction, Elapsed, TrainId};
use mts_dispatch::{EventKind, TrainEvent};

use crate::EventRow;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn event(ms: u64, kind: EventKind, train: u32, direction: Direction) -> TrainEvent {
    TrainEvent { at: Elapsed(Duration::from_millis(ms)), kind, train: TrainId(train), direction }
}

fn row(ms: u64, kind: EventKind, train: u32, direction: Direction) -> EventRow {
    EventRow::from(&event(ms, kind, train, direction))
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn row_from_event() {
        let r = row(61_250, EventKind::Entering, 4, Direction::West);
        assert_eq!(r.elapsed_ms, 61_250);
        assert_eq!(r.stamp, "00:01:01.2");
        assert_eq!(r.line(), "00:01:01.2 Train  4 is ON the main track going West");
    }
}

// ── Text log ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::*;
    use crate::text::TextLogWriter;
    use crate::writer::EventWriter;

    #[test]
    fn writes_one_line_per_event() {
        let mut w = TextLogWriter::from_writer(Vec::new(), false);
        w.write_event(&row(1_000, EventKind::Ready, 0, Direction::East)).unwrap();
        w.write_event(&row(1_000, EventKind::Entering, 0, Direction::East)).unwrap();
        w.write_event(&row(1_600, EventKind::Leaving, 0, Direction::East)).unwrap();
        w.finish().unwrap();

        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            text,
            "00:00:01.0 Train  0 is ready to go East\n\
             00:00:01.0 Train  0 is ON the main track going East\n\
             00:00:01.6 Train  0 is OFF the main track after going East\n"
        );
    }

    #[test]
    fn creates_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("output.txt");
        let mut w = TextLogWriter::create(&path, false).unwrap();
        w.write_event(&row(0, EventKind::Ready, 12, Direction::West)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "00:00:00.0 Train 12 is ready to go West\n");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvEventWriter, EVENTS_CSV};
    use crate::writer::EventWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvEventWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_CSV)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["elapsed_ms", "stamp", "kind", "train_id", "direction"]);
    }

    #[test]
    fn csv_rows_round_trip() {
        let dir = tmp();
        let mut w = CsvEventWriter::new(dir.path()).unwrap();
        w.write_event(&row(100, EventKind::Ready, 1, Direction::West)).unwrap();
        w.write_event(&row(200, EventKind::Entering, 1, Direction::West)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_CSV)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "100");
        assert_eq!(&rows[0][1], "00:00:00.1");
        assert_eq!(&rows[0][2], "ready");
        assert_eq!(&rows[1][2], "entering");
        assert_eq!(&rows[1][3], "1");
        assert_eq!(&rows[1][4], "West");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvEventWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── Tee ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tee_tests {
    use super::*;
    use crate::text::TextLogWriter;
    use crate::writer::{EventWriter, TeeWriter};

    #[test]
    fn both_sides_receive_rows() {
        let mut tee = TeeWriter::new(
            TextLogWriter::from_writer(Vec::new(), false),
            TextLogWriter::from_writer(Vec::new(), false),
        );
        tee.write_event(&row(0, EventKind::Ready, 0, Direction::East)).unwrap();
        tee.finish().unwrap();
        let a = String::from_utf8(tee.first.into_inner()).unwrap();
        let b = String::from_utf8(tee.second.into_inner()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 1);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io::Cursor;

    use mts_core::TimeScale;
    use mts_dispatch::{DispatchBuilder, DispatchObserver, RunSummary};
    use mts_schedule::{load_manifest_reader, MalformedPolicy};

    use super::*;
    use crate::csv::{CsvEventWriter, EVENTS_CSV};
    use crate::writer::EventWriter;
    use crate::{EventLogObserver, OutputError, OutputResult};

    struct FailingWriter {
        calls: usize,
    }

    impl EventWriter for FailingWriter {
        fn write_event(&mut self, _row: &EventRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.calls))))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_only() {
        let mut obs = EventLogObserver::new(FailingWriter { calls: 0 });
        obs.on_event(&event(0, EventKind::Ready, 0, Direction::East));
        obs.on_event(&event(1, EventKind::Ready, 1, Direction::East));
        obs.on_finish(&RunSummary::default());

        assert_eq!(obs.written(), 0);
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full #1"), "{err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 2);
    }

    #[test]
    fn integration_csv() {
        let trains = load_manifest_reader(Cursor::new("e 1 2\nW 2 1\nE 1 1\n"), MalformedPolicy::Fail).unwrap();

        let dir = tempfile::tempdir().expect("create temp dir");
        let mut obs = EventLogObserver::new(CsvEventWriter::new(dir.path()).unwrap());
        let summary = DispatchBuilder::new(trains)
            .time_scale(TimeScale::from_millis(2))
            .build()
            .unwrap()
            .run(&mut obs)
            .unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(summary.finished, 3);
        assert_eq!(obs.written(), 9);

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_CSV)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "3 trains × 3 events");
        assert_eq!(rows.iter().filter(|r| &r[2] == "ready").count(), 3);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::{SqliteEventWriter, EVENTS_DB};
    use crate::writer::EventWriter;

    #[test]
    fn sqlite_db_created() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let _w = SqliteEventWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(EVENTS_DB).exists());
    }

    #[test]
    fn sqlite_rows_stored_in_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut w = SqliteEventWriter::new(dir.path()).unwrap();
        w.write_event(&row(10, EventKind::Ready, 2, Direction::East)).unwrap();
        w.write_event(&row(20, EventKind::Entering, 2, Direction::East)).unwrap();
        w.write_event(&row(90, EventKind::Leaving, 2, Direction::East)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join(EVENTS_DB)).unwrap();
        let mut stmt = conn.prepare("SELECT kind, elapsed_ms FROM train_events ORDER BY seq").unwrap();
        let got: Vec<(String, i64)> = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(
            got,
            vec![("ready".to_owned(), 10), ("entering".to_owned(), 20), ("leaving".to_owned(), 90)]
        );
    }
}
