//! SQLite output backend (feature `sqlite`).
//!
//! Creates `events.db` in the configured output directory with a single
//! `train_events` table.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_DB: &str = "events.db";

/// Writes events to an SQLite database.
pub struct SqliteEventWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteEventWriter {
    /// Open (or create) `events.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(EVENTS_DB))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS train_events (
                 seq        INTEGER PRIMARY KEY AUTOINCREMENT,
                 elapsed_ms INTEGER NOT NULL,
                 stamp      TEXT    NOT NULL,
                 kind       TEXT    NOT NULL,
                 train_id   INTEGER NOT NULL,
                 direction  TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl EventWriter for SqliteEventWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO train_events (elapsed_ms, stamp, kind, train_id, direction) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(rusqlite::params![
            row.elapsed_ms as i64,
            row.stamp,
            row.kind.as_str(),
            row.train.0,
            row.direction.label(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
