//! Manifest loader.
//!
//! # Format
//!
//! One train per line, three whitespace-separated fields:
//!
//! ```text
//! e 10 6
//! W 6 7
//! E 3 10
//! ```
//!
//! | Field      | Meaning                                                  |
//! |------------|----------------------------------------------------------|
//! | direction  | `E`/`W` high priority, `e`/`w` low priority              |
//! | loading    | preparation time in time units (≥ 1)                     |
//! | crossing   | crossing time in time units (≥ 1)                        |
//!
//! Blank lines are ignored.  Train ids are assigned in read order, counting
//! only accepted rows, starting at 0.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::warn;

use mts_core::{Train, TrainId, TrainSpec};

use crate::{ScheduleError, ScheduleResult};

/// What to do with a row that does not describe a valid train.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum MalformedPolicy {
    /// Abort loading with the offending line number.
    #[default]
    Fail,
    /// Log a warning and drop the row.
    Skip,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load trains from a manifest file.
pub fn load_manifest(path: &Path, policy: MalformedPolicy) -> ScheduleResult<Vec<Train>> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_manifest_reader(file, policy)
}

/// Like [`load_manifest`] but accepts any `Read` source.
pub fn load_manifest_reader<R: Read>(
    reader: R,
    policy: MalformedPolicy,
) -> ScheduleResult<Vec<Train>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut trains = Vec::new();
    let mut record = StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        let fields: Vec<&str> = record.iter().flat_map(str::split_whitespace).collect();
        if fields.is_empty() {
            continue;
        }

        match parse_row(&fields, line) {
            Ok(spec) => {
                let id = TrainId::try_from(trains.len()).map_err(|_| ScheduleError::Parse {
                    line,
                    reason: "too many trains".to_owned(),
                })?;
                trains.push(Train::new(id, spec));
            }
            Err(e) => match policy {
                MalformedPolicy::Fail => return Err(e),
                MalformedPolicy::Skip => warn!("skipping {e}"),
            },
        }
    }

    Ok(trains)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_row(fields: &[&str], line: u64) -> ScheduleResult<TrainSpec> {
    let [code, loading, crossing] = fields else {
        return Err(ScheduleError::Parse {
            line,
            reason: format!("expected 3 fields (direction loading crossing), found {}", fields.len()),
        });
    };
    let loading = parse_units(loading, "loading", line)?;
    let crossing = parse_units(crossing, "crossing", line)?;
    TrainSpec::parse(code, loading, crossing).map_err(|source| ScheduleError::Invalid { line, source })
}

fn parse_units(s: &str, what: &str, line: u64) -> ScheduleResult<u32> {
    s.parse::<u32>().map_err(|_| ScheduleError::Parse {
        line,
        reason: format!("invalid {what} time {s:?}: expected a positive integer"),
    })
}
