//! `mts-output` — event log writers for the mts dispatcher.
//!
//! | Feature   | Backend      | Files created                                   |
//! |-----------|--------------|-------------------------------------------------|
//! | *(none)*  | Text log     | `output.txt` (optionally mirrored to stdout)    |
//! | *(none)*  | CSV          | `events.csv`                                    |
//! | `sqlite`  | SQLite       | `events.db`                                     |
//!
//! All backends implement [`EventWriter`] and are driven by
//! [`EventLogObserver`], which implements `mts_dispatch::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mts_output::{EventLogObserver, TextLogWriter};
//!
//! let writer = TextLogWriter::create(Path::new("output.txt"), true)?;
//! let mut obs = EventLogObserver::new(writer);
//! dispatch.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::EventRow;
pub use text::TextLogWriter;
pub use writer::{EventWriter, TeeWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteEventWriter;
