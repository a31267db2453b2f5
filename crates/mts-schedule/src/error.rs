use mts_core::MtsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("manifest line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("manifest line {line}: {source}")]
    Invalid {
        line:   u64,
        #[source]
        source: MtsError,
    },

    #[error("manifest read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
