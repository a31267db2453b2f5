use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error("failed to spawn thread {what}: {source}")]
    Spawn {
        what:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("thread {0} panicked")]
    WorkerPanicked(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
