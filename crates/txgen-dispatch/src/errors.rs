use thiserror::Error;

/// Errors emitted while delivering transactions.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("error marshalling: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not create event bus session: {0}")]
    Session(String),
    #[error("failed to put events: {0}")]
    Submit(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dispatch options: {0}")]
    InvalidOptions(String),
}
