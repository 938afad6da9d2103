use thiserror::Error;

/// Core error type shared across txgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A transaction violates one of the record invariants.
    #[error("invalid transaction {id}: {reason}")]
    InvalidTransaction { id: String, reason: String },
    /// A dataset is out of order or has gaps in its identifiers.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

/// Convenience alias for results returned by txgen crates.
pub type Result<T> = std::result::Result<T, Error>;
