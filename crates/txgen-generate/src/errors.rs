use thiserror::Error;

/// Errors emitted while preparing generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("catalog table '{0}' is empty")]
    EmptyCatalog(&'static str),
}
