use thiserror::Error;

/// Failures surfaced by the emitter; nothing is retried or suppressed
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("payload is not representable as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write message to output stream: {0}")]
    Io(#[from] std::io::Error),
}
