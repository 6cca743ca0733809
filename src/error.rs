use thiserror::Error;

/// Everything that can go wrong during one ingestion run.
///
/// Each variant keeps the underlying cause chained so the orchestrator's
/// logs show the original failure, not a flattened string.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Any failure in the HTTP request/response cycle, including a non-2xx
    /// status from the usage API.
    #[error("API connection failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The fetched payload is not valid JSON.
    #[error("usage payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The blob client rejected the upload.
    #[error("blob upload failed: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for IngestionError {
    fn from(e: reqwest::Error) -> Self {
        IngestionError::Transport(Box::new(e))
    }
}
