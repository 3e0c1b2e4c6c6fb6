use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("investigation {0} not found")]
    InvestigationNotFound(i64),

    #[error("username is required")]
    EmptyUsername,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read capture file {path}: {source}")]
    CaptureIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid capture data: {0}")]
    CaptureParse(#[from] serde_json::Error),

    #[error("presence search failed for {username}: {reason}")]
    Search { username: String, reason: String },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("investigation {0} not found")]
    NotFound(i64),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
