use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("candidate source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("query failed for job '{job_id}': {reason}")]
    QueryFailed { job_id: String, reason: String },

    #[error("failed to persist matches for job '{job_id}': {reason}")]
    PersistFailed { job_id: String, reason: String },

    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture data: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;
