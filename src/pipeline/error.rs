use thiserror::Error;

use crate::cache::CacheError;
use crate::jobs::{FailureKind, JobFailure};
use crate::source::SourceError;

/// Failure of a whole matching run. Bad input data never ends up here.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("candidate source error: {0}")]
    Source(#[from] SourceError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

impl MatchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            MatchError::Source(_) => FailureKind::Source,
            MatchError::Cache(_) => FailureKind::Cache,
        }
    }
}

impl From<MatchError> for JobFailure {
    fn from(e: MatchError) -> Self {
        JobFailure::new(e.kind(), e.to_string())
    }
}

pub type PipelineResult<T> = Result<T, MatchError>;
