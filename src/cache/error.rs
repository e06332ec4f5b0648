use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode cached value for key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cache backend error: {reason}")]
    Backend { reason: String },
}

pub type CacheResult<T> = Result<T, CacheError>;
