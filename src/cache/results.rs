use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument};

use crate::constants::RESULTS_KEY_PREFIX;
use crate::model::MatchResult;

use super::error::{CacheError, CacheResult};
use super::store::CacheStore;

/// Cache key for a job's ranked results.
#[inline]
pub fn results_key(job_id: &str) -> String {
    format!("{}{}", RESULTS_KEY_PREFIX, job_id)
}

/// Cache-aside accessor for ranked results.
///
/// Reads never trigger computation. Writes come only from the job worker and
/// unconditionally replace whatever was cached before. JSON encoding happens
/// here, so the store only ever sees strings.
#[derive(Clone)]
pub struct ResultCache {
    store: Arc<dyn CacheStore>,
    ttl: Option<Duration>,
}

impl ResultCache {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Option<Duration>) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Single cache read. `Ok(None)` means no result has been computed yet.
    #[instrument(skip(self))]
    pub async fn get_match_results(&self, job_id: &str) -> CacheResult<Option<Vec<MatchResult>>> {
        let key = results_key(job_id);
        let Some(raw) = self.store.get(&key).await? else {
            debug!("Cache miss");
            return Ok(None);
        };
        let results = serde_json::from_str(&raw).map_err(|source| CacheError::Decode {
            key: key.clone(),
            source,
        })?;
        debug!("Cache hit");
        Ok(Some(results))
    }

    /// Writes `results` through to the store, overwriting any previous entry.
    #[instrument(skip(self, results), fields(count = results.len()))]
    pub async fn store_results(&self, job_id: &str, results: &[MatchResult]) -> CacheResult<()> {
        let key = results_key(job_id);
        let encoded = serde_json::to_string(results).map_err(|source| CacheError::Encode {
            key: key.clone(),
            source,
        })?;
        self.store.set(&key, encoded, self.ttl).await
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
