use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::sync::Cache;
use tracing::debug;

use crate::constants::DEFAULT_CACHE_CAPACITY;

use super::error::CacheResult;

/// Key-value cache collaborator. Values are already-encoded strings.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the stored value, or `None` on miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;
    /// Stores `value` under `key`, replacing any existing entry.
    ///
    /// `ttl` is advisory; backends that cannot expire entries ignore it.
    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> CacheResult<()>;
}

/// In-process cache store with LRU-style capacity eviction and no expiry.
pub struct MemoryCacheStore {
    entries: Cache<String, Arc<str>>,
}

impl MemoryCacheStore {
    /// Creates a store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a store holding at most `capacity` entries.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    /// Runs pending maintenance so `len` reflects recent writes.
    pub fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks();
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheStore")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let hit = self.entries.get(key);
        debug!(key, hit = hit.is_some(), "Cache lookup");
        Ok(hit.map(|v| v.to_string()))
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> CacheResult<()> {
        debug!(key, ttl_secs = ttl.map(|t| t.as_secs()), "Cache set");
        self.entries.insert(key.to_string(), Arc::from(value));
        Ok(())
    }
}
