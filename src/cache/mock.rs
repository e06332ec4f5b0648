//! Cache store wrapper that records every call.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::{CacheError, CacheResult};
use super::store::{CacheStore, MemoryCacheStore};

/// A recorded `set` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSet {
    pub key: String,
    pub ttl: Option<Duration>,
}

/// [`MemoryCacheStore`] that counts reads and records writes.
#[derive(Debug, Default)]
pub struct RecordingCacheStore {
    inner: MemoryCacheStore,
    gets: Mutex<usize>,
    sets: Mutex<Vec<RecordedSet>>,
    fail_writes: Mutex<bool>,
}

impl RecordingCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_count(&self) -> usize {
        *self.gets.lock()
    }

    pub fn sets(&self) -> Vec<RecordedSet> {
        self.sets.lock().clone()
    }

    pub fn set_count(&self) -> usize {
        self.sets.lock().len()
    }

    /// Makes every subsequent `set` fail with a backend error.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }
}

#[async_trait]
impl CacheStore for RecordingCacheStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        *self.gets.lock() += 1;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> CacheResult<()> {
        if *self.fail_writes.lock() {
            return Err(CacheError::Backend {
                reason: "injected write failure".to_string(),
            });
        }
        self.sets.lock().push(RecordedSet {
            key: key.to_string(),
            ttl,
        });
        self.inner.set(key, value, ttl).await
    }
}
