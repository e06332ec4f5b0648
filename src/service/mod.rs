//! Public entry points: trigger a match run, read cached results.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use crate::cache::{CacheResult, CacheStore, MemoryCacheStore, ResultCache};
use crate::config::Config;
use crate::jobs::{JobOrchestrator, JobReport, TriggerAck};
use crate::model::MatchResult;
use crate::pipeline::MatchPipeline;
use crate::source::CandidateSource;

/// Wires a [`MatchPipeline`] behind a [`JobOrchestrator`] and exposes the
/// cache-aside read path.
///
/// Must be created inside a tokio runtime: the job worker is spawned on construction.
#[derive(Debug)]
pub struct MatchingService {
    orchestrator: JobOrchestrator,
    results: ResultCache,
    config: Config,
}

impl MatchingService {
    pub fn new(
        source: Arc<dyn CandidateSource>,
        store: Arc<dyn CacheStore>,
        config: Config,
    ) -> Self {
        let results = ResultCache::new(store, config.cache_ttl);
        let pipeline = MatchPipeline::new(source, results.clone(), config.top_n);
        let orchestrator = JobOrchestrator::start(Arc::new(pipeline), config.report_capacity);
        info!(
            top_n = config.top_n,
            cache_ttl_secs = config.cache_ttl.map(|t| t.as_secs()),
            "Matching service started"
        );

        Self {
            orchestrator,
            results,
            config,
        }
    }

    /// Same as [`new`](Self::new) with a [`MemoryCacheStore`] sized from `config`.
    pub fn with_memory_cache(source: Arc<dyn CandidateSource>, config: Config) -> Self {
        let store = Arc::new(MemoryCacheStore::with_capacity(config.cache_capacity));
        Self::new(source, store, config)
    }

    /// Queues a matching run for `job_id`. Returns immediately.
    pub fn trigger_match(&self, job_id: impl Into<String>) -> TriggerAck {
        self.orchestrator.trigger(job_id)
    }

    /// Cached ranked results, or `None` if no run has completed for this job.
    ///
    /// Never computes anything and never enqueues a run.
    pub async fn get_match_results(&self, job_id: &str) -> CacheResult<Option<Vec<MatchResult>>> {
        self.results.get_match_results(job_id).await
    }

    pub fn subscribe(&self) -> broadcast::Receiver<JobReport> {
        self.orchestrator.subscribe()
    }

    pub fn queue_depth(&self) -> usize {
        self.orchestrator.queue_depth()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finishes queued runs and stops the worker. Later triggers are rejected.
    pub async fn shutdown(&self) {
        self.orchestrator.shutdown().await;
    }
}
