//! One full matching run: fetch → score → rank → persist → cache.

pub mod error;


use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::cache::ResultCache;
use crate::jobs::{JobFailure, JobHandler, JobSummary};
use crate::model::MatchResult;
use crate::ranking::rank_candidates;
use crate::source::CandidateSource;

pub use error::{MatchError, PipelineResult};

/// Runs the re-ranking pipeline for a job and writes the result through to cache.
pub struct MatchPipeline {
    source: Arc<dyn CandidateSource>,
    results: ResultCache,
    top_n: usize,
}

impl MatchPipeline {
    pub fn new(source: Arc<dyn CandidateSource>, results: ResultCache, top_n: usize) -> Self {
        Self {
            source,
            results,
            top_n,
        }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Scores and ranks the job's candidates, then persists the ranked list.
    ///
    /// No candidates or an unknown job short-circuit to an empty list without
    /// persisting anything.
    #[instrument(skip(self))]
    pub async fn match_job(&self, job_id: &str) -> PipelineResult<Vec<MatchResult>> {
        let initial = self.source.fetch_initial_candidates(job_id).await?;
        if initial.is_empty() {
            info!("No initial candidates");
            return Ok(Vec::new());
        }

        let Some(job) = self.source.find_job(job_id).await? else {
            warn!("Job not found");
            return Ok(Vec::new());
        };

        let user_ids: Vec<String> = initial.iter().map(|c| c.user_id.clone()).collect();
        let profiles = self.source.get_profiles_batch(&user_ids).await?;
        let weights = self.source.get_weights().await?;
        debug!(
            candidates = initial.len(),
            profiles = profiles.len(),
            ?weights,
            "Fetched scoring inputs"
        );

        let ranked = rank_candidates(&initial, &profiles, &job, &weights, self.top_n);
        self.source.save_matches(job_id, &ranked).await?;
        info!(matches = ranked.len(), "Job matched");
        Ok(ranked)
    }

    /// [`match_job`](Self::match_job) followed by an unconditional cache write.
    pub async fn run_and_cache(&self, job_id: &str) -> PipelineResult<Vec<MatchResult>> {
        let ranked = self.match_job(job_id).await?;
        self.results.store_results(job_id, &ranked).await?;
        Ok(ranked)
    }
}

impl std::fmt::Debug for MatchPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchPipeline")
            .field("results", &self.results)
            .field("top_n", &self.top_n)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl JobHandler for MatchPipeline {
    async fn run(&self, job_id: &str) -> Result<JobSummary, JobFailure> {
        let ranked = self.run_and_cache(job_id).await?;
        Ok(JobSummary {
            matches: ranked.len(),
        })
    }
}
