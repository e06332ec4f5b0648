//! Candidate source collaborator.
//!
//! The coarse first-stage query, job lookup, profile batch fetch, weight lookup
//! and result persistence all live behind [`CandidateSource`]. The crate ships an
//! in-memory implementation; production deployments wire in their own data store.

pub mod error;
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


use std::collections::HashMap;

use async_trait::async_trait;

use crate::model::{CandidateProfile, InitialCandidate, JobPosting, MatchResult, WeightVector};

pub use error::{SourceError, SourceResult};
pub use memory::{InMemoryCandidateSource, SourceFixture};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCandidateSource, SourceCalls};

/// Data-store operations consumed by the matching pipeline.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Ordered first-stage candidates for a job. May be empty.
    async fn fetch_initial_candidates(&self, job_id: &str) -> SourceResult<Vec<InitialCandidate>>;
    /// Looks up a job posting.
    async fn find_job(&self, job_id: &str) -> SourceResult<Option<JobPosting>>;
    /// Full profiles by user id. Unknown ids are left out of the map.
    async fn get_profiles_batch(
        &self,
        user_ids: &[String],
    ) -> SourceResult<HashMap<String, CandidateProfile>>;
    /// Current factor weights.
    async fn get_weights(&self) -> SourceResult<WeightVector>;
    /// Persists the ranked result list for a job.
    async fn save_matches(&self, job_id: &str, results: &[MatchResult]) -> SourceResult<()>;
}
