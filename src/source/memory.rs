use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{CandidateProfile, InitialCandidate, JobPosting, MatchResult, WeightVector};

use super::CandidateSource;
use super::error::{SourceError, SourceResult};

/// Everything an [`InMemoryCandidateSource`] serves, as loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceFixture {
    #[serde(default)]
    pub jobs: HashMap<String, JobPosting>,
    /// First-stage candidates per job id, in query order.
    #[serde(default)]
    pub candidates: HashMap<String, Vec<InitialCandidate>>,
    #[serde(default)]
    pub profiles: HashMap<String, CandidateProfile>,
    #[serde(default)]
    pub weights: WeightVector,
}

/// Candidate source backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryCandidateSource {
    data: RwLock<SourceFixture>,
    saved: RwLock<HashMap<String, Vec<MatchResult>>>,
}

impl InMemoryCandidateSource {
    pub fn new(fixture: SourceFixture) -> Self {
        Self {
            data: RwLock::new(fixture),
            saved: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_json_str(json: &str) -> SourceResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Loads a [`SourceFixture`] from a JSON file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let source = Self::from_json_str(&raw)?;
        {
            let data = source.data.read();
            info!(
                path = %path.display(),
                jobs = data.jobs.len(),
                profiles = data.profiles.len(),
                "Loaded candidate fixture"
            );
        }
        Ok(source)
    }

    pub fn insert_job(&self, job_id: impl Into<String>, job: JobPosting) {
        self.data.write().jobs.insert(job_id.into(), job);
    }

    pub fn insert_candidates(&self, job_id: impl Into<String>, candidates: Vec<InitialCandidate>) {
        self.data.write().candidates.insert(job_id.into(), candidates);
    }

    pub fn insert_profile(&self, user_id: impl Into<String>, profile: CandidateProfile) {
        self.data.write().profiles.insert(user_id.into(), profile);
    }

    pub fn set_weights(&self, weights: WeightVector) {
        self.data.write().weights = weights;
    }

    /// Last result list persisted for `job_id`.
    pub fn saved_matches(&self, job_id: &str) -> Option<Vec<MatchResult>> {
        self.saved.read().get(job_id).cloned()
    }
}

#[async_trait]
impl CandidateSource for InMemoryCandidateSource {
    async fn fetch_initial_candidates(&self, job_id: &str) -> SourceResult<Vec<InitialCandidate>> {
        Ok(self
            .data
            .read()
            .candidates
            .get(job_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_job(&self, job_id: &str) -> SourceResult<Option<JobPosting>> {
        Ok(self.data.read().jobs.get(job_id).cloned())
    }

    async fn get_profiles_batch(
        &self,
        user_ids: &[String],
    ) -> SourceResult<HashMap<String, CandidateProfile>> {
        let data = self.data.read();
        Ok(user_ids
            .iter()
            .filter_map(|id| data.profiles.get(id).map(|p| (id.clone(), p.clone())))
            .collect())
    }

    async fn get_weights(&self) -> SourceResult<WeightVector> {
        Ok(self.data.read().weights)
    }

    async fn save_matches(&self, job_id: &str, results: &[MatchResult]) -> SourceResult<()> {
        debug!(job_id, count = results.len(), "Persisting matches");
        self.saved
            .write()
            .insert(job_id.to_string(), results.to_vec());
        Ok(())
    }
}
