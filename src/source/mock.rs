//! Mock candidate source (call counting + failure injection).

use std::collections::{HashMap, HashSet};
use std::ops::Deref;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::model::{CandidateProfile, InitialCandidate, JobPosting, MatchResult, WeightVector};

use super::error::{SourceError, SourceResult};
use super::memory::{InMemoryCandidateSource, SourceFixture};
use super::CandidateSource;

/// Number of calls made to each collaborator operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCalls {
    pub fetch_initial_candidates: usize,
    pub find_job: usize,
    pub get_profiles_batch: usize,
    pub get_weights: usize,
    pub save_matches: usize,
}

impl SourceCalls {
    pub fn total(&self) -> usize {
        self.fetch_initial_candidates
            + self.find_job
            + self.get_profiles_batch
            + self.get_weights
            + self.save_matches
    }
}

#[derive(Debug, Default)]
struct Faults {
    failing: HashSet<String>,
    panicking: HashSet<String>,
    delay: Option<Duration>,
}

/// [`InMemoryCandidateSource`] that records calls and can fail on demand.
#[derive(Debug, Default)]
pub struct MockCandidateSource {
    inner: InMemoryCandidateSource,
    calls: Mutex<SourceCalls>,
    faults: Mutex<Faults>,
}

impl MockCandidateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixture(fixture: SourceFixture) -> Self {
        Self {
            inner: InMemoryCandidateSource::new(fixture),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> SourceCalls {
        *self.calls.lock()
    }

    /// Makes `fetch_initial_candidates` return an error for `job_id`.
    pub fn fail_job(&self, job_id: impl Into<String>) {
        self.faults.lock().failing.insert(job_id.into());
    }

    /// Makes `fetch_initial_candidates` panic for `job_id`.
    pub fn panic_on_job(&self, job_id: impl Into<String>) {
        self.faults.lock().panicking.insert(job_id.into());
    }

    /// Sleeps this long inside every `fetch_initial_candidates` call.
    pub fn set_delay(&self, delay: Duration) {
        self.faults.lock().delay = Some(delay);
    }

    fn record(&self, f: impl FnOnce(&mut SourceCalls)) {
        f(&mut self.calls.lock());
    }
}

impl Deref for MockCandidateSource {
    type Target = InMemoryCandidateSource;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    async fn fetch_initial_candidates(&self, job_id: &str) -> SourceResult<Vec<InitialCandidate>> {
        self.record(|c| c.fetch_initial_candidates += 1);

        let (fail, panic, delay) = {
            let faults = self.faults.lock();
            (
                faults.failing.contains(job_id),
                faults.panicking.contains(job_id),
                faults.delay,
            )
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if panic {
            panic!("injected panic for job {job_id}");
        }
        if fail {
            return Err(SourceError::QueryFailed {
                job_id: job_id.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.inner.fetch_initial_candidates(job_id).await
    }

    async fn find_job(&self, job_id: &str) -> SourceResult<Option<JobPosting>> {
        self.record(|c| c.find_job += 1);
        self.inner.find_job(job_id).await
    }

    async fn get_profiles_batch(
        &self,
        user_ids: &[String],
    ) -> SourceResult<HashMap<String, CandidateProfile>> {
        self.record(|c| c.get_profiles_batch += 1);
        self.inner.get_profiles_batch(user_ids).await
    }

    async fn get_weights(&self) -> SourceResult<WeightVector> {
        self.record(|c| c.get_weights += 1);
        self.inner.get_weights().await
    }

    async fn save_matches(&self, job_id: &str, results: &[MatchResult]) -> SourceResult<()> {
        self.record(|c| c.save_matches += 1);
        self.inner.save_matches(job_id, results).await
    }
}
