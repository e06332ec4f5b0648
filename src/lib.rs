//! Second-stage candidate re-ranking.
//!
//! A coarse first-stage query hands over an ordered candidate list for a job.
//! This crate scores each candidate on four factors, combines them with
//! configurable weights, keeps the top N and caches the ranked list.
//!
//! # Public API Surface
//!
//! ## Entry Points
//! - [`MatchingService`] - trigger runs and read cached results
//! - [`Config`], [`ConfigError`] - environment-backed settings
//!
//! ## Scoring & Ranking
//! - [`score_candidate`] and the per-factor functions in [`scoring`]
//! - [`aggregate`], [`rank_candidates`] - weighted mean and top-N selection
//!
//! ## Collaborators
//! - [`CandidateSource`] - data-store seam, with [`InMemoryCandidateSource`]
//! - [`CacheStore`] - key-value seam, with [`MemoryCacheStore`]
//!
//! ## Jobs
//! - [`JobOrchestrator`], [`JobHandler`] - single-consumer FIFO worker
//! - [`MatchPipeline`] - the handler that does one full matching run
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod config;
pub mod constants;
pub mod jobs;
pub mod model;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod service;
pub mod source;

pub use cache::{CacheError, CacheResult, CacheStore, MemoryCacheStore, ResultCache, results_key};
#[cfg(any(test, feature = "mock"))]
pub use cache::{RecordedSet, RecordingCacheStore};

pub use config::{Config, ConfigError};
pub use jobs::{
    FailureKind, JobFailure, JobHandler, JobOrchestrator, JobOutcome, JobReport, JobSummary,
    TriggerAck, TriggerStatus,
};
pub use model::{
    CandidateProfile, GeoPoint, InitialCandidate, JobPosting, MatchBreakdown, MatchResult,
    ScoreBreakdown, TimeWindow, WeightVector,
};
pub use pipeline::{MatchError, MatchPipeline, PipelineResult};
pub use ranking::{aggregate, rank_candidates};
pub use scoring::score_candidate;
pub use service::MatchingService;
pub use source::{CandidateSource, InMemoryCandidateSource, SourceError, SourceFixture};
#[cfg(any(test, feature = "mock"))]
pub use source::{MockCandidateSource, SourceCalls};
