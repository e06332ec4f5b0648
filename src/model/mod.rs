//! Data model shared by scoring, ranking and the job pipeline.
//!
//! All types are `serde` types: collaborators hand them over as JSON-like
//! structured values and the cache stores [`MatchResult`] lists as JSON.

pub mod candidate;
pub mod job;
pub mod result;
pub mod weights;

use serde::{Deserialize, Serialize};

pub use candidate::{CandidateProfile, DomainExperience, InitialCandidate, Seniority};
pub use job::{
    ExperienceRequirement, JobPosting, LocationPolicy, PricePolicy, ScheduleKind,
    ScheduleRequirement,
};
pub use result::{MatchBreakdown, MatchResult, ScoreBreakdown};
pub use weights::WeightVector;

/// Half-open `[start, end)` window. Timestamps stay raw until scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(alias = "start_ts")]
    pub start: String,
    #[serde(alias = "end_ts")]
    pub end: String,
}

impl TimeWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
