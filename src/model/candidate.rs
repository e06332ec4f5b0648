use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{GeoPoint, TimeWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    #[default]
    Junior,
    Mid,
    Senior,
    Lead,
    #[serde(other)]
    Unknown,
}

impl Seniority {
    /// Fixed seniority weighting used by the experience score.
    #[inline]
    pub fn score(&self) -> f64 {
        match self {
            Seniority::Junior => 0.4,
            Seniority::Mid => 0.7,
            Seniority::Senior | Seniority::Lead => 1.0,
            Seniority::Unknown => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainExperience {
    pub domain: String,
    #[serde(default)]
    pub years: f64,
    #[serde(default)]
    pub seniority: Seniority,
}

impl DomainExperience {
    pub fn new(domain: impl Into<String>, years: f64, seniority: Seniority) -> Self {
        Self {
            domain: domain.into(),
            years,
            seniority,
        }
    }
}

/// Full candidate attributes used for fine-grained scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub availability: Vec<TimeWindow>,
    #[serde(default)]
    pub remote_ok: bool,
    #[serde(default)]
    pub location_points: Vec<GeoPoint>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub domains: Vec<DomainExperience>,
    #[serde(default)]
    pub certifications: BTreeSet<String>,
    /// UTC offset in hours.
    #[serde(default)]
    pub timezone_offset: f64,
    /// Precomputed skill overlap in `[0, 1]`, supplied by the candidate source.
    #[serde(default)]
    pub skill_overlap: f64,
}

impl CandidateProfile {
    /// First domain entry matching `domain`.
    pub fn domain(&self, domain: &str) -> Option<&DomainExperience> {
        self.domains.iter().find(|d| d.domain == domain)
    }

    pub fn holds_cert(&self, code: &str) -> bool {
        self.certifications.contains(code)
    }
}

/// Row produced by the coarse first-stage candidate query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialCandidate {
    pub user_id: String,
    /// First-stage skill overlap. Overrides the profile's `skill_overlap` when set.
    #[serde(default)]
    pub experience_score: Option<f64>,
}

impl InitialCandidate {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            experience_score: None,
        }
    }

    pub fn with_experience_score(mut self, score: f64) -> Self {
        self.experience_score = Some(score);
        self
    }
}
