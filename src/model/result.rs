use serde::{Deserialize, Serialize};

use crate::constants::clamp_unit;

/// One factor's score with a human-readable rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub reason: String,
}

impl ScoreBreakdown {
    /// Creates a breakdown, clamping `score` into `[0, 1]`.
    pub fn new(score: f64, reason: impl Into<String>) -> Self {
        Self {
            score: clamp_unit(score),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} ({})", self.score, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub time: ScoreBreakdown,
    pub place: ScoreBreakdown,
    pub cost: ScoreBreakdown,
    pub experience: ScoreBreakdown,
}

/// A scored candidate in the final ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub user_id: String,
    pub final_score: f64,
    pub breakdown: MatchBreakdown,
}
