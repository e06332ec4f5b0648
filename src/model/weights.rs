use serde::{Deserialize, Serialize};
use tracing::warn;

use super::MatchBreakdown;

/// Per-factor weights for combining sub-scores. Need not sum to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub place: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub experience: f64,
}

impl WeightVector {
    pub fn new(time: f64, place: f64, cost: f64, experience: f64) -> Self {
        Self {
            time,
            place,
            cost,
            experience,
        }
    }

    /// Equal weight on every factor.
    pub fn uniform() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Replaces negative or non-finite weights with `0.0`.
    pub fn sanitized(self) -> Self {
        let fix = |name: &'static str, w: f64| {
            if w.is_finite() && w >= 0.0 {
                w
            } else {
                warn!(factor = name, weight = w, "Ignoring invalid factor weight");
                0.0
            }
        };
        Self {
            time: fix("time", self.time),
            place: fix("place", self.place),
            cost: fix("cost", self.cost),
            experience: fix("experience", self.experience),
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.time + self.place + self.cost + self.experience
    }

    /// Σ(weight_f · score_f) without normalisation.
    #[inline]
    pub fn weighted_sum(&self, breakdown: &MatchBreakdown) -> f64 {
        self.time * breakdown.time.score
            + self.place * breakdown.place.score
            + self.cost * breakdown.cost.score
            + self.experience * breakdown.experience.score
    }
}
