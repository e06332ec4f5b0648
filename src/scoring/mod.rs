//! Per-factor candidate scoring.
//!
//! Four pure functions map `(CandidateProfile, JobPosting)` to a
//! [`ScoreBreakdown`](crate::model::ScoreBreakdown) in `[0, 1]`:
//!
//! | Factor | Function | Fallbacks |
//! |---|---|---|
//! | time | [`time_score`] | no job windows → 0.8, bad timestamp → 0.2 |
//! | place | [`place_score`] | onsite/hybrid without coordinates → 0.1 |
//! | cost | [`cost_score`] | no rate → 0.6, no budget → 0.8 |
//! | experience | [`experience_score`] | no requirements → 0.8 |
//!
//! Malformed or missing input never fails a run; it degrades to the documented
//! fallback with a reason string explaining why.

pub mod cost;
pub mod error;
pub mod experience;
pub mod geo;
pub mod place;
pub mod time;


pub use cost::cost_score;
pub use error::TimestampError;
pub use experience::{DomainFit, cert_bonus, domain_fit, experience_score};
pub use geo::{distance_km, min_distance_km};
pub use place::place_score;
pub use time::{parse_instant, time_score, timezone_penalty};

use crate::model::{CandidateProfile, JobPosting, MatchBreakdown};

/// Runs all four factors for one candidate.
pub fn score_candidate(
    candidate: &CandidateProfile,
    job: &JobPosting,
    skill_overlap: f64,
) -> MatchBreakdown {
    MatchBreakdown {
        time: time_score(candidate, job),
        place: place_score(candidate, job),
        cost: cost_score(candidate, job),
        experience: experience_score(candidate, job, skill_overlap),
    }
}
