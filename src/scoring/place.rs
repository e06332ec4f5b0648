use crate::constants::{
    HYBRID_ONSITE_WEIGHT, HYBRID_REMOTE_WEIGHT, ONSITE_DECAY_KM, PLACE_MISSING_LOCATION_SCORE,
};
use crate::model::{CandidateProfile, JobPosting, LocationPolicy, ScoreBreakdown};

use super::geo::min_distance_km;

/// Scores the candidate's location against the job's location policy.
pub fn place_score(candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown {
    if job.location_policy == LocationPolicy::Remote {
        let score = if candidate.remote_ok { 1.0 } else { 0.0 };
        return ScoreBreakdown::new(score, "Remote policy");
    }

    let min_dist = job
        .location_point
        .as_ref()
        .and_then(|point| min_distance_km(point, &candidate.location_points));
    let Some(min_dist) = min_dist else {
        return ScoreBreakdown::new(
            PLACE_MISSING_LOCATION_SCORE,
            "Missing location data for onsite/hybrid job",
        );
    };

    let radius = job.location_radius_km;
    match job.location_policy {
        LocationPolicy::Onsite => {
            let score = if min_dist <= radius {
                1.0
            } else {
                (1.0 - (min_dist - radius) / ONSITE_DECAY_KM).max(0.0)
            };
            ScoreBreakdown::new(score, format!("Onsite policy, distance {:.2}km", min_dist))
        }
        LocationPolicy::Hybrid => {
            let remote_part = if candidate.remote_ok {
                HYBRID_REMOTE_WEIGHT
            } else {
                0.0
            };
            let onsite_part = (1.0 - min_dist / (radius * 2.0)).max(0.0);
            ScoreBreakdown::new(
                remote_part + HYBRID_ONSITE_WEIGHT * onsite_part,
                format!(
                    "Hybrid policy, remote ok: {}, dist: {:.2}km",
                    candidate.remote_ok, min_dist
                ),
            )
        }
        LocationPolicy::Remote | LocationPolicy::Unknown => {
            ScoreBreakdown::new(0.0, "Unknown location policy")
        }
    }
}
