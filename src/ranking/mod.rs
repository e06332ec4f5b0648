//! Weighted aggregation of factor scores into one ranked, truncated list.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::constants::clamp_unit;
use crate::model::{
    CandidateProfile, InitialCandidate, JobPosting, MatchBreakdown, MatchResult, WeightVector,
};
use crate::scoring::score_candidate;

/// `Σ(w_f · s_f) / Σ(w_f)`, or `0.0` when the total weight is zero.
pub fn aggregate(weights: &WeightVector, breakdown: &MatchBreakdown) -> f64 {
    let total = weights.total();
    if total <= 0.0 {
        return 0.0;
    }
    clamp_unit(weights.weighted_sum(breakdown) / total)
}

/// Sorts by `final_score` descending, keeping input order on ties, then truncates.
pub fn sort_and_truncate(results: &mut Vec<MatchResult>, top_n: usize) {
    // `sort_by` is stable.
    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(top_n);
}

/// Scores every candidate that has a profile and returns the top `top_n`.
///
/// Candidates without a profile are dropped, not scored as zero.
pub fn rank_candidates(
    candidates: &[InitialCandidate],
    profiles: &HashMap<String, CandidateProfile>,
    job: &JobPosting,
    weights: &WeightVector,
    top_n: usize,
) -> Vec<MatchResult> {
    let weights = weights.sanitized();
    let mut results: Vec<MatchResult> = candidates
        .iter()
        .filter_map(|candidate| {
            let Some(profile) = profiles.get(&candidate.user_id) else {
                debug!(user_id = %candidate.user_id, "No profile for candidate, skipping");
                return None;
            };
            let skill_overlap = candidate
                .experience_score
                .unwrap_or(profile.skill_overlap);
            let breakdown = score_candidate(profile, job, skill_overlap);
            Some(MatchResult {
                user_id: candidate.user_id.clone(),
                final_score: aggregate(&weights, &breakdown),
                breakdown,
            })
        })
        .collect();

    let scored = results.len();
    sort_and_truncate(&mut results, top_n);
    debug!(
        candidates = candidates.len(),
        scored,
        returned = results.len(),
        "Ranked candidates"
    );
    results
}
