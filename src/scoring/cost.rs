use crate::constants::{COST_BELOW_FLOOR_SCORE, COST_NO_BUDGET_SCORE, COST_UNKNOWN_RATE_SCORE};
use crate::model::{CandidateProfile, JobPosting, ScoreBreakdown};

/// Scores the candidate's hourly rate against the job budget.
///
/// Over-budget rates decay as `1 / (1 + overshoot)` and never reach exactly 0;
/// under-budget rates are rewarded, not penalised.
pub fn cost_score(candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown {
    let Some(rate) = candidate.hourly_rate else {
        return ScoreBreakdown::new(COST_UNKNOWN_RATE_SCORE, "Unknown rate");
    };
    let Some((min, max)) = job.price_policy.bounds() else {
        return ScoreBreakdown::new(COST_NO_BUDGET_SCORE, "Job has no defined budget");
    };

    if (min..=max).contains(&rate) {
        ScoreBreakdown::new(1.0, "Rate is within budget")
    } else if rate > max {
        let overshoot = (rate - max) / max;
        ScoreBreakdown::new(
            1.0 / (1.0 + overshoot),
            format!("Rate is {:.0}% over budget", overshoot * 100.0),
        )
    } else {
        ScoreBreakdown::new(COST_BELOW_FLOOR_SCORE, "Rate is below budget floor")
    }
}
