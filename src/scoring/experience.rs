use crate::constants::{
    CERT_BONUS, DOMAIN_YEARS_WEIGHT, EXPERIENCE_NO_REQUIREMENTS_SCORE, SENIORITY_WEIGHT,
    SKILL_OVERLAP_WEIGHT,
};
use crate::model::{CandidateProfile, JobPosting, ScoreBreakdown, Seniority};

/// Importance-weighted domain coverage plus the seniority of the first matched domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainFit {
    pub years_norm: f64,
    pub primary_seniority: Seniority,
}

/// Walks every requirement that names a domain.
///
/// Requirements without a domain contribute neither importance nor years.
pub fn domain_fit(candidate: &CandidateProfile, job: &JobPosting) -> DomainFit {
    let mut total_importance = 0.0;
    let mut weighted_sum = 0.0;
    let mut primary_seniority = None;

    for req in &job.experience_requirements {
        let Some(domain) = req.domain.as_deref() else {
            continue;
        };
        total_importance += req.importance;

        if let Some(entry) = candidate.domain(domain) {
            let coverage = if req.min_years > 0.0 {
                (entry.years / req.min_years).min(1.0)
            } else {
                1.0
            };
            weighted_sum += coverage * req.importance;
            primary_seniority.get_or_insert(entry.seniority);
        }
    }

    DomainFit {
        years_norm: if total_importance > 0.0 {
            weighted_sum / total_importance
        } else {
            0.0
        },
        primary_seniority: primary_seniority.unwrap_or(Seniority::Junior),
    }
}

/// `+0.15` iff the job requires at least one cert and the candidate holds all of them.
pub fn cert_bonus(candidate: &CandidateProfile, job: &JobPosting) -> f64 {
    let mut required = job.mandatory_certs().peekable();
    if required.peek().is_none() {
        return 0.0;
    }
    if required.all(|code| candidate.holds_cert(code)) {
        CERT_BONUS
    } else {
        0.0
    }
}

/// Composite experience score. `skill_overlap` comes from the candidate source.
pub fn experience_score(
    candidate: &CandidateProfile,
    job: &JobPosting,
    skill_overlap: f64,
) -> ScoreBreakdown {
    if job.experience_requirements.is_empty() {
        return ScoreBreakdown::new(
            EXPERIENCE_NO_REQUIREMENTS_SCORE,
            "Job has no specific experience requirements",
        );
    }

    let fit = domain_fit(candidate, job);
    let seniority_score = fit.primary_seniority.score();
    let score = SKILL_OVERLAP_WEIGHT * skill_overlap
        + DOMAIN_YEARS_WEIGHT * fit.years_norm
        + SENIORITY_WEIGHT * seniority_score
        + cert_bonus(candidate, job);

    ScoreBreakdown::new(
        score,
        format!(
            "Skill overlap: {:.2}, Domain years: {:.2}, Seniority: {:.2}",
            skill_overlap, fit.years_norm, seniority_score
        ),
    )
}
