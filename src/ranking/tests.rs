use std::collections::HashMap;

use super::*;
use crate::model::{
    CandidateProfile, InitialCandidate, JobPosting, MatchBreakdown, PricePolicy, ScoreBreakdown,
    WeightVector,
};

fn breakdown(time: f64, place: f64, cost: f64, experience: f64) -> MatchBreakdown {
    MatchBreakdown {
        time: ScoreBreakdown::new(time, "t"),
        place: ScoreBreakdown::new(place, "p"),
        cost: ScoreBreakdown::new(cost, "c"),
        experience: ScoreBreakdown::new(experience, "e"),
    }
}

/// Remote job with a budget, so only `remote_ok` and `hourly_rate` move the score.
fn job() -> JobPosting {
    JobPosting {
        price_policy: PricePolicy {
            min: Some(50.0),
            max: Some(100.0),
        },
        ..Default::default()
    }
}

fn profile(remote_ok: bool, hourly_rate: f64) -> CandidateProfile {
    CandidateProfile {
        remote_ok,
        hourly_rate: Some(hourly_rate),
        ..Default::default()
    }
}

fn profiles(entries: Vec<(&str, CandidateProfile)>) -> HashMap<String, CandidateProfile> {
    entries
        .into_iter()
        .map(|(id, p)| (id.to_string(), p))
        .collect()
}

fn ids(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.user_id.as_str()).collect()
}

#[test]
fn test_aggregate_weighted_mean() {
    let weights = WeightVector::new(1.0, 1.0, 2.0, 0.0);
    let score = aggregate(&weights, &breakdown(1.0, 0.0, 0.5, 1.0));
    assert!((score - 0.5).abs() < 1e-12);
}

#[test]
fn test_aggregate_zero_total_weight() {
    let score = aggregate(&WeightVector::default(), &breakdown(1.0, 1.0, 1.0, 1.0));
    assert_eq!(score, 0.0);
}

#[test]
fn test_aggregate_weights_need_not_sum_to_one() {
    let small = aggregate(
        &WeightVector::new(0.1, 0.1, 0.1, 0.1),
        &breakdown(0.2, 0.4, 0.6, 0.8),
    );
    let large = aggregate(
        &WeightVector::new(10.0, 10.0, 10.0, 10.0),
        &breakdown(0.2, 0.4, 0.6, 0.8),
    );
    assert!((small - large).abs() < 1e-12);
    assert!((small - 0.5).abs() < 1e-12);
}

#[test]
fn test_negative_weights_are_ignored() {
    let weights = WeightVector::new(-5.0, 1.0, f64::NAN, 0.0).sanitized();
    assert_eq!(weights, WeightVector::new(0.0, 1.0, 0.0, 0.0));
}

#[test]
fn test_rank_sorts_descending_and_keeps_tie_order() {
    let candidates = vec![
        InitialCandidate::new("a"),
        InitialCandidate::new("b"),
        InitialCandidate::new("c"),
        InitialCandidate::new("d"),
    ];
    let profiles = profiles(vec![
        ("a", profile(false, 80.0)),
        ("b", profile(true, 80.0)),
        ("c", profile(false, 80.0)),
        ("d", profile(true, 200.0)),
    ]);
    let weights = WeightVector::new(0.0, 1.0, 1.0, 0.0);

    let results = rank_candidates(&candidates, &profiles, &job(), &weights, 10);

    assert_eq!(ids(&results), vec!["b", "d", "a", "c"]);
    assert_eq!(results[2].final_score, results[3].final_score);
    for pair in results.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
    }
}

#[test]
fn test_rank_truncates_to_top_n() {
    let candidates: Vec<_> = (0..10)
        .map(|i| InitialCandidate::new(format!("u{i}")))
        .collect();
    let profiles: HashMap<_, _> = (0..10)
        .map(|i| (format!("u{i}"), profile(i % 2 == 0, 80.0)))
        .collect();

    let results = rank_candidates(&candidates, &profiles, &job(), &WeightVector::uniform(), 3);

    assert_eq!(results.len(), 3);
    assert_eq!(ids(&results), vec!["u0", "u2", "u4"]);
}

#[test]
fn test_rank_drops_candidates_without_profile() {
    let candidates = vec![
        InitialCandidate::new("ghost"),
        InitialCandidate::new("real"),
    ];
    let profiles = profiles(vec![("real", profile(true, 80.0))]);

    let results = rank_candidates(&candidates, &profiles, &job(), &WeightVector::uniform(), 50);

    assert_eq!(ids(&results), vec!["real"]);
}

#[test]
fn test_rank_zero_weights_scores_zero() {
    let candidates = vec![InitialCandidate::new("a")];
    let profiles = profiles(vec![("a", profile(true, 80.0))]);

    let results = rank_candidates(&candidates, &profiles, &job(), &WeightVector::default(), 50);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].final_score, 0.0);
    // Breakdown is still reported.
    assert_eq!(results[0].breakdown.place.score, 1.0);
}

#[test]
fn test_initial_experience_score_overrides_profile_skill_overlap() {
    let job = JobPosting {
        experience_requirements: vec![crate::model::ExperienceRequirement::new("rust", 1.0)],
        ..Default::default()
    };
    let candidate_profile = CandidateProfile {
        skill_overlap: 0.0,
        ..Default::default()
    };
    let profiles = profiles(vec![
        ("from_source", candidate_profile.clone()),
        ("from_profile", candidate_profile),
    ]);
    let candidates = vec![
        InitialCandidate::new("from_profile"),
        InitialCandidate::new("from_source").with_experience_score(1.0),
    ];
    let weights = WeightVector::new(0.0, 0.0, 0.0, 1.0);

    let results = rank_candidates(&candidates, &profiles, &job, &weights, 50);

    assert_eq!(ids(&results), vec!["from_source", "from_profile"]);
    assert!((results[0].breakdown.experience.score - (0.55 + 0.15 * 0.4)).abs() < 1e-12);
}

#[test]
fn test_final_scores_are_bounded() {
    let candidates: Vec<_> = (0..5)
        .map(|i| InitialCandidate::new(format!("u{i}")).with_experience_score(i as f64 * 3.0))
        .collect();
    let profiles: HashMap<_, _> = (0..5)
        .map(|i| (format!("u{i}"), profile(i % 2 == 0, 40.0 * i as f64)))
        .collect();

    let results = rank_candidates(
        &candidates,
        &profiles,
        &job(),
        &WeightVector::new(3.0, 0.5, 2.0, 7.0),
        50,
    );

    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.final_score)));
}
