use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::cache::RecordingCacheStore;
use crate::jobs::{FailureKind, JobOutcome, TriggerStatus};
use crate::model::{CandidateProfile, InitialCandidate, JobPosting, WeightVector};
use crate::source::MockCandidateSource;

fn source() -> Arc<MockCandidateSource> {
    let source = MockCandidateSource::new();
    source.insert_job("job-1", JobPosting::default());
    source.insert_candidates(
        "job-1",
        vec![InitialCandidate::new("a"), InitialCandidate::new("b")],
    );
    source.insert_profile(
        "a",
        CandidateProfile {
            remote_ok: true,
            ..Default::default()
        },
    );
    source.insert_profile("b", CandidateProfile::default());
    source.set_weights(WeightVector::new(0.0, 1.0, 0.0, 0.0));
    Arc::new(source)
}

async fn next_report(rx: &mut broadcast::Receiver<JobReport>) -> JobReport {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for report")
        .expect("report channel closed")
}

#[tokio::test]
async fn test_results_absent_until_run_completes() {
    let source = source();
    let store = Arc::new(RecordingCacheStore::new());
    let service = MatchingService::new(source.clone(), store.clone(), Config::default());

    assert_eq!(service.get_match_results("job-1").await.unwrap(), None);
    // Reading never triggers a run.
    assert_eq!(source.calls().total(), 0);
    assert_eq!(service.queue_depth(), 0);

    let mut reports = service.subscribe();
    assert!(service.trigger_match("job-1").is_enqueued());
    let report = next_report(&mut reports).await;
    assert_eq!(report.outcome, JobOutcome::Completed { matches: 2 });

    let cached = service.get_match_results("job-1").await.unwrap().unwrap();
    assert_eq!(cached[0].user_id, "a");
    assert_eq!(cached[1].user_id, "b");
    assert_eq!(store.set_count(), 1);
    assert_eq!(store.sets()[0].ttl, service.config().cache_ttl);
}

#[tokio::test]
async fn test_cache_hit_skips_source() {
    let source = source();
    let service = MatchingService::with_memory_cache(source.clone(), Config::default());

    let mut reports = service.subscribe();
    service.trigger_match("job-1");
    next_report(&mut reports).await;
    let after_run = source.calls();

    for _ in 0..3 {
        assert!(service.get_match_results("job-1").await.unwrap().is_some());
    }
    assert_eq!(source.calls(), after_run);
}

#[tokio::test]
async fn test_failed_run_leaves_no_results() {
    let source = source();
    source.fail_job("job-1");
    let store = Arc::new(RecordingCacheStore::new());
    let service = MatchingService::new(source.clone(), store.clone(), Config::default());

    let mut reports = service.subscribe();
    service.trigger_match("job-1");
    let report = next_report(&mut reports).await;

    assert_eq!(report.outcome.failure().unwrap().kind, FailureKind::Source);
    assert_eq!(service.get_match_results("job-1").await.unwrap(), None);
    assert_eq!(store.set_count(), 0);
}

#[tokio::test]
async fn test_top_n_comes_from_config() {
    let source = source();
    let config = Config {
        top_n: 1,
        ..Default::default()
    };
    let service = MatchingService::with_memory_cache(source, config);

    let mut reports = service.subscribe();
    service.trigger_match("job-1");
    next_report(&mut reports).await;

    let cached = service.get_match_results("job-1").await.unwrap().unwrap();
    assert_eq!(cached.len(), 1);
}

#[tokio::test]
async fn test_shutdown_drains_and_rejects() {
    let source = source();
    let service = MatchingService::with_memory_cache(source, Config::default());

    service.trigger_match("job-1");
    service.shutdown().await;

    assert!(service.get_match_results("job-1").await.unwrap().is_some());
    assert_eq!(
        service.trigger_match("job-1").status,
        TriggerStatus::Rejected
    );
}
