use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::model::{MatchBreakdown, MatchResult, ScoreBreakdown};

fn result(user_id: &str, final_score: f64) -> MatchResult {
    MatchResult {
        user_id: user_id.to_string(),
        final_score,
        breakdown: MatchBreakdown {
            time: ScoreBreakdown::new(1.0 / 3.0, "Overlap ratio: 0.33, TZ penalty: 0.00"),
            place: ScoreBreakdown::new(0.1 + 0.2, "Remote policy"),
            cost: ScoreBreakdown::new(2.0 / 3.0, "Rate is 50% over budget"),
            experience: ScoreBreakdown::new(0.515, "Skill overlap: 0.60"),
        },
    }
}

#[test]
fn test_results_key() {
    assert_eq!(results_key("job-42"), "matches:job-42");
    assert_eq!(results_key(""), "matches:");
}

#[tokio::test]
async fn test_miss_returns_none() {
    let cache = ResultCache::new(Arc::new(MemoryCacheStore::new()), None);
    assert!(cache.get_match_results("job-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_then_get_round_trips_exactly() {
    let cache = ResultCache::new(Arc::new(MemoryCacheStore::new()), None);
    let results = vec![result("a", 0.7071067811865476), result("b", 1.0 / 7.0)];

    cache.store_results("job-1", &results).await.unwrap();

    let cached = cache.get_match_results("job-1").await.unwrap();
    assert_eq!(cached, Some(results));
}

#[tokio::test]
async fn test_empty_result_list_is_a_hit() {
    let cache = ResultCache::new(Arc::new(MemoryCacheStore::new()), None);
    cache.store_results("job-1", &[]).await.unwrap();

    assert_eq!(cache.get_match_results("job-1").await.unwrap(), Some(vec![]));
}

#[tokio::test]
async fn test_store_overwrites_unconditionally() {
    let cache = ResultCache::new(Arc::new(MemoryCacheStore::new()), None);
    cache
        .store_results("job-1", &[result("old", 0.9)])
        .await
        .unwrap();
    cache
        .store_results("job-1", &[result("new", 0.1)])
        .await
        .unwrap();

    let cached = cache.get_match_results("job-1").await.unwrap().unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].user_id, "new");
}

#[tokio::test]
async fn test_ttl_is_forwarded_to_store() {
    let store = Arc::new(RecordingCacheStore::new());
    let cache = ResultCache::new(store.clone(), Some(Duration::from_secs(3600)));

    cache.store_results("job-1", &[]).await.unwrap();

    assert_eq!(
        store.sets(),
        vec![RecordedSet {
            key: "matches:job-1".to_string(),
            ttl: Some(Duration::from_secs(3600)),
        }]
    );
}

#[tokio::test]
async fn test_memory_store_ignores_ttl() {
    let store = MemoryCacheStore::new();
    store
        .set("k", "\"v\"".to_string(), Some(Duration::from_millis(1)))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("\"v\""));
}

#[tokio::test]
async fn test_undecodable_entry_is_an_error() {
    let store = Arc::new(MemoryCacheStore::new());
    store
        .set("matches:job-1", "not json".to_string(), None)
        .await
        .unwrap();
    let cache = ResultCache::new(store, None);

    let err = cache.get_match_results("job-1").await.unwrap_err();
    assert!(matches!(err, CacheError::Decode { ref key, .. } if key == "matches:job-1"));
}

#[tokio::test]
async fn test_memory_store_capacity() {
    let store = MemoryCacheStore::with_capacity(2);
    for i in 0..10 {
        store.set(&format!("k{i}"), "1".to_string(), None).await.unwrap();
    }
    store.run_pending_tasks();

    assert!(store.len() <= 2);
}
