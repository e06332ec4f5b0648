//! Re-ranks candidates for one or more jobs from a JSON fixture and prints the results.
//!
//! Usage: `rerank <fixture.json> <job_id>...`

use std::sync::Arc;

use anyhow::{Context, bail};
use tokio::signal;

use rerank::config::Config;
use rerank::jobs::{JobOutcome, drain_reports};
use rerank::service::MatchingService;
use rerank::source::InMemoryCandidateSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(fixture) = args.next() else {
        bail!("usage: rerank <fixture.json> <job_id>...");
    };
    let job_ids: Vec<String> = args.collect();
    if job_ids.is_empty() {
        bail!("usage: rerank <fixture.json> <job_id>...");
    }

    let config = Config::from_env()?;
    config.validate()?;

    let source = InMemoryCandidateSource::from_json_file(&fixture)
        .await
        .with_context(|| format!("loading {fixture}"))?;
    let service = MatchingService::with_memory_cache(Arc::new(source), config);

    let mut reports = service.subscribe();
    for job_id in &job_ids {
        service.trigger_match(job_id.clone());
    }

    tokio::select! {
        _ = service.shutdown() => {}
        _ = signal::ctrl_c() => {
            tracing::warn!(pending = service.queue_depth(), "Interrupted before queue drained");
            return Ok(());
        }
    }

    let (finished, skipped) = drain_reports(&mut reports);
    if skipped > 0 {
        tracing::warn!(skipped, "Some job reports were dropped before they were read");
    }
    for report in finished {
        if let JobOutcome::Failed(failure) = &report.outcome {
            tracing::error!(job_id = %report.job_id, error = %failure, "Matching failed");
        }
    }

    let mut out = serde_json::Map::new();
    for job_id in job_ids {
        let results = service.get_match_results(&job_id).await?;
        out.insert(job_id, serde_json::to_value(results)?);
    }
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
