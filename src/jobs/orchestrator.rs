use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{Mutex as AsyncMutex, broadcast, mpsc};
use tokio::task::{JoinError, JoinHandle};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::types::{
    FailureKind, JobFailure, JobOutcome, JobReport, JobSummary, TriggerAck,
};

/// One full run for a job identifier, executed by the orchestrator's worker.
#[async_trait]
pub trait JobHandler: Send + Sync + 'static {
    async fn run(&self, job_id: &str) -> Result<JobSummary, JobFailure>;
}

#[derive(Debug)]
struct QueuedJob {
    job_id: String,
    enqueued_at: Instant,
}

/// Unbounded FIFO queue drained by exactly one worker task.
///
/// Any number of callers may [`trigger`](Self::trigger) concurrently; runs are
/// executed one at a time in enqueue order. Identical job ids are not coalesced.
/// There is no backpressure: [`queue_depth`](Self::queue_depth) is the signal
/// to watch.
pub struct JobOrchestrator {
    sender: Mutex<Option<mpsc::UnboundedSender<QueuedJob>>>,
    reports: broadcast::Sender<JobReport>,
    depth: Arc<AtomicUsize>,
    worker: AsyncMutex<Option<JoinHandle<()>>>,
}

impl JobOrchestrator {
    /// Spawns the worker on the current tokio runtime.
    pub fn start(handler: Arc<dyn JobHandler>, report_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (reports, _) = broadcast::channel(report_capacity.max(1));
        let depth = Arc::new(AtomicUsize::new(0));

        let worker = tokio::spawn(run_worker(
            receiver,
            handler,
            reports.clone(),
            Arc::clone(&depth),
        ));
        info!("Job worker started");

        Self {
            sender: Mutex::new(Some(sender)),
            reports,
            depth,
            worker: AsyncMutex::new(Some(worker)),
        }
    }

    /// Enqueues `job_id` and returns without waiting for the run.
    pub fn trigger(&self, job_id: impl Into<String>) -> TriggerAck {
        let job_id = job_id.into();
        let guard = self.sender.lock();
        let Some(sender) = guard.as_ref() else {
            warn!(job_id = %job_id, "Rejecting trigger: orchestrator is shut down");
            return TriggerAck::rejected(job_id);
        };

        // Counted before the send so the worker's decrement never runs first.
        self.depth.fetch_add(1, Ordering::AcqRel);
        let queued = QueuedJob {
            job_id: job_id.clone(),
            enqueued_at: Instant::now(),
        };
        if sender.send(queued).is_err() {
            self.depth.fetch_sub(1, Ordering::AcqRel);
            warn!(job_id = %job_id, "Rejecting trigger: worker is gone");
            return TriggerAck::rejected(job_id);
        }

        info!(job_id = %job_id, "Enqueued job");
        TriggerAck::enqueued(job_id)
    }

    /// Receives a [`JobReport`] for every run finished after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<JobReport> {
        self.reports.subscribe()
    }

    /// Jobs triggered but not yet picked up by the worker.
    pub fn queue_depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }

    pub fn is_accepting(&self) -> bool {
        self.sender.lock().is_some()
    }

    /// Stops accepting triggers, lets the worker finish everything already
    /// queued, then joins it.
    ///
    /// Every caller returns only after the worker has exited, including
    /// concurrent and repeated calls.
    pub async fn shutdown(&self) {
        if self.sender.lock().take().is_some() {
            info!(pending = self.queue_depth(), "Draining job queue");
        }

        // Held across the join so later callers wait for the same exit.
        let mut worker = self.worker.lock().await;
        if let Some(handle) = worker.as_mut() {
            if let Err(e) = handle.await {
                error!(error = %e, "Job worker terminated abnormally");
            }
            *worker = None;
            info!("Job worker stopped");
        }
    }
}

impl std::fmt::Debug for JobOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobOrchestrator")
            .field("accepting", &self.is_accepting())
            .field("queue_depth", &self.queue_depth())
            .finish()
    }
}

/// Takes every report already buffered in `rx` without waiting.
///
/// Returns the reports still available and how many were overwritten before
/// they could be read. A lagged receiver keeps reading from the oldest
/// report it still holds.
pub fn drain_reports(rx: &mut broadcast::Receiver<JobReport>) -> (Vec<JobReport>, u64) {
    let mut reports = Vec::new();
    let mut skipped = 0;
    loop {
        match rx.try_recv() {
            Ok(report) => reports.push(report),
            Err(TryRecvError::Lagged(n)) => skipped += n,
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    (reports, skipped)
}

async fn run_worker(
    mut receiver: mpsc::UnboundedReceiver<QueuedJob>,
    handler: Arc<dyn JobHandler>,
    reports: broadcast::Sender<JobReport>,
    depth: Arc<AtomicUsize>,
) {
    while let Some(job) = receiver.recv().await {
        depth.fetch_sub(1, Ordering::AcqRel);
        let report = run_job(&handler, job).await;

        match &report.outcome {
            JobOutcome::Completed { matches } => info!(
                job_id = %report.job_id,
                run_id = %report.run_id,
                matches,
                waited_ms = report.waited.as_millis() as u64,
                elapsed_ms = report.elapsed.as_millis() as u64,
                "Job finished"
            ),
            JobOutcome::Failed(failure) => error!(
                job_id = %report.job_id,
                run_id = %report.run_id,
                kind = ?failure.kind,
                error = %failure.message,
                "Job failed, abandoning"
            ),
        }

        // No subscribers is fine; the log line above is the record.
        let _ = reports.send(report);
    }
    info!("Job queue closed, worker exiting");
}

async fn run_job(handler: &Arc<dyn JobHandler>, job: QueuedJob) -> JobReport {
    let run_id = Uuid::new_v4();
    let waited = job.enqueued_at.elapsed();
    let started = Instant::now();
    info!(job_id = %job.job_id, run_id = %run_id, "Worker picked up job");

    // Run on its own task so a panic comes back as a JoinError and the loop survives.
    // Awaiting it right away keeps execution strictly serial.
    let task_handler = Arc::clone(handler);
    let task_job_id = job.job_id.clone();
    let span = info_span!("job_run", job_id = %job.job_id, run_id = %run_id);
    let result = tokio::spawn(async move { task_handler.run(&task_job_id).await }.instrument(span))
        .await;

    let outcome = match result {
        Ok(Ok(summary)) => JobOutcome::Completed {
            matches: summary.matches,
        },
        Ok(Err(failure)) => JobOutcome::Failed(failure),
        Err(e) => JobOutcome::Failed(panic_failure(e)),
    };

    JobReport {
        job_id: job.job_id,
        run_id,
        waited,
        elapsed: started.elapsed(),
        outcome,
    }
}

fn panic_failure(e: JoinError) -> JobFailure {
    let message = if e.is_panic() {
        let payload = e.into_panic();
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string())
    } else {
        e.to_string()
    };
    JobFailure::new(FailureKind::Panicked, message)
}
