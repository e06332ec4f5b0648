use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerStatus {
    /// Queued for the worker.
    Enqueued,
    /// The orchestrator is shutting down and no longer accepts jobs.
    Rejected,
}

/// Immediate answer to a trigger call. Says nothing about how the run will go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerAck {
    pub status: TriggerStatus,
    pub job_id: String,
}

impl TriggerAck {
    pub fn enqueued(job_id: String) -> Self {
        Self {
            status: TriggerStatus::Enqueued,
            job_id,
        }
    }

    pub fn rejected(job_id: String) -> Self {
        Self {
            status: TriggerStatus::Rejected,
            job_id,
        }
    }

    #[inline]
    pub fn is_enqueued(&self) -> bool {
        self.status == TriggerStatus::Enqueued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A candidate-source call failed.
    Source,
    /// The cache write-through failed.
    Cache,
    /// The run panicked.
    Panicked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?} failure: {message}")]
pub struct JobFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl JobFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    pub matches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed { matches: usize },
    Failed(JobFailure),
}

impl JobOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, JobOutcome::Completed { .. })
    }

    pub fn failure(&self) -> Option<&JobFailure> {
        match self {
            JobOutcome::Failed(failure) => Some(failure),
            JobOutcome::Completed { .. } => None,
        }
    }
}

/// Published by the worker after every run, successful or not.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub job_id: String,
    pub run_id: Uuid,
    /// Time spent queued before the worker picked the job up.
    pub waited: Duration,
    /// Wall-clock time of the run itself.
    pub elapsed: Duration,
    pub outcome: JobOutcome,
}
