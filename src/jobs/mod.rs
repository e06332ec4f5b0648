//! Single-consumer asynchronous job pipeline.
//!
//! Callers enqueue job identifiers with [`JobOrchestrator::trigger`] and get an
//! acknowledgement back immediately. One background worker drains the queue in
//! FIFO order, running a [`JobHandler`] per job and publishing a [`JobReport`].
//!
//! Failed runs are reported and abandoned: no retry, no dead-letter queue.

pub mod orchestrator;
pub mod types;


pub use orchestrator::{JobHandler, JobOrchestrator, drain_reports};
pub use types::{
    FailureKind, JobFailure, JobOutcome, JobReport, JobSummary, TriggerAck, TriggerStatus,
};
