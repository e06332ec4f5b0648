//! Temporal overlap between job windows and candidate availability.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::constants::{
    TIME_FLEXIBLE_BONUS, TIME_NO_PREFERENCE_SCORE, TIME_PARSE_ERROR_SCORE, TZ_FREE_HOURS,
    TZ_PENALTY_SPAN_HOURS, clamp_unit,
};
use crate::model::{CandidateProfile, JobPosting, ScoreBreakdown, TimeWindow};

use super::error::TimestampError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset forms RFC 3339 rejects: `+0200` and minute precision.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

/// Parses an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(TimestampError::Unrecognised {
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Span {
    fn parse(window: &TimeWindow) -> Result<Self, TimestampError> {
        Ok(Self {
            start: parse_instant(&window.start)?,
            end: parse_instant(&window.end)?,
        })
    }

    fn seconds(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 1000.0
    }

    fn overlap_seconds(&self, other: &Span) -> f64 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end > start {
            (end - start).num_milliseconds() as f64 / 1000.0
        } else {
            0.0
        }
    }
}

fn parse_all(windows: &[TimeWindow]) -> Result<Vec<Span>, TimestampError> {
    windows.iter().map(Span::parse).collect()
}

/// Penalty in `[0, ∞)` for the timezone gap; 0 up to 3h, 1.0 at 24h.
#[inline]
pub fn timezone_penalty(job_offset: f64, candidate_offset: f64) -> f64 {
    let diff = (job_offset - candidate_offset).abs();
    ((diff - TZ_FREE_HOURS) / TZ_PENALTY_SPAN_HOURS).max(0.0)
}

/// Scores how much of the job's required time the candidate covers.
///
/// Job windows are summed independently, so overlapping job windows count twice
/// in both `required` and `overlap`.
pub fn time_score(candidate: &CandidateProfile, job: &JobPosting) -> ScoreBreakdown {
    if job.schedule.windows.is_empty() {
        return ScoreBreakdown::new(
            TIME_NO_PREFERENCE_SCORE,
            "Job has no specific time requirements.",
        );
    }

    let parsed = parse_all(&job.schedule.windows)
        .and_then(|j| parse_all(&candidate.availability).map(|c| (j, c)));
    let (job_spans, candidate_spans) = match parsed {
        Ok(spans) => spans,
        Err(e) => {
            debug!(error = %e, "Unparseable schedule window");
            return ScoreBreakdown::new(TIME_PARSE_ERROR_SCORE, "parsing error");
        }
    };

    let required: f64 = job_spans.iter().map(Span::seconds).sum();
    let overlap: f64 = job_spans
        .iter()
        .flat_map(|j| candidate_spans.iter().map(move |c| j.overlap_seconds(c)))
        .sum();

    let ratio = if required > 0.0 {
        clamp_unit(overlap / required)
    } else {
        0.0
    };

    let tz_penalty = timezone_penalty(job.timezone_offset, candidate.timezone_offset);
    let mut raw = ratio * (1.0 - tz_penalty);
    if job.schedule.is_flexible() {
        raw += TIME_FLEXIBLE_BONUS;
    }

    ScoreBreakdown::new(
        raw,
        format!(
            "Overlap ratio: {:.2}, TZ penalty: {:.2}",
            ratio, tz_penalty
        ),
    )
}
