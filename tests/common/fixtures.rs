//! Test fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::time::Duration;

use rerank::jobs::JobReport;
use rerank::model::{
    CandidateProfile, DomainExperience, ExperienceRequirement, GeoPoint, InitialCandidate,
    JobPosting, LocationPolicy, PricePolicy, ScheduleKind, ScheduleRequirement, Seniority,
    TimeWindow, WeightVector,
};
use rerank::source::SourceFixture;
use tempfile::NamedTempFile;
use tokio::sync::broadcast;

pub const JOB_ID: &str = "job-berlin";

pub const BERLIN: GeoPoint = GeoPoint::new(52.5200, 13.4050);

pub const POTSDAM: GeoPoint = GeoPoint::new(52.3906, 13.0645);

pub const MUNICH: GeoPoint = GeoPoint::new(48.1351, 11.5820);

pub const REPORT_TIMEOUT: Duration = Duration::from_secs(5);

/// Hybrid job in Berlin, office hours, fintech, ISO27001 required.
pub fn berlin_job() -> JobPosting {
    JobPosting {
        schedule: ScheduleRequirement {
            windows: vec![TimeWindow::new("2024-03-04T09:00:00", "2024-03-04T17:00:00")],
            kind: ScheduleKind::Fixed,
        },
        location_policy: LocationPolicy::Hybrid,
        location_point: Some(BERLIN),
        location_radius_km: 50.0,
        price_policy: PricePolicy {
            min: Some(60.0),
            max: Some(100.0),
        },
        experience_requirements: vec![ExperienceRequirement::new("fintech", 3.0)],
        mandatory_flags: vec!["cert:ISO27001".to_string(), "onboarding".to_string()],
        timezone_offset: 1.0,
    }
}

#[derive(Default)]
pub struct ProfileBuilder {
    profile: CandidateProfile,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(mut self, start: &str, end: &str) -> Self {
        self.profile.availability.push(TimeWindow::new(start, end));
        self
    }

    pub fn remote_ok(mut self) -> Self {
        self.profile.remote_ok = true;
        self
    }

    pub fn at(mut self, point: GeoPoint) -> Self {
        self.profile.location_points.push(point);
        self
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.profile.hourly_rate = Some(rate);
        self
    }

    pub fn domain(mut self, domain: &str, years: f64, seniority: Seniority) -> Self {
        self.profile
            .domains
            .push(DomainExperience::new(domain, years, seniority));
        self
    }

    pub fn cert(mut self, code: &str) -> Self {
        self.profile.certifications.insert(code.to_string());
        self
    }

    pub fn timezone(mut self, offset: f64) -> Self {
        self.profile.timezone_offset = offset;
        self
    }

    pub fn skill_overlap(mut self, overlap: f64) -> Self {
        self.profile.skill_overlap = overlap;
        self
    }

    pub fn build(self) -> CandidateProfile {
        self.profile
    }
}

/// Four profiled candidates plus one (`ghost`) with no profile.
///
/// Expected order under uniform weights: `strong`, `decent`, `remote`, `far`.
pub fn berlin_fixture() -> SourceFixture {
    let mut fixture = SourceFixture {
        weights: WeightVector::uniform(),
        ..Default::default()
    };
    fixture.jobs.insert(JOB_ID.to_string(), berlin_job());
    fixture.candidates.insert(
        JOB_ID.to_string(),
        vec![
            InitialCandidate::new("far"),
            InitialCandidate::new("ghost"),
            InitialCandidate::new("remote"),
            InitialCandidate::new("decent").with_experience_score(0.6),
            InitialCandidate::new("strong").with_experience_score(0.95),
        ],
    );

    let office_hours = ("2024-03-04T09:00:00", "2024-03-04T17:00:00");
    let profiles = [
        (
            "strong",
            ProfileBuilder::new()
                .available(office_hours.0, office_hours.1)
                .remote_ok()
                .at(BERLIN)
                .rate(90.0)
                .domain("fintech", 6.0, Seniority::Senior)
                .cert("ISO27001")
                .timezone(1.0)
                .build(),
        ),
        (
            "decent",
            ProfileBuilder::new()
                .available("2024-03-04T13:00:00", office_hours.1)
                .at(POTSDAM)
                .rate(110.0)
                .domain("fintech", 2.0, Seniority::Mid)
                .timezone(1.0)
                .build(),
        ),
        (
            "remote",
            ProfileBuilder::new()
                .available(office_hours.0, office_hours.1)
                .remote_ok()
                .rate(55.0)
                .timezone(-5.0)
                .skill_overlap(0.4)
                .build(),
        ),
        (
            "far",
            ProfileBuilder::new()
                .available("2024-03-05T09:00:00", "2024-03-05T17:00:00")
                .at(MUNICH)
                .rate(200.0)
                .domain("retail", 10.0, Seniority::Lead)
                .timezone(1.0)
                .skill_overlap(0.1)
                .build(),
        ),
    ];
    for (id, profile) in profiles {
        fixture.profiles.insert(id.to_string(), profile);
    }
    fixture
}

/// Writes `fixture` as JSON to a temp file that lives as long as the handle.
pub fn write_fixture(fixture: &SourceFixture) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp fixture");
    let json = serde_json::to_string_pretty(fixture).expect("encode fixture");
    file.write_all(json.as_bytes()).expect("write fixture");
    file
}

pub async fn next_report(rx: &mut broadcast::Receiver<JobReport>) -> JobReport {
    tokio::time::timeout(REPORT_TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for job report")
        .expect("report channel closed")
}
