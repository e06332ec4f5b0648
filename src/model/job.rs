use serde::{Deserialize, Serialize};

use crate::constants::{CERT_FLAG_PREFIX, DEFAULT_IMPORTANCE, DEFAULT_LOCATION_RADIUS_KM};

use super::{GeoPoint, TimeWindow};

/// How strictly the job's schedule windows must be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    /// Windows are a preference; overlap gets a flat bonus.
    Flexible,
    /// Windows are hard requirements. Also covers unrecognised type strings.
    #[default]
    #[serde(other)]
    Fixed,
}

/// Time windows the job needs covered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequirement {
    #[serde(default)]
    pub windows: Vec<TimeWindow>,
    #[serde(rename = "type", default)]
    pub kind: ScheduleKind,
}

impl ScheduleRequirement {
    #[inline]
    pub fn is_flexible(&self) -> bool {
        self.kind == ScheduleKind::Flexible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationPolicy {
    #[default]
    Remote,
    Onsite,
    Hybrid,
    /// Any policy string this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// Hourly budget range. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricePolicy {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PricePolicy {
    /// Returns `(min, max)` only when both bounds are set.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.min.zip(self.max)
    }
}

/// One domain-experience requirement of a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    pub domain: Option<String>,
    #[serde(default)]
    pub min_years: f64,
    #[serde(default = "default_importance")]
    pub importance: f64,
}

impl ExperienceRequirement {
    pub fn new(domain: impl Into<String>, min_years: f64) -> Self {
        Self {
            domain: Some(domain.into()),
            min_years,
            importance: DEFAULT_IMPORTANCE,
        }
    }

    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }
}

fn default_importance() -> f64 {
    DEFAULT_IMPORTANCE
}

fn default_radius() -> f64 {
    DEFAULT_LOCATION_RADIUS_KM
}

/// Snapshot of the job being matched against.
///
/// Treated as immutable for the duration of a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "schedule_requirements", default)]
    pub schedule: ScheduleRequirement,
    #[serde(default)]
    pub location_policy: LocationPolicy,
    #[serde(default)]
    pub location_point: Option<GeoPoint>,
    #[serde(default = "default_radius")]
    pub location_radius_km: f64,
    #[serde(default)]
    pub price_policy: PricePolicy,
    #[serde(default)]
    pub experience_requirements: Vec<ExperienceRequirement>,
    #[serde(default)]
    pub mandatory_flags: Vec<String>,
    /// UTC offset in hours.
    #[serde(default)]
    pub timezone_offset: f64,
}

impl Default for JobPosting {
    fn default() -> Self {
        Self {
            schedule: ScheduleRequirement::default(),
            location_policy: LocationPolicy::default(),
            location_point: None,
            location_radius_km: DEFAULT_LOCATION_RADIUS_KM,
            price_policy: PricePolicy::default(),
            experience_requirements: Vec::new(),
            mandatory_flags: Vec::new(),
            timezone_offset: 0.0,
        }
    }
}

impl JobPosting {
    /// Certification codes from `cert:<code>` mandatory flags.
    pub fn mandatory_certs(&self) -> impl Iterator<Item = &str> {
        self.mandatory_flags
            .iter()
            .filter_map(|flag| flag.strip_prefix(CERT_FLAG_PREFIX))
    }
}
