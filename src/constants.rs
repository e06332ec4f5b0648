//! Cross-cutting, shared constants.
//!
//! Fallback scores and factor coefficients used by [`crate::scoring`], plus
//! defaults shared by configuration and the data model.

/// Default number of ranked results kept per job.
pub const DEFAULT_TOP_N: usize = 50;
/// Default TTL handed to the cache store (advisory).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
/// Default entry capacity of the in-memory cache store.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
/// Default buffer of the per-job report broadcast channel.
pub const DEFAULT_REPORT_CAPACITY: usize = 256;

/// Prefix of cached result keys (`matches:<job_id>`).
pub const RESULTS_KEY_PREFIX: &str = "matches:";

/// Default onsite/hybrid radius.
pub const DEFAULT_LOCATION_RADIUS_KM: f64 = 50.0;
/// Default importance of an experience requirement.
pub const DEFAULT_IMPORTANCE: f64 = 50.0;
/// Mandatory flags carrying this prefix name a required certification.
pub const CERT_FLAG_PREFIX: &str = "cert:";

/// Mean Earth radius used for great-circle distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

// Time factor.
pub const TIME_NO_PREFERENCE_SCORE: f64 = 0.8;
pub const TIME_PARSE_ERROR_SCORE: f64 = 0.2;
pub const TIME_FLEXIBLE_BONUS: f64 = 0.15;
/// Timezone differences up to this many hours are free.
pub const TZ_FREE_HOURS: f64 = 3.0;
/// Hours past [`TZ_FREE_HOURS`] at which the penalty reaches 1.0.
pub const TZ_PENALTY_SPAN_HOURS: f64 = 21.0;

// Place factor.
pub const PLACE_MISSING_LOCATION_SCORE: f64 = 0.1;
/// Onsite score decays linearly to 0 over this many km past the radius.
pub const ONSITE_DECAY_KM: f64 = 200.0;
pub const HYBRID_REMOTE_WEIGHT: f64 = 0.6;
pub const HYBRID_ONSITE_WEIGHT: f64 = 0.4;

// Cost factor.
pub const COST_UNKNOWN_RATE_SCORE: f64 = 0.6;
pub const COST_NO_BUDGET_SCORE: f64 = 0.8;
pub const COST_BELOW_FLOOR_SCORE: f64 = 0.95;

// Experience factor.
pub const EXPERIENCE_NO_REQUIREMENTS_SCORE: f64 = 0.8;
pub const SKILL_OVERLAP_WEIGHT: f64 = 0.55;
pub const DOMAIN_YEARS_WEIGHT: f64 = 0.25;
pub const SENIORITY_WEIGHT: f64 = 0.15;
pub const CERT_BONUS: f64 = 0.15;

/// Clamps into `[0, 1]`; NaN maps to `0.0`.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.1), 1.0);
        assert_eq!(clamp_unit(-0.3), 0.0);
        assert_eq!(clamp_unit(0.42), 0.42);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_factor_weights_exceed_one_only_with_bonus() {
        let base = SKILL_OVERLAP_WEIGHT + DOMAIN_YEARS_WEIGHT + SENIORITY_WEIGHT;
        assert!((base - 0.95).abs() < 1e-12);
        assert!(base + CERT_BONUS > 1.0);
    }
}
