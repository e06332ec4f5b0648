//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RERANK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_REPORT_CAPACITY, DEFAULT_TOP_N,
};

/// Matching service configuration.
///
/// Use [`Config::from_env`] to read `RERANK_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Results kept per job after ranking. Default: `50`.
    pub top_n: usize,

    /// TTL passed with every cache write. `None` means no expiry. Default: one hour.
    pub cache_ttl: Option<Duration>,

    /// Max entries in the in-memory result cache. Default: `10_000`.
    pub cache_capacity: u64,

    /// Buffered job reports per subscriber before lagging. Default: `256`.
    pub report_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            cache_ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            report_capacity: DEFAULT_REPORT_CAPACITY,
        }
    }
}

impl Config {
    pub const ENV_TOP_N: &'static str = "RERANK_TOP_N";
    pub const ENV_CACHE_TTL_SECS: &'static str = "RERANK_CACHE_TTL_SECS";
    pub const ENV_CACHE_CAPACITY: &'static str = "RERANK_CACHE_CAPACITY";
    pub const ENV_REPORT_CAPACITY: &'static str = "RERANK_REPORT_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let top_n = Self::parse_u64_from_env(Self::ENV_TOP_N, defaults.top_n as u64)? as usize;
        let ttl_secs = Self::parse_u64_from_env(Self::ENV_CACHE_TTL_SECS, DEFAULT_CACHE_TTL_SECS)?;
        let cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity)?;
        let report_capacity = Self::parse_u64_from_env(
            Self::ENV_REPORT_CAPACITY,
            defaults.report_capacity as u64,
        )? as usize;

        Ok(Self {
            top_n,
            cache_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
            cache_capacity,
            report_capacity,
        })
    }

    /// Checks range invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::require_positive(Self::ENV_TOP_N, self.top_n as u64)?;
        Self::require_positive(Self::ENV_CACHE_CAPACITY, self.cache_capacity)?;
        Self::require_positive(Self::ENV_REPORT_CAPACITY, self.report_capacity as u64)?;
        Ok(())
    }

    fn require_positive(name: &'static str, value: u64) -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidValue {
                name,
                value: value.to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    fn parse_u64_from_env(name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(name) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Ok(default);
                }
                trimmed.parse().map_err(|e| ConfigError::ParseError {
                    name,
                    value: value.clone(),
                    source: e,
                })
            }
            Err(_) => Ok(default),
        }
    }
}
