//! Cache-aside storage for ranked results.
//!
//! [`CacheStore`] is the backend contract (string values, advisory TTL).
//! [`ResultCache`] derives keys (`matches:<job_id>`) and owns the JSON boundary.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod results;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{CacheError, CacheResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::{RecordedSet, RecordingCacheStore};
pub use results::{ResultCache, results_key};
pub use store::{CacheStore, MemoryCacheStore};
