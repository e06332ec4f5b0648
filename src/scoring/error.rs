use thiserror::Error;

/// Why a window timestamp could not be turned into an instant.
///
/// Never leaves the scoring module: the time factor turns it into a fallback score.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("empty timestamp")]
    Empty,

    #[error("unrecognised timestamp '{value}'")]
    Unrecognised { value: String },
}
