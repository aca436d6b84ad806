//! Timestamp parse failure.

/// A publish timestamp in none of the accepted formats.
///
/// Recovered locally: the raw string is displayed instead of a relative time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparseable timestamp: {raw:?}")]
pub struct TimestampError {
    pub raw: String,
}

impl TimestampError {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}
