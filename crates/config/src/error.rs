//! Validation errors for operator-supplied poll settings.

use thiserror::Error;

use crate::constants::MIN_INTERVAL_SECS;

/// Reasons a [`crate::PollSettings`] cannot start a polling session.
///
/// Each variant is surfaced to the operator verbatim; validation fails fast
/// and leaves the session untouched.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Payload text is not syntactically valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// Extraction path is empty or whitespace.
    #[error("extraction path must not be empty")]
    MissingPath,

    /// Poll interval is below the minimum.
    #[error("poll interval must be at least {MIN_INTERVAL_SECS}s, got {0}s")]
    IntervalTooShort(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_too_short_display() {
        let err = ValidationError::IntervalTooShort(0);
        assert_eq!(err.to_string(), "poll interval must be at least 1s, got 0s");
    }

    #[test]
    fn test_invalid_payload_carries_source() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ValidationError::InvalidPayload(source);
        assert!(err.to_string().starts_with("payload is not valid JSON:"));
    }
}
