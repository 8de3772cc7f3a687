//! Operator-supplied poll settings and their validated form.
//!
//! Responsibilities:
//! - Hold the raw, free-form inputs the presentation layer collects.
//! - Validate them into an immutable [`PollConfig`] at session start.
//!
//! Does NOT handle:
//! - Session lifecycle or timers (see the poller crate).
//!
//! Invariants:
//! - Validation checks run in a fixed order (payload, path, interval) and the
//!   first failure wins.
//! - A `PollConfig` is only ever produced by [`PollSettings::validate`], so its
//!   fields always satisfy the checks.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::error::ValidationError;
use crate::types::endpoint::EndpointParams;

/// Raw operator input for a polling session.
///
/// All fields are free-form as typed/selected; nothing is checked until
/// [`validate`](Self::validate) is called at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollSettings {
    /// JSON payload text, sent verbatim as the request body once parsed.
    pub payload_text: String,
    /// Path expression to extract from each response,
    /// e.g. `propositions[0].items[0].id`.
    pub path: String,
    /// Seconds between ticks.
    pub interval_secs: u64,
    /// Target endpoint selection.
    pub endpoint: EndpointParams,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            payload_text: String::new(),
            path: String::new(),
            interval_secs: DEFAULT_INTERVAL_SECS,
            endpoint: EndpointParams::default(),
        }
    }
}

impl PollSettings {
    /// Validate into an immutable per-session [`PollConfig`].
    ///
    /// Checks, in order:
    /// 1. `payload_text` parses as JSON ([`ValidationError::InvalidPayload`])
    /// 2. trimmed `path` is non-empty ([`ValidationError::MissingPath`])
    /// 3. `interval_secs` is at least the minimum
    ///    ([`ValidationError::IntervalTooShort`])
    pub fn validate(&self) -> Result<PollConfig, ValidationError> {
        let payload: Value =
            serde_json::from_str(&self.payload_text).map_err(ValidationError::InvalidPayload)?;

        let path = self.path.trim();
        if path.is_empty() {
            return Err(ValidationError::MissingPath);
        }

        if self.interval_secs < MIN_INTERVAL_SECS {
            return Err(ValidationError::IntervalTooShort(self.interval_secs));
        }

        Ok(PollConfig {
            payload,
            path: path.to_string(),
            interval: Duration::from_secs(self.interval_secs),
            endpoint: self.endpoint.clone(),
        })
    }
}

/// Immutable configuration captured at session start.
#[derive(Debug, Clone, PartialEq)]
pub struct PollConfig {
    /// Parsed request payload.
    pub payload: Value,
    /// Trimmed, non-empty path expression.
    pub path: String,
    /// Tick period, at least one second.
    pub interval: Duration,
    /// Target endpoint selection.
    pub endpoint: EndpointParams,
}
