//! Timestamped extraction results.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::extract::Extracted;

/// One captured poll result.
///
/// Immutable once created; the log only ever appends entries or clears
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    /// Wall-clock time the completed response was recorded.
    pub timestamp: DateTime<Local>,
    /// The extracted value, or the absence sentinel.
    pub value: Extracted,
}

impl ResultEntry {
    /// Stamp an extraction result with the current wall-clock time.
    pub(crate) fn capture(value: Extracted) -> Self {
        Self {
            timestamp: Local::now(),
            value,
        }
    }

    /// Time-of-day display form (`HH:MM:SS`).
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Rendered value: pretty JSON, bare scalar, or `"not found"`.
    pub fn display_value(&self) -> String {
        self.value.render()
    }
}
