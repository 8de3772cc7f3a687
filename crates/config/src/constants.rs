//! Centralized constants for the edgewatch workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum accepted poll interval in seconds.
pub const MIN_INTERVAL_SECS: u64 = 1;

/// Default poll interval in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Default Edge Network collection domain.
///
/// Deployments using a first-party collection CNAME override this via the
/// client builder.
pub const DEFAULT_BASE_URL: &str = "https://edge.adobedc.net";
