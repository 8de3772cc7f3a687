//! Client builder for constructing [`EdgeClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`EdgeClient`] methods in `mod.rs`)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes.
//! - An absent base URL falls back to the default collection domain.

use std::time::Duration;

use edgewatch_config::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::client::EdgeClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`EdgeClient`].
///
/// All options have defaults; `build()` without any setters yields a client
/// against the standard collection domain with a 30s request timeout.
pub struct EdgeClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for EdgeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl EdgeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the collection endpoint.
    ///
    /// This should include the protocol, e.g. `https://edge.example.net` or a
    /// first-party CNAME. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`EdgeClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<EdgeClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Self::normalize_base_url(base_url);

        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(EdgeClient { http, base_url })
    }
}
