//! Main Edge Network client.
//!
//! This module provides the primary [`EdgeClient`] for issuing interact
//! requests against the Edge Network collection API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Polling cadence and result accumulation (the poller crate)

pub mod builder;

use serde_json::Value;
use uuid::Uuid;

use edgewatch_config::EndpointParams;

use crate::endpoints;
use crate::error::Result;

/// Edge Network interact client.
///
/// # Creating a Client
///
/// Use [`EdgeClient::builder()`]:
///
/// ```rust,ignore
/// use edgewatch_client::EdgeClient;
///
/// let client = EdgeClient::builder()
///     .base_url("https://edge.example.net".to_string())
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct EdgeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl EdgeClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EdgeClientBuilder {
        builder::EdgeClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one interact request and return the response body as JSON.
    ///
    /// `request_id` must be fresh per call; the endpoint treats it as a
    /// correlation id and repeated ids make server-side traces ambiguous.
    pub async fn interact(
        &self,
        endpoint: &EndpointParams,
        request_id: Uuid,
        payload: &Value,
    ) -> Result<Value> {
        endpoints::interact(&self.http, &self.base_url, endpoint, request_id, payload).await
    }
}
