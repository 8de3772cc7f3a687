//! Common test utilities for client integration tests.
//!
//! Re-exports the wiremock types every test file needs and provides helpers
//! for building clients pointed at a mock server.

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use edgewatch_client::EdgeClient;
use edgewatch_config::{ApiVersion, EndpointParams, Region};

/// Build a client against a mock server URI.
#[allow(dead_code)]
pub fn client_for(uri: &str) -> EdgeClient {
    EdgeClient::builder()
        .base_url(uri.to_string())
        .build()
        .expect("mock server URI should be a valid base URL")
}

/// Endpoint selection used across tests: `ind1` / `v1` with a fixed id.
#[allow(dead_code)]
pub fn test_endpoint() -> EndpointParams {
    EndpointParams {
        datastream_id: "11111111-2222-3333-4444-555555555555".to_string(),
        region: Region::Ind1,
        api_version: ApiVersion::V1,
    }
}
