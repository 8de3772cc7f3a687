//! Common test utilities for poller integration tests.
//!
//! Provides a mock-server-backed session factory, a settings fixture, and a
//! bounded wait helper for timing-sensitive assertions.

use std::time::Duration;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use edgewatch_client::EdgeClient;
use edgewatch_config::PollSettings;
use edgewatch_poller::PollSession;

/// Interact path matching the default endpoint selection (`ind1`/`v1`).
#[allow(dead_code)]
pub const INTERACT_PATH: &str = "/ee/ind1/v1/interact";

/// Build a session whose client targets a mock server URI.
#[allow(dead_code)]
pub fn session_for(uri: &str) -> PollSession {
    let client = EdgeClient::builder()
        .base_url(uri.to_string())
        .build()
        .expect("mock server URI should be a valid base URL");
    PollSession::new(client)
}

/// Settings with a one-second interval and the default endpoint selection.
#[allow(dead_code)]
pub fn settings(payload_text: &str, path: &str) -> PollSettings {
    PollSettings {
        payload_text: payload_text.to_string(),
        path: path.to_string(),
        interval_secs: 1,
        ..Default::default()
    }
}

/// Poll the session log until it holds at least `count` entries or the
/// deadline passes. Returns whether the count was reached.
#[allow(dead_code)]
pub async fn wait_for_entries(session: &PollSession, count: usize, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if session.log_len() >= count {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    session.log_len() >= count
}
