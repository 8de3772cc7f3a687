//! Polling-and-extraction engine for the edgewatch harness.
//!
//! A [`PollSession`] repeatedly POSTs an operator-supplied JSON payload to an
//! Edge Network interact endpoint, extracts the value at a path expression
//! from each response, and appends it to a timestamped result log. The
//! presentation layer supplies a validated-on-start
//! [`PollSettings`](edgewatch_config::PollSettings) and reads the log back
//! via snapshots; it never mutates session state directly.
//!
//! ```rust,ignore
//! use edgewatch_client::EdgeClient;
//! use edgewatch_config::PollSettings;
//! use edgewatch_poller::PollSession;
//!
//! let mut session = PollSession::new(EdgeClient::builder().build()?);
//! session.start(&PollSettings {
//!     payload_text: r#"{"event": {}}"#.into(),
//!     path: "handle[0].payload".into(),
//!     ..Default::default()
//! })?;
//! // ... later
//! for entry in session.log_snapshot() {
//!     println!("{} {}", entry.display_time(), entry.display_value());
//! }
//! session.stop();
//! ```

mod entry;
pub mod extract;
mod session;

pub use entry::ResultEntry;
pub use extract::{Extracted, extract};
pub use session::{PollSession, SessionState};
