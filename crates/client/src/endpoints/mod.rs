//! HTTP endpoint functions for the Edge Network collection API.
//!
//! Endpoint functions are free functions over a `reqwest::Client` so they can
//! be exercised directly in tests without constructing an [`crate::EdgeClient`].

mod interact;

pub use interact::interact;
