//! HTTP client for the Edge Network interact API.
//!
//! This crate provides [`EdgeClient`], a thin wrapper over `reqwest` that
//! composes interact request URLs from an endpoint selection, sends the
//! operator payload, and returns the response body as JSON. It knows nothing
//! about polling cadence or extraction; that lives in the poller crate.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod tracing;

pub use client::EdgeClient;
pub use client::builder::EdgeClientBuilder;
pub use error::{ClientError, Result};
