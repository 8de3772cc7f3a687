//! Configuration types for the edgewatch polling harness.
//!
//! This crate provides the operator-facing settings types, the endpoint
//! catalog, and the validation step that turns raw operator input into an
//! immutable per-session [`PollConfig`].

pub mod constants;
mod error;
mod types;

pub use error::ValidationError;
pub use types::{
    ApiVersion, DATASTREAM_CATALOG, Datastream, EndpointParams, PollConfig, PollSettings, Region,
};
