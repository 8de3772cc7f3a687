//! Settings and endpoint types.

mod endpoint;
mod settings;

pub use endpoint::{ApiVersion, DATASTREAM_CATALOG, Datastream, EndpointParams, Region};
pub use settings::{PollConfig, PollSettings};
