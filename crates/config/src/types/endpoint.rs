//! Endpoint selection types for the Edge Network interact API.
//!
//! Responsibilities:
//! - Define the enumerated region and API version identifiers that are
//!   interpolated into the request URL.
//! - Provide the labeled datastream catalog for presentation-layer pickers.
//!
//! Does NOT handle:
//! - URL composition (see the client crate's endpoints module).
//! - Validation of free-form datastream ids (they are opaque to the core).

use serde::{Deserialize, Serialize};

/// Edge Network regional routing prefix.
///
/// Rendered lowercase into the request URL (`/ee/{region}/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Ind1,
    Ore1,
    Va6,
    Irl1,
    Aus3,
    Jpn3,
    Sgp3,
}

impl Region {
    /// All recognized regions, for selection pickers.
    pub const ALL: [Region; 7] = [
        Region::Ind1,
        Region::Ore1,
        Region::Va6,
        Region::Irl1,
        Region::Aus3,
        Region::Jpn3,
        Region::Sgp3,
    ];

    /// URL path segment form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Ind1 => "ind1",
            Region::Ore1 => "ore1",
            Region::Va6 => "va6",
            Region::Irl1 => "irl1",
            Region::Aus3 => "aus3",
            Region::Jpn3 => "jpn3",
            Region::Sgp3 => "sgp3",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interact API version segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    /// All recognized versions, for selection pickers.
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    /// URL path segment form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labeled datastream entry for selection pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datastream {
    /// Human-readable environment label.
    pub label: &'static str,
    /// Datastream id passed as the `configId` query parameter.
    pub id: &'static str,
}

/// Known datastreams, one per environment.
///
/// Free-form ids remain legal in [`EndpointParams`]; this catalog is a
/// convenience for pickers, not a constraint.
pub const DATASTREAM_CATALOG: &[Datastream] = &[
    Datastream {
        label: "Development",
        id: "0fd7f30c-ae2b-4365-9db9-2ef9ed5e1dc6",
    },
    Datastream {
        label: "Staging",
        id: "140d9dfa-12d0-4e8e-95fa-99df70030bc8",
    },
    Datastream {
        label: "Production",
        id: "99998888-7777-6666-5555-444433332222",
    },
];

/// Identifiers interpolated into the interact request URL.
///
/// The core interprets no internal structure here; the datastream id in
/// particular is opaque and forwarded verbatim as `configId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointParams {
    pub datastream_id: String,
    pub region: Region,
    pub api_version: ApiVersion,
}

impl Default for EndpointParams {
    fn default() -> Self {
        Self {
            datastream_id: DATASTREAM_CATALOG[0].id.to_string(),
            region: Region::default(),
            api_version: ApiVersion::default(),
        }
    }
}
