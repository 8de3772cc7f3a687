//! Interact endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use edgewatch_config::EndpointParams;

use crate::error::{ClientError, Result};

/// Send one interact request.
///
/// Composes `POST {base}/ee/{region}/{version}/interact` with the datastream
/// id as `configId` and the caller's `request_id` as `requestId`, sends
/// `payload` verbatim as the JSON body, and parses the response body as JSON.
///
/// Any response shape is accepted; callers navigate it with a path
/// expression. Non-success statuses and non-JSON bodies are errors.
pub async fn interact(
    client: &Client,
    base_url: &str,
    endpoint: &EndpointParams,
    request_id: Uuid,
    payload: &Value,
) -> Result<Value> {
    let url = format!(
        "{}/ee/{}/{}/interact",
        base_url, endpoint.region, endpoint.api_version
    );
    let request_id = request_id.to_string();

    debug!(%url, config_id = %endpoint.datastream_id, %request_id, "sending interact request");

    let response = client
        .post(&url)
        .query(&[
            ("configId", endpoint.datastream_id.as_str()),
            ("requestId", request_id.as_str()),
        ])
        .json(payload)
        .send()
        .await?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        let url = response.url().to_string();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "could not read error response body".to_string());
        return Err(ClientError::Api {
            status,
            url,
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
