// ============================================================================
// Relay Client
// ============================================================================
//
// HTTP client for the external form relay (Web3Forms-compatible).
// Handles:
// - Re-encoding submitted form fields as a JSON object
// - Forwarding to the relay's fixed endpoint with a bounded timeout
// - Reporting the relay's verdict (status, success flag, full body)
//
// The gateway holds no relay credentials of its own: the access key arrives
// as an ordinary form field and is forwarded with the rest.
//
// ============================================================================

use axum::http::StatusCode;
use serde_json::{Map, Value};
use std::time::Duration;

/// What the relay answered, parsed just far enough to drive the cooldown.
#[derive(Debug)]
pub struct RelayReply {
    /// HTTP status returned by the relay, passed through to the caller.
    pub status: StatusCode,
    /// Whether the relay confirmed delivery (`success: true` in the body).
    pub accepted: bool,
    /// Full response body, forwarded to the caller verbatim.
    pub body: Value,
}

/// HTTP client for forwarding submissions to the external relay
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        // Configure connection pooling and keep-alive
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, endpoint }
    }

    /// POST the submitted fields to the relay as a JSON object.
    ///
    /// Only transport-level problems (connect failure, timeout, non-JSON
    /// response body) are errors here. An HTTP-level rejection is a normal
    /// [`RelayReply`]: the caller forwards the relay's status and body
    /// verbatim.
    pub async fn forward(&self, fields: &[(String, String)]) -> Result<RelayReply, reqwest::Error> {
        let payload = to_relay_payload(fields);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let body: Value = response.json().await?;
        let accepted = body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(RelayReply {
            status,
            accepted,
            body,
        })
    }
}

/// Flatten form fields into the JSON object the relay expects. A duplicated
/// field name keeps its last submitted value.
fn to_relay_payload(fields: &[(String, String)]) -> Map<String, Value> {
    let mut payload = Map::new();
    for (name, value) in fields {
        payload.insert(name.clone(), Value::String(value.clone()));
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_fields_reencode_as_flat_json_object() {
        let fields = vec![
            field("access_key", "test-access-key"),
            field("name", "Ada Lovelace"),
            field("email", "ada@example.com"),
            field("message", "Hello there"),
            field("botcheck", ""),
        ];

        assert_eq!(
            Value::Object(to_relay_payload(&fields)),
            json!({
                "access_key": "test-access-key",
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "Hello there",
                "botcheck": "",
            })
        );
    }

    #[test]
    fn test_duplicate_field_names_keep_the_last_value() {
        let fields = vec![field("name", "first"), field("name", "second")];
        let payload = to_relay_payload(&fields);

        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("name"), Some(&Value::String("second".into())));
    }

    #[test]
    fn test_empty_submission_becomes_empty_object() {
        assert!(to_relay_payload(&[]).is_empty());
    }
}
