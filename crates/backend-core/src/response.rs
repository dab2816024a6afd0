//! Response payloads for the demo backend endpoints.
//!
//! These are serialize-only: the server never reads its own responses back.
//! Every payload carries an ISO-8601 timestamp (named `received_at` on the
//! POST echo, matching the wire contract).

use serde::Serialize;
use serde_json::{Map, Value};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving.
    pub status: String,

    /// Service identifier.
    pub service: String,

    /// Time the response was built.
    pub timestamp: String,

    /// Hostname of the serving process.
    pub hostname: String,

    /// Configured listening port.
    pub port: u16,
}

/// Body of `GET /info`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    /// Human-readable service name.
    pub service: String,

    /// Crate version.
    pub version: String,

    /// One-line service description.
    pub description: String,

    /// Hostname of the serving process.
    pub hostname: String,

    /// Configured listening port.
    pub port: u16,

    /// Descriptions of the exposed endpoints.
    pub endpoints: Vec<String>,

    /// Time the response was built.
    pub timestamp: String,
}

/// Body of `GET /echo/{message}`.
#[derive(Debug, Clone, Serialize)]
pub struct EchoResponse {
    /// The raw path suffix, echoed back unmodified.
    pub echo: String,

    /// Byte length of the echoed message.
    pub length: usize,

    /// Time the response was built.
    pub timestamp: String,

    /// Hostname of the serving process.
    pub from_hostname: String,
}

/// Body of a successful `POST /echo`.
#[derive(Debug, Clone, Serialize)]
pub struct EchoPostResponse {
    /// The parsed request body, echoed back unmodified.
    pub echo: Value,

    /// Time the request was received.
    pub received_at: String,

    /// Hostname of the serving process.
    pub from_hostname: String,

    /// All request headers as a name-to-value mapping.
    pub headers: Map<String, Value>,
}

/// Body of a 400 or 500 error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,

    /// Time the response was built.
    pub timestamp: String,
}

/// Body of a 404 response for an unmatched method/path combination.
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundResponse {
    /// Error message.
    pub error: String,

    /// The path that failed to match.
    pub path: String,

    /// Routes the server does expose.
    pub available_endpoints: Vec<String>,

    /// Time the response was built.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes_expected_keys() {
        let body = HealthResponse {
            status: "healthy".to_string(),
            service: "backend-app".to_string(),
            timestamp: "2026-01-01T00:00:00.000000Z".to_string(),
            hostname: "test-host".to_string(),
            port: 8080,
        };

        let value = serde_json::to_value(&body).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for key in ["status", "service", "timestamp", "hostname", "port"] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(value["port"], 8080);
    }

    #[test]
    fn echo_post_response_keeps_arbitrary_json() {
        let body = EchoPostResponse {
            echo: serde_json::json!({"a": [1, 2, {"b": null}]}),
            received_at: "2026-01-01T00:00:00.000000Z".to_string(),
            from_hostname: "test-host".to_string(),
            headers: Map::new(),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["echo"]["a"][2]["b"], Value::Null);
        assert!(value["headers"].as_object().unwrap().is_empty());
    }
}
