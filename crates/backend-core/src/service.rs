//! Service metadata and per-request helpers.

use chrono::{SecondsFormat, Utc};

/// Identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "backend-app";

/// Human-readable name reported by the info endpoint.
pub const SERVICE_DISPLAY_NAME: &str = "Simple Backend Demo";

/// One-line description reported by the info endpoint.
pub const SERVICE_DESCRIPTION: &str = "Simple backend for E2E encryption testing";

/// Endpoint descriptions reported by the info endpoint.
pub const ENDPOINT_DESCRIPTIONS: [&str; 4] = [
    "GET /health - Health check",
    "GET /info - Service information",
    "GET /echo/{message} - Echo a message",
    "POST /echo - Echo JSON payload",
];

/// Routes advertised by the not-found response.
pub const AVAILABLE_ENDPOINTS: [&str; 4] =
    ["/health", "/info", "/echo/{message}", "POST /echo"];

/// Current UTC time as an ISO-8601 string with microsecond precision.
#[must_use]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Hostname of the running process, `"unknown"` if it cannot be resolved.
#[must_use]
pub fn local_hostname() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
}
