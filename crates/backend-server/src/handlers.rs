//! Request handlers.
//!
//! Each handler builds exactly one response. Requests are independent: the
//! only shared state is the immutable [`AppState`].

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use backend_core::{
    now_iso8601, EchoPostResponse, EchoResponse, Error, HealthResponse, InfoResponse,
    NotFoundResponse, AVAILABLE_ENDPOINTS, ENDPOINT_DESCRIPTIONS, SERVICE_DESCRIPTION,
    SERVICE_DISPLAY_NAME, SERVICE_NAME,
};

use crate::response::{error_response, PrettyJson};
use crate::server::AppState;

/// `GET /health` - liveness probe.
pub async fn health(State(state): State<Arc<AppState>>) -> PrettyJson<HealthResponse> {
    PrettyJson(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: now_iso8601(),
        hostname: state.hostname.clone(),
        port: state.config.port,
    })
}

/// `GET /info` - service metadata and the endpoint catalogue.
pub async fn info(State(state): State<Arc<AppState>>) -> PrettyJson<InfoResponse> {
    PrettyJson(InfoResponse {
        service: SERVICE_DISPLAY_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        hostname: state.hostname.clone(),
        port: state.config.port,
        endpoints: ENDPOINT_DESCRIPTIONS.iter().map(|s| (*s).to_string()).collect(),
        timestamp: now_iso8601(),
    })
}

/// `GET /echo/{message}` - echoes the path suffix.
///
/// The message is the raw suffix after `/echo/` exactly as it appeared on
/// the wire: no percent-decoding, no validation, `/` allowed. The suffix is
/// sliced from the request URI rather than taken from the path captures,
/// which would decode it.
pub async fn echo_message(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> PrettyJson<EchoResponse> {
    let message = uri.path().strip_prefix("/echo/").unwrap_or_default();

    PrettyJson(EchoResponse {
        echo: message.to_string(),
        length: message.len(),
        timestamp: now_iso8601(),
        from_hostname: state.hostname.clone(),
    })
}

/// `POST /echo` - echoes a JSON body plus the request headers.
///
/// An empty body counts as the empty object. A body that is not valid JSON
/// is a 400; any other failure (non-UTF-8 bytes, a body that cannot be
/// read) is a 500 with the message embedded.
pub async fn echo_json(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let parsed = body
        .map_err(|rejection| Error::internal(rejection.to_string()))
        .and_then(|bytes| parse_body(&bytes));

    match parsed {
        Ok(echo) => PrettyJson(EchoPostResponse {
            echo,
            received_at: now_iso8601(),
            from_hostname: state.hostname.clone(),
            headers: header_mapping(&headers),
        })
        .into_response(),
        Err(err) if err.is_client_error() => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(err) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Server error: {err}"),
        ),
    }
}

/// Shared fallback for unmatched paths and method mismatches.
///
/// `OPTIONS` gets an empty 200 on any path (the CORS headers are applied by
/// the router layers); everything else gets the JSON not-found body.
pub async fn fallback(method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let body = PrettyJson(NotFoundResponse {
        error: "Endpoint not found".to_string(),
        path: uri.path().to_string(),
        available_endpoints: AVAILABLE_ENDPOINTS.iter().map(|s| (*s).to_string()).collect(),
        timestamp: now_iso8601(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Decodes the request body. Empty bodies count as the empty JSON object.
fn parse_body(body: &[u8]) -> backend_core::Result<Value> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let text = std::str::from_utf8(body)?;
    serde_json::from_str(text).map_err(Error::from)
}

/// Collects request headers into a JSON mapping.
///
/// Duplicate names collapse last-wins; non-UTF-8 values are replaced
/// lossily.
fn header_mapping(headers: &HeaderMap) -> Map<String, Value> {
    let mut map = Map::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        map.insert(name.as_str().to_string(), Value::String(value));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_parses_to_empty_object() {
        let value = parse_body(b"").unwrap();
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[test]
    fn invalid_json_is_a_client_error() {
        let err = parse_body(b"not-json").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn non_utf8_body_is_a_server_error() {
        let err = parse_body(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(!err.is_client_error());
    }

    #[test]
    fn header_mapping_keeps_last_duplicate() {
        let mut headers = HeaderMap::new();
        headers.append("x-test", "first".parse().unwrap());
        headers.append("x-test", "second".parse().unwrap());

        let map = header_mapping(&headers);
        assert_eq!(map["x-test"], Value::String("second".to_string()));
    }
}
