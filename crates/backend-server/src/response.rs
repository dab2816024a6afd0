//! JSON response rendering.
//!
//! The wire contract pins pretty-printed bodies with 2-space indentation,
//! which [`axum::Json`] (compact) cannot produce, so everything goes
//! through [`PrettyJson`].

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use backend_core::{now_iso8601, ErrorResponse};

/// JSON responder that pretty-prints with 2-space indentation.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            // Cannot render the failure as JSON without recursing.
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error: {err}"),
            )
                .into_response(),
        }
    }
}

/// Builds a JSON error response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = PrettyJson(ErrorResponse {
        error: message.into(),
        timestamp: now_iso8601(),
    });
    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pretty_json_uses_two_space_indentation() {
        let response = PrettyJson(serde_json::json!({"a": 1})).into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn error_response_carries_message_and_timestamp() {
        let response = error_response(StatusCode::BAD_REQUEST, "Invalid JSON payload");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Invalid JSON payload");
        assert!(value["timestamp"].is_string());
    }
}
