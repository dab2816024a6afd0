//! Access logging middleware.
//!
//! Emits one line per handled request through the tracing pipeline; the fmt
//! layer prefixes it with an ISO-8601 timestamp on standard output.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Records the classic access-log line for a request.
///
/// The client address comes from [`ConnectInfo`] when the router is driven
/// by a real listener; in-process callers (tests) have no peer address and
/// log `-` instead.
pub async fn record(request: Request, next: Next) -> Response {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let version = request.version();

    let response = next.run(request).await;

    tracing::info!(
        target: "backend_server::access",
        "{} \"{} {} {:?}\" {}",
        client.as_deref().unwrap_or("-"),
        method,
        path,
        version,
        response.status().as_u16()
    );

    response
}
