//! # Backend Core
//!
//! Core types shared across the demo backend:
//! - Common error types
//! - Response payload structures for every endpoint
//! - Service metadata and clock/hostname helpers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod response;
pub mod service;

pub use error::{Error, Result};
pub use response::{
    EchoPostResponse, EchoResponse, ErrorResponse, HealthResponse, InfoResponse, NotFoundResponse,
};
pub use service::{
    local_hostname, now_iso8601, AVAILABLE_ENDPOINTS, ENDPOINT_DESCRIPTIONS, SERVICE_DESCRIPTION,
    SERVICE_DISPLAY_NAME, SERVICE_NAME,
};
