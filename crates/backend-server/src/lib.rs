//! # Backend Server
//!
//! HTTP server exposing the demo backend endpoints: health check, service
//! info, GET echo, and POST echo, all as pretty-printed JSON with
//! permissive CORS headers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access_log;
pub mod handlers;
pub mod response;
pub mod server;

pub use server::{Server, ServerConfig};
