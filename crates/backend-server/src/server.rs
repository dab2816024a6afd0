//! Server configuration, routing, and lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use backend_core::{local_hostname, Error, Result};

use crate::{access_log, handlers};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
}

impl ServerConfigBuilder {
    /// Sets the bind address.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the listening port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Builds the server config.
    #[must_use]
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
        }
    }
}

/// Shared application state.
///
/// Immutable after startup: requests read it, nothing writes it.
#[derive(Debug)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
    /// Hostname, resolved once at startup.
    pub hostname: String,
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState {
            config: config.clone(),
            hostname: local_hostname(),
        });
        Self { config, state }
    }

    /// Builds the route table.
    ///
    /// Method mismatches on known paths fall through to the shared fallback
    /// so they produce the JSON not-found body rather than a bare 405, and
    /// so `OPTIONS` is answered on every path. The two echo routes share a
    /// handler: the static `/echo/` covers the empty message, the wildcard
    /// covers everything else (including suffixes containing `/`).
    #[must_use]
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route(
                "/health",
                get(handlers::health).fallback(handlers::fallback),
            )
            .route("/info", get(handlers::info).fallback(handlers::fallback))
            .route(
                "/echo",
                post(handlers::echo_json).fallback(handlers::fallback),
            )
            .route(
                "/echo/",
                get(handlers::echo_message).fallback(handlers::fallback),
            )
            .route(
                "/echo/{*message}",
                get(handlers::echo_message).fallback(handlers::fallback),
            )
            .fallback(handlers::fallback)
            .with_state(Arc::clone(&self.state));

        // The wire contract pins all three CORS headers on every response,
        // including errors and OPTIONS; CorsLayer only sends the method and
        // header lists on preflights, so the headers are set directly.
        router
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(access_log::record))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, OPTIONS"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ))
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the accept loop
    /// fails.
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(Error::Io)?;

        tracing::info!(
            addr = %addr,
            hostname = %self.state.hostname,
            "Starting backend server"
        );
        eprintln!("\n\x1b[32m✓\x1b[0m Server listening on http://{addr}");
        eprintln!("  Hostname: {}", self.state.hostname);
        eprintln!("  Available endpoints:");
        eprintln!("    GET  /health          - Health check");
        eprintln!("    GET  /info            - Service information");
        eprintln!("    GET  /echo/{{message}} - Echo a message");
        eprintln!("    POST /echo            - Echo JSON payload");
        eprintln!("  Press Ctrl+C to stop\n");

        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received Ctrl+C, shutting down gracefully...");
                },
                () = terminate => {
                    eprintln!("\n\x1b[33m⚡\x1b[0m Received SIGTERM, shutting down gracefully...");
                },
            }
        };

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(Error::Io)?;

        tracing::info!("Server shutdown complete");
        eprintln!("\x1b[32m✓\x1b[0m Server stopped");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::builder().host("127.0.0.1").port(3000).build();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::builder().build();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_state_carries_configured_port() {
        let server = Server::new(ServerConfig::builder().port(9999).build());

        assert_eq!(server.state.config.port, 9999);
        assert!(!server.state.hostname.is_empty());
    }
}
