//! # Backend App
//!
//! Demo backend used as a test fixture for end-to-end encryption and proxy
//! validation. Serves four JSON endpoints; all runtime configuration comes
//! from the environment - there are no CLI flags.

use color_eyre::eyre::Result;

use backend_server::{Server, ServerConfig};
use backend_telemetry::TelemetryConfig;

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cfg = config::Config::load();

    let telemetry =
        TelemetryConfig::new(backend_core::SERVICE_NAME).with_log_level(&cfg.log_level);
    let telemetry = if cfg.json_logs {
        telemetry.with_json_logs()
    } else {
        telemetry
    };
    backend_telemetry::init_logging(&telemetry);

    tracing::info!(host = %cfg.host, port = cfg.port, "Starting backend-app");

    let server_config = ServerConfig::builder()
        .host(cfg.host.as_str())
        .port(cfg.port)
        .build();

    Server::new(server_config).run().await?;

    Ok(())
}
