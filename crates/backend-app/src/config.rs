//! Runtime configuration for the backend binary.
//!
//! Everything comes from the environment (no CLI flags, no config file):
//! - `PORT` - listening port (default 8080)
//! - `HOST` - bind address (default 0.0.0.0)
//! - `LOG_LEVEL` - tracing filter fallback (default `info`)
//! - `JSON_LOGS` - switch the fmt layer to JSON output

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Loads configuration from defaults overlaid with the environment.
    ///
    /// Reports configuration errors on stderr but falls back to defaults,
    /// so a malformed environment never keeps the fixture from starting.
    pub fn load() -> Self {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["HOST", "PORT", "LOG_LEVEL", "JSON_LOGS"]));

        match figment.extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("\x1b[33mWarning:\x1b[0m Configuration error, using defaults");
                eprintln!("  Error: {e}");
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_wire_contract() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "9090");
            jail.set_env("HOST", "127.0.0.1");
            jail.set_env("JSON_LOGS", "true");

            let config = Config::load();
            assert_eq!(config.port, 9090);
            assert_eq!(config.host, "127.0.0.1");
            assert!(config.json_logs);
            Ok(())
        });
    }

    #[test]
    fn malformed_port_falls_back_to_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "not-a-port");

            let config = Config::load();
            assert_eq!(config.port, 8080);
            Ok(())
        });
    }
}
