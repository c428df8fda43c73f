//! guarded-api server binary.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::listener ──▶ http::server ──▶ routing
//!                                       (request id,     (path → route)
//!                                        trace, timeout)      │
//!                                                             ▼
//!                                                  http::middleware::method_guard
//!                                                     │ wrong method → 405
//!                                                     ▼
//!                                                  api::handlers
//!                                                     │ static payload
//!                                                     ▼
//!     Client Response ◀──────────────────────── http::response::write_json
//!                                               (200 JSON or 500 text)
//! ```

use clap::Parser;
use std::path::PathBuf;

use guarded_api::config::{self, ConfigError, ServerConfig};
use guarded_api::lifecycle::{signals, Shutdown};
use guarded_api::observability::logging;
use guarded_api::{api, net, HttpServer};

#[derive(Parser)]
#[command(name = "guarded-api")]
#[command(about = "Static JSON API with per-route method guards", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address (e.g. 0.0.0.0:8080).
    #[arg(short, long)]
    bind: Option<String>,

    /// Override observability.log_level.
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Cli {
    /// Load the config file (if any), apply overrides, then validate.
    fn resolve_config(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::read_config(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        config::validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init(&config.observability)?;

    tracing::info!("guarded-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, api::routes()?);
    let server_shutdown = shutdown.subscribe();

    let stopper = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        stopper.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let cli = Cli::parse_from(["guarded-api"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::parse_from([
            "guarded-api",
            "--bind",
            "127.0.0.1:9999",
            "--log-level",
            "debug",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_config_file_then_override_then_validate() {
        let path = std::env::temp_dir().join(format!("{}-cli.toml", std::process::id()));
        std::fs::write(
            &path,
            "[listener]\nbind_address = \"unset\"\n\n[timeouts]\nrequest_secs = 7\n",
        )
        .unwrap();
        let path_arg = path.to_str().unwrap();

        let cli = Cli::parse_from(["guarded-api", "--config", path_arg]);
        assert!(matches!(
            cli.resolve_config().unwrap_err(),
            ConfigError::Validation(_)
        ));

        let cli = Cli::parse_from([
            "guarded-api",
            "--config",
            path_arg,
            "--bind",
            "127.0.0.1:0",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:0");
        assert_eq!(config.timeouts.request_secs, 7);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = Cli::parse_from(["guarded-api", "--config", "/nonexistent/guarded-api.toml"]);
        assert!(matches!(cli.resolve_config().unwrap_err(), ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::parse_from(["guarded-api", "--bind", "nowhere"]);
        let err = cli.resolve_config().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
