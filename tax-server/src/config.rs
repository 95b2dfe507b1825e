use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Key accepted when none is configured.
pub const DEFAULT_API_KEY: &str = "test";

/// REST API serving income-tax bracket tables and tax calculations.
///
/// Every flag can also be set through its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "tax-server", version)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TAX_SERVER_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Value expected in the `X-Api-Key` header on protected routes.
    #[arg(
        long,
        env = "TAX_SERVER_API_KEY",
        default_value = DEFAULT_API_KEY,
        hide_env_values = true
    )]
    pub api_key: String,

    /// Seconds before an in-flight request is answered with 408.
    #[arg(long, env = "TAX_SERVER_TIMEOUT", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Log filter used when `RUST_LOG` is unset.
    /// A bare level ("debug") or any `EnvFilter` directive.
    #[arg(long, env = "TAX_SERVER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Also append log records to this file.
    #[arg(long, env = "TAX_SERVER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}
