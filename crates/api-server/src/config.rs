//! Server configuration loaded from environment variables

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "TASKLIST_HOST";
pub const PORT_VAR: &str = "TASKLIST_PORT";
pub const LOG_VAR: &str = "TASKLIST_LOG";

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_LOG_FILTER: &str = "tasklist_server=debug,tasklist_core=debug,tower_http=debug";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    Parse { key: String, details: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Default tracing filter, used when `RUST_LOG` is unset
    pub log_filter: String,
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Parse {
        key: key.to_string(),
        details: e.to_string(),
    })
}

impl ServerConfig {
    /// Reads from environment variables with defaults:
    /// - TASKLIST_HOST: 0.0.0.0 (all interfaces)
    /// - TASKLIST_PORT: 8081
    /// - TASKLIST_LOG: debug for this workspace and tower_http
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = env::var(HOST_VAR) {
            config.host = parse_var(HOST_VAR, &host)?;
        }
        if let Ok(port) = env::var(PORT_VAR) {
            config.port = parse_var(PORT_VAR, &port)?;
        }
        if let Ok(filter) = env::var(LOG_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
