//! Process Configuration
//!
//! The listen address comes from the environment (`HOST`, `PORT`); the
//! document catalog is static and lives here as code.

use crate::ingestion::types::DocumentSource;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("invalid HOST value '{0}'")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// Builds the config from raw `HOST` / `PORT` values.
    ///
    /// Empty values fall back to the defaults. `PORT` may carry a leading
    /// colon (`:9000`).
    pub fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = match host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.to_string()))?,
        };

        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .trim_start_matches(':')
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

/// The texts served by the reading room, in load order.
pub fn default_catalog() -> Vec<DocumentSource> {
    vec![
        DocumentSource::new("Meditations", "texts/meditations.txt"),
        DocumentSource::new("Walden", "texts/walden.txt"),
        DocumentSource::new("Tao Te Ching", "texts/tao_te_ching.txt"),
    ]
}
