use std::net::SocketAddr;

use crate::{config_error::ConfigError, gateway::error::GatewayError};

const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    /// Base URL of the ShareIt server, e.g. `http://localhost:9090`.
    pub server_url: String,
    pub gateway_addr: SocketAddr,
}

impl Config {
    /// Reads the gateway configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - `SHAREIT_SERVER_URL` set and `SHAREIT_GATEWAY_ADDR` (if set) parsed
    /// - `Err(GatewayError::ConfigErr)` - Missing server URL or unparsable address
    pub fn from_env() -> Result<Self, GatewayError> {
        let server_url = std::env::var("SHAREIT_SERVER_URL")
            .map_err(|_| ConfigError::MissingEnvVar("SHAREIT_SERVER_URL".to_string()))?;

        let gateway_addr = std::env::var("SHAREIT_GATEWAY_ADDR")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_ADDR.to_string());

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            gateway_addr: gateway_addr
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                    name: "SHAREIT_GATEWAY_ADDR".to_string(),
                    reason: e.to_string(),
                })?,
        })
    }
}
