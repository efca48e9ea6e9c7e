use std::net::SocketAddr;

use crate::{config_error::ConfigError, server::error::AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:9090";

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
}

impl Config {
    /// Reads the server configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - `DATABASE_URL` set and `SHAREIT_SERVER_ADDR` (if set) parsed
    /// - `Err(AppError::ConfigErr)` - Missing database URL or unparsable address
    pub fn from_env() -> Result<Self, AppError> {
        let server_addr = std::env::var("SHAREIT_SERVER_ADDR")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_addr: server_addr
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                    name: "SHAREIT_SERVER_ADDR".to_string(),
                    reason: e.to_string(),
                })?,
        })
    }
}
