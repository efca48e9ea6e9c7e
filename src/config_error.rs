//! Configuration errors shared by the server and gateway binaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables each binary expects.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },
}
