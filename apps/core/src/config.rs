//! Server configuration from environment variables.

use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (e.g. "127.0.0.1").
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `SOLACE_HOST` / `SOLACE_PORT`, falling back to defaults.
    ///
    /// A present but unparseable port is a startup error, not a silent
    /// fallback.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("SOLACE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("SOLACE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("invalid SOLACE_PORT value: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// The address string to bind, e.g. "127.0.0.1:8000".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
