use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT};

use serde::Deserialize;

/// Listening socket for the HTTP API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// Any port, privileged ones included; 0 lets the OS pick a free one
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let host = self.host.trim();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ConfigError::server(format!(
                "host '{}' is not a valid address",
                self.host
            )));
        }

        Ok(())
    }
}
