//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Total timeout for outbound YouTube requests, in seconds
    pub request_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_secs: 10,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply `HOST` and `PORT` environment overrides. Read once at startup;
    /// the resulting struct is passed explicitly from there on.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Self {
        if let Some(host) = host {
            if !host.is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = port {
            match port.parse() {
                Ok(p) => self.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        self
    }
}
