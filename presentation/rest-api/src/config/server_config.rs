use super::{env_vars, lookup};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        Self::from_vars(env_vars)
    }

    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup(&vars, "SERVICE_IP").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup(&vars, "SERVICE_PORT").unwrap_or_else(|| "8080".to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
