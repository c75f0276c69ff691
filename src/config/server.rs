use crate::config::parse_var;
use crate::core::Result;
use std::env;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: num_cpus::get() * 2, // 2x CPU cores for I/O-bound workload
        }
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            parse_var("SERVER_PORT", 8080)?,
        );
        config.workers = parse_var("SERVER_WORKERS", config.workers)?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
