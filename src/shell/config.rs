// Runtime configuration read from the environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HTTP_ADDR is not a socket address: {0}")]
    InvalidHttpAddr(String),

    #[error("CORS_PERMISSIVE must be true or false, got {0}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub seed_users_path: Option<PathBuf>,
    pub cors_permissive: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = http_addr
            .parse()
            .map_err(|_| ConfigError::InvalidHttpAddr(http_addr))?;

        let seed_users_path = lookup("SEED_USERS_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let cors_permissive = match lookup("CORS_PERMISSIVE") {
            None => false,
            Some(flag) => match flag.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" | "" => false,
                _ => return Err(ConfigError::InvalidFlag(flag)),
            },
        };

        Ok(Self {
            http_addr,
            seed_users_path,
            cors_permissive,
        })
    }
}
