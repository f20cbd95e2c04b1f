use std::env;
use std::net::SocketAddr;

use dotenv::dotenv;
use thiserror::Error;

use crate::client::DEFAULT_API_URL;
use crate::models::common::is_valid_backend_name;
use crate::services::list_view::{SyncMode, ViewOptions};

pub const DEFAULT_BACKEND: &str = "go";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MEETING_BACKEND '{0}' may only contain letters, digits, '-' and '_'")]
    InvalidBackend(String),

    #[error("MEETING_SYNC_MODE must be 'patch' or 'refetch', got '{0}'")]
    InvalidSyncMode(String),

    #[error("MEETING_NEWEST_FIRST must be 'true' or 'false', got '{0}'")]
    InvalidNewestFirst(String),

    #[error("LISTEN_ADDR '{0}' is not a socket address")]
    InvalidListenAddr(String),
}

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub default_backend: String,
    pub view: ViewOptions,
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("MEETING_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let default_backend =
            lookup("MEETING_BACKEND").unwrap_or_else(|| DEFAULT_BACKEND.to_string());
        if !is_valid_backend_name(&default_backend) {
            return Err(ConfigError::InvalidBackend(default_backend));
        }

        let sync_mode = match lookup("MEETING_SYNC_MODE") {
            None => SyncMode::default(),
            Some(val) => match val.to_lowercase().as_str() {
                "patch" => SyncMode::Patch,
                "refetch" => SyncMode::Refetch,
                _ => return Err(ConfigError::InvalidSyncMode(val)),
            },
        };

        let newest_first = match lookup("MEETING_NEWEST_FIRST") {
            None => true,
            Some(val) => match val.to_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => return Err(ConfigError::InvalidNewestFirst(val)),
            },
        };

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(listen_addr.clone()))?;

        Ok(Self {
            api_url,
            default_backend,
            view: ViewOptions {
                sync_mode,
                newest_first,
            },
            listen_addr,
        })
    }
}
