//! Default values for configuration types.
//!
//! Config structs keep every tunable as an `Option`; these accessors resolve
//! the effective value so callers never repeat the fallbacks.

use crate::config::types::{ClientConfig, ServerConfig};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_CONTAINER: &str = "cardano-node-1";
pub const DEFAULT_FILE_PATH: &str = "/shared/cardano.start";
pub const DEFAULT_DOCKER_BINARY: &str = "docker";
pub const DEFAULT_NETWORK_FLAG: &str = "--mainnet";
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;

impl ClientConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs())
    }
}

impl ServerConfig {
    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    pub fn container(&self) -> &str {
        self.container.as_deref().unwrap_or(DEFAULT_CONTAINER)
    }

    pub fn file_path(&self) -> &str {
        self.file_path.as_deref().unwrap_or(DEFAULT_FILE_PATH)
    }

    pub fn docker_binary(&self) -> &str {
        self.docker_binary.as_deref().unwrap_or(DEFAULT_DOCKER_BINARY)
    }

    pub fn network_flag(&self) -> &str {
        self.network_flag.as_deref().unwrap_or(DEFAULT_NETWORK_FLAG)
    }

    pub fn command_timeout_secs(&self) -> u64 {
        self.command_timeout_secs
            .unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs())
    }
}
