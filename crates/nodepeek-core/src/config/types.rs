//! Configuration type definitions for nodepeek.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! tunable is optional so that a project config only overrides what it sets;
//! the effective value comes from the accessor methods in
//! [`super::defaults`].
//!
//! # Example Configuration
//!
//! ```toml
//! [client]
//! base_url = "http://127.0.0.1:5000"
//! request_timeout_secs = 30
//! auto_simulation = true
//!
//! [server]
//! bind = "0.0.0.0:5000"
//! container = "cardano-node-1"
//! file_path = "/shared/cardano.start"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.nodepeek/config.toml`
/// 2. Project config: `./.nodepeek/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NodePeekConfig {
    /// Settings for the refresh client (`fetch`, `watch`)
    #[serde(default)]
    pub client: ClientConfig,

    /// Settings for the HTTP backend (`serve`)
    #[serde(default)]
    pub server: ServerConfig,
}

/// Refresh client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    /// Backend base URL.
    /// Default: http://127.0.0.1:5000
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Start every session in simulation mode.
    #[serde(default)]
    pub start_in_simulation: bool,

    /// Switch to simulation mode at load time when the backend reports
    /// that docker is unavailable.
    #[serde(default)]
    pub auto_simulation: bool,
}

/// HTTP backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    /// Default: 0.0.0.0:5000
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,

    /// Name of the node container to inspect.
    /// Default: cardano-node-1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    /// Path of the start script inside the container.
    /// Default: /shared/cardano.start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Docker executable name or path.
    /// Default: docker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_binary: Option<String>,

    /// Network flag passed to `cardano-cli query tip`.
    /// Default: --mainnet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_flag: Option<String>,

    /// Upper bound for a single `docker exec`, in seconds.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_timeout_secs: Option<u64>,
}
