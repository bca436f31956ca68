use std::net::SocketAddr;

use crate::config::types::{ClientConfig, NodePeekConfig, ServerConfig};
use crate::errors::ConfigError;

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns the first problem found in either section.
pub fn validate_config(config: &NodePeekConfig) -> Result<(), ConfigError> {
    validate_client(&config.client)?;
    validate_server(&config.server)
}

/// Checks the settings `fetch` and `watch` depend on: an http(s) base URL
/// and a non-zero request timeout.
pub fn validate_client(client: &ClientConfig) -> Result<(), ConfigError> {
    validate_base_url(client.base_url())?;

    if client.request_timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "client.request_timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}

/// Checks the settings `serve` depends on: bind address, container name
/// and command timeout.
pub fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.command_timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "server.command_timeout_secs must be greater than 0".to_string(),
        });
    }

    validate_bind_address(server.bind())?;
    validate_container_name(server.container())
}

pub fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidBaseUrl {
            url: url.to_string(),
        }),
    }
}

pub fn validate_bind_address(bind: &str) -> Result<SocketAddr, ConfigError> {
    bind.parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidBindAddress {
            bind: bind.to_string(),
            message: e.to_string(),
        })
}

/// Reject container names that `docker exec` would read as an option or
/// that carry control characters.
pub fn validate_container_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "server.container must not be empty".to_string(),
        });
    }
    if name.starts_with('-') {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("Invalid container name '{name}' (must not start with '-')"),
        });
    }
    if name.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(ConfigError::InvalidConfiguration {
            message: "Invalid container name: contains whitespace or control characters"
                .to_string(),
        });
    }
    Ok(())
}
