//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.nodepeek/config.toml` (global user preferences)
//! 3. **Project config** - `./.nodepeek/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{ClientConfig, NodePeekConfig, ServerConfig};
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".nodepeek";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
/// Missing config files are not errors. Values are not validated here;
/// each command checks the section it uses.
pub fn load_hierarchy() -> Result<NodePeekConfig, ConfigError> {
    let user_path = user_config_path();
    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    load_from_paths(user_path.as_deref(), Some(&project_path))
}

/// Load and merge the given user and project config files.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<NodePeekConfig, ConfigError> {
    let mut config = NodePeekConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        match load_config_file(path) {
            Ok(file_config) => config = merge_configs(config, file_config),
            Err(ConfigError::ConfigNotFound { path }) => {
                debug!(event = "core.config.file_not_found", path = path);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(config)
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<NodePeekConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Path of the user-level config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields are replaced only when the override sets them.
/// Boolean switches are enabled if either side enables them.
pub fn merge_configs(base: NodePeekConfig, override_config: NodePeekConfig) -> NodePeekConfig {
    NodePeekConfig {
        client: ClientConfig {
            base_url: override_config.client.base_url.or(base.client.base_url),
            request_timeout_secs: override_config
                .client
                .request_timeout_secs
                .or(base.client.request_timeout_secs),
            start_in_simulation: override_config.client.start_in_simulation
                || base.client.start_in_simulation,
            auto_simulation: override_config.client.auto_simulation
                || base.client.auto_simulation,
        },
        server: ServerConfig {
            bind: override_config.server.bind.or(base.server.bind),
            container: override_config.server.container.or(base.server.container),
            file_path: override_config.server.file_path.or(base.server.file_path),
            docker_binary: override_config
                .server
                .docker_binary
                .or(base.server.docker_binary),
            network_flag: override_config
                .server
                .network_flag
                .or(base.server.network_flag),
            command_timeout_secs: override_config
                .server
                .command_timeout_secs
                .or(base.server.command_timeout_secs),
        },
    }
}
