//! # Configuration System
//!
//! Hierarchical TOML configuration for nodepeek.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.nodepeek/config.toml`
//! 3. **Project config** - `./.nodepeek/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use nodepeek_core::config::NodePeekConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NodePeekConfig::load_hierarchy()?;
//!     println!("backend: {}", config.client.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{ClientConfig, NodePeekConfig, ServerConfig};
pub use validation::{validate_client, validate_config, validate_server};

impl NodePeekConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
