use std::error::Error;

/// Base trait for all application errors
pub trait NodePeekError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid base URL '{url}'. Expected an http:// or https:// URL")]
    InvalidBaseUrl { url: String },

    #[error("Invalid bind address '{bind}': {message}")]
    InvalidBindAddress { bind: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl NodePeekError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidBaseUrl { .. } => "INVALID_BASE_URL",
            ConfigError::InvalidBindAddress { .. } => "INVALID_BIND_ADDRESS",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidBaseUrl { .. }
                | ConfigError::InvalidBindAddress { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}
