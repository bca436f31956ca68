use crate::errors::NodePeekError;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Docker is not installed or not available in the system PATH")]
    DockerUnavailable,

    #[error("Command failed with return code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("Command timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Unexpected error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl NodePeekError for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            SourceError::DockerUnavailable => "SOURCE_DOCKER_UNAVAILABLE",
            SourceError::CommandFailed { .. } => "SOURCE_COMMAND_FAILED",
            SourceError::Timeout { .. } => "SOURCE_TIMEOUT",
            SourceError::InvalidArgument { .. } => "SOURCE_INVALID_ARGUMENT",
            SourceError::Io { .. } => "SOURCE_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SourceError::DockerUnavailable | SourceError::InvalidArgument { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::format::is_live_backend_unavailable;

    #[test]
    fn test_docker_unavailable_matches_client_signature() {
        let error = SourceError::DockerUnavailable;
        assert!(is_live_backend_unavailable(&error.to_string()));
        assert_eq!(error.error_code(), "SOURCE_DOCKER_UNAVAILABLE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_command_failed_display() {
        let error = SourceError::CommandFailed {
            code: 1,
            stderr: "Error response from daemon: No such container: cardano-node-1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Command failed with return code 1: Error response from daemon: No such container: cardano-node-1"
        );
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_io_error_display() {
        let error = SourceError::from(std::io::Error::other("permission denied"));
        assert_eq!(error.to_string(), "Unexpected error: permission denied");
    }
}
