use nodepeek_core::errors::NodePeekError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP server error: {source}")]
    Serve {
        #[from]
        source: std::io::Error,
    },
}

impl NodePeekError for ServerError {
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::Bind { .. } => "SERVER_BIND_FAILED",
            ServerError::Serve { .. } => "SERVER_SERVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ServerError::Bind { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let error = ServerError::Bind {
            addr: "0.0.0.0:5000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(error.to_string(), "Failed to bind 0.0.0.0:5000: address in use");
        assert_eq!(error.error_code(), "SERVER_BIND_FAILED");
        assert!(error.is_user_error());
    }
}
