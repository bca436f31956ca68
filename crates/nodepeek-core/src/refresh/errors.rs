use crate::errors::NodePeekError;

/// A refresh request that never produced a decodable `FetchResult`.
///
/// Backend-reported failures are not transport errors; they arrive as a
/// `FetchResult` with `success = false`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid backend URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    #[error("Request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Invalid response from {url} (HTTP {status}): {message}")]
    InvalidResponse {
        url: String,
        status: u16,
        message: String,
    },
}

impl NodePeekError for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::InvalidUrl { .. } => "TRANSPORT_INVALID_URL",
            TransportError::ClientBuild { .. } => "TRANSPORT_CLIENT_BUILD",
            TransportError::RequestFailed { .. } => "TRANSPORT_REQUEST_FAILED",
            TransportError::Timeout { .. } => "TRANSPORT_TIMEOUT",
            TransportError::InvalidResponse { .. } => "TRANSPORT_INVALID_RESPONSE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, TransportError::InvalidUrl { .. })
    }
}
