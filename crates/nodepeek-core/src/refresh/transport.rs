//! reqwest-backed [`Transport`] talking to a nodepeek backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::controller::Transport;
use super::errors::TransportError;
use super::types::{FetchResult, ServiceInfo};
use crate::config::ClientConfig;
use crate::config::validation::validate_base_url;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        validate_base_url(base_url).map_err(|_| TransportError::InvalidUrl {
            url: base_url.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend whether its live source can work at all.
    pub async fn service_info(&self) -> Result<ServiceInfo, TransportError> {
        self.get_json("/").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the body whatever the status code; the backend
    /// reports failures as 500 with a JSON payload.
    async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D, TransportError> {
        let url = self.url(path);
        debug!(event = "core.transport.request_started", url = %url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;

        let status = response.status();
        debug!(
            event = "core.transport.response_received",
            url = %url,
            status = status.as_u16()
        );

        response.json::<D>().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout { url: url.clone() }
            } else {
                TransportError::InvalidResponse {
                    url: url.clone(),
                    status: status.as_u16(),
                    message: e.to_string(),
                }
            }
        })
    }
}

fn request_error(url: &str, e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::RequestFailed {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, path: &str) -> Result<FetchResult, TransportError> {
        self.get_json(path).await
    }
}
