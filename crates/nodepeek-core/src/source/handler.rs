use tracing::{error, info};

use super::docker;
use super::errors::SourceError;
use super::sample::{SAMPLE_NODE_TIP, SAMPLE_START_SCRIPT};
use crate::config::ServerConfig;
use crate::refresh::{FetchResult, ServiceInfo};

pub const SERVICE_NAME: &str = "nodepeek";

/// Contents of the start script inside the node container.
pub async fn file_content(settings: &ServerConfig, simulation: bool) -> FetchResult {
    if simulation {
        info!(event = "core.source.file_content_simulated");
        return FetchResult::succeeded(SAMPLE_START_SCRIPT, true);
    }

    info!(
        event = "core.source.file_content_started",
        container = settings.container(),
        path = settings.file_path()
    );

    let outcome = docker::exec_in_container(settings, &["cat", settings.file_path()]).await;
    into_fetch_result("file_content", outcome)
}

/// `cardano-cli query tip` output from inside the node container.
pub async fn node_tip(settings: &ServerConfig, simulation: bool) -> FetchResult {
    if simulation {
        info!(event = "core.source.node_tip_simulated");
        return FetchResult::succeeded(SAMPLE_NODE_TIP, true);
    }

    info!(
        event = "core.source.node_tip_started",
        container = settings.container()
    );

    let mut args = vec!["cardano-cli", "query", "tip"];
    args.extend(settings.network_flag().split_whitespace());

    let outcome = docker::exec_in_container(settings, &args).await;
    into_fetch_result("node_tip", outcome)
}

pub fn service_info(settings: &ServerConfig) -> ServiceInfo {
    ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docker_available: docker::is_docker_available(settings.docker_binary()),
    }
}

fn into_fetch_result(source: &str, outcome: Result<String, SourceError>) -> FetchResult {
    match outcome {
        Ok(content) => {
            info!(
                event = "core.source.fetch_completed",
                source = source,
                bytes = content.len()
            );
            FetchResult::succeeded(content, false)
        }
        Err(e) => {
            error!(
                event = "core.source.fetch_failed",
                source = source,
                error = %e
            );
            FetchResult::failed(e.to_string(), false)
        }
    }
}
