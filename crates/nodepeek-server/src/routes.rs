use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use nodepeek_core::config::ServerConfig;
use nodepeek_core::refresh::types::{FILE_CONTENT_PATH, NODE_TIP_PATH};
use nodepeek_core::{FetchResult, ServiceInfo, source_ops};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: ServerConfig,
}

impl AppState {
    pub fn new(settings: ServerConfig) -> Arc<Self> {
        Arc::new(Self { settings })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SimulationQuery {
    simulation: Option<String>,
}

impl SimulationQuery {
    /// Only a case-insensitive `true` selects the simulated source.
    pub fn requested(&self) -> bool {
        self.simulation
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route(FILE_CONTENT_PATH, get(get_file_content))
        .route(NODE_TIP_PATH, get(get_node_tip))
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    let info = source_ops::service_info(&state.settings);
    info!(
        event = "server.index.requested",
        docker_available = info.docker_available
    );
    Json(info)
}

async fn get_file_content(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SimulationQuery>,
) -> (StatusCode, Json<FetchResult>) {
    let simulation = query.requested();
    info!(event = "server.file_content.requested", simulation = simulation);
    respond(source_ops::file_content(&state.settings, simulation).await)
}

async fn get_node_tip(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SimulationQuery>,
) -> (StatusCode, Json<FetchResult>) {
    let simulation = query.requested();
    info!(event = "server.node_tip.requested", simulation = simulation);
    respond(source_ops::node_tip(&state.settings, simulation).await)
}

fn respond(result: FetchResult) -> (StatusCode, Json<FetchResult>) {
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(value: Option<&str>) -> SimulationQuery {
        SimulationQuery {
            simulation: value.map(str::to_string),
        }
    }

    #[test]
    fn test_simulation_query_parsing() {
        assert!(query(Some("true")).requested());
        assert!(query(Some("TRUE")).requested());
        assert!(query(Some("True")).requested());
        assert!(!query(Some("false")).requested());
        assert!(!query(Some("1")).requested());
        assert!(!query(Some("")).requested());
        assert!(!query(None).requested());
    }

    #[test]
    fn test_respond_status_codes() {
        let (ok, _) = respond(FetchResult::succeeded("x", false));
        assert_eq!(ok, StatusCode::OK);

        let (failed, Json(body)) = respond(FetchResult::failed("boom", false));
        assert_eq!(failed, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("boom"));
    }
}
