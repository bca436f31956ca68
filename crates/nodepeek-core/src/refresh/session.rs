use tracing::info;

use super::types::{FetchResult, ServiceInfo};
use crate::config::ClientConfig;

/// Session-wide refresh state, threaded through every controller call.
///
/// Simulation mode is sticky: once enabled, either by the user or by a
/// payload reporting `simulation = true`, no operation turns it off again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    simulation_mode: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulation_mode(self) -> bool {
        self.simulation_mode
    }

    pub fn with_simulation_mode(self) -> Self {
        Self {
            simulation_mode: true,
        }
    }

    /// Fold one response into the session.
    pub fn observe(self, result: &FetchResult) -> Self {
        if result.simulation {
            self.with_simulation_mode()
        } else {
            self
        }
    }
}

/// Decide the session a page load starts with.
///
/// Simulation mode is on from the start when configured, or when
/// `auto_simulation` is set and the backend reports docker missing.
pub fn initial_session(config: &ClientConfig, service: Option<&ServiceInfo>) -> SessionState {
    if config.start_in_simulation {
        info!(
            event = "core.refresh.simulation_enabled",
            reason = "configured"
        );
        return SessionState::new().with_simulation_mode();
    }

    if config.auto_simulation
        && let Some(service) = service
        && !service.docker_available
    {
        info!(
            event = "core.refresh.simulation_enabled",
            reason = "docker_unavailable"
        );
        return SessionState::new().with_simulation_mode();
    }

    SessionState::new()
}
