//! View model handed to the rendering boundary.
//!
//! A [`ViewState`] is everything a presentation layer needs to draw one
//! target: the content area, the status banner, the last-updated label, the
//! simulation badge and the trigger control. Transitions are pure functions
//! from the previous view so they can be tested without any renderer.

use serde::Serialize;

use super::format::{format_content, format_timestamp, is_live_backend_unavailable};
use super::session::SessionState;
use super::types::{FetchResult, RefreshTarget};

pub const LOADING_TEXT: &str = "Loading...";
pub const TRIGGER_LABEL: &str = "Refresh";
pub const TRIGGER_BUSY_LABEL: &str = "Loading...";
pub const CONNECTION_ERROR_TEXT: &str = "Error connecting to server.";
pub const NETWORK_ERROR_STATUS: &str =
    "Network error: Could not connect to server. Check logs for details.";
pub const LAST_REFRESHED_PREFIX: &str = "Last refreshed: ";
pub const LAST_ATTEMPT_PREFIX: &str = "Last attempt: ";
pub const SIMULATION_SUGGESTION: &str = "Try enabling simulation mode to view sample content.";
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
    NetworkError,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Success | Phase::Failure | Phase::NetworkError)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Info,
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBanner {
    pub level: StatusLevel,
    pub message: String,
    /// Follow-up advice shown after the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl StatusBanner {
    fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            hint: None,
        }
    }

    /// Message and hint as one block of text.
    pub fn text(&self) -> String {
        match &self.hint {
            Some(hint) => format!("{}\n\n{}", self.message, hint),
            None => self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerState {
    pub enabled: bool,
    pub busy: bool,
    pub label: String,
}

impl TriggerState {
    pub fn ready() -> Self {
        Self {
            enabled: true,
            busy: false,
            label: TRIGGER_LABEL.to_string(),
        }
    }

    pub fn busy() -> Self {
        Self {
            enabled: false,
            busy: true,
            label: TRIGGER_BUSY_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub phase: Phase,
    pub content: String,
    pub status: StatusBanner,
    pub timestamp_label: Option<String>,
    pub simulation_badge: bool,
    pub trigger: TriggerState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::idle()
    }
}

impl ViewState {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            content: String::new(),
            status: StatusBanner::new(StatusLevel::Info, ""),
            timestamp_label: None,
            simulation_badge: false,
            trigger: TriggerState::ready(),
        }
    }

    /// Request issued: placeholder content, in-progress banner, busy trigger.
    /// The timestamp label and simulation badge keep their previous values.
    pub fn loading(&self, target: &RefreshTarget) -> Self {
        Self {
            phase: Phase::Loading,
            content: LOADING_TEXT.to_string(),
            status: StatusBanner::new(StatusLevel::Info, target.copy.loading_status),
            timestamp_label: self.timestamp_label.clone(),
            simulation_badge: self.simulation_badge,
            trigger: TriggerState::busy(),
        }
    }

    /// Response received and decoded.
    ///
    /// `session` is the state after folding in `result`; it decides whether
    /// a failure gets the simulation-mode suggestion.
    pub fn with_result(
        &self,
        target: &RefreshTarget,
        result: &FetchResult,
        session: SessionState,
    ) -> Self {
        let timestamp = format_timestamp(&result.timestamp);

        if result.success {
            let content = match result.content.as_deref() {
                Some(content) if !content.is_empty() => format_content(target.format, content),
                _ => target.copy.empty_placeholder.to_string(),
            };
            let message = if result.simulation {
                target.copy.simulation_status
            } else {
                target.copy.success_status
            };

            return Self {
                phase: Phase::Success,
                content,
                status: StatusBanner::new(StatusLevel::Success, message),
                timestamp_label: Some(format!("{LAST_REFRESHED_PREFIX}{timestamp}")),
                simulation_badge: result.simulation,
                trigger: TriggerState::ready(),
            };
        }

        let error = result.error.as_deref().unwrap_or(UNKNOWN_ERROR);
        let mut status = StatusBanner::new(StatusLevel::Danger, format!("Error: {error}"));
        if is_live_backend_unavailable(error) && !session.simulation_mode() {
            status.hint = Some(SIMULATION_SUGGESTION.to_string());
        }

        Self {
            phase: Phase::Failure,
            content: target.copy.error_placeholder.to_string(),
            status,
            timestamp_label: Some(format!("{LAST_ATTEMPT_PREFIX}{timestamp}")),
            simulation_badge: result.simulation,
            trigger: TriggerState::ready(),
        }
    }

    /// Request never completed. The timestamp label is left untouched.
    pub fn network_error(&self) -> Self {
        Self {
            phase: Phase::NetworkError,
            content: CONNECTION_ERROR_TEXT.to_string(),
            status: StatusBanner::new(StatusLevel::Danger, NETWORK_ERROR_STATUS),
            timestamp_label: self.timestamp_label.clone(),
            simulation_badge: self.simulation_badge,
            trigger: TriggerState::ready(),
        }
    }
}
