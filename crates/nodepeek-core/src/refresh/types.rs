use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::session::SessionState;

/// One response payload from `/get-file-content` or `/get-node-tip`.
///
/// Exactly one of `content` (on success) or `error` (on failure) is
/// meaningful. `simulation` reports whether the payload came from the
/// simulated source and is independent of `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub simulation: bool,
    #[serde(default)]
    pub timestamp: String,
}

impl FetchResult {
    pub fn succeeded(content: impl Into<String>, simulation: bool) -> Self {
        Self {
            success: true,
            content: Some(content.into()),
            error: None,
            simulation,
            timestamp: now_timestamp(),
        }
    }

    pub fn failed(error: impl Into<String>, simulation: bool) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.into()),
            simulation,
            timestamp: now_timestamp(),
        }
    }
}

/// Current UTC time as RFC 3339, the timestamp format the backend emits.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Capability report served by the backend at `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub docker_available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    FileContent,
    NodeTip,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::FileContent, TargetKind::NodeTip];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::FileContent => "file_content",
            TargetKind::NodeTip => "node_tip",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TargetKind::FileContent => "File content",
            TargetKind::NodeTip => "Node tip",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live and simulated variants of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPair {
    pub live: String,
    pub simulated: String,
}

impl EndpointPair {
    /// Build the pair for a path; the simulated variant adds `?simulation=true`.
    pub fn for_path(path: &str) -> Self {
        Self {
            live: path.to_string(),
            simulated: format!("{path}?simulation=true"),
        }
    }

    pub fn select(&self, session: SessionState) -> &str {
        if session.simulation_mode() {
            &self.simulated
        } else {
            &self.live
        }
    }
}

/// How a target's successful content is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// Shown verbatim.
    Plain,
    /// Pretty-printed when it parses as JSON, verbatim otherwise.
    Json,
}

/// Fixed user-facing texts of one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCopy {
    pub loading_status: &'static str,
    pub success_status: &'static str,
    pub simulation_status: &'static str,
    pub empty_placeholder: &'static str,
    pub error_placeholder: &'static str,
}

/// One independently refreshable piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTarget {
    pub kind: TargetKind,
    pub endpoint: EndpointPair,
    pub copy: TargetCopy,
    pub format: ContentFormat,
}

pub const FILE_CONTENT_PATH: &str = "/get-file-content";
pub const NODE_TIP_PATH: &str = "/get-node-tip";

impl RefreshTarget {
    pub fn file_content() -> Self {
        Self {
            kind: TargetKind::FileContent,
            endpoint: EndpointPair::for_path(FILE_CONTENT_PATH),
            copy: TargetCopy {
                loading_status: "Fetching file content...",
                success_status: "File content loaded successfully.",
                simulation_status: "Simulation mode: Displaying sample content.",
                empty_placeholder: "(File is empty)",
                error_placeholder: "Error fetching file content.",
            },
            format: ContentFormat::Plain,
        }
    }

    pub fn node_tip() -> Self {
        Self {
            kind: TargetKind::NodeTip,
            endpoint: EndpointPair::for_path(NODE_TIP_PATH),
            copy: TargetCopy {
                loading_status: "Fetching node tip...",
                success_status: "Node tip loaded successfully.",
                simulation_status: "Simulation mode: Displaying sample node tip.",
                empty_placeholder: "(No tip data)",
                error_placeholder: "Error fetching node tip.",
            },
            format: ContentFormat::Json,
        }
    }

    pub fn for_kind(kind: TargetKind) -> Self {
        match kind {
            TargetKind::FileContent => Self::file_content(),
            TargetKind::NodeTip => Self::node_tip(),
        }
    }
}
