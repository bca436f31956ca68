//! nodepeek-core: Core library for inspecting a node's start script and tip
//!
//! This library provides the business logic shared by the CLI and the HTTP
//! backend: the refresh controller that drives each view through its
//! fetch-render cycle, and the live/simulated data sources that produce the
//! payloads it renders.
//!
//! # Main Entry Points
//!
//! - [`refresh`] - Refresh controller, view model and HTTP transport
//! - [`source`] - Live (docker) and simulated data sources
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod refresh;
pub mod source;

// Re-export commonly used types at crate root for convenience
pub use config::NodePeekConfig;
pub use refresh::{
    FetchResult, HttpTransport, Phase, RefreshController, RefreshTarget, Renderer, ServiceInfo,
    SessionState, TargetKind, Transport, TransportError, ViewState,
};
pub use source::SourceError;

// Re-export handler modules as the primary API
pub use source::handler as source_ops;

// Re-export logging initialization
pub use logging::init_logging;
