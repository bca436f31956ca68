//! Dual-mode refresh controller.
//!
//! Each [`RefreshTarget`] is fetched from its live or simulated endpoint,
//! depending on the [`SessionState`] threaded through the call, and every
//! resulting [`ViewState`] is handed to a [`Renderer`].

pub mod controller;
pub mod errors;
pub mod format;
pub mod session;
pub mod transport;
pub mod types;
pub mod view;

pub use controller::{PendingRefresh, RefreshController, Renderer, Ticket, Transport};
pub use errors::TransportError;
pub use session::{SessionState, initial_session};
pub use transport::HttpTransport;
pub use types::{
    ContentFormat, EndpointPair, FetchResult, RefreshTarget, ServiceInfo, TargetCopy, TargetKind,
};
pub use view::{Phase, StatusBanner, StatusLevel, TriggerState, ViewState};
