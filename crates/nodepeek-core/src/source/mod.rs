pub mod docker;
pub mod errors;
pub mod handler;
pub mod sample;

// Re-export commonly used types
pub use errors::SourceError;
pub use handler::{file_content, node_tip, service_info};
