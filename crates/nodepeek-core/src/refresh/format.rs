use chrono::{DateTime, Local, NaiveDateTime};

use super::types::ContentFormat;

/// Error text fragment the backend reports when the live source is missing.
pub const LIVE_UNAVAILABLE_SIGNATURE: &str = "Docker is not installed";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render an ISO-8601 timestamp in local time.
///
/// Offset-carrying timestamps are converted to the local zone; naive ones
/// are taken as already local. Anything unparseable is returned verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY_FORMAT).to_string();
    }

    raw.to_string()
}

/// Prepare successful content for display.
///
/// JSON targets are pretty-printed with two-space indentation. Content that
/// does not parse is shown as-is; this is never an error.
pub fn format_content(format: ContentFormat, raw: &str) -> String {
    match format {
        ContentFormat::Plain => raw.to_string(),
        ContentFormat::Json => serde_json::from_str::<serde_json::Value>(raw)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| raw.to_string()),
    }
}

pub fn is_live_backend_unavailable(error: &str) -> bool {
    error.contains(LIVE_UNAVAILABLE_SIGNATURE)
}
