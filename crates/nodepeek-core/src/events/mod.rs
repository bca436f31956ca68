//! Command lifecycle events shared by the CLI entry points.

use std::time::Duration;

use tracing::{error, info};

pub fn log_command_started(command: &str) {
    info!(
        event = "core.app.command_started",
        command = command,
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_command_completed(command: &str, elapsed: Duration) {
    info!(
        event = "core.app.command_completed",
        command = command,
        elapsed_ms = elapsed.as_millis() as u64
    );
}

/// Failures are logged at error level, so they show up even in quiet mode.
pub fn log_command_failed(command: &str, elapsed: Duration, error: &dyn std::error::Error) {
    error!(
        event = "core.app.command_failed",
        command = command,
        elapsed_ms = elapsed.as_millis() as u64,
        error = %error
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_command_lifecycle_events() {
        let output = capture(|| {
            log_command_started("fetch");
            log_command_completed("fetch", Duration::from_millis(42));
        });

        assert!(output.contains(r#""event":"core.app.command_started""#));
        assert!(output.contains(r#""event":"core.app.command_completed""#));
        assert!(output.contains(r#""command":"fetch""#));
        assert!(output.contains(r#""elapsed_ms":42"#));
    }

    #[test]
    fn test_command_failed_carries_error() {
        let output = capture(|| {
            let failure = std::io::Error::other("backend unreachable");
            log_command_failed("watch", Duration::from_millis(5), &failure);
        });

        assert!(output.contains(r#""level":"ERROR""#));
        assert!(output.contains(r#""command":"watch""#));
        assert!(output.contains("backend unreachable"));
    }
}
