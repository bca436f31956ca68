//! Live source: commands executed inside the node container.
//!
//! Every call validates the container name, checks that the docker binary
//! resolves on `PATH`, and bounds the `docker exec` with the configured
//! command timeout.

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::errors::SourceError;
use crate::config::ServerConfig;
use crate::config::validation::validate_container_name;

pub fn is_docker_available(binary: &str) -> bool {
    which::which(binary).is_ok()
}

/// Run `docker exec <container> <args..>` and return its stdout.
pub async fn exec_in_container(
    settings: &ServerConfig,
    args: &[&str],
) -> Result<String, SourceError> {
    let binary = settings.docker_binary();
    let container = settings.container();

    validate_container_name(container).map_err(|e| SourceError::InvalidArgument {
        message: e.to_string(),
    })?;

    if !is_docker_available(binary) {
        warn!(event = "core.source.docker_unavailable", binary = binary);
        return Err(SourceError::DockerUnavailable);
    }

    info!(
        event = "core.source.exec_started",
        container = container,
        command = %args.join(" ")
    );

    let mut command = Command::new(binary);
    command
        .arg("exec")
        .arg(container)
        .args(args)
        .kill_on_drop(true);

    let seconds = settings.command_timeout_secs();
    let output = tokio::time::timeout(settings.command_timeout(), command.output())
        .await
        .map_err(|_| SourceError::Timeout { seconds })??;

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(
            event = "core.source.exec_completed",
            container = container,
            bytes = stdout.len()
        );
        Ok(stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        warn!(
            event = "core.source.exec_failed",
            container = container,
            code = code,
            stderr = %stderr
        );
        Err(SourceError::CommandFailed { code, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_docker() -> ServerConfig {
        ServerConfig {
            docker_binary: Some("nodepeek-test-no-such-docker".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        assert!(!is_docker_available("nodepeek-test-no-such-docker"));
    }

    #[tokio::test]
    async fn test_exec_without_docker() {
        let err = exec_in_container(&missing_docker(), &["cat", "/etc/hostname"])
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::DockerUnavailable));
    }

    #[tokio::test]
    async fn test_exec_rejects_option_like_container() {
        let settings = ServerConfig {
            container: Some("--privileged".to_string()),
            ..missing_docker()
        };
        let err = exec_in_container(&settings, &["true"]).await.unwrap_err();
        assert!(matches!(err, SourceError::InvalidArgument { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exec_reports_nonzero_exit() {
        // `false` ignores its arguments and exits 1, standing in for docker
        let settings = ServerConfig {
            docker_binary: Some("false".to_string()),
            ..Default::default()
        };
        let err = exec_in_container(&settings, &["cat", "/shared/cardano.start"])
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::CommandFailed { code: 1, .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exec_returns_stdout() {
        // `echo exec <container> <args..>` echoes the full argument list
        let settings = ServerConfig {
            docker_binary: Some("echo".to_string()),
            container: Some("relay-1".to_string()),
            ..Default::default()
        };
        let stdout = exec_in_container(&settings, &["cat", "/shared/cardano.start"])
            .await
            .unwrap();
        assert_eq!(stdout, "exec relay-1 cat /shared/cardano.start\n");
    }
}
