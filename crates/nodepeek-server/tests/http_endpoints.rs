//! End-to-end tests: a real server on a loopback socket, driven through the
//! same HTTP transport and controller the CLI uses.

use std::time::Duration;

use nodepeek_core::config::ServerConfig;
use nodepeek_core::refresh::view::SIMULATION_SUGGESTION;
use nodepeek_core::source::sample::SAMPLE_START_SCRIPT;
use nodepeek_core::{
    HttpTransport, Phase, RefreshController, Renderer, SessionState, TargetKind, Transport,
    ViewState,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose docker binary never resolves, so the live path
    /// always reports docker as missing.
    async fn start() -> Self {
        let settings = ServerConfig {
            docker_binary: Some("nodepeek-test-no-such-docker".to_string()),
            ..Default::default()
        };
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            nodepeek_server::serve_with_shutdown(listener, settings, async {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
            handle,
        }
    }

    fn transport(&self) -> HttpTransport {
        HttpTransport::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

#[derive(Default)]
struct Recorder {
    frames: Vec<(TargetKind, ViewState)>,
}

impl Renderer for Recorder {
    fn render(&mut self, kind: TargetKind, view: &ViewState) {
        self.frames.push((kind, view.clone()));
    }
}

#[tokio::test]
async fn test_index_reports_capabilities() {
    let server = TestServer::start().await;

    let info = server.transport().service_info().await.unwrap();
    assert_eq!(info.service, "nodepeek");
    assert!(!info.docker_available);

    server.stop().await;
}

#[tokio::test]
async fn test_simulated_file_content() {
    let server = TestServer::start().await;

    let result = server
        .transport()
        .fetch("/get-file-content?simulation=true")
        .await
        .unwrap();
    assert!(result.success);
    assert!(result.simulation);
    assert_eq!(result.content.as_deref(), Some(SAMPLE_START_SCRIPT));

    server.stop().await;
}

#[tokio::test]
async fn test_simulation_param_is_case_insensitive() {
    let server = TestServer::start().await;

    let result = server
        .transport()
        .fetch("/get-node-tip?simulation=TRUE")
        .await
        .unwrap();
    assert!(result.simulation);

    let result = server
        .transport()
        .fetch("/get-node-tip?simulation=yes")
        .await
        .unwrap();
    assert!(!result.simulation);

    server.stop().await;
}

#[tokio::test]
async fn test_live_failure_is_decoded_from_500() {
    let server = TestServer::start().await;

    // The 500 body is still a FetchResult, not a transport error
    let result = server.transport().fetch("/get-node-tip").await.unwrap();
    assert!(!result.success);
    assert!(!result.simulation);
    assert_eq!(
        result.error.as_deref(),
        Some("Docker is not installed or not available in the system PATH")
    );
    assert!(!result.timestamp.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_route_is_transport_error() {
    let server = TestServer::start().await;

    assert!(server.transport().fetch("/no-such-endpoint").await.is_err());

    server.stop().await;
}

#[tokio::test]
async fn test_controller_against_live_backend_without_docker() {
    let server = TestServer::start().await;
    let mut controller = RefreshController::new(server.transport(), Recorder::default());

    let session = controller.refresh_all(SessionState::new()).await;
    assert!(!session.simulation_mode());

    for kind in TargetKind::ALL {
        let view = controller.view(kind).unwrap();
        assert_eq!(view.phase, Phase::Failure);
        assert_eq!(view.status.hint.as_deref(), Some(SIMULATION_SUGGESTION));
        assert!(view.trigger.enabled);
        assert!(
            view.timestamp_label
                .as_deref()
                .unwrap()
                .starts_with("Last attempt: ")
        );
    }

    // The user takes the suggestion
    let session = controller.enable_simulation_mode(session).await;
    assert!(session.simulation_mode());

    let file = controller.view(TargetKind::FileContent).unwrap();
    assert_eq!(file.phase, Phase::Success);
    assert_eq!(file.content, SAMPLE_START_SCRIPT);
    assert!(file.simulation_badge);

    let tip = controller.view(TargetKind::NodeTip).unwrap();
    assert_eq!(tip.phase, Phase::Success);
    assert!(tip.content.contains("\n  \"block\": 10234567"));
    assert_eq!(tip.status.message, "Simulation mode: Displaying sample node tip.");

    server.stop().await;
}

#[tokio::test]
async fn test_controller_after_server_stops() {
    let server = TestServer::start().await;
    let transport = server.transport();
    server.stop().await;

    let mut controller = RefreshController::new(transport, Recorder::default());
    let session = controller
        .refresh(SessionState::new(), TargetKind::FileContent)
        .await;

    assert!(!session.simulation_mode());
    let view = controller.view(TargetKind::FileContent).unwrap();
    assert_eq!(view.phase, Phase::NetworkError);
    assert_eq!(view.content, "Error connecting to server.");
    assert!(view.timestamp_label.is_none());
    assert!(view.trigger.enabled);
}
