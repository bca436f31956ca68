//! nodepeek-server: HTTP backend producing `FetchResult` payloads.
//!
//! Routes:
//! - `GET /` - service name, version and whether docker is available
//! - `GET /get-file-content[?simulation=true]` - start script contents
//! - `GET /get-node-tip[?simulation=true]` - `cardano-cli query tip` output
//!
//! Failures are answered with HTTP 500 and a JSON body, never an empty one.

pub mod errors;
pub mod routes;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use nodepeek_core::config::ServerConfig;

pub use errors::ServerError;
pub use routes::{AppState, app};

/// Bind the configured address.
pub async fn bind(settings: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = settings.bind();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, settings: ServerConfig) -> Result<(), ServerError> {
    serve_with_shutdown(listener, settings, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    settings: ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = app(AppState::new(settings)).layer(TraceLayer::new_for_http());

    info!(
        event = "server.listen_started",
        addr = %listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".into())
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!(event = "server.listen_stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(event = "server.signal_install_failed", error = %e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(event = "server.signal_install_failed", error = %e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(event = "server.shutdown_signal_received");
}
