use clap::ArgMatches;
use tracing::{error, info, warn};

use nodepeek_core::config::validate_client;
use nodepeek_core::refresh::initial_session;
use nodepeek_core::{HttpTransport, NodePeekConfig, SessionState, TargetKind};

/// Load config, falling back to defaults with a warning when a file cannot
/// be read or parsed. Values are validated later by the command using them.
pub fn load_config_with_warning() -> NodePeekConfig {
    match NodePeekConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.nodepeek/config.toml and ./.nodepeek/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            NodePeekConfig::default()
        }
    }
}

/// Config with the global `--url` override applied and validated.
pub fn load_client_config(
    matches: &ArgMatches,
) -> Result<NodePeekConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();

    if let Some(url) = matches.get_one::<String>("url") {
        config.client.base_url = Some(url.clone());
    }

    if let Err(e) = validate_client(&config.client) {
        eprintln!("❌ {}", e);
        error!(event = "cli.config.invalid", section = "client", error = %e);
        return Err(e.into());
    }

    Ok(config)
}

pub fn build_transport(config: &NodePeekConfig) -> Result<HttpTransport, Box<dyn std::error::Error>> {
    match HttpTransport::from_config(&config.client) {
        Ok(transport) => Ok(transport),
        Err(e) => {
            eprintln!("❌ Failed to create HTTP client: {}", e);
            Err(e.into())
        }
    }
}

pub fn build_runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

/// Targets selected by a `file | tip | all` argument.
pub fn parse_targets(value: &str) -> Vec<TargetKind> {
    match value {
        "file" => vec![TargetKind::FileContent],
        "tip" => vec![TargetKind::NodeTip],
        _ => TargetKind::ALL.to_vec(),
    }
}

/// Session the CLI starts with.
///
/// `--simulation` wins outright. Otherwise the config decides, probing the
/// backend only when `auto_simulation` is set.
pub async fn starting_session(
    config: &NodePeekConfig,
    transport: &HttpTransport,
    simulation_flag: bool,
) -> SessionState {
    if simulation_flag {
        info!(event = "cli.session.simulation_requested");
        return SessionState::new().with_simulation_mode();
    }

    let service = if config.client.auto_simulation && !config.client.start_in_simulation {
        match transport.service_info().await {
            Ok(info) => Some(info),
            Err(e) => {
                warn!(
                    event = "cli.session.probe_failed",
                    base_url = transport.base_url(),
                    error = %e
                );
                None
            }
        }
    } else {
        None
    };

    initial_session(&config.client, service.as_ref())
}
