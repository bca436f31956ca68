use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use nodepeek_core::{
    HttpTransport, Phase, RefreshController, Renderer, SessionState, TargetKind, ViewState,
};

use super::helpers::{
    build_runtime, build_transport, load_client_config, parse_targets, starting_session,
};
use crate::render::{SilentRenderer, TerminalRenderer};

#[derive(Serialize)]
struct FetchOutput<'a> {
    base_url: &'a str,
    simulation_mode: bool,
    views: Vec<TargetOutput<'a>>,
}

#[derive(Serialize)]
struct TargetOutput<'a> {
    target: TargetKind,
    #[serde(flatten)]
    view: &'a ViewState,
}

pub(crate) fn handle_fetch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let target = matches
        .get_one::<String>("target")
        .map(String::as_str)
        .unwrap_or("all");
    let kinds = parse_targets(target);
    let simulation_flag = matches.get_flag("simulation");
    let json_output = matches.get_flag("json");

    let config = load_client_config(matches)?;
    let transport = build_transport(&config)?;

    info!(
        event = "cli.fetch_started",
        base_url = transport.base_url(),
        target = target,
        simulation = simulation_flag
    );

    let runtime = build_runtime()?;
    runtime.block_on(async {
        let session = starting_session(&config, &transport, simulation_flag).await;

        if json_output {
            let mut controller = RefreshController::new(transport, SilentRenderer);
            let session = run_fetch(&mut controller, session, &kinds).await;
            let output = FetchOutput {
                base_url: config.client.base_url(),
                simulation_mode: session.simulation_mode(),
                views: kinds
                    .iter()
                    .filter_map(|kind| {
                        controller.view(*kind).map(|view| TargetOutput {
                            target: *kind,
                            view,
                        })
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            finish(&controller, &kinds)
        } else {
            let mut controller = RefreshController::new(transport, TerminalRenderer::stdout());
            run_fetch(&mut controller, session, &kinds).await;
            finish(&controller, &kinds)
        }
    })
}

async fn run_fetch<R: Renderer>(
    controller: &mut RefreshController<HttpTransport, R>,
    session: SessionState,
    kinds: &[TargetKind],
) -> SessionState {
    if kinds.len() == TargetKind::ALL.len() {
        return controller.refresh_all(session).await;
    }

    let mut session = session;
    for kind in kinds {
        session = controller.refresh(session, *kind).await;
    }
    session
}

/// Non-zero exit when any requested view did not settle on success.
fn finish<R: Renderer>(
    controller: &RefreshController<HttpTransport, R>,
    kinds: &[TargetKind],
) -> Result<(), Box<dyn std::error::Error>> {
    let failed: Vec<TargetKind> = kinds
        .iter()
        .copied()
        .filter(|kind| {
            controller
                .view(*kind)
                .is_none_or(|view| view.phase != Phase::Success)
        })
        .collect();

    if failed.is_empty() {
        info!(event = "cli.fetch_completed", count = kinds.len());
        return Ok(());
    }

    let names: Vec<&str> = failed.iter().map(|kind| kind.as_str()).collect();
    error!(
        event = "cli.fetch_failed",
        failed = names.join(","),
        count = failed.len()
    );
    Err(format!("{} view(s) failed to refresh: {}", failed.len(), names.join(", ")).into())
}
