use clap::ArgMatches;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use nodepeek_core::{RefreshController, TargetKind};

use super::helpers::{build_runtime, build_transport, load_client_config, starting_session};
use crate::render::TerminalRenderer;

const HELP_TEXT: &str = "Commands: [r]efresh all, [f]ile, [t]ip, [s]im mode, [?] help, [q]uit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchCommand {
    RefreshAll,
    Refresh(TargetKind),
    EnableSimulation,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<WatchCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "r" | "refresh" => Some(WatchCommand::RefreshAll),
        "f" | "file" => Some(WatchCommand::Refresh(TargetKind::FileContent)),
        "t" | "tip" => Some(WatchCommand::Refresh(TargetKind::NodeTip)),
        "s" | "sim" | "simulation" => Some(WatchCommand::EnableSimulation),
        "?" | "h" | "help" => Some(WatchCommand::Help),
        "q" | "quit" | "exit" => Some(WatchCommand::Quit),
        _ => None,
    }
}

pub(crate) fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let simulation_flag = matches.get_flag("simulation");
    let config = load_client_config(matches)?;
    let transport = build_transport(&config)?;

    info!(
        event = "cli.watch_started",
        base_url = transport.base_url(),
        simulation = simulation_flag
    );

    let runtime = build_runtime()?;
    runtime.block_on(async {
        let mut session = starting_session(&config, &transport, simulation_flag).await;
        let mut controller = RefreshController::new(transport, TerminalRenderer::stdout());

        // Page load: every view once
        session = controller.refresh_all(session).await;
        println!("\n{}", HELP_TEXT);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!(event = "cli.watch.stdin_failed", error = %e);
                    return Err(e.into());
                }
            };

            match parse_command(&line) {
                Some(WatchCommand::RefreshAll) => {
                    session = controller.refresh_all(session).await;
                }
                Some(WatchCommand::Refresh(kind)) => {
                    session = controller.refresh(session, kind).await;
                }
                Some(WatchCommand::EnableSimulation) => {
                    if session.simulation_mode() {
                        println!("Simulation mode is already enabled.");
                    }
                    session = controller.enable_simulation_mode(session).await;
                }
                Some(WatchCommand::Help) => {
                    println!("{}", HELP_TEXT);
                    continue;
                }
                Some(WatchCommand::Quit) => break,
                None => {
                    println!("Unknown command: '{}'. {}", line.trim(), HELP_TEXT);
                    continue;
                }
            }

            let mode = if session.simulation_mode() { "simulation" } else { "live" };
            println!("\n[{} mode] {}", mode, HELP_TEXT);
        }

        info!(
            event = "cli.watch_completed",
            simulation = session.simulation_mode()
        );
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
