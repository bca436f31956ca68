use std::time::Instant;

use clap::ArgMatches;
use tracing::error;

use nodepeek_core::events;

pub mod helpers;

mod completions;
mod fetch;
mod serve;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches.subcommand_name().unwrap_or("unknown");
    let started = Instant::now();
    events::log_command_started(command);

    let result = match matches.subcommand() {
        Some(("serve", sub_matches)) => serve::handle_serve_command(sub_matches),
        Some(("fetch", sub_matches)) => fetch::handle_fetch_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    match &result {
        Ok(()) => events::log_command_completed(command, started.elapsed()),
        Err(e) => events::log_command_failed(command, started.elapsed(), e.as_ref()),
    }

    result
}
