use clap::ArgMatches;
use tracing::{error, info};

use nodepeek_core::config::validate_server;

use super::helpers::{build_runtime, load_config_with_warning};

pub(crate) fn handle_serve_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    if let Some(bind) = matches.get_one::<String>("bind") {
        config.server.bind = Some(bind.clone());
    }

    if let Err(e) = validate_server(&config.server) {
        eprintln!("❌ {}", e);
        error!(event = "cli.config.invalid", section = "server", error = %e);
        return Err(e.into());
    }

    info!(
        event = "cli.serve_started",
        bind = config.server.bind(),
        container = config.server.container()
    );

    let runtime = build_runtime()?;
    runtime.block_on(async {
        let listener = match nodepeek_server::bind(&config.server).await {
            Ok(listener) => listener,
            Err(e) => {
                eprintln!("❌ {}", e);
                error!(event = "cli.serve_failed", error = %e);
                return Err(e);
            }
        };

        if let Ok(addr) = listener.local_addr() {
            println!("✅ Serving on http://{}", addr);
            println!("   Container: {}", config.server.container());
            println!("   Press Ctrl-C to stop.");
        }

        nodepeek_server::serve(listener, config.server.clone()).await
    })?;

    info!(event = "cli.serve_completed");
    Ok(())
}
