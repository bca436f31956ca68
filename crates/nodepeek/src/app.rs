use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("nodepeek")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect a node container's start script and chain tip, live or simulated")
        .long_about("nodepeek serves and displays two views of a containerised Cardano node: the contents of its start script and its current tip. When docker or the container is unavailable, simulation mode switches every view to sample data for the rest of the session.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Backend base URL (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP backend")
                .arg(
                    Arg::new("bind")
                        .long("bind")
                        .short('b')
                        .help("Socket address to listen on (overrides config, default: 0.0.0.0:5000)")
                )
        )
        .subcommand(
            Command::new("fetch")
                .about("Refresh views once and print them")
                .arg(
                    Arg::new("target")
                        .help("Which view to refresh")
                        .value_parser(["file", "tip", "all"])
                        .default_value("all")
                        .index(1)
                )
                .arg(
                    Arg::new("simulation")
                        .long("simulation")
                        .short('s')
                        .help("Start in simulation mode")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("watch")
                .about("Interactive session: refresh views on command")
                .long_about(
                    "Loads every view once, then reads commands from stdin:\n\n\
                    r, refresh   refresh all views\n\
                    f, file      refresh the file content view\n\
                    t, tip       refresh the node tip view\n\
                    s, sim       enable simulation mode and refresh all views\n\
                    ?, help      show commands\n\
                    q, quit      exit"
                )
                .arg(
                    Arg::new("simulation")
                        .long("simulation")
                        .short('s')
                        .help("Start in simulation mode")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .index(1)
                )
        )
}
