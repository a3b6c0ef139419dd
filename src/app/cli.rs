//! CLI adapter.

use clap::Parser;

use crate::domain::CliOverrides;

#[derive(Parser)]
#[command(name = "laravels")]
#[command(version)]
#[command(
    about = "Prepare LaravelS runtime configuration and publish bootstrap artifacts",
    long_about = None
)]
struct Cli {
    /// Action to run: publish, config, or info
    action: Option<String>,
    /// Run the server as a daemon for "start & restart"
    #[arg(short = 'd', long)]
    daemonize: bool,
    /// Skip the process pid check for "start & restart"
    #[arg(short = 'i', long = "ignore")]
    ignore: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.action.as_deref() {
        Some("publish") => crate::publish(),
        Some("config") => {
            let overrides =
                CliOverrides { daemonize: cli.daemonize, ignore_check_pid: cli.ignore };
            crate::prepare_config(&overrides)
        }
        Some("info") => crate::info(),
        // Empty and unrecognized actions print usage and succeed.
        _ => {
            println!("Usage: laravels publish|config|info");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
