//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, then dispatches to a
//! handler. A handler error ends the process with the exit code mapped from
//! its `CliError`.

use clap::Parser;
use tracing::info;

use capprobe_build_info::{BuildInfo, LONG_VERSION};
use capprobe_cli::{Cli, Commands, exit_code_for, handlers, logging};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads CAPPROBE_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let build = BuildInfo::current();
    info!(version = LONG_VERSION, dirty = build.dirty, "capprobe starting");

    let result = match cli.into_command() {
        Commands::Run(args) => handlers::run::execute(&args).await,
        Commands::List => handlers::list::execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}
