//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Running
//! `capprobe` with no subcommand is the same as `capprobe run`.

use clap::Parser;

use crate::commands::{Commands, RunArgs};

/// Command-line interface for the capability probe.
#[derive(Parser)]
#[command(name = "capprobe")]
#[command(about = "Probe a runtime: report its identity and exercise core language capabilities")]
#[command(version = capprobe_build_info::LONG_VERSION)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose/debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

impl Cli {
    /// The command to dispatch, with a bare invocation treated as `run`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Run(self.run))
    }
}
