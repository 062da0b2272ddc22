//! `capprobe` command-line adapter.
//!
//! Parses arguments, loads configuration, and wires the runtime adapters
//! into a `ProbeRunner` via [`bootstrap`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for test-only crates
#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap};
pub use commands::{Commands, RunArgs};
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
