//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps
//! `ProbeError`/`ConfigError` to exit codes and user-facing messages.

use capprobe_core::{ConfigError, ProbeError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A capability check aborted the run.
    #[error("{0}")]
    Probe(String),

    /// Argument error (e.g. unknown check name).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (env file not readable, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: A check aborted the run
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Probe(_) => 1,
            Self::Arguments(_) => 2,      // EX_USAGE
            Self::Serialization(_) => 70, // EX_SOFTWARE
            Self::Io(_) => 74,            // EX_IOERR
            Self::Config(_) => 78,        // EX_CONFIG
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownCheck { .. } => Self::Arguments(err.to_string()),
            _ => Self::Config(err.to_string()),
        }
    }
}

impl From<ProbeError> for CliError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::Config(config_err) => config_err.into(),
            ProbeError::Fault { .. } | ProbeError::Interrupted { .. } => {
                Self::Probe(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<dotenvy::Error> for CliError {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(io_err) => io_err.into(),
            other => Self::Config(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Exit code for an error returned from a handler.
///
/// Errors that are not a [`CliError`] map to the general failure code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
