//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete adapters are wired together
//! for the CLI:
//! - Identity source (process environment, optionally overlaid by `--env-file`)
//! - Output sink (terminal, or an in-memory recorder for `--json`)
//! - Built-in checks filtered by `--only`
//!
//! Handlers receive the composed [`CliContext`] and only drive it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use capprobe_core::{
    IdentityKeys, IdentitySource, ProbeConfig, ProbeRunner, RecordingSink, Shape, SharedSink,
};
use capprobe_runtime::{CheckInputs, OverlayEnv, ProcessEnv, TerminalSink, select_checks};
use tracing::debug;

use crate::commands::RunArgs;
use crate::error::CliError;

/// Fully composed context for a probe run.
pub struct CliContext {
    /// Runner with identity source, sink and selected checks wired in.
    pub runner: ProbeRunner,
    /// Present in `--json` mode: the sink the runner writes to.
    pub recording: Option<Arc<RecordingSink>>,
}

/// Build the probe configuration from run arguments.
pub fn probe_config(args: &RunArgs) -> ProbeConfig {
    ProbeConfig {
        title: args.title.clone(),
        identity_keys: IdentityKeys {
            version: args.version_var.clone(),
            vendor: args.vendor_var.clone(),
            home: args.home_var.clone(),
        },
        only: args.only.clone(),
        extended: args.extended,
        ..ProbeConfig::default()
    }
}

/// Inputs for the built-in checks, falling back to their defaults.
pub fn check_inputs(args: &RunArgs) -> CheckInputs {
    let defaults = CheckInputs::default();
    CheckInputs {
        value: args.value.clone().unwrap_or(defaults.value),
        shape: args.rect.map_or(defaults.shape, Shape::Rectangle),
    }
}

/// Parse a dotenv file into key/value pairs without touching the process
/// environment.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>, CliError> {
    let mut values = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        values.insert(key, value);
    }
    debug!(path = %path.display(), entries = values.len(), "loaded env file overlay");
    Ok(values)
}

/// Identity source for this run.
pub fn identity_source(env_file: Option<&Path>) -> Result<Arc<dyn IdentitySource>, CliError> {
    match env_file {
        Some(path) => Ok(Arc::new(OverlayEnv::new(load_env_file(path)?, ProcessEnv::new()))),
        None => Ok(Arc::new(ProcessEnv::new())),
    }
}

/// Compose a runner writing to `sink`.
pub fn bootstrap_with_sink(args: &RunArgs, sink: SharedSink) -> Result<ProbeRunner, CliError> {
    let config = probe_config(args);
    let checks = select_checks(&config, &check_inputs(args))?;
    let identity = identity_source(args.env_file.as_deref())?;

    let runner = ProbeRunner::new(config, identity, sink)?.with_checks(checks);
    debug!(checks = ?runner.check_names(), "probe runner ready");
    Ok(runner)
}

/// Compose the context for a run, choosing the sink from `--json`.
pub fn bootstrap(args: &RunArgs) -> Result<CliContext, CliError> {
    if args.json {
        let recording = Arc::new(RecordingSink::new());
        let runner = bootstrap_with_sink(args, recording.clone())?;
        Ok(CliContext {
            runner,
            recording: Some(recording),
        })
    } else {
        let runner = bootstrap_with_sink(args, Arc::new(TerminalSink::new()))?;
        Ok(CliContext {
            runner,
            recording: None,
        })
    }
}
