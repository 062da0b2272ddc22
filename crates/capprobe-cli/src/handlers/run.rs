//! Run command handler.

use std::io::{self, Write};

use anyhow::Result;
use capprobe_core::{RecordingSink, RunReport};
use tracing::debug;

use crate::bootstrap::bootstrap;
use crate::commands::RunArgs;
use crate::error::CliError;

/// Attach the captured transcript to `report` and serialize it.
pub fn render_json(report: RunReport, recording: &RecordingSink) -> Result<String, CliError> {
    Ok(report.with_output(recording.lines()).to_json_pretty()?)
}

/// Copy the captured error-channel lines to `out`.
pub fn echo_error_lines(recording: &RecordingSink, out: &mut impl Write) -> io::Result<()> {
    for line in recording.stderr() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Execute a probe run.
///
/// In plain mode the runner writes straight to the terminal. With `--json`
/// the transcript is captured and printed as one report, and error-channel
/// lines are still echoed on stderr. If the run aborts, all captured lines
/// are replayed on stderr so the partial transcript is not lost.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let ctx = bootstrap(args)?;

    match (ctx.runner.run().await, ctx.recording) {
        (Ok(report), Some(recording)) => {
            echo_error_lines(&recording, &mut io::stderr().lock()).map_err(CliError::from)?;
            println!("{}", render_json(report, &recording)?);
            Ok(())
        }
        (Ok(_), None) => Ok(()),
        (Err(err), recording) => {
            if let Some(recording) = recording {
                debug!("replaying captured transcript after aborted run");
                for line in recording.lines() {
                    eprintln!("{}", line.text);
                }
            }
            Err(CliError::from(err).into())
        }
    }
}
