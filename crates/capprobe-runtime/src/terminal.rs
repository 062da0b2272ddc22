//! Terminal output sink.

use std::io::{self, Write};

use capprobe_core::OutputSink;
use tracing::trace;

/// Writes normal lines to stdout and error lines to stderr.
///
/// Each line takes the stream lock for the duration of one write, so lines
/// from the runner and a spawned task never interleave mid-line. Write
/// failures (e.g. a closed pipe) are logged and dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for TerminalSink {
    fn line(&self, text: &str) {
        if let Err(err) = writeln!(io::stdout().lock(), "{text}") {
            trace!(error = %err, "stdout write failed");
        }
    }

    fn error_line(&self, text: &str) {
        if let Err(err) = writeln!(io::stderr().lock(), "{text}") {
            trace!(error = %err, "stderr write failed");
        }
    }
}
