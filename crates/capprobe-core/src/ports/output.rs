//! Output sink port.
//!
//! Checks never print directly; they write lines to an [`OutputSink`] so the
//! same run can go to the terminal or be captured into a report.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

/// Which stream a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stdout,
    Stderr,
}

/// A single line of probe output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub channel: Channel,
    pub text: String,
}

/// Line-oriented writer shared by the runner and spawned tasks.
pub trait OutputSink: Send + Sync {
    /// Write one line to the normal output channel.
    fn line(&self, text: &str);

    /// Write one line to the error channel.
    fn error_line(&self, text: &str);
}

/// Shared handle to an output sink.
pub type SharedSink = Arc<dyn OutputSink>;

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl OutputSink for NoopSink {
    fn line(&self, _text: &str) {}

    fn error_line(&self, _text: &str) {}
}

/// Sink that keeps every line in memory, in write order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<OutputLine>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, channel: Channel, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(OutputLine {
                channel,
                text: text.to_string(),
            });
    }

    /// All recorded lines across both channels.
    pub fn lines(&self) -> Vec<OutputLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text of the lines written to `channel`.
    pub fn channel(&self, channel: Channel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.channel == channel)
            .map(|line| line.text)
            .collect()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.channel(Channel::Stdout)
    }

    pub fn stderr(&self) -> Vec<String> {
        self.channel(Channel::Stderr)
    }
}

impl OutputSink for RecordingSink {
    fn line(&self, text: &str) {
        self.push(Channel::Stdout, text);
    }

    fn error_line(&self, text: &str) {
        self.push(Channel::Stderr, text);
    }
}
