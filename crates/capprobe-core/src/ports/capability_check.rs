//! Capability check port.
//!
//! A capability check exercises one runtime feature and writes its result to
//! the output sink. Concrete checks live in `capprobe-runtime`.

use async_trait::async_trait;

use super::{ProbeResult, SharedSink};

/// One independent, named unit of probe work.
///
/// Checks hold no state shared with other checks and are executed at most
/// once per run, in the order they were registered.
#[async_trait]
pub trait CapabilityCheck: Send + Sync {
    /// Stable identifier, used for `--only` selection and reports.
    fn name(&self) -> &'static str;

    /// One-line human description shown by `capprobe list`.
    fn description(&self) -> &'static str;

    /// Run the check, writing result lines to `sink`.
    ///
    /// Returning [`super::ProbeError::Interrupted`] lets the run continue;
    /// any other error aborts it.
    async fn run(&self, sink: SharedSink) -> ProbeResult<()>;
}
