//! Async timer check.
//!
//! Suspends on a tokio timer and confirms the task resumed no earlier than
//! the requested delay.

use std::time::Duration;

use async_trait::async_trait;
use capprobe_core::{CapabilityCheck, ProbeError, ProbeResult, SharedSink};
use tokio::time::{Instant, sleep};
use tracing::debug;

/// Delay used when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

pub struct AsyncSleepCheck {
    delay: Duration,
}

impl AsyncSleepCheck {
    pub const NAME: &'static str = "async-sleep";

    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for AsyncSleepCheck {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl CapabilityCheck for AsyncSleepCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Suspend on an async timer and resume"
    }

    async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
        sink.line("Async sleep running...");

        let started = Instant::now();
        sleep(self.delay).await;
        let elapsed = started.elapsed();
        debug!(elapsed = ?elapsed, "async timer fired");

        if elapsed < self.delay {
            return Err(ProbeError::fault(
                Self::NAME,
                format!("timer fired after {elapsed:?}, expected at least {:?}", self.delay),
            ));
        }

        sink.line(&format!(
            "Async sleep complete after {} ms",
            self.delay.as_millis()
        ));
        Ok(())
    }
}
