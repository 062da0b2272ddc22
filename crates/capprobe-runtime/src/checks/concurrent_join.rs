//! Concurrent join check.
//!
//! Spawns several timed tasks at once and awaits all of them. Results are
//! collected in spawn order regardless of which task finishes first.

use std::time::Duration;

use async_trait::async_trait;
use capprobe_core::{CapabilityCheck, ProbeResult, SharedSink};
use tokio::task::JoinHandle;
use tracing::debug;

use super::concurrent_task::interrupted;

pub struct ConcurrentJoinCheck {
    delays: Vec<Duration>,
}

impl ConcurrentJoinCheck {
    pub const NAME: &'static str = "concurrent-join";

    /// One task per delay; task `n` sleeps for `delays[n - 1]` and yields
    /// `Result n`.
    pub const fn new(delays: Vec<Duration>) -> Self {
        Self { delays }
    }
}

impl Default for ConcurrentJoinCheck {
    fn default() -> Self {
        Self::new(vec![Duration::from_millis(100), Duration::from_millis(200)])
    }
}

#[async_trait]
impl CapabilityCheck for ConcurrentJoinCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Spawn several timed tasks and await them all"
    }

    async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
        let handles: Vec<JoinHandle<String>> = self
            .delays
            .iter()
            .enumerate()
            .map(|(index, &delay)| {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    format!("Result {}", index + 1)
                })
            })
            .collect();
        debug!(tasks = handles.len(), "spawned join tasks");

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await.map_err(|err| interrupted(&err))?);
        }

        sink.line(&format!("Joined task results: {results:?}"));
        Ok(())
    }
}
