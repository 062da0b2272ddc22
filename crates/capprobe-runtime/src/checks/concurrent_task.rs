//! Concurrent task check.
//!
//! Spawns one tokio task that prints where it is running, then waits for it
//! with no timeout. A failed join (the task was cancelled or panicked) is the
//! one recoverable failure in a probe run.

use std::sync::Arc;

use async_trait::async_trait;
use capprobe_core::{CapabilityCheck, ProbeError, ProbeResult, SharedSink};
use tokio::task::JoinError;
use tracing::debug;

/// Line printed after the spawned task has been joined.
pub const SPAWN_SUCCESS: &str = "✓ Spawned tasks work!";

/// Body of the spawned task: produces the line the task prints.
pub type UnitOfWork = Arc<dyn Fn() -> String + Send + Sync>;

/// Describe the task and worker thread the caller is running on.
pub fn describe_current_task() -> String {
    let task = tokio::task::try_id().map_or_else(|| "unknown".to_string(), |id| id.to_string());
    let thread = std::thread::current();
    let thread_name = thread.name().unwrap_or("unnamed");
    format!("Running in spawned task: task {task} on thread {thread_name}")
}

pub struct ConcurrentTaskCheck {
    unit: UnitOfWork,
}

impl ConcurrentTaskCheck {
    pub const NAME: &'static str = "concurrent-task";

    pub fn new() -> Self {
        Self::with_unit(Arc::new(describe_current_task))
    }

    /// Use a custom task body instead of [`describe_current_task`].
    pub fn with_unit(unit: UnitOfWork) -> Self {
        Self { unit }
    }
}

impl Default for ConcurrentTaskCheck {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn interrupted(err: &JoinError) -> ProbeError {
    let reason = if err.is_cancelled() {
        "task was cancelled".to_string()
    } else {
        err.to_string()
    };
    ProbeError::Interrupted { reason }
}

#[async_trait]
impl CapabilityCheck for ConcurrentTaskCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Spawn one lightweight task and join it"
    }

    async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
        let unit = Arc::clone(&self.unit);
        let task_sink = Arc::clone(&sink);

        let handle = tokio::spawn(async move {
            task_sink.line(&unit());
        });
        debug!(task = %handle.id(), "spawned probe task");

        handle.await.map_err(|err| interrupted(&err))?;

        sink.line(SPAWN_SUCCESS);
        Ok(())
    }
}
