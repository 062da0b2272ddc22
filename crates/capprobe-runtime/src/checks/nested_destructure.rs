//! Nested destructure check.

use async_trait::async_trait;
use capprobe_core::{CapabilityCheck, ProbeResult, Shape, SharedSink, describe_rectangle};
use tracing::debug;

pub struct NestedDestructureCheck {
    shape: Shape,
}

impl NestedDestructureCheck {
    pub const NAME: &'static str = "nested-destructure";

    pub const fn new(shape: Shape) -> Self {
        Self { shape }
    }
}

impl Default for NestedDestructureCheck {
    fn default() -> Self {
        Self::new(Shape::default())
    }
}

#[async_trait]
impl CapabilityCheck for NestedDestructureCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Destructure a rectangle of two points into four scalars"
    }

    async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
        if let Some(line) = describe_rectangle(&self.shape) {
            sink.line(&line);
        } else {
            debug!(shape = ?self.shape, "shape is not a rectangle, nothing to print");
        }
        Ok(())
    }
}
