//! Pattern-match check.

use async_trait::async_trait;
use capprobe_core::{CapabilityCheck, ProbeResult, ProbeValue, SharedSink, classify};

pub struct PatternMatchCheck {
    value: ProbeValue,
}

impl PatternMatchCheck {
    pub const NAME: &'static str = "pattern-match";

    pub const fn new(value: ProbeValue) -> Self {
        Self { value }
    }
}

impl Default for PatternMatchCheck {
    fn default() -> Self {
        Self::new(ProbeValue::default())
    }
}

#[async_trait]
impl CapabilityCheck for PatternMatchCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Classify a value with an ordered, guarded match"
    }

    async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
        let result = classify(&self.value);
        sink.line(&format!("Pattern matching result: {result}"));
        Ok(())
    }
}
