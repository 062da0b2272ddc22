//! Collections check: keyed lookup plus an iterator pipeline.

use std::collections::HashMap;

use async_trait::async_trait;
use capprobe_core::{CapabilityCheck, ProbeError, ProbeResult, SharedSink};

const KEY: &str = "test";
const VALUE: i64 = 42;

/// Sum of the squares of the even numbers in `1..=limit`.
pub fn sum_of_even_squares(limit: i64) -> i64 {
    (1..=limit).filter(|n| n % 2 == 0).map(|n| n * n).sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionsCheck;

impl CollectionsCheck {
    pub const NAME: &'static str = "collections";
}

#[async_trait]
impl CapabilityCheck for CollectionsCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Insert into a hash map and fold an iterator pipeline"
    }

    async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
        let mut map = HashMap::new();
        map.insert(KEY, VALUE);

        if map.get(KEY) != Some(&VALUE) {
            return Err(ProbeError::fault(Self::NAME, "inserted key not found"));
        }
        sink.line(&format!("HashMap: {map:?}"));

        sink.line(&format!(
            "Sum of squares of even numbers 1-10: {}",
            sum_of_even_squares(10)
        ));
        Ok(())
    }
}
