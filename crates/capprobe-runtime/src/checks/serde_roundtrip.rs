//! JSON round-trip check.

use async_trait::async_trait;
use capprobe_core::{CapabilityCheck, ProbeError, ProbeResult, SharedSink};
use serde::{Deserialize, Serialize};

/// Line printed once the decoded value matched the original.
pub const ROUNDTRIP_SUCCESS: &str = "✓ JSON round-trip preserved the value";

/// Record encoded and decoded by the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: "Alice".to_string(),
            age: 30,
        }
    }
}

#[derive(Default)]
pub struct SerdeRoundtripCheck {
    person: Person,
}

impl SerdeRoundtripCheck {
    pub const NAME: &'static str = "serde-roundtrip";

    pub const fn new(person: Person) -> Self {
        Self { person }
    }
}

#[async_trait]
impl CapabilityCheck for SerdeRoundtripCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Encode a record to JSON and decode it back"
    }

    async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
        let json = serde_json::to_string(&self.person)
            .map_err(|err| ProbeError::fault(Self::NAME, err.to_string()))?;
        sink.line(&format!("JSON: {json}"));

        let decoded: Person = serde_json::from_str(&json)
            .map_err(|err| ProbeError::fault(Self::NAME, err.to_string()))?;
        if decoded != self.person {
            return Err(ProbeError::fault(
                Self::NAME,
                format!("decoded {decoded:?} differs from {:?}", self.person),
            ));
        }

        sink.line(ROUNDTRIP_SUCCESS);
        Ok(())
    }
}
