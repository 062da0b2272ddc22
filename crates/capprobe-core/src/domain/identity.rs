//! Runtime identity: the three facts reported at the top of every run.

use serde::Serialize;

use crate::config::IdentityKeys;
use crate::ports::IdentitySource;

/// Version, vendor and install path of the runtime under probe.
///
/// Each fact is optional; a missing variable is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeIdentity {
    pub version: Option<String>,
    pub vendor: Option<String>,
    pub home: Option<String>,
}

impl RuntimeIdentity {
    /// Read all three facts from `source` using the configured variable names.
    pub fn resolve(source: &dyn IdentitySource, keys: &IdentityKeys) -> Self {
        let mut values = keys.iter().map(|key| source.lookup(key));
        Self {
            version: values.next().flatten(),
            vendor: values.next().flatten(),
            home: values.next().flatten(),
        }
    }

    /// Formatted report lines, substituting `placeholder` for missing facts.
    pub fn lines(&self, placeholder: &str) -> [String; 3] {
        let show = |value: Option<&str>| value.unwrap_or(placeholder).to_string();
        [
            format!("Runtime Version: {}", show(self.version.as_deref())),
            format!("Runtime Vendor: {}", show(self.vendor.as_deref())),
            format!("Runtime Home: {}", show(self.home.as_deref())),
        ]
    }

    /// Number of facts that were present.
    pub fn present_count(&self) -> usize {
        [&self.version, &self.vendor, &self.home]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}
