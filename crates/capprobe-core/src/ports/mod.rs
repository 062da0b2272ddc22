//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the probe runner depends on without
//! committing to specific implementations. Adapters (e.g., `capprobe-runtime`)
//! implement these traits.
//!
//! # Design Rules
//!
//! - No adapter-specific types in signatures
//! - Domain errors only, never I/O or runtime join errors
//! - Traits are object-safe and `Send + Sync`

mod capability_check;
mod identity_source;
mod output;

use thiserror::Error;

pub use capability_check::CapabilityCheck;
pub use identity_source::IdentitySource;
#[cfg(test)]
pub use identity_source::MockIdentitySource;
pub use output::{Channel, NoopSink, OutputLine, OutputSink, RecordingSink, SharedSink};

use crate::config::ConfigError;

/// Errors raised by capability checks and the runner.
///
/// Only [`ProbeError::Interrupted`] is recoverable; every other variant
/// aborts the run before the success marker.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Waiting on a spawned unit of work was interrupted.
    #[error("interrupted while waiting for spawned task: {reason}")]
    Interrupted { reason: String },

    /// A check hit a condition it has no handling for.
    #[error("check '{check}' faulted: {reason}")]
    Fault { check: String, reason: String },

    /// Configuration rejected before the run started.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ProbeError {
    /// Construct a fault attributed to `check`.
    pub fn fault(check: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fault {
            check: check.into(),
            reason: reason.into(),
        }
    }

    /// Whether the runner may report this error and carry on.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_interrupted_is_recoverable() {
        let interrupted = ProbeError::Interrupted {
            reason: "task was cancelled".to_string(),
        };
        assert!(interrupted.is_recoverable());
        assert!(!ProbeError::fault("pattern-match", "boom").is_recoverable());
        assert!(!ProbeError::from(ConfigError::EmptyTitle).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = ProbeError::fault("nested-destructure", "unexpected shape");
        assert_eq!(
            err.to_string(),
            "check 'nested-destructure' faulted: unexpected shape"
        );
    }
}
