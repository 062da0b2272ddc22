//! Identity source port.
//!
//! Abstracts the process-wide environment so the runner can be driven by
//! fixed values in tests. The process implementation lives in
//! `capprobe-runtime`.

/// Read-only lookup of named environment values.
#[cfg_attr(test, mockall::automock)]
pub trait IdentitySource: Send + Sync {
    /// Return the value for `key`, or `None` when it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}
