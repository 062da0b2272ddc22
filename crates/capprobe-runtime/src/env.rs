//! Identity sources backed by the process environment.

use std::collections::HashMap;

use capprobe_core::IdentitySource;

/// Reads identity values straight from the process environment.
///
/// A variable that is unset or not valid unicode counts as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl IdentitySource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed values layered over another source.
///
/// Used for `--env-file`: entries from the file win, everything else falls
/// through to `fallback`. The process environment itself is never modified.
pub struct OverlayEnv<S> {
    overrides: HashMap<String, String>,
    fallback: S,
}

impl<S: IdentitySource> OverlayEnv<S> {
    pub fn new(overrides: HashMap<String, String>, fallback: S) -> Self {
        Self {
            overrides,
            fallback,
        }
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl<S: IdentitySource> IdentitySource for OverlayEnv<S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .get(key)
            .cloned()
            .or_else(|| self.fallback.lookup(key))
    }
}
