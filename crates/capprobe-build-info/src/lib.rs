//! Build/version metadata for the capprobe binary.
//!
//! This describes the probe itself, not the runtime being probed. Values are
//! fixed at compile time by the build script; when git data is unavailable
//! the SHA is `"unknown"` and every version string falls back to `SemVer`.

/// `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Short git SHA, or `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// Whether the working tree was dirty at build time.
pub const GIT_DIRTY: bool = matches!(env!("VERGEN_GIT_DIRTY").as_bytes(), b"true");

/// True if [`GIT_SHA_SHORT`] is a seven-digit hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const VERSION_WITH_SHA: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string for `capprobe --version`, e.g. `0.1.0 (a1b2c3d)` or `0.1.0`.
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    VERSION_WITH_SHA
} else {
    SEMVER
};

/// Snapshot of the build metadata, for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub semver: &'static str,
    pub git_sha: Option<&'static str>,
    pub dirty: bool,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            semver: SEMVER,
            git_sha: if HAS_GIT_SHA { Some(GIT_SHA_SHORT) } else { None },
            dirty: GIT_DIRTY,
        }
    }
}

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}
