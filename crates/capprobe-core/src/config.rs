//! Probe configuration types and validation.
//!
//! This module contains the configuration consumed by the probe runner.
//! These are pure domain types; loading from flags, `CAPPROBE_*` variables
//! and `.env` files happens in the CLI adapter.

/// Default banner title printed at the top of every run.
pub const DEFAULT_TITLE: &str = "capprobe Runtime Probe";

/// Default environment variable holding the runtime version.
pub const DEFAULT_VERSION_VAR: &str = "RUNTIME_VERSION";

/// Default environment variable holding the runtime vendor/distribution.
pub const DEFAULT_VENDOR_VAR: &str = "RUNTIME_VENDOR";

/// Default environment variable holding the runtime install path.
pub const DEFAULT_HOME_VAR: &str = "RUNTIME_HOME";

/// Text printed for an identity fact whose variable is not set.
pub const PLACEHOLDER: &str = "(not set)";

/// Names of the three environment variables that make up a runtime identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityKeys {
    pub version: String,
    pub vendor: String,
    pub home: String,
}

impl Default for IdentityKeys {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION_VAR.to_string(),
            vendor: DEFAULT_VENDOR_VAR.to_string(),
            home: DEFAULT_HOME_VAR.to_string(),
        }
    }
}

impl IdentityKeys {
    /// Iterate the keys in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.version.as_str(),
            self.vendor.as_str(),
            self.home.as_str(),
        ]
        .into_iter()
    }
}

/// Configuration for a single probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Banner title, printed as `=== <title> ===`.
    pub title: String,

    /// Environment variables consulted for the runtime identity.
    pub identity_keys: IdentityKeys,

    /// Text printed in place of a missing identity fact.
    pub placeholder: String,

    /// Restrict the run to these checks (empty = the plain-run set, declared order kept).
    pub only: Vec<String>,

    /// Append the extended checks to a plain run. Ignored when `only` is set.
    pub extended: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            identity_keys: IdentityKeys::default(),
            placeholder: PLACEHOLDER.to_string(),
            only: Vec::new(),
            extended: false,
        }
    }
}

impl ProbeConfig {
    /// Whether a check with this name is selected by the `only` filter.
    pub fn selects(&self, check_name: &str) -> bool {
        self.only.is_empty() || self.only.iter().any(|name| name == check_name)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Identity variable name for {field} must not be empty")]
    EmptyVariableName { field: &'static str },

    #[error("Identity variable name {name:?} contains an invalid character")]
    InvalidVariableName { name: String },

    #[error("Unknown check {name:?} (available: {available})")]
    UnknownCheck { name: String, available: String },

    #[error("Banner title must not be empty")]
    EmptyTitle,
}

/// Validate a probe configuration.
///
/// Check names in `only` are validated against the registry by the runtime
/// crate, which owns the set of known checks.
pub fn validate_config(config: &ProbeConfig) -> Result<(), ConfigError> {
    if config.title.trim().is_empty() {
        return Err(ConfigError::EmptyTitle);
    }

    let keys = &config.identity_keys;
    for (field, name) in [
        ("version", &keys.version),
        ("vendor", &keys.vendor),
        ("home", &keys.home),
    ] {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyVariableName { field });
        }
        // Same restrictions std::env::var applies before it panics or errors.
        if name.contains('=') || name.contains('\0') {
            return Err(ConfigError::InvalidVariableName { name: name.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ProbeConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.identity_keys.version, "RUNTIME_VERSION");
        assert_eq!(config.placeholder, PLACEHOLDER);
    }

    #[test]
    fn test_empty_variable_name_rejected() {
        let mut config = ProbeConfig::default();
        config.identity_keys.vendor = "  ".to_string();
        assert_eq!(
            validate_config(&config),
            Err(ConfigError::EmptyVariableName { field: "vendor" })
        );
    }

    #[test]
    fn test_variable_name_with_equals_rejected() {
        let mut config = ProbeConfig::default();
        config.identity_keys.home = "JAVA=HOME".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidVariableName { .. })
        ));
    }

    #[test]
    fn test_empty_title_rejected() {
        let config = ProbeConfig {
            title: String::new(),
            ..ProbeConfig::default()
        };
        assert_eq!(validate_config(&config), Err(ConfigError::EmptyTitle));
    }

    #[test]
    fn test_selects_all_when_filter_empty() {
        let config = ProbeConfig::default();
        assert!(config.selects("pattern-match"));
        assert!(config.selects("anything"));
    }

    #[test]
    fn test_selects_only_named_checks() {
        let config = ProbeConfig {
            only: vec!["concurrent-task".to_string()],
            ..ProbeConfig::default()
        };
        assert!(config.selects("concurrent-task"));
        assert!(!config.selects("pattern-match"));
    }

    #[test]
    fn test_identity_keys_iterate_in_report_order() {
        let keys = IdentityKeys::default();
        let collected: Vec<&str> = keys.iter().collect();
        assert_eq!(
            collected,
            vec!["RUNTIME_VERSION", "RUNTIME_VENDOR", "RUNTIME_HOME"]
        );
    }
}
