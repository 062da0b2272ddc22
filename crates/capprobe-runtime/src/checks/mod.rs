//! Built-in capability checks and their registry.
//!
//! The registry fixes the declared order: pattern match, concurrent task,
//! nested destructure, then the extended checks (async sleep, concurrent
//! join, serde round-trip, collections). A plain run executes only the first
//! three. `extended` appends the rest; selection with `--only` filters the
//! full list and never reorders it.

mod async_sleep;
mod collections;
mod concurrent_join;
mod concurrent_task;
mod nested_destructure;
mod pattern_match;
mod serde_roundtrip;

use capprobe_core::{CapabilityCheck, ConfigError, ProbeConfig, ProbeValue, Shape};

pub use async_sleep::{AsyncSleepCheck, DEFAULT_DELAY};
pub use collections::{CollectionsCheck, sum_of_even_squares};
pub use concurrent_join::ConcurrentJoinCheck;
pub use concurrent_task::{ConcurrentTaskCheck, SPAWN_SUCCESS, UnitOfWork, describe_current_task};
pub use nested_destructure::NestedDestructureCheck;
pub use pattern_match::PatternMatchCheck;
pub use serde_roundtrip::{Person, ROUNDTRIP_SUCCESS, SerdeRoundtripCheck};

/// Checks executed by a plain run, in declared order.
pub const DEFAULT_CHECK_NAMES: [&str; 3] = [
    PatternMatchCheck::NAME,
    ConcurrentTaskCheck::NAME,
    NestedDestructureCheck::NAME,
];

/// Checks that run only when requested, in declared order.
pub const EXTENDED_CHECK_NAMES: [&str; 4] = [
    AsyncSleepCheck::NAME,
    ConcurrentJoinCheck::NAME,
    SerdeRoundtripCheck::NAME,
    CollectionsCheck::NAME,
];

/// Names of all built-in checks, in declared order.
pub const CHECK_NAMES: [&str; 7] = [
    PatternMatchCheck::NAME,
    ConcurrentTaskCheck::NAME,
    NestedDestructureCheck::NAME,
    AsyncSleepCheck::NAME,
    ConcurrentJoinCheck::NAME,
    SerdeRoundtripCheck::NAME,
    CollectionsCheck::NAME,
];

/// Inputs fed to the built-in checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckInputs {
    pub value: ProbeValue,
    pub shape: Shape,
}

/// Checks of a plain run, in declared order.
pub fn default_checks(inputs: &CheckInputs) -> Vec<Box<dyn CapabilityCheck>> {
    vec![
        Box::new(PatternMatchCheck::new(inputs.value.clone())),
        Box::new(ConcurrentTaskCheck::new()),
        Box::new(NestedDestructureCheck::new(inputs.shape)),
    ]
}

/// Extended checks, in declared order.
pub fn extended_checks() -> Vec<Box<dyn CapabilityCheck>> {
    vec![
        Box::new(AsyncSleepCheck::default()),
        Box::new(ConcurrentJoinCheck::default()),
        Box::new(SerdeRoundtripCheck::default()),
        Box::new(CollectionsCheck),
    ]
}

/// Every built-in check, in declared order.
pub fn all_checks(inputs: &CheckInputs) -> Vec<Box<dyn CapabilityCheck>> {
    let mut checks = default_checks(inputs);
    checks.extend(extended_checks());
    checks
}

/// Built-in checks for `config`.
///
/// With an empty `only` this is the plain-run set, plus the extended checks
/// when `config.extended` is set. Otherwise it is every check named in
/// `only`. Fails on the first name in `only` that is not a registered check.
pub fn select_checks(
    config: &ProbeConfig,
    inputs: &CheckInputs,
) -> Result<Vec<Box<dyn CapabilityCheck>>, ConfigError> {
    if let Some(unknown) = config
        .only
        .iter()
        .find(|name| !CHECK_NAMES.contains(&name.as_str()))
    {
        return Err(ConfigError::UnknownCheck {
            name: unknown.clone(),
            available: CHECK_NAMES.join(", "),
        });
    }

    let candidates = if config.only.is_empty() && !config.extended {
        default_checks(inputs)
    } else {
        all_checks(inputs)
    };

    Ok(candidates
        .into_iter()
        .filter(|check| config.selects(check.name()))
        .collect())
}

/// `(name, description)` for every built-in check.
pub fn describe_checks() -> Vec<(&'static str, &'static str)> {
    all_checks(&CheckInputs::default())
        .iter()
        .map(|check| (check.name(), check.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(checks: &[Box<dyn CapabilityCheck>]) -> Vec<&'static str> {
        checks.iter().map(|check| check.name()).collect()
    }

    #[test]
    fn test_default_order() {
        let checks = default_checks(&CheckInputs::default());
        assert_eq!(names(&checks), DEFAULT_CHECK_NAMES.to_vec());
    }

    #[test]
    fn test_all_checks_order() {
        let checks = all_checks(&CheckInputs::default());
        assert_eq!(names(&checks), CHECK_NAMES.to_vec());
        assert_eq!(names(&extended_checks()), EXTENDED_CHECK_NAMES.to_vec());
        assert_eq!(&CHECK_NAMES[..3], &DEFAULT_CHECK_NAMES[..]);
    }

    #[test]
    fn test_plain_run_excludes_extended() {
        let checks = select_checks(&ProbeConfig::default(), &CheckInputs::default()).unwrap();
        assert_eq!(names(&checks), DEFAULT_CHECK_NAMES.to_vec());
    }

    #[test]
    fn test_extended_appends_after_default() {
        let config = ProbeConfig {
            extended: true,
            ..ProbeConfig::default()
        };
        let checks = select_checks(&config, &CheckInputs::default()).unwrap();
        assert_eq!(names(&checks), CHECK_NAMES.to_vec());
    }

    #[test]
    fn test_only_can_name_extended_check() {
        let config = ProbeConfig {
            only: vec!["collections".to_string(), "pattern-match".to_string()],
            ..ProbeConfig::default()
        };
        let checks = select_checks(&config, &CheckInputs::default()).unwrap();
        assert_eq!(names(&checks), vec!["pattern-match", "collections"]);
    }

    #[test]
    fn test_select_keeps_declared_order() {
        let config = ProbeConfig {
            only: vec![
                "nested-destructure".to_string(),
                "pattern-match".to_string(),
            ],
            ..ProbeConfig::default()
        };
        let checks = select_checks(&config, &CheckInputs::default()).unwrap();
        assert_eq!(names(&checks), vec!["pattern-match", "nested-destructure"]);
    }

    #[test]
    fn test_select_rejects_unknown_name() {
        let config = ProbeConfig {
            only: vec!["record-patterns".to_string()],
            ..ProbeConfig::default()
        };
        let err = select_checks(&config, &CheckInputs::default())
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::UnknownCheck { ref name, .. } if name == "record-patterns"));
        assert!(err.to_string().contains("concurrent-task"));
    }

    #[test]
    fn test_describe_checks_lists_all() {
        let described = describe_checks();
        assert_eq!(described.len(), CHECK_NAMES.len());
        assert!(described.iter().all(|(_, desc)| !desc.is_empty()));
    }
}
