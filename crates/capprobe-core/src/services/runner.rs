//! The capability probe runner.
//!
//! Drives one run: banner, runtime identity, each registered check in
//! order, then the success marker. Recoverable check failures are written to
//! the error channel and the run continues; anything else propagates and the
//! success marker is never printed.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::config::{ProbeConfig, validate_config};
use crate::domain::RuntimeIdentity;
use crate::ports::{CapabilityCheck, IdentitySource, ProbeResult, SharedSink};

use super::report::{CheckOutcome, CheckRecord, RunReport};

/// Line printed when every check completed without a fatal error.
pub const SUCCESS_MARKER: &str = "✓ All capability checks passed!";

pub struct ProbeRunner {
    config: ProbeConfig,
    identity_source: Arc<dyn IdentitySource>,
    checks: Vec<Box<dyn CapabilityCheck>>,
    sink: SharedSink,
}

impl ProbeRunner {
    /// Create a runner with no checks registered.
    ///
    /// Fails if `config` does not validate.
    pub fn new(
        config: ProbeConfig,
        identity_source: Arc<dyn IdentitySource>,
        sink: SharedSink,
    ) -> ProbeResult<Self> {
        validate_config(&config)?;
        Ok(Self {
            config,
            identity_source,
            checks: Vec::new(),
            sink,
        })
    }

    /// Register checks; they run in the order given.
    #[must_use]
    pub fn with_checks(
        mut self,
        checks: impl IntoIterator<Item = Box<dyn CapabilityCheck>>,
    ) -> Self {
        self.checks.extend(checks);
        self
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    pub fn banner(&self) {
        self.sink.line(&format!("=== {} ===", self.config.title));
    }

    /// Read the identity facts and print one line per fact.
    pub fn report_identity(&self) -> RuntimeIdentity {
        let identity =
            RuntimeIdentity::resolve(self.identity_source.as_ref(), &self.config.identity_keys);
        debug!(present = identity.present_count(), "resolved runtime identity");

        for line in identity.lines(&self.config.placeholder) {
            self.sink.line(&line);
        }
        identity
    }

    /// Execute one check, absorbing recoverable failures.
    pub async fn run_check(&self, check: &dyn CapabilityCheck) -> ProbeResult<CheckOutcome> {
        debug!(check = check.name(), "running capability check");

        match check.run(Arc::clone(&self.sink)).await {
            Ok(()) => {
                debug!(check = check.name(), "capability check completed");
                Ok(CheckOutcome::Completed)
            }
            Err(err) if err.is_recoverable() => {
                let message = format!("{} check failed: {err}", check.name());
                warn!(check = check.name(), error = %err, "capability check recovered");
                self.sink.error_line(&message);
                Ok(CheckOutcome::Recovered { message })
            }
            Err(err) => {
                error!(check = check.name(), error = %err, "capability check aborted the run");
                Err(err)
            }
        }
    }

    pub fn finish(&self) {
        self.sink.line(SUCCESS_MARKER);
    }

    /// Perform a full run.
    ///
    /// Returns the report only if the success marker was printed.
    pub async fn run(&self) -> ProbeResult<RunReport> {
        let started_at = Utc::now();
        self.banner();
        let identity = self.report_identity();

        let mut records = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let outcome = self.run_check(check.as_ref()).await?;
            records.push(CheckRecord {
                name: check.name().to_string(),
                outcome,
            });
        }

        self.finish();

        let report = RunReport {
            started_at,
            identity,
            checks: records,
            output: Vec::new(),
            success: true,
        };
        info!(
            checks = report.checks.len(),
            recovered = report.recovered_count(),
            "probe run finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::ports::{MockIdentitySource, NoopSink, ProbeError, RecordingSink};
    use async_trait::async_trait;

    struct LineCheck(&'static str);

    #[async_trait]
    impl CapabilityCheck for LineCheck {
        fn name(&self) -> &'static str {
            self.0
        }

        fn description(&self) -> &'static str {
            "prints its own name"
        }

        async fn run(&self, sink: SharedSink) -> ProbeResult<()> {
            sink.line(self.0);
            Ok(())
        }
    }

    struct FailingCheck {
        recoverable: bool,
    }

    #[async_trait]
    impl CapabilityCheck for FailingCheck {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn description(&self) -> &'static str {
            "always fails"
        }

        async fn run(&self, _sink: SharedSink) -> ProbeResult<()> {
            if self.recoverable {
                Err(ProbeError::Interrupted {
                    reason: "task was cancelled".to_string(),
                })
            } else {
                Err(ProbeError::fault("failing", "no arm matched"))
            }
        }
    }

    fn full_source() -> MockIdentitySource {
        let mut source = MockIdentitySource::new();
        source.expect_lookup().returning(|key: &str| match key {
            "RUNTIME_VERSION" => Some("21.0.2".to_string()),
            "RUNTIME_VENDOR" => Some("Acme".to_string()),
            "RUNTIME_HOME" => Some("/opt/runtime".to_string()),
            _ => None,
        });
        source
    }

    fn build_runner(
        source: MockIdentitySource,
        checks: Vec<Box<dyn CapabilityCheck>>,
    ) -> (ProbeRunner, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let runner = ProbeRunner::new(ProbeConfig::default(), Arc::new(source), sink.clone())
            .unwrap()
            .with_checks(checks);
        (runner, sink)
    }

    #[tokio::test]
    async fn test_full_run_prints_in_order() {
        let (runner, sink) = build_runner(
            full_source(),
            vec![Box::new(LineCheck("one")), Box::new(LineCheck("two"))],
        );

        let report = runner.run().await.unwrap();

        assert_eq!(
            sink.stdout(),
            vec![
                "=== capprobe Runtime Probe ===",
                "Runtime Version: 21.0.2",
                "Runtime Vendor: Acme",
                "Runtime Home: /opt/runtime",
                "one",
                "two",
                SUCCESS_MARKER,
            ]
        );
        assert!(sink.stderr().is_empty());
        assert!(report.success);
        assert_eq!(report.checks.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_identity_does_not_fail() {
        let mut source = MockIdentitySource::new();
        source.expect_lookup().times(3).returning(|_| None);
        let (runner, sink) = build_runner(source, vec![]);

        runner.run().await.unwrap();

        assert_eq!(sink.stdout()[2], "Runtime Vendor: (not set)");
        assert_eq!(sink.stdout().last().map(String::as_str), Some(SUCCESS_MARKER));
    }

    #[tokio::test]
    async fn test_recoverable_failure_continues() {
        let (runner, sink) = build_runner(
            full_source(),
            vec![
                Box::new(FailingCheck { recoverable: true }),
                Box::new(LineCheck("after")),
            ],
        );

        let report = runner.run().await.unwrap();

        assert_eq!(
            sink.stderr(),
            vec!["failing check failed: interrupted while waiting for spawned task: task was cancelled"]
        );
        assert!(sink.stdout().contains(&"after".to_string()));
        assert_eq!(sink.stdout().last().map(String::as_str), Some(SUCCESS_MARKER));
        assert_eq!(report.recovered_count(), 1);
    }

    #[tokio::test]
    async fn test_fatal_failure_aborts_before_marker() {
        let (runner, sink) = build_runner(
            full_source(),
            vec![
                Box::new(FailingCheck { recoverable: false }),
                Box::new(LineCheck("never")),
            ],
        );

        let err = runner.run().await.unwrap_err();

        assert!(matches!(err, ProbeError::Fault { .. }));
        assert!(!sink.stdout().contains(&"never".to_string()));
        assert!(!sink.stdout().contains(&SUCCESS_MARKER.to_string()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ProbeConfig {
            title: " ".to_string(),
            ..ProbeConfig::default()
        };
        let result = ProbeRunner::new(
            config,
            Arc::new(MockIdentitySource::new()),
            Arc::new(NoopSink),
        );
        assert!(matches!(
            result,
            Err(ProbeError::Config(ConfigError::EmptyTitle))
        ));
    }

    #[tokio::test]
    async fn test_report_without_captured_output() {
        let runner = ProbeRunner::new(
            ProbeConfig::default(),
            Arc::new(full_source()),
            Arc::new(NoopSink),
        )
        .unwrap()
        .with_checks(vec![
            Box::new(LineCheck("one")) as Box<dyn CapabilityCheck>,
            Box::new(FailingCheck { recoverable: true }),
        ]);

        let report = runner.run().await.unwrap();

        assert!(report.success);
        assert!(report.output.is_empty());
        assert_eq!(report.identity.vendor.as_deref(), Some("Acme"));
        assert_eq!(report.checks[0].name, "one");
        assert!(report.checks[0].outcome.is_completed());
        assert_eq!(report.recovered_count(), 1);
    }

    #[test]
    fn test_run_check_from_sync_context() {
        let (runner, sink) = build_runner(full_source(), vec![]);
        let outcome = tokio_test::block_on(runner.run_check(&LineCheck("solo"))).unwrap();
        assert_eq!(outcome, CheckOutcome::Completed);
        assert_eq!(sink.stdout(), vec!["solo"]);
    }
}
