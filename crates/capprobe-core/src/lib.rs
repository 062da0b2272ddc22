//! Core domain types, ports, and the probe runner for capprobe.
//!
//! Core owns the pure types and the traits that adapters implement:
//! `capprobe-runtime` supplies the concrete checks and the process
//! environment, `capprobe-cli` wires them together.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

pub use config::{ConfigError, IdentityKeys, PLACEHOLDER, ProbeConfig, validate_config};
pub use domain::{
    Classification, ParseRectangleError, Point, ProbeValue, Rectangle, RuntimeIdentity, Shape,
    classify, describe_rectangle,
};
pub use ports::{
    CapabilityCheck, Channel, IdentitySource, NoopSink, OutputLine, OutputSink, ProbeError,
    ProbeResult, RecordingSink, SharedSink,
};
pub use services::{CheckOutcome, CheckRecord, ProbeRunner, RunReport, SUCCESS_MARKER};
