//! Process runtime adapters for capprobe.
//!
//! Implements the ports defined in `capprobe-core`: the built-in capability
//! checks, identity sources backed by the process environment, and the
//! terminal output sink.
#![deny(unsafe_code)]

pub mod checks;
pub mod env;
mod terminal;

pub use checks::{
    AsyncSleepCheck, CHECK_NAMES, CheckInputs, CollectionsCheck, ConcurrentJoinCheck,
    ConcurrentTaskCheck, DEFAULT_CHECK_NAMES, EXTENDED_CHECK_NAMES, NestedDestructureCheck,
    PatternMatchCheck, SPAWN_SUCCESS, SerdeRoundtripCheck, all_checks, default_checks,
    describe_checks, extended_checks, select_checks,
};
pub use env::{OverlayEnv, ProcessEnv};
pub use terminal::TerminalSink;
