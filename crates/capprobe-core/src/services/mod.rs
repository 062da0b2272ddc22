//! Probe services.

mod report;
mod runner;

pub use report::{CheckOutcome, CheckRecord, RunReport};
pub use runner::{ProbeRunner, SUCCESS_MARKER};
