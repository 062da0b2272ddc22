//! List command handler.

use anyhow::Result;
use capprobe_runtime::{DEFAULT_CHECK_NAMES, describe_checks};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Format one row of the check table.
pub fn format_row(name: &str, kind: &str, description: &str) -> String {
    format!("{name:<22} {kind:<10} {description}")
}

/// `default` for checks of a plain run, `extended` for the rest.
pub fn check_kind(name: &str) -> &'static str {
    if DEFAULT_CHECK_NAMES.contains(&name) {
        "default"
    } else {
        "extended"
    }
}

/// Execute the list command.
///
/// Prints every registered check in the order a run executes them.
pub fn execute() -> Result<()> {
    println!("{BOLD}{}{RESET}", format_row("CHECK", "RUNS", "DESCRIPTION"));
    println!("{}", "=".repeat(80));
    for (name, description) in describe_checks() {
        println!("{}", format_row(name, check_kind(name), description));
    }
    Ok(())
}
