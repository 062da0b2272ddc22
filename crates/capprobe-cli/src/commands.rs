//! Commands enum and run arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use capprobe_core::config::{
    DEFAULT_HOME_VAR, DEFAULT_TITLE, DEFAULT_VENDOR_VAR, DEFAULT_VERSION_VAR,
};
use capprobe_core::{ProbeValue, Rectangle};

/// Available capprobe commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Report runtime identity and run the capability checks (default)
    Run(RunArgs),

    /// List the registered capability checks
    List,
}

/// Arguments for a probe run.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Run only these checks, in declared order (repeatable or comma-separated)
    #[arg(long = "only", value_name = "CHECK", value_delimiter = ',')]
    pub only: Vec<String>,

    /// Also run the extended checks after the default three
    #[arg(long, conflicts_with = "only")]
    pub extended: bool,

    /// Input for the pattern-match check: null, true/false, integer, float, or text
    #[arg(long, value_name = "LITERAL", allow_hyphen_values = true)]
    pub value: Option<ProbeValue>,

    /// Rectangle for the nested-destructure check
    #[arg(long, value_name = "X1,Y1,X2,Y2", allow_hyphen_values = true)]
    pub rect: Option<Rectangle>,

    /// Print a JSON run report instead of the plain transcript
    #[arg(long)]
    pub json: bool,

    /// Read identity values from this dotenv file before the process environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Banner title
    #[arg(long, env = "CAPPROBE_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Environment variable holding the runtime version
    #[arg(long, env = "CAPPROBE_VERSION_VAR", default_value = DEFAULT_VERSION_VAR)]
    pub version_var: String,

    /// Environment variable holding the runtime vendor
    #[arg(long, env = "CAPPROBE_VENDOR_VAR", default_value = DEFAULT_VENDOR_VAR)]
    pub vendor_var: String,

    /// Environment variable holding the runtime install path
    #[arg(long, env = "CAPPROBE_HOME_VAR", default_value = DEFAULT_HOME_VAR)]
    pub home_var: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use capprobe_core::Point;
    use clap::Parser;

    fn run_args(argv: &[&str]) -> RunArgs {
        match Cli::parse_from(argv).into_command() {
            Commands::Run(args) => args,
            Commands::List => panic!("expected run"),
        }
    }

    #[test]
    fn test_defaults() {
        let args = run_args(&["capprobe", "run"]);
        assert!(args.only.is_empty());
        assert!(args.value.is_none());
        assert_eq!(args.version_var, DEFAULT_VERSION_VAR);
    }

    #[test]
    fn test_negative_value_and_rect() {
        let args = run_args(&["capprobe", "run", "--value", "-3", "--rect", "-1,2,3,-4"]);
        assert_eq!(args.value, Some(ProbeValue::Integer(-3)));
        assert_eq!(
            args.rect,
            Some(Rectangle::new(Point::new(-1, 2), Point::new(3, -4)))
        );
    }

    #[test]
    fn test_only_accepts_comma_list() {
        let args = run_args(&["capprobe", "run", "--only", "pattern-match,concurrent-task"]);
        assert_eq!(args.only, vec!["pattern-match", "concurrent-task"]);
    }

    #[test]
    fn test_extended_conflicts_with_only() {
        assert!(run_args(&["capprobe", "--extended"]).extended);
        let result = Cli::try_parse_from(["capprobe", "--extended", "--only", "collections"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_rect_is_rejected() {
        let result = Cli::try_parse_from(["capprobe", "run", "--rect", "1,2"]);
        assert!(result.is_err());
    }
}
