/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_BASE_URL;

/// todoreport — report an employee's task progress from a REST API.
#[derive(Debug, Parser)]
#[command(
    name = "todoreport",
    about = "Report an employee's task progress from a REST API",
    version
)]
pub struct Cli {
    /// Employee ID (decimal digits only).
    #[arg(value_name = "EMPLOYEE_ID")]
    pub employee_id: String,

    /// Where to send the report.
    #[arg(long, value_name = "MODE", default_value = "console")]
    pub export: ExportMode,

    /// API root serving `/users` and `/todos`.
    #[arg(
        long,
        env = "TODOREPORT_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Fetch tasks with the embedded user (`_expand=user`) instead of a
    /// separate employee lookup.
    #[arg(long)]
    pub expand: bool,

    /// Directory for CSV/JSON output files.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Print request and timing diagnostics to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Export modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ExportMode {
    /// Summary of completed tasks on stdout.
    #[default]
    Console,
    /// All tasks to `{id}.csv`.
    Csv,
    /// All tasks to `{id}.json`.
    Json,
}

/// One-line usage shown on argument errors.
pub const USAGE: &str = "Usage: todoreport [OPTIONS] <EMPLOYEE_ID>";

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["todoreport", "3"]).unwrap();
        assert_eq!(cli.employee_id, "3");
        assert_eq!(cli.export, ExportMode::Console);
        assert!(!cli.expand);
        assert_eq!(cli.out_dir, PathBuf::from("."));
    }

    #[test]
    fn test_export_mode_parsing() {
        let cli = Cli::try_parse_from(["todoreport", "--export", "json", "3"]).unwrap();
        assert_eq!(cli.export, ExportMode::Json);
        let cli = Cli::try_parse_from(["todoreport", "3", "--export", "csv"]).unwrap();
        assert_eq!(cli.export, ExportMode::Csv);
    }

    #[test]
    fn test_wrong_argument_count_rejected() {
        assert!(Cli::try_parse_from(["todoreport"]).is_err());
        assert!(Cli::try_parse_from(["todoreport", "1", "2"]).is_err());
    }

    #[test]
    fn test_non_digit_id_is_left_to_validator() {
        let cli = Cli::try_parse_from(["todoreport", "abc"]).unwrap();
        assert_eq!(cli.employee_id, "abc");
    }
}
