use crate::core::Limits;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Decide fund-load events under daily and weekly velocity limits
#[derive(Parser, Debug)]
#[command(name = "fund-loads-engine")]
#[command(about = "Decide fund-load events under velocity limits", long_about = None)]
pub struct CliArgs {
    /// Input file of JSON-encoded load events, one per line
    #[arg(value_name = "INPUT", help = "Path to the input file (one JSON event per line)")]
    pub input_file: PathBuf,

    /// Override the daily accepted-total ceiling
    #[arg(
        long = "daily-limit",
        value_name = "AMOUNT",
        help = "Maximum accepted load total per customer per day (default: 5000)"
    )]
    pub daily_limit: Option<Decimal>,

    /// Override the daily accepted-count ceiling
    #[arg(
        long = "daily-count",
        value_name = "COUNT",
        help = "Maximum accepted transactions per customer per day (default: 3)"
    )]
    pub daily_count: Option<u32>,

    /// Override the weekly accepted-total ceiling
    #[arg(
        long = "weekly-limit",
        value_name = "AMOUNT",
        help = "Maximum accepted load total per customer per ISO week (default: 20000)"
    )]
    pub weekly_limit: Option<Decimal>,
}

impl CliArgs {
    /// Build the engine limits from CLI arguments
    ///
    /// Absent flags fall back to the production constants.
    pub fn to_limits(&self) -> Limits {
        let default = Limits::default();
        Limits {
            daily_total: self.daily_limit.unwrap_or(default.daily_total),
            daily_count: self.daily_count.unwrap_or(default.daily_count),
            weekly_total: self.weekly_limit.unwrap_or(default.weekly_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_DAILY_LOAD, MAX_DAILY_TRANSACTIONS, MAX_WEEKLY_LOAD};
    use rstest::rstest;

    #[test]
    fn test_input_path_is_required() {
        assert!(CliArgs::try_parse_from(["program"]).is_err());
    }

    #[test]
    fn test_defaults_match_production_limits() {
        let parsed = CliArgs::try_parse_from(["program", "input.txt"]).unwrap();
        let limits = parsed.to_limits();
        assert_eq!(limits.daily_total, MAX_DAILY_LOAD);
        assert_eq!(limits.daily_count, MAX_DAILY_TRANSACTIONS);
        assert_eq!(limits.weekly_total, MAX_WEEKLY_LOAD);
    }

    #[rstest]
    #[case::daily(
        &["program", "--daily-limit", "100.50", "input.txt"],
        Limits { daily_total: Decimal::new(10050, 2), ..Limits::default() }
    )]
    #[case::count(
        &["program", "--daily-count", "5", "input.txt"],
        Limits { daily_count: 5, ..Limits::default() }
    )]
    #[case::weekly(
        &["program", "--weekly-limit", "999", "input.txt"],
        Limits { weekly_total: Decimal::new(999, 0), ..Limits::default() }
    )]
    #[case::all(
        &["program", "--daily-limit", "10", "--daily-count", "1", "--weekly-limit", "20", "input.txt"],
        Limits {
            daily_total: Decimal::new(10, 0),
            daily_count: 1,
            weekly_total: Decimal::new(20, 0),
        }
    )]
    fn test_limit_overrides(#[case] args: &[&str], #[case] expected: Limits) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_limits(), expected);
    }

    #[rstest]
    #[case::bad_decimal(&["program", "--daily-limit", "abc", "input.txt"])]
    #[case::bad_count(&["program", "--daily-count", "-1", "input.txt"])]
    fn test_invalid_overrides_fail_parsing(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
