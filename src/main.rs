use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use order_scorer::output::ColorMode;
use order_scorer::scoring::{DegeneratePolicy, OrderComparator};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "order-scorer")]
#[command(about = "Score an ordering of answers against the correct ordering", long_about = None)]
#[command(version)]
#[command(after_help = "Example:\n  order-scorer \"1,2,3,4,5\" \"2,1,3,5,4\" 10")]
struct Cli {
    /// Correct answers in order, separated by any non-alphanumeric characters
    reference: String,

    /// Provided answers in order, separated the same way
    candidate: String,

    /// Points awarded for a perfect ordering (default: 100)
    points: Option<u32>,

    /// Compare answers with exact case
    #[arg(long, conflicts_with = "ignore_case")]
    case_sensitive: bool,

    /// Ignore case when comparing answers (the default)
    #[arg(long)]
    ignore_case: bool,

    /// Fewer than two provided answers: score as zero, or reject
    #[arg(long, value_name = "zero|reject", value_parser = DegeneratePolicy::parse)]
    degenerate: Option<DegeneratePolicy>,

    /// Colored output: auto, always, never
    #[arg(long, value_name = "WHEN", value_parser = ColorMode::parse)]
    color: Option<ColorMode>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/order-scorer/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

impl Cli {
    /// Flag wins over config file; `None` defers to the file.
    fn case_sensitive_override(&self) -> Option<bool> {
        if self.case_sensitive {
            Some(true)
        } else if self.ignore_case {
            Some(false)
        } else {
            None
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let settings = match order_scorer::config::load_settings(config_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = order_scorer::config::validate_settings(&settings) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let points_available = cli.points.unwrap_or_else(|| settings.points_available());
    let case_sensitive = cli
        .case_sensitive_override()
        .unwrap_or_else(|| settings.case_sensitive());
    let policy = cli.degenerate.unwrap_or_else(|| settings.degenerate_policy());
    let use_colors = cli.color.unwrap_or_else(|| settings.color_mode()).use_colors();

    debug!(points_available, case_sensitive, policy = %policy, "resolved options");

    let reference = order_scorer::tokenize::split_answers(&cli.reference);
    let candidate = order_scorer::tokenize::split_answers(&cli.candidate);

    let comparator = match OrderComparator::builder()
        .reference(&reference)
        .case_sensitive(case_sensitive)
        .degenerate_policy(policy)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let score = match comparator.score(&candidate, points_available) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let candidate = comparator.normalize(&candidate);
    if cli.json {
        match order_scorer::output::format_json(comparator.reference(), &candidate, &score) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to encode result: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    } else {
        println!(
            "{}",
            order_scorer::output::format_report(
                comparator.reference(),
                &candidate,
                &score,
                use_colors
            )
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["order-scorer", "a,b,c", "c,b,a"]).unwrap();
        assert_eq!(cli.reference, "a,b,c");
        assert_eq!(cli.candidate, "c,b,a");
        assert_eq!(cli.points, None);
        assert_eq!(cli.case_sensitive_override(), None);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_points_and_flags() {
        let cli = Cli::try_parse_from([
            "order-scorer",
            "a b",
            "b a",
            "10",
            "--case-sensitive",
            "--degenerate",
            "reject",
            "--color",
            "never",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.points, Some(10));
        assert_eq!(cli.case_sensitive_override(), Some(true));
        assert_eq!(cli.degenerate, Some(DegeneratePolicy::Reject));
        assert_eq!(cli.color, Some(ColorMode::Never));
        assert!(cli.json);
    }

    #[test]
    fn test_ignore_case_flag() {
        let cli = Cli::try_parse_from(["order-scorer", "a", "b", "--ignore-case"]).unwrap();
        assert_eq!(cli.case_sensitive_override(), Some(false));
    }

    #[test]
    fn test_case_flags_conflict() {
        let result = Cli::try_parse_from([
            "order-scorer",
            "a",
            "b",
            "--case-sensitive",
            "--ignore-case",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_candidate_is_error() {
        assert!(Cli::try_parse_from(["order-scorer", "a,b"]).is_err());
    }

    #[test]
    fn test_negative_points_rejected() {
        assert!(Cli::try_parse_from(["order-scorer", "a,b", "b,a", "-5"]).is_err());
    }

    #[test]
    fn test_invalid_degenerate_rejected() {
        assert!(
            Cli::try_parse_from(["order-scorer", "a,b", "b,a", "--degenerate", "skip"]).is_err()
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
