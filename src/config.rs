//! Configuration types for chess-walker
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation
//! - Seed user parsing (NAME:RATING)

use crate::client::{GameMode, UserRating};
use crate::error::ConfigError;
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

/// Default chess data service endpoint
const DEFAULT_ENDPOINT: &str = "http://localhost:8000/fetch-chess-data";

/// Default number of users to process per game mode
const DEFAULT_BUDGET: u32 = 50;

/// Default number of recent games requested per user
const DEFAULT_GAMES_COUNT: u32 = 10;

/// Default per-request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Seed users the walk starts from when none are given
const DEFAULT_SEEDS: [(&str, i32); 2] = [("Hexaquarks1", 1900), ("fifthart", 1800)];

/// Budget limit
const MAX_BUDGET: u32 = 10_000;

/// Games-per-request limit
const MAX_GAMES_COUNT: u32 = 100;

/// Timeout limit
const MAX_TIMEOUT_SECS: u64 = 300;

/// Regex for validating seed usernames
static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Lichess-style account names: 2-30 chars, letters/digits/underscore/
    // hyphen, starting with a letter or digit
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{1,29}$").expect("Invalid username regex")
});

/// Bounded chess-player graph walker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chess-walker",
    version,
    about = "Bounded chess-player graph walker with rating-balanced sampling",
    long_about = "Walks the graph of chess players reachable from a set of seed users, one\n\
                  traversal per game mode. Each player is fetched from the chess data\n\
                  service (which ingests the games as a side effect); the opponents in the\n\
                  response feed the frontier. Frontier selection keeps processed players\n\
                  balanced across six 400-point rating bands.",
    after_help = "EXAMPLES:\n    \
        chess-walker\n    \
        chess-walker --budget 20 --mode blitz\n    \
        chess-walker --seed Hexaquarks1:1900 --seed fifthart:1800\n    \
        chess-walker --endpoint http://localhost:8000/fetch-chess-data --report walk.json"
)]
pub struct CliArgs {
    /// Chess data service endpoint
    #[arg(short, long, default_value = DEFAULT_ENDPOINT, value_name = "URL")]
    pub endpoint: String,

    /// Number of users to process per game mode
    #[arg(short, long, default_value_t = DEFAULT_BUDGET, value_name = "NUM")]
    pub budget: u32,

    /// Number of recent games requested per user
    #[arg(short, long, default_value_t = DEFAULT_GAMES_COUNT, value_name = "NUM")]
    pub games: u32,

    /// Seed user to start from (can be repeated; built-in seeds if omitted)
    #[arg(short, long = "seed", value_name = "NAME:RATING", action = clap::ArgAction::Append)]
    pub seeds: Vec<String>,

    /// Game mode to traverse (can be repeated; all modes if omitted)
    #[arg(short, long = "mode", value_name = "MODE", action = clap::ArgAction::Append)]
    pub modes: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Write a JSON summary of the run to this file
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Quiet mode - suppress header and progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Validated service endpoint
    pub endpoint: Url,

    /// Users to process per mode. The walk may process one more than this;
    /// see the traversal loop.
    pub budget: u32,

    /// Games requested per user
    pub games_count: u32,

    /// Seed users, in the order given
    pub seeds: Vec<UserRating>,

    /// Modes to traverse, in run order
    pub modes: Vec<GameMode>,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Optional JSON report path
    pub report_path: Option<PathBuf>,

    /// Show progress indicator
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl WalkConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let endpoint = parse_endpoint(&args.endpoint)?;

        // Validate budget
        if args.budget == 0 || args.budget > MAX_BUDGET {
            return Err(ConfigError::InvalidBudget {
                value: args.budget,
                max: MAX_BUDGET,
            });
        }

        // Validate games count
        if args.games == 0 || args.games > MAX_GAMES_COUNT {
            return Err(ConfigError::InvalidGamesCount {
                value: args.games,
                max: MAX_GAMES_COUNT,
            });
        }

        // Validate timeout
        if args.timeout == 0 || args.timeout > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                value: args.timeout,
                max: MAX_TIMEOUT_SECS,
            });
        }

        // Parse seeds, falling back to the built-in pair
        let seeds = if args.seeds.is_empty() {
            default_seeds()
        } else {
            args.seeds
                .iter()
                .map(|raw| parse_seed(raw))
                .collect::<Result<Vec<_>, _>>()?
        };

        // Parse modes, keeping CLI order and rejecting repeats
        let modes = if args.modes.is_empty() {
            GameMode::ALL.to_vec()
        } else {
            let mut modes: Vec<GameMode> = Vec::with_capacity(args.modes.len());
            for raw in &args.modes {
                let mode: GameMode = raw.parse()?;
                if modes.contains(&mode) {
                    return Err(ConfigError::DuplicateMode {
                        mode: mode.to_string(),
                    });
                }
                modes.push(mode);
            }
            modes
        };

        Ok(Self {
            endpoint,
            budget: args.budget,
            games_count: args.games,
            seeds,
            modes,
            timeout_secs: args.timeout,
            report_path: args.report,
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }
}

impl Default for WalkConfig {
    /// Configuration equal to running the CLI with no arguments
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("Invalid default endpoint"),
            budget: DEFAULT_BUDGET,
            games_count: DEFAULT_GAMES_COUNT,
            seeds: default_seeds(),
            modes: GameMode::ALL.to_vec(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            report_path: None,
            show_progress: true,
            verbose: false,
        }
    }
}

fn default_seeds() -> Vec<UserRating> {
    DEFAULT_SEEDS
        .iter()
        .map(|&(name, rating)| UserRating::new(name, rating))
        .collect()
}

/// Parse and validate the service endpoint
fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// Parse a NAME:RATING seed argument
///
/// The name must be a plausible account name (see `USERNAME_REGEX`); the
/// rating may be any integer, including ratings outside the tracked bands.
pub fn parse_seed(raw: &str) -> Result<UserRating, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidSeed {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let (name, rating) = raw
        .split_once(':')
        .ok_or_else(|| invalid("expected NAME:RATING"))?;

    let name = name.trim();
    if !USERNAME_REGEX.is_match(name) {
        return Err(invalid(
            "name must be 2-30 letters, digits, '_' or '-', starting with a letter or digit",
        ));
    }

    let rating = rating
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid("rating must be an integer"))?;

    Ok(UserRating::new(name, rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["chess-walker"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = WalkConfig::from_args(args(&[])).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.budget, 50);
        assert_eq!(config.games_count, 10);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(
            config.seeds,
            vec![
                UserRating::new("Hexaquarks1", 1900),
                UserRating::new("fifthart", 1800)
            ]
        );
        assert_eq!(
            config.modes,
            vec![GameMode::Blitz, GameMode::Rapid, GameMode::Bullet]
        );
        assert!(config.show_progress);
        assert!(!config.verbose);
        assert!(config.report_path.is_none());
    }

    #[test]
    fn test_default_impl_matches_cli_defaults() {
        let from_cli = WalkConfig::from_args(args(&[])).unwrap();
        let from_default = WalkConfig::default();
        assert_eq!(from_cli.endpoint, from_default.endpoint);
        assert_eq!(from_cli.budget, from_default.budget);
        assert_eq!(from_cli.seeds, from_default.seeds);
        assert_eq!(from_cli.modes, from_default.modes);
    }

    #[test]
    fn test_parse_seed_valid() {
        let seed = parse_seed("Hexaquarks1:1900").unwrap();
        assert_eq!(seed, UserRating::new("Hexaquarks1", 1900));

        // Negative and out-of-band ratings are allowed
        let seed = parse_seed("some-bot_99:-120").unwrap();
        assert_eq!(seed, UserRating::new("some-bot_99", -120));
    }

    #[test]
    fn test_parse_seed_invalid() {
        assert!(matches!(
            parse_seed("noColon"),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse_seed(":1500"),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse_seed("a:1500"),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse_seed("bad name:1500"),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse_seed("user:notanumber"),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert!(matches!(
            parse_seed("_leading:1500"),
            Err(ConfigError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_explicit_seeds_replace_defaults() {
        let config =
            WalkConfig::from_args(args(&["--seed", "alice:1200", "--seed", "bob:2100"])).unwrap();
        assert_eq!(
            config.seeds,
            vec![UserRating::new("alice", 1200), UserRating::new("bob", 2100)]
        );
    }

    #[test]
    fn test_budget_validation() {
        assert!(matches!(
            WalkConfig::from_args(args(&["--budget", "0"])),
            Err(ConfigError::InvalidBudget { .. })
        ));
        assert!(matches!(
            WalkConfig::from_args(args(&["--budget", "10001"])),
            Err(ConfigError::InvalidBudget { .. })
        ));
        let config = WalkConfig::from_args(args(&["--budget", "20"])).unwrap();
        assert_eq!(config.budget, 20);
    }

    #[test]
    fn test_games_count_validation() {
        assert!(matches!(
            WalkConfig::from_args(args(&["--games", "0"])),
            Err(ConfigError::InvalidGamesCount { .. })
        ));
        assert!(matches!(
            WalkConfig::from_args(args(&["--games", "101"])),
            Err(ConfigError::InvalidGamesCount { .. })
        ));
    }

    #[test]
    fn test_timeout_validation() {
        assert!(matches!(
            WalkConfig::from_args(args(&["--timeout", "0"])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            WalkConfig::from_args(args(&["--timeout", "301"])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(matches!(
            WalkConfig::from_args(args(&["--endpoint", "not a url"])),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            WalkConfig::from_args(args(&["--endpoint", "ftp://host/data"])),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        let config =
            WalkConfig::from_args(args(&["--endpoint", "https://chess.example.com/fetch"]))
                .unwrap();
        assert_eq!(config.endpoint.scheme(), "https");
    }

    #[test]
    fn test_mode_selection() {
        let config = WalkConfig::from_args(args(&["--mode", "bullet", "--mode", "blitz"])).unwrap();
        assert_eq!(config.modes, vec![GameMode::Bullet, GameMode::Blitz]);

        assert!(matches!(
            WalkConfig::from_args(args(&["--mode", "blitz", "--mode", "blitz"])),
            Err(ConfigError::DuplicateMode { .. })
        ));
        assert!(matches!(
            WalkConfig::from_args(args(&["--mode", "classical"])),
            Err(ConfigError::UnknownMode { .. })
        ));
    }

    #[test]
    fn test_quiet_disables_progress() {
        let config = WalkConfig::from_args(args(&["--quiet"])).unwrap();
        assert!(!config.show_progress);
    }
}
