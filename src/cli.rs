//! Command-line interface parsing for countrydex
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `ListingConfig`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Error types for the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    /// A zero timeout would never let the scan run; clap rejects it on the
    /// command line, this covers configs built by hand
    #[error("Invalid timeout: must be greater than 0 milliseconds")]
    InvalidTimeout,
    /// The listing could not be written as JSON
    #[error("Failed to encode listing: {0}")]
    Output(#[from] serde_json::Error),
}

/// countrydex - List the countries present in a cache directory
#[derive(Parser, Debug)]
#[command(name = "countrydex")]
#[command(about = "List countries derived from per-country cache documents")]
#[command(version)]
pub struct Cli {
    /// Directory holding one `<country_key>.json` document per country
    #[arg(long, value_name = "DIR", env = "COUNTRYDEX_CACHE_DIR", default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Fill in code and region from the built-in country table
    #[arg(long)]
    pub enrich: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Give up on the scan after this many milliseconds and print an empty listing
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,
}

/// Settings for producing one listing
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub cache_dir: PathBuf,
    pub enrich: bool,
    pub pretty: bool,
    /// Upper bound on the directory scan, if any
    pub timeout: Option<Duration>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache"),
            enrich: false,
            pretty: false,
            timeout: None,
        }
    }
}

impl ListingConfig {
    /// Creates a ListingConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(ListingConfig)` with the requested settings
    /// * `Err(CliError::InvalidTimeout)` if `--timeout-ms 0` was given
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let timeout = match cli.timeout_ms {
            Some(0) => return Err(CliError::InvalidTimeout),
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };

        Ok(ListingConfig {
            cache_dir: cli.cache_dir.clone(),
            enrich: cli.enrich,
            pretty: cli.pretty,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["countrydex"]);
        assert!(!cli.enrich);
        assert!(!cli.pretty);
        assert!(cli.timeout_ms.is_none());
    }

    #[test]
    fn test_cli_parse_cache_dir() {
        let cli = Cli::parse_from(["countrydex", "--cache-dir", "/srv/cache"]);
        assert_eq!(cli.cache_dir, PathBuf::from("/srv/cache"));
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from(["countrydex", "--enrich", "--pretty", "--timeout-ms", "250"]);
        assert!(cli.enrich);
        assert!(cli.pretty);
        assert_eq!(cli.timeout_ms, Some(250));
    }

    #[test]
    fn test_cli_rejects_non_numeric_timeout() {
        let result = Cli::try_parse_from(["countrydex", "--timeout-ms", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_listing_config_default() {
        let config = ListingConfig::default();
        assert_eq!(config.cache_dir, PathBuf::from("cache"));
        assert!(!config.enrich);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_listing_config_from_cli() {
        let cli = Cli::parse_from(["countrydex", "--cache-dir", "data", "--timeout-ms", "1500"]);
        let config = ListingConfig::from_cli(&cli).unwrap();
        assert_eq!(config.cache_dir, PathBuf::from("data"));
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        let result = Cli::try_parse_from(["countrydex", "--timeout-ms", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_listing_config_from_cli_zero_timeout() {
        let cli = Cli {
            cache_dir: PathBuf::from("cache"),
            enrich: false,
            pretty: false,
            timeout_ms: Some(0),
        };
        let err = ListingConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("Invalid timeout"));
    }
}
