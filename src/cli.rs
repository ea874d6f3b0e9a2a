//! Command-line interface parsing for memegen
//!
//! This module handles parsing of CLI arguments using clap and turns them
//! into the `StartupConfig` the application is built from.

use std::path::PathBuf;

use chrono::Duration;
use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::cache::DEFAULT_REFRESH_HOURS;
use crate::data::DEFAULT_ENDPOINT;

/// Upper bound for --refresh-hours
const MAX_REFRESH_HOURS: u64 = 24 * 366 * 10;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The endpoint is not an absolute http(s) URL
    #[error("Invalid endpoint: '{0}'. Expected an absolute http or https URL")]
    InvalidEndpoint(String),
}

/// memegen - Caption a random meme template from your terminal
#[derive(Parser, Debug)]
#[command(name = "memegen")]
#[command(about = "Caption a random meme template from your terminal")]
#[command(version)]
pub struct Cli {
    /// Meme listing endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Hours before the cached meme list is fetched again (at most ten years)
    #[arg(
        long,
        value_name = "HOURS",
        default_value_t = DEFAULT_REFRESH_HOURS,
        value_parser = clap::value_parser!(u64).range(..=MAX_REFRESH_HOURS)
    )]
    pub refresh_hours: u64,

    /// Top caption; with --bottom, renders once and prints instead of opening the editor
    ///
    /// Examples:
    ///   memegen --top "one does not simply" --bottom "write rust without lifetimes"
    #[arg(long, value_name = "TEXT", requires = "bottom")]
    pub top: Option<String>,

    /// Bottom caption; requires --top
    #[arg(long, value_name = "TEXT", requires = "top")]
    pub bottom: Option<String>,

    /// Log file for the interactive editor (defaults to the user data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Meme listing endpoint
    pub endpoint: String,
    /// Age after which the cached list is stale
    pub refresh_after: Duration,
    /// Captions for one-shot mode, as typed
    pub one_shot: Option<(String, String)>,
    /// Explicit log file location
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refresh_after: Duration::hours(DEFAULT_REFRESH_HOURS as i64),
            one_shot: None,
            log_file: None,
        }
    }
}

/// Checks that an endpoint is an absolute http(s) URL
///
/// # Returns
/// * `Ok(String)` with the endpoint unchanged
/// * `Err(CliError::InvalidEndpoint)` otherwise
pub fn parse_endpoint_arg(s: &str) -> Result<String, CliError> {
    match Url::parse(s) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(s.to_string()),
        _ => Err(CliError::InvalidEndpoint(s.to_string())),
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the endpoint is not a usable URL
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let endpoint = parse_endpoint_arg(&cli.endpoint)?;
        let one_shot = match (&cli.top, &cli.bottom) {
            (Some(top), Some(bottom)) => Some((top.clone(), bottom.clone())),
            _ => None,
        };

        Ok(StartupConfig {
            endpoint,
            refresh_after: Duration::hours(cli.refresh_hours as i64),
            one_shot,
            log_file: cli.log_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_endpoint_arg_accepts_http_and_https() {
        assert_eq!(
            parse_endpoint_arg("https://api.imgflip.com/get_memes").unwrap(),
            "https://api.imgflip.com/get_memes"
        );
        assert!(parse_endpoint_arg("http://127.0.0.1:8080/memes").is_ok());
    }

    #[test]
    fn test_parse_endpoint_arg_invalid() {
        let result = parse_endpoint_arg("not a url");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint"));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_parse_endpoint_arg_rejects_other_schemes() {
        assert!(parse_endpoint_arg("ftp://example.com/memes").is_err());
        assert!(parse_endpoint_arg("file:///tmp/memes.json").is_err());
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.refresh_after, Duration::hours(24));
        assert!(config.one_shot.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["memegen"]);
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.refresh_hours, 24);
        assert!(cli.top.is_none());
        assert!(cli.bottom.is_none());
    }

    #[test]
    fn test_cli_parse_one_shot() {
        let cli = Cli::parse_from(["memegen", "--top", "hello", "--bottom", "world"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config.one_shot,
            Some(("hello".to_string(), "world".to_string()))
        );
    }

    #[test]
    fn test_cli_top_requires_bottom() {
        let result = Cli::try_parse_from(["memegen", "--top", "hello"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_bottom_requires_top() {
        let result = Cli::try_parse_from(["memegen", "--bottom", "world"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_startup_config_from_cli_refresh_hours() {
        let cli = Cli::parse_from(["memegen", "--refresh-hours", "2"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.refresh_after, Duration::hours(2));
    }

    #[test]
    fn test_cli_rejects_huge_refresh_hours() {
        let result = Cli::try_parse_from(["memegen", "--refresh-hours", "99999999999"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_startup_config_from_cli_invalid_endpoint() {
        let cli = Cli::parse_from(["memegen", "--endpoint", "nope"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(result.is_err());
    }

    #[test]
    fn test_startup_config_from_cli_log_file() {
        let cli = Cli::parse_from(["memegen", "--log-file", "/tmp/memegen.log"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/memegen.log")));
    }
}
