//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DNS_TIMEOUT_SECS, ENV_DKIM, ENV_DOMAIN};
use crate::input::{default_selectors, parse_selectors};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Section headers and colored status lines
    Text,
    /// A single JSON document
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Check a domain with the default selectors
/// mail_auth_check -d example.com
///
/// # Try specific DKIM selectors
/// mail_auth_check --domain example.com --dkim selector1,selector2
///
/// # Prompt for the domain interactively
/// mail_auth_check
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "mail_auth_check",
    about = "Email Security Checker - Checks SPF, DKIM, and DMARC records for a domain",
    after_help = "Example: mail_auth_check -d example.com"
)]
pub struct Opt {
    /// Domain to check (e.g., example.com). Prompts interactively when absent.
    #[arg(short = 'd', long, env = ENV_DOMAIN)]
    pub domain: Option<String>,

    /// Comma-separated list of DKIM selectors to check (default: default,google)
    #[arg(long, env = ENV_DKIM)]
    pub dkim: Option<String>,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable ANSI colors in the text report
    #[arg(long)]
    pub no_color: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// Built from [`Opt`] by the binary, or constructed directly.
///
/// ```no_run
/// use mail_auth_check::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain given on the command line, if any
    pub domain: Option<String>,

    /// DKIM selectors, tried in order
    pub dkim_selectors: Vec<String>,

    /// Per-query DNS timeout in seconds
    pub timeout_seconds: u64,

    /// Report format
    pub output_format: OutputFormat,

    /// Whether the text report may use ANSI colors
    pub color: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            dkim_selectors: default_selectors(),
            timeout_seconds: DNS_TIMEOUT_SECS,
            output_format: OutputFormat::Text,
            color: true,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domain: opt.domain,
            dkim_selectors: parse_selectors(opt.dkim.as_deref().unwrap_or_default()),
            timeout_seconds: opt.timeout_seconds,
            output_format: opt.format,
            color: !opt.no_color,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.domain, None);
        assert_eq!(config.dkim_selectors, vec!["default", "google"]);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.color);
    }

    #[test]
    fn test_config_from_opt_without_dkim_uses_defaults() {
        let opt = Opt::try_parse_from(["mail_auth_check", "-d", "example.com"])
            .expect("Should parse");
        let config = Config::from(opt);
        assert_eq!(config.domain.as_deref(), Some("example.com"));
        assert_eq!(config.dkim_selectors, vec!["default", "google"]);
    }

    #[test]
    fn test_config_from_opt_with_dkim_override() {
        let opt = Opt::try_parse_from([
            "mail_auth_check",
            "--domain",
            "example.com",
            "--dkim",
            "sel1, sel2 ,",
            "--no-color",
        ])
        .expect("Should parse");
        let config = Config::from(opt);
        assert_eq!(config.dkim_selectors, vec!["sel1", "sel2"]);
        assert!(!config.color);
    }
}
