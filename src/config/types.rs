//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::credentials::CredentialTable;
use crate::error_handling::ConfigError;

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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How resolved titles are written to stdout by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `url<TAB>title` line per resolved URL
    Plain,
    /// A single JSON object with `mapping` and `errorSummary`
    Json,
    /// One `[title](url)` markdown link per input URL
    Markdown,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use title_resolver::{Config, CredentialTable};
///
/// let mut credentials = CredentialTable::new();
/// credentials.insert("https://intranet.example/", "session=abc");
///
/// let config = Config {
///     credentials,
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix to cookie mapping consulted for every URL
    pub credentials: CredentialTable,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Optional cap on in-flight requests; `None` dispatches every URL at once
    pub max_concurrency: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: CredentialTable::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: None,
        }
    }
}

/// Command-line options for the `title_resolver` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "title_resolver",
    version,
    about = "Resolve page titles for a list of URLs"
)]
pub struct Opt {
    /// URLs to resolve
    pub urls: Vec<String>,

    /// Read URLs from a file (one per line, `-` for stdin)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// JSON file mapping URL prefixes to cookie values
    #[arg(long)]
    pub cookies: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of requests in flight (unbounded when omitted)
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format for resolved titles
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

impl Opt {
    /// Builds the library `Config`, loading the cookie table if one was given.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the cookie file cannot be read or parsed, or
    /// if `--max-concurrency` is zero.
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let credentials = match &self.cookies {
            Some(path) => CredentialTable::from_json_file(path)?,
            None => CredentialTable::default(),
        };

        if self.max_concurrency == Some(0) {
            return Err(ConfigError::InvalidValue(
                "--max-concurrency must be greater than zero".to_string(),
            ));
        }

        Ok(Config {
            credentials,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            max_concurrency: self.max_concurrency,
        })
    }
}
