//! Configuration types and CLI options.
//!
//! This module defines the command-line interface and the plain configuration
//! structs the library consumes. The library structs can be built without any
//! CLI dependency and validated with `validate()`.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::aggregate::GroupOrder;
use crate::config::constants::{
    DEFAULT_API_URL, DEFAULT_FILTERS, DEFAULT_SITE_URL, DEFAULT_SLEEP_MS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, MAX_SLEEP_MS, MAX_TIMEOUT_SECS,
};

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

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Report every BUY/CINEMA/FAST/RENT offer for a title
/// offer_report title https://www.justwatch.com/us/movie/heat
///
/// # Keep only rentals and order groups by URL
/// offer_report title /us/movie/heat --filters RENT --group-order key
///
/// # List providers with titles in one country
/// offer_report providers --country us
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "offer_report",
    about = "Collects streaming offers for a title across catalog locales."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Catalog website root
    #[arg(long, global = true, default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// Catalog GraphQL endpoint
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a grouped offer report for one title
    Title(TitleArgs),
    /// List catalog providers for a country or a file of provider URLs
    Providers(ProvidersArgs),
}

/// Arguments of the `title` subcommand.
#[derive(Debug, Args)]
pub struct TitleArgs {
    /// Title address: full URL, site path, or slug
    pub address: String,

    /// Pause between locale fetches in milliseconds
    #[arg(long, default_value_t = DEFAULT_SLEEP_MS)]
    pub sleep_ms: u64,

    /// Comma-separated monetization types to keep
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_FILTERS.iter().map(|f| f.to_string()).collect::<Vec<String>>()
    )]
    pub filters: Vec<String>,

    /// Keep every monetization type (skips filtering)
    #[arg(long, conflicts_with = "filters")]
    pub no_filter: bool,

    /// Group ordering: size|key
    #[arg(long, value_enum, default_value_t = GroupOrder::Size)]
    pub group_order: GroupOrder,

    /// Directory the report file is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Arguments of the `providers` subcommand.
#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub struct ProvidersArgs {
    /// Country code to list (e.g. `us`)
    #[arg(long)]
    pub country: Option<String>,

    /// JSON file holding an array of provider URLs
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Settings shared by every catalog request.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// HTTP User-Agent header value
    pub user_agent: String,
    /// Catalog website root; a trailing slash is ignored
    pub site_url: String,
    /// Catalog GraphQL endpoint
    pub api_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl HttpConfig {
    /// Validates request settings.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!("must be at most {MAX_TIMEOUT_SECS}"),
            ));
        }
        for (field, value) in [("site_url", &self.site_url), ("api_url", &self.api_url)] {
            match url::Url::parse(value) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                _ => {
                    return Err(ConfigValidationError::new(
                        field,
                        format!("must be an absolute http(s) URL, got '{value}'"),
                    ))
                }
            }
        }
        Ok(())
    }
}

/// Configuration of a single title run.
#[derive(Debug, Clone)]
pub struct TitleConfig {
    /// Title address: full URL, site path, or slug
    pub address: String,
    /// Pause between locale fetches in milliseconds
    pub sleep_ms: u64,
    /// Accepted monetization types; `None` skips the filter stage
    pub filters: Option<BTreeSet<String>>,
    /// Ordering applied to report groups
    pub group_order: GroupOrder,
    /// Directory the report file is written to
    pub output_dir: PathBuf,
    /// Request settings
    pub http: HttpConfig,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            sleep_ms: DEFAULT_SLEEP_MS,
            filters: Some(DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect()),
            group_order: GroupOrder::Size,
            output_dir: PathBuf::from("."),
            http: HttpConfig::default(),
        }
    }
}

impl TitleConfig {
    /// Validates the title run settings.
    ///
    /// An empty filter set is legal and produces an empty report.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.address.trim().is_empty() {
            return Err(ConfigValidationError::new("address", "must not be empty"));
        }
        if self.sleep_ms > MAX_SLEEP_MS {
            return Err(ConfigValidationError::new(
                "sleep_ms",
                format!("must be at most {MAX_SLEEP_MS}"),
            ));
        }
        self.http.validate()
    }
}

/// Configuration of a provider listing run.
#[derive(Debug, Clone, Default)]
pub struct ProvidersConfig {
    /// Single country to list
    pub country: Option<String>,
    /// JSON file holding provider URLs
    pub file: Option<PathBuf>,
    /// Request settings
    pub http: HttpConfig,
}

impl ProvidersConfig {
    /// Validates the provider listing settings.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.country.is_none() && self.file.is_none() {
            return Err(ConfigValidationError::new(
                "country",
                "either a country or a provider file is required",
            ));
        }
        if let Some(country) = &self.country {
            if country.is_empty() || !country.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigValidationError::new(
                    "country",
                    format!("must be an alphanumeric country code, got '{country}'"),
                ));
            }
        }
        self.http.validate()
    }
}

impl Cli {
    /// Request settings carried by the global flags.
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            site_url: self.site_url.trim_end_matches('/').to_string(),
            api_url: self.api_url.clone(),
        }
    }
}

impl TitleArgs {
    /// Converts parsed arguments into a library configuration.
    pub fn into_config(self, http: HttpConfig) -> TitleConfig {
        let filters = if self.no_filter {
            None
        } else {
            Some(
                self.filters
                    .into_iter()
                    .map(|f| f.trim().to_string())
                    .collect(),
            )
        };
        TitleConfig {
            address: self.address,
            sleep_ms: self.sleep_ms,
            filters,
            group_order: self.group_order,
            output_dir: self.output_dir,
            http,
        }
    }
}

impl ProvidersArgs {
    /// Converts parsed arguments into a library configuration.
    pub fn into_config(self, http: HttpConfig) -> ProvidersConfig {
        ProvidersConfig {
            country: self.country,
            file: self.file,
            http,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}
