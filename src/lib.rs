//! offer_report library: cross-locale streaming offer reports
//!
//! This library collects the streaming offers a catalog site advertises for a
//! title in every market it is available in, removes duplicates and tracking
//! noise from offer links, and renders a report grouped by canonical URL. It
//! can also list the providers a country's catalog carries.
//!
//! # Example
//!
//! ```no_run
//! use offer_report::{run_title, TitleConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TitleConfig {
//!     address: "https://www.justwatch.com/us/movie/heat".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_title(config).await?;
//! println!("{} offers in {} groups written to {}",
//!          report.kept, report.groups, report.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod aggregate;
mod app;
pub mod catalog;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod locale;
pub mod models;
pub mod payload;
pub mod report;
mod run;

// Re-export public API
pub use app::{report_file_name, resolve_address};
pub use config::{
    Cli, Command, ConfigValidationError, HttpConfig, LogFormat, LogLevel, ProvidersConfig,
    TitleConfig,
};
pub use error_handling::{
    CatalogError, ErrorType, InfoType, InitializationError, ProcessingStats, WarningType,
};
pub use run::{run_providers, run_title, ProviderEntry, ProvidersReport, TitleReport};
