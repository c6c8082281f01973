//! Logger initialization.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// HTTP stack modules held at info.
const NOISY_MODULES: &[&str] = &["reqwest", "hyper", "hyper_util"];

/// Noisy modules that `rust_log` leaves alone and that get clamped to info.
fn clamped_modules(rust_log: &str) -> Vec<&'static str> {
    let named: Vec<&str> = rust_log
        .split(',')
        .map(|directive| directive.split('=').next().unwrap_or_default().trim())
        .collect();
    NOISY_MODULES
        .iter()
        .copied()
        .filter(|module| {
            !named
                .iter()
                .any(|name| name == module || name.starts_with(&format!("{module}::")))
        })
        .collect()
}

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and `level` overrides it for this crate. The HTTP
/// stack is held at info unless `RUST_LOG` names it, so
/// `RUST_LOG=reqwest=debug` still works for digging into the HTTP client.
/// Plain output is colored and prefixed with an emoji per level; JSON output
/// writes one object per line with a millisecond timestamp.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=reqwest=debug offer_report title /us/movie/heat
/// offer_report --log-level debug --log-format json providers --country us
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();
    for module in clamped_modules(&rust_log) {
        builder.filter_module(module, LevelFilter::Info);
    }
    builder.filter_module("offer_report", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init: tests may initialize more than once per process
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
