//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, markers, defaults, limits)
//! - CLI option types and parsing
//! - Library configuration structs with validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Cli, Command, ConfigValidationError, HttpConfig, LogFormat, LogLevel, ProvidersArgs,
    ProvidersConfig, TitleArgs, TitleConfig,
};
