//! Run orchestration.
//!
//! This module wires the catalog collaborators and the aggregation pipeline
//! into the two entry points exposed by the library:
//! - `run_title`: one title, every advertised locale, one report file
//! - `run_providers`: provider listings per country

mod providers;
mod title;

// Re-export public API
pub use providers::{run_providers, ProviderEntry, ProvidersReport};
pub use title::{run_title, TitleReport};
