//! Main application modules.
//!
//! This module provides address resolution and statistics printing used by
//! the run layer.

pub mod statistics;
pub mod url;

// Re-export public API
pub use statistics::{print_error_statistics, print_title_summary};
pub use url::{report_file_name, resolve_address};
