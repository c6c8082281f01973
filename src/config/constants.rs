//! Configuration constants.
//!
//! This module defines the constants used throughout the application: catalog
//! endpoints, payload markers, request defaults and input limits.

/// Catalog website root. Title pages and per-country provider pages live under it.
pub const DEFAULT_SITE_URL: &str = "https://www.justwatch.com";

/// Catalog GraphQL endpoint used for per-locale offer lookups.
pub const DEFAULT_API_URL: &str = "https://apis.justwatch.com/graphql";

/// Marker preceding the JSON state blob embedded in every catalog page.
pub const PAYLOAD_START_MARKER: &str = "window.__DATA__=";

/// Marker closing the embedded state blob.
pub const PAYLOAD_END_MARKER: &str = "</script>";

/// Monetization types kept in the title report unless overridden.
pub const DEFAULT_FILTERS: &[&str] = &["BUY", "CINEMA", "FAST", "RENT"];

/// Pause between successive locale fetches, in milliseconds.
pub const DEFAULT_SLEEP_MS: u64 = 99;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum address length (2048 characters), matching common browser and server limits.
pub const MAX_ADDRESS_LENGTH: usize = 2048;

/// Upper bound for the politeness delay (one minute).
pub const MAX_SLEEP_MS: u64 = 60_000;

/// Upper bound for the request timeout.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Maximum page preview length in characters used in debug logs.
pub const MAX_BODY_PREVIEW_CHARS: usize = 200;
