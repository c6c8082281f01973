//! Embedded payload extraction and decoding.
//!
//! Catalog pages carry their state as a JSON blob assigned inside a script
//! tag. Extraction and decoding are separate steps: `extract_between` returns
//! the raw bytes untouched, `decode_payload` owns the whitespace policy.

use serde::de::DeserializeOwned;

use crate::config::{PAYLOAD_END_MARKER, PAYLOAD_START_MARKER};
use crate::error_handling::CatalogError;

/// Returns the bytes strictly between the first `start` marker and the first
/// `end` marker that follows it.
///
/// No trimming is applied.
///
/// # Errors
///
/// `CatalogError::MarkerNotFound` if `start` is absent, or if `end` does not
/// occur after it.
pub fn extract_between<'a>(
    body: &'a [u8],
    start: &str,
    end: &str,
) -> Result<&'a [u8], CatalogError> {
    let start_at = find(body, start.as_bytes()).ok_or_else(|| CatalogError::MarkerNotFound {
        marker: start.to_string(),
        after_start: false,
    })?;
    let rest = &body[start_at + start.len()..];
    let end_at = find(rest, end.as_bytes()).ok_or_else(|| CatalogError::MarkerNotFound {
        marker: end.to_string(),
        after_start: true,
    })?;
    Ok(&rest[..end_at])
}

/// Extracts the page state blob using the catalog's markers.
pub fn extract_page_payload(body: &[u8]) -> Result<&[u8], CatalogError> {
    extract_between(body, PAYLOAD_START_MARKER, PAYLOAD_END_MARKER)
}

/// Decodes an extracted payload as JSON.
///
/// Surrounding ASCII whitespace and a trailing statement `;` are tolerated.
pub fn decode_payload<T: DeserializeOwned>(payload: &[u8]) -> Result<T, CatalogError> {
    let trimmed = payload.trim_ascii();
    let trimmed = trimmed
        .strip_suffix(b";")
        .map(<[u8]>::trim_ascii_end)
        .unwrap_or(trimmed);
    Ok(serde_json::from_slice(trimmed)?)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
