//! Catalog collaborators.
//!
//! This module talks to the catalog site and API:
//! - Title pages and their href-lang locale hints
//! - Per-locale offer lookups over GraphQL
//! - Per-country provider listings
//!
//! Every request is a single attempt. Non-success statuses and client
//! failures surface as `CatalogError` and are never retried here.

mod content;
mod offers;
mod providers;

use log::info;

use crate::error_handling::CatalogError;

// Re-export public API
pub use content::{fetch_content, parse_content, HrefLangTag};
pub use offers::{GraphqlOfferSource, OfferSource};
pub use providers::{
    parse_provider_url, parse_providers, plan_countries, process_country, CountryPlan,
};

/// Joins a site root and a site path, ignoring a trailing slash on the root.
pub(crate) fn site_page_url(site_url: &str, path: &str) -> String {
    let root = site_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{root}{path}")
    } else {
        format!("{root}/{path}")
    }
}

/// Fetches a page and returns its body.
///
/// # Errors
///
/// `CatalogError::Transport` when the request or body read fails,
/// `CatalogError::HttpStatus` for any non-2xx answer.
pub(crate) async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<u8>, CatalogError> {
    info!("GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CatalogError::transport(url, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| CatalogError::transport(url, e))?;
    Ok(body.to_vec())
}
