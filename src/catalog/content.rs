//! Title page fetch and locale hint discovery.

use log::debug;
use serde::Deserialize;

use crate::config::MAX_BODY_PREVIEW_CHARS;
use crate::error_handling::CatalogError;
use crate::payload::{decode_payload, extract_page_payload};

/// A sibling market advertised by a title page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrefLangTag {
    /// Site path of the title in that market
    pub href: String,
    /// Locale hint, e.g. `en-GB`
    pub href_lang: String,
}

#[derive(Debug, Default, Deserialize)]
struct PageData {
    #[serde(default)]
    state: PageState,
}

#[derive(Debug, Default, Deserialize)]
struct PageState {
    #[serde(default)]
    meta: PageMeta,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageMeta {
    #[serde(default)]
    href_lang_tags: Vec<HrefLangTag>,
}

/// Extracts the href-lang tags from a title page body, in page order.
pub fn parse_content(body: &[u8]) -> Result<Vec<HrefLangTag>, CatalogError> {
    let payload = extract_page_payload(body).inspect_err(|_| {
        let preview: String = String::from_utf8_lossy(body)
            .chars()
            .take(MAX_BODY_PREVIEW_CHARS)
            .collect();
        debug!("Page without payload, starts with: {preview:?}");
    })?;
    let data: PageData = decode_payload(payload)?;
    Ok(data.state.meta.href_lang_tags)
}

/// Fetches `path` under `site_url` and returns its href-lang tags.
pub async fn fetch_content(
    client: &reqwest::Client,
    site_url: &str,
    path: &str,
) -> Result<Vec<HrefLangTag>, CatalogError> {
    let url = super::site_page_url(site_url, path);
    let body = super::fetch_page(client, &url).await?;
    let tags = parse_content(&body)?;
    debug!("Found {} href-lang tags on {url}", tags.len());
    Ok(tags)
}
