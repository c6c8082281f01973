//! Per-locale offer lookups.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::json;

use super::content::HrefLangTag;
use crate::error_handling::CatalogError;
use crate::models::{Locale, Offer};

const TITLE_OFFERS_QUERY: &str = r#"query GetUrlTitleDetails($fullPath: String!, $country: Country!, $language: Language!, $platform: Platform! = WEB) {
  urlV2(fullPath: $fullPath) {
    node {
      ... on MovieOrShowOrSeason {
        offers(country: $country, platform: $platform) {
          elementCount
          monetizationType
          standardWebURL
        }
      }
    }
  }
}"#;

/// Yields the offers of one title in one locale.
#[async_trait]
pub trait OfferSource: Send + Sync {
    /// Offers for the title at `tag.href` in `locale`.
    async fn offers(&self, tag: &HrefLangTag, locale: &Locale) -> Result<Vec<Offer>, CatalogError>;
}

/// Offer lookups against the catalog GraphQL API.
pub struct GraphqlOfferSource {
    client: Arc<reqwest::Client>,
    api_url: String,
}

impl GraphqlOfferSource {
    /// Creates a source posting to `api_url` through the shared client.
    pub fn new(client: Arc<reqwest::Client>, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    url_v2: Option<UrlNode>,
}

#[derive(Debug, Deserialize)]
struct UrlNode {
    node: Option<TitleNode>,
}

#[derive(Debug, Deserialize)]
struct TitleNode {
    #[serde(default)]
    offers: Vec<Offer>,
}

/// Reads the offers out of a GraphQL response body.
///
/// A missing title node means no offers; a non-empty `errors` array fails.
pub(crate) fn parse_offers_response(body: &[u8]) -> Result<Vec<Offer>, CatalogError> {
    let response: GraphqlResponse = serde_json::from_slice(body)?;
    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(CatalogError::Graphql(messages.join("; ")));
    }
    Ok(response
        .data
        .and_then(|d| d.url_v2)
        .and_then(|u| u.node)
        .map(|n| n.offers)
        .unwrap_or_default())
}

#[async_trait]
impl OfferSource for GraphqlOfferSource {
    async fn offers(&self, tag: &HrefLangTag, locale: &Locale) -> Result<Vec<Offer>, CatalogError> {
        let body = json!({
            "operationName": "GetUrlTitleDetails",
            "query": TITLE_OFFERS_QUERY,
            "variables": {
                "fullPath": tag.href,
                "country": locale.country,
                "language": locale.language(),
            },
        });
        debug!("POST {} fullPath={} country={}", self.api_url, tag.href, locale.country);
        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CatalogError::transport(&self.api_url, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                url: self.api_url.clone(),
                status,
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::transport(&self.api_url, e))?;
        parse_offers_response(&bytes)
    }
}
