//! Per-country provider listings.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use url::Url;

use crate::aggregate::size_then_key;
use crate::error_handling::CatalogError;
use crate::payload::{decode_payload, extract_page_payload};

#[derive(Debug, Default, Deserialize)]
struct CountryPage {
    #[serde(default)]
    state: CountryState,
}

#[derive(Debug, Default, Deserialize)]
struct CountryState {
    #[serde(default)]
    constant: CountryConstant,
}

#[derive(Debug, Default, Deserialize)]
struct CountryConstant {
    #[serde(default)]
    providers: Vec<Provider>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Provider {
    #[serde(default)]
    has_titles: bool,
    #[serde(default)]
    slug: String,
}

/// Provider slugs with titles, optionally restricted to `filter`, in page order.
pub fn parse_providers(
    body: &[u8],
    filter: Option<&HashSet<String>>,
) -> Result<Vec<String>, CatalogError> {
    let page: CountryPage = decode_payload(extract_page_payload(body)?)?;
    Ok(page
        .state
        .constant
        .providers
        .into_iter()
        .filter(|p| p.has_titles && filter.map_or(true, |f| f.contains(&p.slug)))
        .map(|p| p.slug)
        .collect())
}

/// Fetches `<site_url>/<code>` and lists its providers.
pub async fn process_country(
    client: &reqwest::Client,
    site_url: &str,
    code: &str,
    filter: Option<&HashSet<String>>,
) -> Result<Vec<String>, CatalogError> {
    let body = super::fetch_page(client, &super::site_page_url(site_url, code)).await?;
    parse_providers(&body, filter)
}

/// Splits a provider URL into `(country, slug)`.
///
/// The path must have exactly three segments, `<country>/<kind>/<slug>`.
/// Relative input is resolved against `base`.
pub fn parse_provider_url(raw: &str, base: &Url) -> Result<(String, String), CatalogError> {
    let parsed = Url::options()
        .base_url(Some(base))
        .parse(raw)
        .map_err(|_| CatalogError::InvalidProviderUrl(raw.to_string()))?;
    let parts: Vec<&str> = parsed.path().trim_matches('/').split('/').collect();
    match parts.as_slice() {
        [country, _, slug] if !country.is_empty() && !slug.is_empty() => {
            Ok((country.to_string(), slug.to_string()))
        }
        _ => Err(CatalogError::InvalidProviderUrl(raw.to_string())),
    }
}

/// Providers requested for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPlan {
    /// Country code as written in the provider URLs
    pub code: String,
    /// Requested provider slugs, in file order
    pub providers: Vec<String>,
}

/// Groups provider URLs by country.
///
/// Countries are ordered by descending provider count, then ascending code.
/// Malformed URLs are returned separately so the caller can report them.
pub fn plan_countries(urls: &[String], base: &Url) -> (Vec<CountryPlan>, Vec<CatalogError>) {
    let mut by_country: HashMap<String, Vec<String>> = HashMap::new();
    let mut rejected = Vec::new();
    for raw in urls {
        match parse_provider_url(raw, base) {
            Ok((country, slug)) => by_country.entry(country).or_default().push(slug),
            Err(e) => rejected.push(e),
        }
    }
    let mut plans: Vec<CountryPlan> = by_country
        .into_iter()
        .map(|(code, providers)| CountryPlan { code, providers })
        .collect();
    plans.sort_by(|a, b| size_then_key(a.providers.len(), &a.code, b.providers.len(), &b.code));
    (plans, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.justwatch.com").unwrap()
    }

    fn page(providers: &str) -> Vec<u8> {
        format!(r#"<script>window.__DATA__={{"state":{{"constant":{{"providers":{providers}}}}}}}</script>"#)
            .into_bytes()
    }

    #[test]
    fn test_parse_providers_keeps_those_with_titles() {
        let body = page(
            r#"[{"slug":"netflix","hasTitles":true},
                {"slug":"empty-service","hasTitles":false},
                {"slug":"amazon-prime-video","hasTitles":true}]"#,
        );
        assert_eq!(
            parse_providers(&body, None).unwrap(),
            vec!["netflix", "amazon-prime-video"]
        );
    }

    #[test]
    fn test_parse_providers_with_filter() {
        let body = page(
            r#"[{"slug":"netflix","hasTitles":true},
                {"slug":"mubi","hasTitles":true},
                {"slug":"hulu","hasTitles":false}]"#,
        );
        let filter: HashSet<String> = ["mubi", "hulu"].iter().map(|s| s.to_string()).collect();
        assert_eq!(parse_providers(&body, Some(&filter)).unwrap(), vec!["mubi"]);
    }

    #[test]
    fn test_parse_providers_needs_payload() {
        assert!(matches!(
            parse_providers(b"<html></html>", None),
            Err(CatalogError::MarkerNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_provider_url() {
        assert_eq!(
            parse_provider_url("https://www.justwatch.com/us/provider/netflix", &base()).unwrap(),
            ("us".to_string(), "netflix".to_string())
        );
        assert_eq!(
            parse_provider_url("/de/anbieter/mubi/", &base()).unwrap(),
            ("de".to_string(), "mubi".to_string())
        );
    }

    #[test]
    fn test_parse_provider_url_rejects_other_shapes() {
        assert!(parse_provider_url("https://www.justwatch.com/us/netflix", &base()).is_err());
        assert!(parse_provider_url("https://www.justwatch.com/us/provider/netflix/extra", &base()).is_err());
        assert!(parse_provider_url("https://www.justwatch.com/", &base()).is_err());
    }

    #[test]
    fn test_plan_countries_orders_by_count_then_code() {
        let urls: Vec<String> = [
            "https://www.justwatch.com/us/provider/netflix",
            "https://www.justwatch.com/de/anbieter/mubi",
            "https://www.justwatch.com/us/provider/hulu",
            "https://www.justwatch.com/at/anbieter/mubi",
            "https://www.justwatch.com/nowhere",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let (plans, rejected) = plan_countries(&urls, &base());
        assert_eq!(rejected.len(), 1);
        assert_eq!(
            plans,
            vec![
                CountryPlan {
                    code: "us".into(),
                    providers: vec!["netflix".into(), "hulu".into()]
                },
                CountryPlan {
                    code: "at".into(),
                    providers: vec!["mubi".into()]
                },
                CountryPlan {
                    code: "de".into(),
                    providers: vec!["mubi".into()]
                },
            ]
        );
    }
}
