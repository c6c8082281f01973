//! Offer, locale and enriched record types.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// A single monetization availability record for a title.
///
/// Field names follow the catalog's GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Deep link to the offer on the provider's site
    #[serde(rename = "standardWebURL", default)]
    pub standard_web_url: String,
    /// RENT, BUY, FLATRATE, FREE, ADS, CINEMA, FAST, ...
    #[serde(default)]
    pub monetization_type: String,
    /// Number of seasons/episodes covered; 0 when not applicable
    #[serde(default, deserialize_with = "deserialize_count")]
    pub element_count: u32,
}

// The API sends null for titles without seasons.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

/// A resolved market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Full locale tag, e.g. `en_US`
    pub full_locale: String,
    /// Upper-case country code, e.g. `US`
    pub country: String,
    /// Display name, e.g. `United States`
    pub country_name: String,
}

impl Locale {
    /// Language part of the full locale (`en` for `en_US`).
    pub fn language(&self) -> &str {
        self.full_locale
            .split_once('_')
            .map(|(language, _)| language)
            .unwrap_or(&self.full_locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.country, self.country_name, self.full_locale)
    }
}

/// An offer paired with the locale it was retrieved under.
///
/// Equality and ordering use only the dedup key: URL, monetization type,
/// element count and full locale tag. They compare values, never addresses,
/// so two records built from separate allocations still compare equal.
#[derive(Debug, Clone)]
pub struct EnrichedOffer {
    /// The offer as returned by the API
    pub offer: Offer,
    /// Locale the offer was fetched under
    pub locale: Arc<Locale>,
}

impl EnrichedOffer {
    /// Pairs an offer with its locale.
    pub fn new(offer: Offer, locale: Arc<Locale>) -> Self {
        Self { offer, locale }
    }

    /// Composite key used for sorting and duplicate detection.
    pub fn dedup_key(&self) -> (&str, &str, u32, &str) {
        (
            &self.offer.standard_web_url,
            &self.offer.monetization_type,
            self.offer.element_count,
            &self.locale.full_locale,
        )
    }
}

impl PartialEq for EnrichedOffer {
    fn eq(&self, other: &Self) -> bool {
        self.dedup_key() == other.dedup_key()
    }
}

impl Eq for EnrichedOffer {}

impl PartialOrd for EnrichedOffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnrichedOffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dedup_key().cmp(&other.dedup_key())
    }
}
