//! Per-locale offer collection.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::catalog::{HrefLangTag, OfferSource};
use crate::error_handling::{CatalogError, ProcessingStats, WarningType};
use crate::locale::resolve_locale;
use crate::models::{EnrichedOffer, Locale, Offer};

/// Pairs every offer with the locale it was fetched under.
pub fn enrich(offers: Vec<Offer>, locale: Arc<Locale>) -> Vec<EnrichedOffer> {
    offers
        .into_iter()
        .map(|offer| EnrichedOffer::new(offer, Arc::clone(&locale)))
        .collect()
}

/// Fetches and enriches offers for every href-lang tag, in tag order.
///
/// Locales are visited one at a time with `sleep` between successive
/// fetches. The first failure aborts the collection.
///
/// # Errors
///
/// `CatalogError::UnknownLocale` for a hint outside the locale table, or
/// whatever the offer source returns.
pub async fn collect_offers<S: OfferSource>(
    tags: &[HrefLangTag],
    source: &S,
    sleep: Duration,
    stats: &ProcessingStats,
) -> Result<Vec<EnrichedOffer>, CatalogError> {
    let mut enriched = Vec::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 && !sleep.is_zero() {
            tokio::time::sleep(sleep).await;
        }
        let locale = resolve_locale(&tag.href_lang)?;
        info!("{locale}");
        let offers = source.offers(tag, &locale).await?;
        if offers.is_empty() {
            warn!("No offers for {} under {}", tag.href, locale.full_locale);
            stats.increment_warning(WarningType::EmptyOfferList);
        }
        enriched.extend(enrich(offers, locale));
    }
    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeSource {
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OfferSource for FakeSource {
        async fn offers(&self, tag: &HrefLangTag, locale: &Locale) -> Result<Vec<Offer>, CatalogError> {
            self.calls.lock().unwrap().push(locale.full_locale.clone());
            if tag.href.contains("broken") {
                return Err(CatalogError::Graphql("node unavailable".into()));
            }
            if tag.href.contains("empty") {
                return Ok(Vec::new());
            }
            Ok(vec![Offer {
                standard_web_url: format!("https://tv.example{}", tag.href),
                monetization_type: "BUY".into(),
                element_count: 0,
            }])
        }
    }

    fn tag(href: &str, hint: &str) -> HrefLangTag {
        HrefLangTag {
            href: href.into(),
            href_lang: hint.into(),
        }
    }

    #[test]
    fn test_enrich_shares_locale() {
        let locale = resolve_locale("de-DE").unwrap();
        let offers = vec![
            Offer {
                standard_web_url: "https://a".into(),
                monetization_type: "RENT".into(),
                element_count: 0,
            },
            Offer {
                standard_web_url: "https://b".into(),
                monetization_type: "BUY".into(),
                element_count: 2,
            },
        ];
        let enriched = enrich(offers, Arc::clone(&locale));
        assert_eq!(enriched.len(), 2);
        assert!(enriched.iter().all(|e| Arc::ptr_eq(&e.locale, &locale)));
        assert_eq!(enriched[1].offer.element_count, 2);
    }

    #[tokio::test]
    async fn test_collect_in_tag_order() {
        let source = FakeSource::new();
        let stats = ProcessingStats::new();
        let tags = vec![tag("/us/movie/heat", "en-US"), tag("/de/film/heat", "de-DE")];
        let enriched = collect_offers(&tags, &source, Duration::ZERO, &stats)
            .await
            .unwrap();
        assert_eq!(*source.calls.lock().unwrap(), vec!["en_US", "de_DE"]);
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].locale.country, "US");
        assert_eq!(enriched[1].offer.standard_web_url, "https://tv.example/de/film/heat");
    }

    #[tokio::test]
    async fn test_unknown_locale_aborts_before_fetch() {
        let source = FakeSource::new();
        let stats = ProcessingStats::new();
        let tags = vec![tag("/us/movie/heat", "en-US"), tag("/xx/movie/heat", "xx-XX")];
        let err = collect_offers(&tags, &source, Duration::ZERO, &stats)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLocale(hint) if hint == "xx-XX"));
        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_source_error_aborts() {
        let source = FakeSource::new();
        let stats = ProcessingStats::new();
        let tags = vec![
            tag("/us/movie/broken", "en-US"),
            tag("/de/film/heat", "de-DE"),
        ];
        let err = collect_offers(&tags, &source, Duration::ZERO, &stats)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Graphql(_)));
        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_locale_is_counted() {
        let source = FakeSource::new();
        let stats = ProcessingStats::new();
        let tags = vec![tag("/us/movie/empty", "en-US")];
        let enriched = collect_offers(&tags, &source, Duration::ZERO, &stats)
            .await
            .unwrap();
        assert!(enriched.is_empty());
        assert_eq!(stats.get_warning_count(WarningType::EmptyOfferList), 1);
    }

    #[tokio::test]
    async fn test_sleeps_between_locales() {
        let source = FakeSource::new();
        let stats = ProcessingStats::new();
        let tags = vec![
            tag("/us/movie/heat", "en-US"),
            tag("/de/film/heat", "de-DE"),
            tag("/fr/film/heat", "fr-FR"),
        ];
        let started = std::time::Instant::now();
        collect_offers(&tags, &source, Duration::from_millis(99), &stats)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(198));
    }
}
