//! Monetization type filter.

use std::collections::BTreeSet;

use crate::models::EnrichedOffer;

/// Keeps the offers whose monetization type is in `accepted`, in input order.
///
/// Matching is exact and case-sensitive. An empty set keeps nothing; callers
/// that want every offer skip this stage instead.
pub fn filter_offers(offers: Vec<EnrichedOffer>, accepted: &BTreeSet<String>) -> Vec<EnrichedOffer> {
    offers
        .into_iter()
        .filter(|o| accepted.contains(&o.offer.monetization_type))
        .collect()
}
