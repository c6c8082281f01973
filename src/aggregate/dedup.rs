//! Removal of value-identical enriched offers.

use crate::models::EnrichedOffer;

/// Removes duplicate records.
///
/// Records are sorted by their composite key (URL, monetization type, element
/// count, full locale tag) and consecutive equal records collapse to the first
/// of their run. The output is therefore in key order.
pub fn deduplicate(mut offers: Vec<EnrichedOffer>) -> Vec<EnrichedOffer> {
    offers.sort();
    offers.dedup_by(|a, b| a.dedup_key() == b.dedup_key());
    offers
}
