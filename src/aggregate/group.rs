//! Grouping of enriched offers by canonical URL and ordering of the groups.

use std::cmp::Ordering;
use std::collections::HashMap;

use clap::ValueEnum;

use super::normalize::normalize_url;
use crate::models::EnrichedOffer;

/// All offers sharing one canonical URL, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    /// Canonical URL shared by the group
    pub key: String,
    /// Member records
    pub offers: Vec<EnrichedOffer>,
}

/// Built-in group ordering policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GroupOrder {
    /// Largest groups first, ties by ascending key
    #[default]
    Size,
    /// Ascending key
    Key,
}

impl GroupOrder {
    /// The comparison function implementing this policy.
    pub fn comparator(self) -> fn(&ReportGroup, &ReportGroup) -> Ordering {
        match self {
            GroupOrder::Size => by_size_then_key,
            GroupOrder::Key => by_key,
        }
    }
}

/// Descending length, then ascending key.
pub fn size_then_key(a_len: usize, a_key: &str, b_len: usize, b_key: &str) -> Ordering {
    b_len.cmp(&a_len).then_with(|| a_key.cmp(b_key))
}

/// Largest group first; equal sizes by ascending key.
pub fn by_size_then_key(a: &ReportGroup, b: &ReportGroup) -> Ordering {
    size_then_key(a.offers.len(), &a.key, b.offers.len(), &b.key)
}

/// Ascending key.
pub fn by_key(a: &ReportGroup, b: &ReportGroup) -> Ordering {
    a.key.cmp(&b.key)
}

/// Orders groups by an externally supplied rank (lowest first).
///
/// Unranked groups follow all ranked ones; ties fall back to ascending key.
pub fn by_rank(
    ranks: &HashMap<String, u32>,
) -> impl Fn(&ReportGroup, &ReportGroup) -> Ordering + '_ {
    move |a, b| {
        let rank = |g: &ReportGroup| ranks.get(&g.key).copied().unwrap_or(u32::MAX);
        ranks
            .contains_key(&b.key)
            .cmp(&ranks.contains_key(&a.key))
            .then_with(|| rank(a).cmp(&rank(b)))
            .then_with(|| a.key.cmp(&b.key))
    }
}

/// Groups offers by canonical URL and orders the groups with `compare`.
///
/// Every input record lands in exactly one group, and each group keeps its
/// records in input order.
pub fn group_and_sort<F>(offers: Vec<EnrichedOffer>, compare: F) -> Vec<ReportGroup>
where
    F: Fn(&ReportGroup, &ReportGroup) -> Ordering,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ReportGroup> = Vec::new();
    for offer in offers {
        let key = normalize_url(&offer.offer.standard_web_url);
        match index.get(&key) {
            Some(&i) => groups[i].offers.push(offer),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(ReportGroup {
                    key,
                    offers: vec![offer],
                });
            }
        }
    }
    groups.sort_by(|a, b| compare(a, b));
    groups
}
