//! Offer aggregation pipeline.
//!
//! This module provides:
//! - Enrichment of per-locale offers into `EnrichedOffer` records
//! - Deduplication by value
//! - Monetization filtering
//! - Canonical URL keys with tracking parameters removed
//! - Grouping and ordering of the final report

mod collect;
mod dedup;
mod filter;
mod group;
mod normalize;

// Re-export public API
pub use collect::{collect_offers, enrich};
pub use dedup::deduplicate;
pub use filter::filter_offers;
pub use group::{
    by_key, by_rank, by_size_then_key, group_and_sort, size_then_key, GroupOrder, ReportGroup,
};
pub use normalize::{normalize_url, try_normalize_url, RemovalRule, REMOVAL_RULES};
