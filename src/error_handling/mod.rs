//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (`CatalogError`, `InitializationError`)
//! - Categorization of client failures into statistics buckets
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Statistics are categorized into:
//! - **Errors**: Failures of one unit of work
//! - **Warnings**: Degraded data that doesn't stop processing
//! - **Info**: Informational metrics (duplicates removed, offers filtered, etc.)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::update_error_stats;
pub use stats::ProcessingStats;
pub use types::{CatalogError, ErrorType, InfoType, InitializationError, WarningType};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::MarkerNotFound);
        assert_eq!(stats.get_error_count(ErrorType::MarkerNotFound), 1);

        stats.increment_warning(WarningType::EmptyOfferList);
        assert_eq!(stats.get_warning_count(WarningType::EmptyOfferList), 1);

        stats.increment_info(InfoType::DuplicateOffer);
        assert_eq!(stats.get_info_count(InfoType::DuplicateOffer), 1);
    }

    #[test]
    fn test_processing_stats_add_info() {
        let stats = ProcessingStats::new();
        stats.add_info(InfoType::FilteredOffer, 4);
        stats.add_info(InfoType::FilteredOffer, 0);
        stats.increment_info(InfoType::FilteredOffer);
        assert_eq!(stats.get_info_count(InfoType::FilteredOffer), 5);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::MarkerNotFound);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_warning(WarningType::UnparsableOfferUrl);
        stats.increment_info(InfoType::SingleProviderShortcut);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 1);
    }
}
