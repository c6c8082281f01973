//! Title report run.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::aggregate::{
    collect_offers, deduplicate, filter_offers, group_and_sort, try_normalize_url,
};
use crate::app::{print_error_statistics, print_title_summary, report_file_name, resolve_address};
use crate::catalog::{fetch_content, GraphqlOfferSource};
use crate::config::TitleConfig;
use crate::error_handling::{InfoType, ProcessingStats, WarningType};
use crate::initialization::init_client;
use crate::report::render_report;

/// Results of a title run.
#[derive(Debug, Clone)]
pub struct TitleReport {
    /// Number of locales advertised by the title page
    pub locales: usize,
    /// Offers fetched across all locales
    pub fetched: usize,
    /// Offers left after deduplication
    pub unique: usize,
    /// Offers left after filtering
    pub kept: usize,
    /// Number of report groups
    pub groups: usize,
    /// Path of the written report
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Builds the grouped offer report for one title and writes it to disk.
///
/// The title page is fetched once, then every advertised locale is queried
/// in page order. Offers are deduplicated, filtered, grouped by canonical URL
/// and written to `<output_dir>/<last path segment>.md`.
///
/// # Errors
///
/// The first failure aborts the run: an invalid configuration or address, a
/// failed page or offer fetch, an unknown locale, or a failed write.
pub async fn run_title(config: TitleConfig) -> Result<TitleReport> {
    config.validate().context("Invalid title configuration")?;
    let start_time = Instant::now();
    let stats = ProcessingStats::new();

    let path = resolve_address(&config.address).context("Failed to resolve title address")?;
    let client = init_client(&config.http).context("Failed to initialize HTTP client")?;

    let tags = fetch_content(&client, &config.http.site_url, &path)
        .await
        .with_context(|| format!("Failed to fetch title page {path}"))?;
    if tags.is_empty() {
        warn!("Title page {path} advertises no locales");
    }

    let source = GraphqlOfferSource::new(Arc::clone(&client), config.http.api_url.clone());
    let collected = collect_offers(
        &tags,
        &source,
        Duration::from_millis(config.sleep_ms),
        &stats,
    )
    .await
    .context("Failed to collect offers")?;

    let fetched = collected.len();
    let unique = deduplicate(collected);
    let unique_count = unique.len();
    stats.add_info(InfoType::DuplicateOffer, fetched - unique_count);

    let kept = match &config.filters {
        Some(accepted) => filter_offers(unique, accepted),
        None => unique,
    };
    let kept_count = kept.len();
    stats.add_info(InfoType::FilteredOffer, unique_count - kept_count);

    for record in &kept {
        if let Err(e) = try_normalize_url(&record.offer.standard_web_url) {
            warn!(
                "Grouping unparsable offer URL {:?} as is: {e}",
                record.offer.standard_web_url
            );
            stats.increment_warning(WarningType::UnparsableOfferUrl);
        }
    }

    let groups = group_and_sort(kept, config.group_order.comparator());
    let group_count = groups.len();

    let output_path = config.output_dir.join(report_file_name(&path));
    info!("WriteFile {}", output_path.display());
    tokio::fs::write(&output_path, render_report(&groups))
        .await
        .with_context(|| format!("Failed to write report {}", output_path.display()))?;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_error_statistics(&stats);
    print_title_summary(tags.len(), fetched, kept_count, group_count, elapsed_seconds);

    Ok(TitleReport {
        locales: tags.len(),
        fetched,
        unique: unique_count,
        kept: kept_count,
        groups: group_count,
        output_path,
        elapsed_seconds,
    })
}
