//! Provider listing run.

use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use url::Url;

use crate::app::print_error_statistics;
use crate::catalog::{plan_countries, process_country};
use crate::config::ProvidersConfig;
use crate::error_handling::{update_error_stats, InfoType, ProcessingStats};
use crate::initialization::init_client;

/// One listed provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEntry {
    /// Country code the provider was listed under
    pub country: String,
    /// Provider slug
    pub slug: String,
}

/// Results of a provider listing run.
#[derive(Debug, Clone)]
pub struct ProvidersReport {
    /// Listed providers in output order
    pub entries: Vec<ProviderEntry>,
    /// Countries skipped after a failed fetch
    pub skipped_countries: usize,
    /// Provider URLs rejected as malformed
    pub rejected_urls: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ProvidersReport {
    /// Output lines, `N. (<country>) <slug>`, numbered from 1.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {entry}", i + 1))
            .collect()
    }
}

impl fmt::Display for ProviderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.country, self.slug)
    }
}

/// Lists providers for a single country and/or a file of provider URLs.
///
/// Country mode lists every provider with titles and aborts on failure.
/// File mode reads a JSON array of provider URLs, groups them by country and
/// keeps only the requested providers. Malformed URLs and failed countries
/// are logged and skipped. A country with a single requested provider is
/// listed without a fetch.
///
/// # Errors
///
/// Fails on an invalid configuration, a failed country-mode fetch, or an
/// unreadable provider file.
pub async fn run_providers(config: ProvidersConfig) -> Result<ProvidersReport> {
    config
        .validate()
        .context("Invalid providers configuration")?;
    let start_time = Instant::now();
    let stats = ProcessingStats::new();
    let client = init_client(&config.http).context("Failed to initialize HTTP client")?;
    let site_url = config.http.site_url.as_str();

    let mut entries = Vec::new();
    let mut skipped_countries = 0;
    let mut rejected_urls = 0;

    if let Some(code) = &config.country {
        let slugs = process_country(&client, site_url, code, None)
            .await
            .with_context(|| format!("Failed to process country {code}"))?;
        entries.extend(slugs.into_iter().map(|slug| ProviderEntry {
            country: code.clone(),
            slug,
        }));
    }

    if let Some(file) = &config.file {
        let raw = tokio::fs::read(file)
            .await
            .with_context(|| format!("Failed to read provider file {}", file.display()))?;
        let urls: Vec<String> = serde_json::from_slice(&raw)
            .with_context(|| format!("Failed to parse provider file {}", file.display()))?;
        info!("Read {} provider URLs from {}", urls.len(), file.display());

        let base = Url::parse(site_url).context("Invalid site URL")?;
        let (plans, rejected) = plan_countries(&urls, &base);
        for error in &rejected {
            warn!("Skipping {error}");
            update_error_stats(&stats, error);
        }
        rejected_urls = rejected.len();

        for plan in plans {
            if let [slug] = plan.providers.as_slice() {
                stats.increment_info(InfoType::SingleProviderShortcut);
                entries.push(ProviderEntry {
                    country: plan.code.clone(),
                    slug: slug.clone(),
                });
                continue;
            }

            let filter: HashSet<String> = plan.providers.iter().cloned().collect();
            match process_country(&client, site_url, &plan.code, Some(&filter)).await {
                Ok(slugs) => entries.extend(slugs.into_iter().map(|slug| ProviderEntry {
                    country: plan.code.clone(),
                    slug,
                })),
                Err(e) => {
                    warn!("Error processing country {}: {e}", plan.code);
                    update_error_stats(&stats, &e);
                    skipped_countries += 1;
                }
            }
        }
    }

    print_error_statistics(&stats);

    Ok(ProvidersReport {
        entries,
        skipped_countries,
        rejected_urls,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
