//! Producing the listing for a consumer
//!
//! Runs the resolver on tokio's blocking pool so a caller-supplied timeout can
//! bound it, then applies optional enrichment and renders JSON.

use std::path::PathBuf;

use tracing::warn;

use crate::cache::resolve_countries;
use crate::cli::ListingConfig;
use crate::country::{enrich_all, CountryEntry, StaticCountryTable};

/// Resolves the listing described by `config`.
///
/// A timed-out or panicked scan yields an empty listing with a warning, the
/// same as an unreadable directory.
pub async fn load_listing(config: &ListingConfig) -> Vec<CountryEntry> {
    load_listing_with(config, |dir| resolve_countries(dir)).await
}

/// Like [`load_listing`], with the directory scan supplied by the caller
pub async fn load_listing_with<F>(config: &ListingConfig, resolve: F) -> Vec<CountryEntry>
where
    F: FnOnce(PathBuf) -> Vec<CountryEntry> + Send + 'static,
{
    let cache_dir = config.cache_dir.clone();
    let task = tokio::task::spawn_blocking(move || resolve(cache_dir));

    let joined = match config.timeout {
        Some(limit) => match tokio::time::timeout(limit, task).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(timeout_ms = limit.as_millis() as u64, "country scan timed out");
                return Vec::new();
            }
        },
        None => task.await,
    };

    let mut entries = match joined {
        Ok(entries) => entries,
        Err(err) => {
            warn!(error = %err, "country scan task failed");
            return Vec::new();
        }
    };

    if config.enrich {
        enrich_all(&StaticCountryTable::default(), &mut entries);
    }

    entries
}

/// Renders entries as a JSON array
pub fn render(entries: &[CountryEntry], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(entries)
    } else {
        serde_json::to_string(entries)
    }
}
