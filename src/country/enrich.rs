//! Optional post-resolution enrichment of country records
//!
//! The resolver never fills `code` or `region`. Consumers that want them run
//! an enricher over the listing after it has been resolved.

use super::CountryEntry;

/// Fills in fields the filename alone cannot provide
pub trait CountryEnricher {
    /// Updates `entry` in place. Entries the enricher knows nothing about
    /// must be left untouched.
    fn enrich(&self, entry: &mut CountryEntry);
}

/// Applies an enricher to every entry, preserving order
pub fn enrich_all<E: CountryEnricher + ?Sized>(enricher: &E, entries: &mut [CountryEntry]) {
    for entry in entries.iter_mut() {
        enricher.enrich(entry);
    }
}

/// Lookup record for the static table
#[derive(Debug, Clone, PartialEq, Eq)]
struct KnownCountry {
    name: String,
    code: String,
    region: String,
}

/// Enricher backed by an in-memory table keyed by display name
///
/// Name matching is case-insensitive, so the normalized `Usa` matches a
/// table row for `USA`.
#[derive(Debug, Clone)]
pub struct StaticCountryTable {
    rows: Vec<KnownCountry>,
}

impl Default for StaticCountryTable {
    fn default() -> Self {
        Self::empty()
            .with_country("Algeria", "DZ", "Africa")
            .with_country("USA", "US", "North America")
    }
}

impl StaticCountryTable {
    /// Creates a table with no rows
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Adds a row, replacing any existing row with the same name
    pub fn with_country(mut self, name: &str, code: &str, region: &str) -> Self {
        self.rows.retain(|row| !same_name(&row.name, name));
        self.rows.push(KnownCountry {
            name: name.to_string(),
            code: code.to_string(),
            region: region.to_string(),
        });
        self
    }

    fn lookup(&self, name: &str) -> Option<&KnownCountry> {
        self.rows.iter().find(|row| same_name(&row.name, name))
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl CountryEnricher for StaticCountryTable {
    fn enrich(&self, entry: &mut CountryEntry) {
        if let Some(row) = self.lookup(&entry.name) {
            entry.code = row.code.clone();
            entry.region = Some(row.region.clone());
        }
    }
}
