//! Country records derived from cache filenames
//!
//! This module holds the externally visible `CountryEntry` record and the pure
//! normalization rule that turns a country key (`united_states`) into a display
//! name (`United States`). Nothing here touches the filesystem.

pub mod enrich;

pub use enrich::{enrich_all, CountryEnricher, StaticCountryTable};

use serde::{Deserialize, Serialize};

/// A country as exposed by the listing
///
/// `code` and `region` are carried in the record but left blank by the
/// resolver; see [`CountryEnricher`] for filling them in afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Human-readable country name
    pub name: String,
    /// Short identifier, empty when unknown
    pub code: String,
    /// Region classification, serialized as `null` when unset
    pub region: Option<String>,
}

impl CountryEntry {
    /// Builds an entry from a country key, leaving code and region blank
    pub fn from_key(key: &str) -> Self {
        Self {
            name: normalize_name(key),
            code: String::new(),
            region: None,
        }
    }
}

/// Converts a country key into its display name.
///
/// Splits on `_` only, upper-cases the first character of each segment and
/// lower-cases the rest, then joins the segments with a single space.
/// Empty segments are kept, so `a__b` becomes `A  B`.
///
/// # Examples
/// ```
/// use countrydex::country::normalize_name;
///
/// assert_eq!(normalize_name("new_york"), "New York");
/// assert_eq!(normalize_name("usa"), "Usa");
/// ```
pub fn normalize_name(key: &str) -> String {
    key.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_single_word() {
        assert_eq!(normalize_name("algeria"), "Algeria");
    }

    #[test]
    fn test_normalize_underscore_separated_words() {
        assert_eq!(normalize_name("new_york"), "New York");
        assert_eq!(normalize_name("united_states_of_america"), "United States Of America");
    }

    #[test]
    fn test_normalize_lowercases_inner_letters() {
        assert_eq!(normalize_name("usa"), "Usa");
        assert_eq!(normalize_name("USA"), "Usa");
        assert_eq!(normalize_name("sOUTH_aFRICA"), "South Africa");
    }

    #[test]
    fn test_normalize_only_splits_on_underscore() {
        assert_eq!(normalize_name("guinea-bissau"), "Guinea-bissau");
        assert_eq!(normalize_name("timor leste"), "Timor leste");
        assert_eq!(normalize_name("st.lucia"), "St.lucia");
    }

    #[test]
    fn test_normalize_keeps_empty_segments() {
        assert_eq!(normalize_name("a__b"), "A  B");
        assert_eq!(normalize_name("_a"), " A");
        assert_eq!(normalize_name("a_"), "A ");
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize_name("åland_islands"), "Åland Islands");
        assert_eq!(normalize_name("curaçao"), "Curaçao");
    }

    #[test]
    fn test_from_key_leaves_code_and_region_blank() {
        let entry = CountryEntry::from_key("costa_rica");
        assert_eq!(entry.name, "Costa Rica");
        assert_eq!(entry.code, "");
        assert!(entry.region.is_none());
    }

    #[test]
    fn test_entry_serializes_region_as_null() {
        let entry = CountryEntry::from_key("chile");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Chile","code":"","region":null}"#);
    }
}
