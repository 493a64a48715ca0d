//! Cache index module for deriving the country listing from disk
//!
//! The cache directory holds one `<country_key>.json` document per country and
//! is the only record of which countries exist. This module enumerates it and
//! turns the filenames into a sorted, de-duplicated listing. Every call rescans
//! the directory; no state is kept between calls.

mod resolver;

pub use resolver::{
    documents, resolve_countries, scan, CachedDocumentRef, Resolution, ScanError, ScanOutcome,
    DOCUMENT_EXTENSION,
};
