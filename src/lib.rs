//! countrydex library
//!
//! Derives a sorted country listing from a directory of per-country cache
//! documents, using filenames as the only source of identity.

pub mod cache;
pub mod cli;
pub mod country;
pub mod listing;

pub use cache::resolve_countries;
pub use country::CountryEntry;
