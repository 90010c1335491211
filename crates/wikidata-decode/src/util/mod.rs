//! Utility modules for Wikibase decoding.

pub mod datetime;

pub use datetime::parse_wikibase_time;
