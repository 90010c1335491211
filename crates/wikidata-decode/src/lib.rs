//! Typed decoding of Wikibase API responses.
//!
//! This crate turns the JSON bodies returned by a Wikibase API (such as
//! Wikidata's `wbsearchentities` and `wbgetentities`) into an owned,
//! strongly-typed model of items, properties, claims and values.
//!
//! # Overview
//!
//! - **Identifiers** are classified by prefix: `Q…` items, `P…` properties
//! - **Claims** carry one of a closed set of value kinds; unknown value
//!   types fail the decode instead of being guessed
//! - **Dates** are normalized to their stated precision, so two dates
//!   compare equal when they agree at that precision
//!
//! # Quick Start
//!
//! ```rust
//! use wikidata_decode::{decode_entities, decode_search, ClaimValue};
//!
//! let body = r#"{
//!     "searchinfo": {"search": "earth"},
//!     "search": [{"id": "Q2", "label": "Earth", "description": "third planet"}],
//!     "success": 1
//! }"#;
//! let search = decode_search(body).unwrap();
//! assert_eq!(search.top_result().unwrap().id, "Q2");
//!
//! let body = r#"{"entities": {"Q2": {
//!     "id": "Q2",
//!     "type": "item",
//!     "labels": {"en": {"language": "en", "value": "Earth"}},
//!     "claims": {"P18": [{"mainsnak": {
//!         "snaktype": "value",
//!         "property": "P18",
//!         "datatype": "commonsMedia",
//!         "datavalue": {"value": "Earth.jpg", "type": "string"}
//!     }}]}
//! }}}"#;
//! let result = decode_entities(body).unwrap();
//! let earth = result.get("Q2").unwrap();
//! assert_eq!(earth.label.as_deref(), Some("Earth"));
//! assert!(matches!(&earth.claims_for("P18")[0].value, ClaimValue::Media(_)));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Output types (Entity, Claim, ClaimValue, CalendarValue, results)
//! - [`codec`]: Envelope, entity and snak decoders plus [`DecodeOptions`]
//! - [`util`]: Wire timestamp parsing
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! Response bodies are treated as untrusted input:
//! - Body size, entity count and search hit count are bounded
//! - zstd-compressed bodies are decompressed under the same size bound
//! - Any structural defect fails the whole call; there are no partial results

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;

// Re-export commonly used types at crate root
pub use codec::{
    decode_entities, decode_entities_bytes, decode_entities_with_options, decode_entity,
    decode_entity_with_options, decode_response, decode_response_bytes,
    decode_response_with_options, decode_search, decode_search_bytes, decode_search_with_options,
    decode_snak, decode_snak_with_options, detect_envelope, DecodeOptions, EnvelopeKind, Response,
};
pub use error::{DecodeError, ErrorCode};
pub use model::{
    classify, normalize, valid_ids, ApiError, CalendarValue, Claim, ClaimMap, ClaimValue, Entity,
    EntityId, EntityKind, EntityResult, GlobeCoordinates, IdKind, Precision, Quantity, Rank,
    RawTime, Search, SearchResult, ValueType, UNITLESS,
};
pub use util::parse_wikibase_time;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
