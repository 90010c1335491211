//! Decoding of Wikibase API responses.
//!
//! Decoders are layered: [`response`] handles whole envelopes and hands
//! each entity record to [`entity`], which hands each statement to
//! [`snak`]. Serde shapes of the wire format live in a private `wire`
//! module.

pub mod body;
pub mod entity;
pub mod options;
pub mod response;
pub mod snak;
mod wire;

pub use body::{decompress, is_compressed, read_body, ZSTD_MAGIC};
pub use entity::{decode_entity, decode_entity_with_options};
pub use options::{DecodeOptions, COMMONS_FILE_BASE, DEFAULT_LANGUAGE};
pub use response::{
    decode_entities, decode_entities_bytes, decode_entities_with_options, decode_response,
    decode_response_bytes, decode_response_with_options, decode_search, decode_search_bytes,
    decode_search_with_options, detect_envelope, EnvelopeKind, Response,
};
pub use snak::{decode_snak, decode_snak_with_options};
