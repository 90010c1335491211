//! Top-level envelope decoding.
//!
//! Two envelope shapes are understood: search responses (`search` +
//! `searchinfo`) and get-entities responses (`entities`). Either may carry
//! an `error` object instead, which decodes to an unsuccessful result rather
//! than a [`DecodeError`].

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::codec::body::{check_len, read_body};
use crate::codec::entity::decode_entity_with_options;
use crate::codec::options::DecodeOptions;
use crate::codec::wire::{success_of, EntitiesEnvelope, SearchEnvelope};
use crate::error::DecodeError;
use crate::limits::MAX_SEARCH_RESULTS;
use crate::model::{EntityId, EntityResult, Search, SearchResult};

/// Shape of a response envelope, judged by the sections it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// Has a `search` or `searchinfo` section.
    Search,
    /// Has an `entities` section.
    Entities,
    /// Only an `error` object.
    Error,
    /// Not JSON, not an object, or none of the above.
    Unknown,
}

/// A decoded response of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Search(Search),
    Entities(EntityResult),
}

impl Response {
    pub fn was_successful(&self) -> bool {
        match self {
            Response::Search(s) => s.success,
            Response::Entities(e) => e.success,
        }
    }
}

fn parse_object(body: &str, options: &DecodeOptions) -> Result<Map<String, Value>, DecodeError> {
    check_len(body, options)?;
    match serde_json::from_str(body).map_err(|e| DecodeError::json("response body", e))? {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject {
            context: "response body",
        }),
    }
}

fn kind_of(envelope: &Map<String, Value>) -> EnvelopeKind {
    if envelope.contains_key("search") || envelope.contains_key("searchinfo") {
        EnvelopeKind::Search
    } else if envelope.contains_key("entities") {
        EnvelopeKind::Entities
    } else if envelope.contains_key("error") {
        EnvelopeKind::Error
    } else {
        EnvelopeKind::Unknown
    }
}

/// Classifies a response body without decoding it.
pub fn detect_envelope(body: &str) -> EnvelopeKind {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => kind_of(&map),
        _ => EnvelopeKind::Unknown,
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Decodes a search response.
///
/// Fails with [`DecodeError::MissingSearchSection`] when the body has no
/// `search` list at all, which means a search decode was applied to some
/// other kind of response.
pub fn decode_search(body: &str) -> Result<Search, DecodeError> {
    decode_search_with_options(body, &DecodeOptions::default())
}

/// Decodes a search response with explicit options.
pub fn decode_search_with_options(body: &str, options: &DecodeOptions) -> Result<Search, DecodeError> {
    let envelope = parse_object(body, options)?;
    search_from_envelope(envelope)
}

/// Decodes a search response from raw, possibly zstd-compressed bytes.
pub fn decode_search_bytes(input: &[u8], options: &DecodeOptions) -> Result<Search, DecodeError> {
    let body = read_body(input, options)?;
    decode_search_with_options(&body, options)
}

fn search_from_envelope(envelope: Map<String, Value>) -> Result<Search, DecodeError> {
    let envelope = SearchEnvelope::deserialize(Value::Object(envelope))
        .map_err(|e| DecodeError::json("search envelope", e))?;
    let query = envelope.searchinfo.and_then(|info| info.search);

    if let Some(error) = envelope.error {
        debug!(code = ?error.code, "search response carries an API error");
        return Ok(Search {
            success: false,
            query,
            results: Vec::new(),
            continue_offset: None,
            error: Some(error.into()),
        });
    }

    let hits = envelope.search.ok_or(DecodeError::MissingSearchSection)?;
    if hits.len() > MAX_SEARCH_RESULTS {
        return Err(DecodeError::LengthExceedsLimit {
            field: "search",
            len: hits.len(),
            max: MAX_SEARCH_RESULTS,
        });
    }

    let mut results = Vec::with_capacity(hits.len());
    for hit in hits {
        let id = hit.id.ok_or(DecodeError::MalformedEntity {
            id: None,
            reason: "search hit has no id",
        })?;
        results.push(SearchResult::new(id, hit.label, hit.description));
    }

    debug!(query = ?query, results = results.len(), "decoded search response");

    Ok(Search {
        success: success_of(envelope.success.as_ref(), None),
        query,
        results,
        continue_offset: envelope.search_continue,
        error: None,
    })
}

// =============================================================================
// ENTITIES
// =============================================================================

/// Decodes a get-entities response.
///
/// Every entity record is decoded; the first one that fails aborts the
/// whole call. Records the API reports as `missing` are listed in
/// [`EntityResult::missing`] instead.
pub fn decode_entities(body: &str) -> Result<EntityResult, DecodeError> {
    decode_entities_with_options(body, &DecodeOptions::default())
}

/// Decodes a get-entities response with explicit options.
pub fn decode_entities_with_options(
    body: &str,
    options: &DecodeOptions,
) -> Result<EntityResult, DecodeError> {
    let envelope = parse_object(body, options)?;
    entities_from_envelope(envelope, options)
}

/// Decodes a get-entities response from raw, possibly zstd-compressed bytes.
pub fn decode_entities_bytes(input: &[u8], options: &DecodeOptions) -> Result<EntityResult, DecodeError> {
    let body = read_body(input, options)?;
    decode_entities_with_options(&body, options)
}

fn entities_from_envelope(
    envelope: Map<String, Value>,
    options: &DecodeOptions,
) -> Result<EntityResult, DecodeError> {
    let envelope = EntitiesEnvelope::deserialize(Value::Object(envelope))
        .map_err(|e| DecodeError::json("entities envelope", e))?;

    let success = success_of(envelope.success.as_ref(), envelope.error.as_ref());
    if let Some(error) = &envelope.error {
        debug!(code = ?error.code, "entities response carries an API error");
    }

    let records = envelope.entities.unwrap_or_default();
    if records.len() > options.max_entities {
        return Err(DecodeError::LengthExceedsLimit {
            field: "entities",
            len: records.len(),
            max: options.max_entities,
        });
    }

    let mut entities = Vec::with_capacity(records.len());
    let mut missing = Vec::new();
    for (key, record) in records {
        if record.get("missing").is_some() {
            let id = record
                .get("id")
                .and_then(Value::as_str)
                .map(EntityId::from)
                .unwrap_or_else(|| EntityId::new(key));
            debug!(id = %id, "entity reported missing");
            missing.push(id);
            continue;
        }
        entities.push(decode_entity_with_options(&record, options)?);
    }

    debug!(
        entities = entities.len(),
        missing = missing.len(),
        success,
        "decoded entities response"
    );

    Ok(EntityResult {
        success,
        entities,
        missing,
        error: if success { None } else { envelope.error.map(Into::into) },
    })
}

// =============================================================================
// AUTO-DETECTION
// =============================================================================

/// Decodes a response of either kind, picking the decoder by its sections.
///
/// A bare error envelope decodes as an unsuccessful [`EntityResult`].
pub fn decode_response(body: &str) -> Result<Response, DecodeError> {
    decode_response_with_options(body, &DecodeOptions::default())
}

/// Decodes a response of either kind with explicit options.
pub fn decode_response_with_options(
    body: &str,
    options: &DecodeOptions,
) -> Result<Response, DecodeError> {
    let envelope = parse_object(body, options)?;
    let kind = kind_of(&envelope);
    debug!(?kind, "classified response envelope");

    match kind {
        EnvelopeKind::Search => search_from_envelope(envelope).map(Response::Search),
        EnvelopeKind::Entities | EnvelopeKind::Error => {
            entities_from_envelope(envelope, options).map(Response::Entities)
        }
        EnvelopeKind::Unknown => Err(DecodeError::MalformedValue {
            kind: "envelope",
            message: "no search, entities or error section".to_string(),
        }),
    }
}

/// Decodes a response of either kind from raw, possibly zstd-compressed bytes.
pub fn decode_response_bytes(input: &[u8], options: &DecodeOptions) -> Result<Response, DecodeError> {
    let body = read_body(input, options)?;
    decode_response_with_options(&body, options)
}
