//! Snak decoding: typed value fragments into claims.
//!
//! The `datavalue.type` tag selects the decoder. For `string` values the
//! snak's `datatype` further decides which kind of string it is. Any tag
//! outside the known set fails the decode; nothing is defaulted.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::codec::options::DecodeOptions;
use crate::codec::wire::{
    WireDataValue, WireEntityIdValue, WireGlobeCoordinate, WireMonolingualText, WireQuantity,
    WireSnak, WireStatement, WireTime,
};
use crate::error::DecodeError;
use crate::model::{
    normalize, Claim, ClaimValue, EntityId, EntityKind, GlobeCoordinates, IdKind, Quantity, Rank,
    UNITLESS,
};
use crate::util::parse_wikibase_time;

/// Decodes a snak (or a whole statement) into a claim.
///
/// Accepts either a bare snak object or a statement wrapping one under
/// `mainsnak`; in the latter case the statement's rank is kept.
pub fn decode_snak(fragment: &Value) -> Result<Claim, DecodeError> {
    decode_snak_with_options(fragment, &DecodeOptions::default())
}

/// Decodes a snak with explicit options.
pub fn decode_snak_with_options(
    fragment: &Value,
    options: &DecodeOptions,
) -> Result<Claim, DecodeError> {
    let obj = fragment
        .as_object()
        .ok_or(DecodeError::NotAnObject { context: "snak" })?;

    if obj.contains_key("mainsnak") {
        let statement = WireStatement::deserialize(fragment)
            .map_err(|e| DecodeError::json("statement", e))?;
        decode_statement(statement, None, options)
    } else {
        let snak = WireSnak::deserialize(fragment).map_err(|e| DecodeError::json("snak", e))?;
        decode_wire_snak(snak, None, Rank::Normal, options)
    }
}

/// Decodes one statement of a claim group.
///
/// `property` is the group key, used when the snak does not name its
/// own property.
pub(crate) fn decode_statement(
    statement: WireStatement,
    property: Option<&str>,
    options: &DecodeOptions,
) -> Result<Claim, DecodeError> {
    let rank = match statement.rank.as_deref() {
        None => Rank::default(),
        Some(r) => Rank::from_wire(r).ok_or_else(|| DecodeError::MalformedValue {
            kind: "statement",
            message: format!("unknown rank {r:?}"),
        })?,
    };
    decode_wire_snak(statement.mainsnak, property, rank, options)
}

fn decode_wire_snak(
    snak: WireSnak,
    property: Option<&str>,
    rank: Rank,
    options: &DecodeOptions,
) -> Result<Claim, DecodeError> {
    let property: EntityId = snak
        .property
        .or_else(|| property.map(String::from))
        .ok_or_else(|| DecodeError::MalformedValue {
            kind: "snak",
            message: "missing property".to_string(),
        })?
        .into();
    if property.kind() != IdKind::Property {
        return Err(DecodeError::MalformedValue {
            kind: "snak",
            message: format!("{property:?} is not a property id"),
        });
    }

    let value = match snak.snaktype.as_deref() {
        Some("somevalue") => ClaimValue::SomeValue,
        Some("novalue") => ClaimValue::NoValue,
        None | Some("value") => {
            let datavalue = snak.datavalue.ok_or_else(|| DecodeError::MissingDataValue {
                property: property.to_string(),
                snaktype: "value".to_string(),
            })?;
            decode_datavalue(datavalue, snak.datatype.as_deref(), options)?
        }
        Some(other) => {
            return Err(DecodeError::MalformedValue {
                kind: "snak",
                message: format!("unknown snaktype {other:?}"),
            });
        }
    };

    trace!(property = %property, value_type = %value.value_type(), "decoded snak");
    Ok(Claim {
        property,
        value,
        rank,
    })
}

fn decode_datavalue(
    datavalue: WireDataValue,
    datatype: Option<&str>,
    options: &DecodeOptions,
) -> Result<ClaimValue, DecodeError> {
    let WireDataValue { value_type, value } = datavalue;
    match value_type.as_str() {
        "wikibase-entityid" => decode_entity_ref(value),
        "string" => decode_string(value, datatype, options),
        "monolingualtext" => decode_monolingual(value),
        "globecoordinate" => decode_globe_coordinate(value),
        "quantity" => decode_quantity(value),
        "time" => decode_time(value),
        _ => Err(DecodeError::UnsupportedSnakType { value_type }),
    }
}

fn decode_entity_ref(value: Value) -> Result<ClaimValue, DecodeError> {
    let v = WireEntityIdValue::deserialize(value)
        .map_err(|e| DecodeError::value("wikibase-entityid", e))?;

    if let Some(id) = v.id {
        let id = EntityId::new(id);
        if id.kind() == IdKind::Unknown {
            return Err(DecodeError::MalformedValue {
                kind: "wikibase-entityid",
                message: format!("{id:?} is neither an item nor a property"),
            });
        }
        return Ok(ClaimValue::Entity(id));
    }

    let kind = v.entity_type.as_deref().and_then(EntityKind::from_wire);
    match (kind, v.numeric_id) {
        (Some(kind), Some(n)) => Ok(ClaimValue::Entity(EntityId::from_numeric(kind, n))),
        _ => Err(DecodeError::MalformedValue {
            kind: "wikibase-entityid",
            message: "neither id nor entity-type/numeric-id given".to_string(),
        }),
    }
}

fn decode_string(
    value: Value,
    datatype: Option<&str>,
    options: &DecodeOptions,
) -> Result<ClaimValue, DecodeError> {
    let Value::String(s) = value else {
        return Err(DecodeError::MalformedValue {
            kind: "string",
            message: "value is not a string".to_string(),
        });
    };

    Ok(match datatype {
        Some("external-id") => ClaimValue::ExternalId(s),
        Some("url") => ClaimValue::Url(s),
        Some("commonsMedia") => ClaimValue::Media(format!("{}{}", options.media_base_url, s)),
        Some("math") => ClaimValue::Math(s),
        _ => ClaimValue::Text(s),
    })
}

fn decode_monolingual(value: Value) -> Result<ClaimValue, DecodeError> {
    let v = WireMonolingualText::deserialize(value)
        .map_err(|e| DecodeError::value("monolingualtext", e))?;
    Ok(ClaimValue::Text(v.text))
}

fn decode_globe_coordinate(value: Value) -> Result<ClaimValue, DecodeError> {
    let v = WireGlobeCoordinate::deserialize(value)
        .map_err(|e| DecodeError::value("globecoordinate", e))?;
    Ok(ClaimValue::Coordinates(GlobeCoordinates {
        latitude: v.latitude,
        longitude: v.longitude,
    }))
}

/// Parses a signed decimal string such as `+100` or `-0.25`.
fn parse_amount(s: &str, field: &str) -> Result<f64, DecodeError> {
    s.parse::<f64>().map_err(|_| DecodeError::MalformedValue {
        kind: "quantity",
        message: format!("{field} {s:?} is not a number"),
    })
}

/// Extracts the numeric unit id from a unit URI (`…/entity/Q11573` → 11573).
fn parse_unit(unit: Option<&str>) -> Result<u64, DecodeError> {
    let uri = match unit {
        None | Some("1") => return Ok(UNITLESS),
        Some(uri) => uri,
    };
    let tail = uri.rsplit('/').next().unwrap_or(uri);
    tail.strip_prefix('Q')
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| DecodeError::MalformedValue {
            kind: "quantity",
            message: format!("unrecognized unit {uri:?}"),
        })
}

fn decode_quantity(value: Value) -> Result<ClaimValue, DecodeError> {
    let v = WireQuantity::deserialize(value).map_err(|e| DecodeError::value("quantity", e))?;
    Ok(ClaimValue::Quantity(Quantity {
        amount: parse_amount(&v.amount, "amount")?,
        upper_bound: v
            .upper_bound
            .as_deref()
            .map(|s| parse_amount(s, "upperBound"))
            .transpose()?,
        lower_bound: v
            .lower_bound
            .as_deref()
            .map(|s| parse_amount(s, "lowerBound"))
            .transpose()?,
        unit: parse_unit(v.unit.as_deref())?,
    }))
}

fn decode_time(value: Value) -> Result<ClaimValue, DecodeError> {
    let v = WireTime::deserialize(value).map_err(|e| DecodeError::value("time", e))?;
    let raw = parse_wikibase_time(&v.time)?;
    Ok(ClaimValue::Date(normalize(raw, v.precision)?))
}
