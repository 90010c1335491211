//! Serde shapes of the Wikibase JSON wire format.
//!
//! These mirror the API output closely and are converted into the owned
//! model by the decoders. Polymorphic value payloads stay as raw
//! [`Value`]s here; dispatch on their type tag happens in the snak decoder.

use rustc_hash::FxHashMap;
use serde::de::{Deserializer, Error as _, IgnoredAny};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::ApiError;

/// Accepts an object, or an empty array standing in for an empty object.
///
/// Wikibase serializes some empty maps (`claims`, `aliases`, …) as `[]`.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Map(T),
        Seq(Vec<IgnoredAny>),
    }

    match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Map(map) => Ok(map),
        Lenient::Seq(seq) if seq.is_empty() => Ok(T::default()),
        Lenient::Seq(_) => Err(D::Error::custom("expected an object, found a non-empty array")),
    }
}

/// Interprets a top-level `success` flag together with the error object.
///
/// An error object always means failure. Otherwise an explicit flag
/// decides (`1`, `true` or `"1"`), and a missing flag means success.
pub(crate) fn success_of(success: Option<&Value>, error: Option<&WireApiError>) -> bool {
    if error.is_some() {
        return false;
    }
    match success {
        None | Some(Value::Null) => true,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "1",
        Some(_) => false,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WireApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

impl From<WireApiError> for ApiError {
    fn from(err: WireApiError) -> Self {
        ApiError {
            code: err.code,
            info: err.info,
        }
    }
}

// =============================================================================
// SEARCH
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(default)]
    pub search: Option<Vec<WireSearchHit>>,
    #[serde(default)]
    pub searchinfo: Option<WireSearchInfo>,
    #[serde(default, rename = "search-continue")]
    pub search_continue: Option<u64>,
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub error: Option<WireApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSearchInfo {
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSearchHit {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct EntitiesEnvelope {
    #[serde(default, deserialize_with = "lenient_map")]
    pub entities: Option<Map<String, Value>>,
    #[serde(default)]
    pub success: Option<Value>,
    #[serde(default)]
    pub error: Option<WireApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireTerm {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub labels: FxHashMap<String, WireTerm>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub descriptions: FxHashMap<String, WireTerm>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub aliases: FxHashMap<String, Vec<WireTerm>>,
    /// Ordered: property groups keep their response order.
    #[serde(default, deserialize_with = "lenient_map")]
    pub claims: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireStatement {
    pub mainsnak: WireSnak,
    #[serde(default)]
    pub rank: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireSnak {
    #[serde(default)]
    pub snaktype: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub datatype: Option<String>,
    #[serde(default)]
    pub datavalue: Option<WireDataValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireDataValue {
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: Value,
}

// =============================================================================
// VALUE PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct WireEntityIdValue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "entity-type")]
    pub entity_type: Option<String>,
    #[serde(default, rename = "numeric-id")]
    pub numeric_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMonolingualText {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireGlobeCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireQuantity {
    pub amount: String,
    #[serde(default, rename = "upperBound")]
    pub upper_bound: Option<String>,
    #[serde(default, rename = "lowerBound")]
    pub lower_bound: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireTime {
    pub time: String,
    pub precision: i64,
}
