//! Claims and their decoded values.
//!
//! A claim is a (property, value) pair attached to an entity. The value is
//! one of a closed set of shapes, and its kind tag is derived from that
//! shape so the two can never disagree.

use std::fmt;

use crate::model::{CalendarValue, EntityId};

/// Kind tag of a claim value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Entity,
    Text,
    Url,
    Media,
    GpsCoordinates,
    Quantity,
    CarbonDate,
    Math,
    ExternalId,
    /// `somevalue` / `novalue` snaks, which carry no concrete value.
    Unknown,
}

impl ValueType {
    /// Snake-case tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Entity => "entity",
            ValueType::Text => "text",
            ValueType::Url => "url",
            ValueType::Media => "media",
            ValueType::GpsCoordinates => "gps_coordinates",
            ValueType::Quantity => "quantity",
            ValueType::CarbonDate => "carbon_date",
            ValueType::Math => "math",
            ValueType::ExternalId => "external_id",
            ValueType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WGS84-style latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Unit id used for unitless quantities.
pub const UNITLESS: u64 = 1;

/// A bounded numeric quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    /// Upper bound of the uncertainty interval, when the wire gives one.
    pub upper_bound: Option<f64>,
    /// Lower bound of the uncertainty interval, when the wire gives one.
    pub lower_bound: Option<f64>,
    /// Numeric item id of the unit (`Q11573` → 11573), or [`UNITLESS`].
    pub unit: u64,
}

impl Quantity {
    pub fn is_unitless(&self) -> bool {
        self.unit == UNITLESS
    }
}

/// A decoded claim value.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    /// Reference to another item or property.
    Entity(EntityId),
    /// Plain or monolingual text (language is discarded).
    Text(String),
    Url(String),
    /// Full commons media URL.
    Media(String),
    Coordinates(GlobeCoordinates),
    Quantity(Quantity),
    Date(CalendarValue),
    Math(String),
    ExternalId(String),
    /// The property has some value, but it is not known.
    SomeValue,
    /// The property explicitly has no value.
    NoValue,
}

impl ClaimValue {
    /// Returns the kind tag for this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            ClaimValue::Entity(_) => ValueType::Entity,
            ClaimValue::Text(_) => ValueType::Text,
            ClaimValue::Url(_) => ValueType::Url,
            ClaimValue::Media(_) => ValueType::Media,
            ClaimValue::Coordinates(_) => ValueType::GpsCoordinates,
            ClaimValue::Quantity(_) => ValueType::Quantity,
            ClaimValue::Date(_) => ValueType::CarbonDate,
            ClaimValue::Math(_) => ValueType::Math,
            ClaimValue::ExternalId(_) => ValueType::ExternalId,
            ClaimValue::SomeValue | ClaimValue::NoValue => ValueType::Unknown,
        }
    }

    /// Returns the string payload of text-like values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::Text(s)
            | ClaimValue::Url(s)
            | ClaimValue::Media(s)
            | ClaimValue::Math(s)
            | ClaimValue::ExternalId(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&EntityId> {
        match self {
            ClaimValue::Entity(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&CalendarValue> {
        match self {
            ClaimValue::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            ClaimValue::Quantity(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_coordinates(&self) -> Option<&GlobeCoordinates> {
        match self {
            ClaimValue::Coordinates(c) => Some(c),
            _ => None,
        }
    }
}

/// Statement rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rank {
    Preferred,
    #[default]
    Normal,
    Deprecated,
}

impl Rank {
    /// Parses the wire rank name.
    pub fn from_wire(s: &str) -> Option<Rank> {
        match s {
            "preferred" => Some(Rank::Preferred),
            "normal" => Some(Rank::Normal),
            "deprecated" => Some(Rank::Deprecated),
            _ => None,
        }
    }
}

/// A decoded (property, value) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// The property this claim is made with.
    pub property: EntityId,
    pub value: ClaimValue,
    pub rank: Rank,
}

impl Claim {
    pub fn new(property: EntityId, value: ClaimValue) -> Self {
        Self {
            property,
            value,
            rank: Rank::Normal,
        }
    }

    /// Returns the kind tag of this claim's value.
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }
}
