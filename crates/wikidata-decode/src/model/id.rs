//! Entity identifiers and their classification.
//!
//! Wikibase identifiers are short strings such as `Q42` (an item) or
//! `P31` (a property). The kind of an identifier is decided purely by its
//! leading character; no lookup is ever made.

use std::borrow::Borrow;
use std::fmt;

/// The concrete kind of a decoded entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Property,
}

impl EntityKind {
    /// Returns the wire name used in the entity `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::Property => "property",
        }
    }

    /// Parses the wire name of an entity type.
    pub fn from_wire(s: &str) -> Option<EntityKind> {
        match s {
            "item" => Some(EntityKind::Item),
            "property" => Some(EntityKind::Property),
            _ => None,
        }
    }

    /// Returns the identifier prefix for this kind.
    pub fn prefix(self) -> char {
        match self {
            EntityKind::Item => 'Q',
            EntityKind::Property => 'P',
        }
    }
}

/// Result of classifying an identifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Item,
    Property,
    Unknown,
}

impl IdKind {
    /// Returns the entity kind, or `None` for unknown identifiers.
    pub fn entity_kind(self) -> Option<EntityKind> {
        match self {
            IdKind::Item => Some(EntityKind::Item),
            IdKind::Property => Some(EntityKind::Property),
            IdKind::Unknown => None,
        }
    }
}

impl From<EntityKind> for IdKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Item => IdKind::Item,
            EntityKind::Property => IdKind::Property,
        }
    }
}

/// Classifies an identifier by its first character.
///
/// `Q…` is an item, `P…` a property; anything else, including the empty
/// string, is unknown.
pub fn classify(id: &str) -> IdKind {
    match id.as_bytes().first() {
        Some(b'Q') => IdKind::Item,
        Some(b'P') => IdKind::Property,
        _ => IdKind::Unknown,
    }
}

/// Returns true iff every identifier classifies into one of `allowed`.
///
/// An empty `ids` slice is trivially valid.
pub fn valid_ids<S: AsRef<str>>(ids: &[S], allowed: &[EntityKind]) -> bool {
    ids.iter().all(|id| {
        classify(id.as_ref())
            .entity_kind()
            .is_some_and(|kind| allowed.contains(&kind))
    })
}

/// An entity identifier as it appears on the wire.
///
/// Used both for decoded entities and for references to entities from
/// claims (the property of a claim, or an entity-valued claim).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    /// Wraps an identifier string without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds an identifier from a kind and its numeric part (`Item, 42` → `Q42`).
    pub fn from_numeric(kind: EntityKind, numeric: u64) -> Self {
        Self(format!("{}{}", kind.prefix(), numeric))
    }

    /// Returns the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies this identifier.
    pub fn kind(&self) -> IdKind {
        classify(&self.0)
    }

    /// Returns the numeric part of a well-formed `Q`/`P` identifier.
    pub fn numeric_id(&self) -> Option<u64> {
        self.kind().entity_kind()?;
        let digits = &self.0[1..];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns true if the identifier matches `^[QP]\d+$`.
    pub fn is_well_formed(&self) -> bool {
        self.numeric_id().is_some()
    }

    /// Consumes the identifier, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
