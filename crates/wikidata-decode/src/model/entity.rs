//! Decoded entities (items and properties).

use rustc_hash::FxHashMap;

use crate::model::{Claim, EntityId, EntityKind};

/// Claims grouped by property, in source order.
///
/// Keeps property groups in the order they were first seen and claims
/// within each group in statement order. Uses FxHashMap for the
/// property → group index.
#[derive(Debug, Clone, Default)]
pub struct ClaimMap {
    groups: Vec<(EntityId, Vec<Claim>)>,
    indices: FxHashMap<EntityId, usize>,
}

impl ClaimMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with room for `properties` groups.
    pub fn with_capacity(properties: usize) -> Self {
        Self {
            groups: Vec::with_capacity(properties),
            indices: FxHashMap::with_capacity_and_hasher(properties, Default::default()),
        }
    }

    /// Returns the group index for a property, creating an empty group if needed.
    pub fn add_property(&mut self, property: EntityId) -> usize {
        if let Some(&idx) = self.indices.get(&property) {
            idx
        } else {
            let idx = self.groups.len();
            self.groups.push((property.clone(), Vec::new()));
            self.indices.insert(property, idx);
            idx
        }
    }

    /// Appends a claim to its property's group.
    pub fn push(&mut self, claim: Claim) {
        let idx = self.add_property(claim.property.clone());
        self.groups[idx].1.push(claim);
    }

    /// Returns the claims for a property, in statement order.
    pub fn get(&self, property: &str) -> Option<&[Claim]> {
        self.indices
            .get(property)
            .map(|&idx| self.groups[idx].1.as_slice())
    }

    /// Iterates over (property, claims) groups in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &[Claim])> {
        self.groups.iter().map(|(p, c)| (p, c.as_slice()))
    }

    /// Iterates over all claims, group by group.
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.groups.iter().flat_map(|(_, c)| c.iter())
    }

    /// Property ids in source order.
    pub fn properties(&self) -> impl Iterator<Item = &EntityId> {
        self.groups.iter().map(|(p, _)| p)
    }

    /// Number of property groups (including empty ones).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True iff at least one group holds a claim.
    pub fn has_claims(&self) -> bool {
        self.groups.iter().any(|(_, c)| !c.is_empty())
    }
}

impl PartialEq for ClaimMap {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

/// An item or property record.
///
/// `kind` is fixed when the record is decoded, from the identifier prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub id: EntityId,
    /// Label in the configured language; `None` when absent on the wire.
    pub label: Option<String>,
    /// Description in the configured language; `None` when absent on the wire.
    pub description: Option<String>,
    pub aliases: Vec<String>,
    /// Declared value datatype of a property (e.g. `wikibase-item`).
    pub datatype: Option<String>,
    pub claims: ClaimMap,
}

impl Entity {
    /// Creates an entity with no terms and no claims.
    pub fn new(kind: EntityKind, id: impl Into<EntityId>) -> Self {
        Self {
            kind,
            id: id.into(),
            label: None,
            description: None,
            aliases: Vec::new(),
            datatype: None,
            claims: ClaimMap::new(),
        }
    }

    pub fn is_item(&self) -> bool {
        self.kind == EntityKind::Item
    }

    pub fn is_property(&self) -> bool {
        self.kind == EntityKind::Property
    }

    pub fn has_claims(&self) -> bool {
        self.claims.has_claims()
    }

    /// Claims made with `property`, or an empty slice.
    pub fn claims_for(&self, property: &str) -> &[Claim] {
        self.claims.get(property).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimValue;

    fn text(property: &str, s: &str) -> Claim {
        Claim::new(property.into(), ClaimValue::Text(s.into()))
    }

    #[test]
    fn test_claim_map_preserves_order() {
        let mut map = ClaimMap::new();
        map.push(text("P2", "a"));
        map.push(text("P1", "b"));
        map.push(text("P2", "c"));

        let props: Vec<_> = map.properties().map(|p| p.as_str()).collect();
        assert_eq!(props, ["P2", "P1"]);

        let values: Vec<_> = map.get("P2").unwrap().iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, [Some("a"), Some("c")]);

        let all: Vec<_> = map.claims().filter_map(|c| c.value.as_str()).collect();
        assert_eq!(all, ["a", "c", "b"]);
    }

    #[test]
    fn test_has_claims_ignores_empty_groups() {
        let mut entity = Entity::new(EntityKind::Item, "Q27");
        assert!(!entity.has_claims());

        entity.claims.add_property("P31".into());
        assert_eq!(entity.claims.len(), 1);
        assert!(!entity.has_claims());

        entity.claims.push(text("P31", "x"));
        assert!(entity.has_claims());
        assert_eq!(entity.claims_for("P31").len(), 1);
        assert!(entity.claims_for("P999").is_empty());
    }
}
