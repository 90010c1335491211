//! Entity record decoding.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::codec::options::DecodeOptions;
use crate::codec::snak::decode_statement;
use crate::codec::wire::{WireEntity, WireStatement};
use crate::error::DecodeError;
use crate::model::{classify, ClaimMap, Entity, EntityId, EntityKind, IdKind};

/// Decodes one entity record into an item or property.
pub fn decode_entity(fragment: &Value) -> Result<Entity, DecodeError> {
    decode_entity_with_options(fragment, &DecodeOptions::default())
}

/// Decodes one entity record with explicit options.
///
/// The record must carry `id` and `type`; the id prefix picks the kind
/// and `type` must agree with it. Terms are taken in `options.language`.
pub fn decode_entity_with_options(
    fragment: &Value,
    options: &DecodeOptions,
) -> Result<Entity, DecodeError> {
    if !fragment.is_object() {
        return Err(DecodeError::NotAnObject { context: "entity" });
    }
    let mut wire = WireEntity::deserialize(fragment).map_err(|e| DecodeError::json("entity", e))?;

    let id = wire.id.take().ok_or(DecodeError::MalformedEntity {
        id: None,
        reason: "missing id",
    })?;
    let Some(declared) = wire.entity_type.take() else {
        return Err(DecodeError::MalformedEntity {
            id: Some(id),
            reason: "missing type",
        });
    };
    let Some(kind) = classify(&id).entity_kind() else {
        return Err(DecodeError::MalformedEntity {
            id: Some(id),
            reason: "id is neither an item nor a property",
        });
    };
    if EntityKind::from_wire(&declared) != Some(kind) {
        return Err(DecodeError::EntityTypeMismatch { id, declared });
    }

    let lang = options.language.as_str();
    let label = wire.labels.remove(lang).map(|t| t.value);
    let description = wire.descriptions.remove(lang).map(|t| t.value);
    let aliases = wire
        .aliases
        .remove(lang)
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.value)
        .collect();

    let claims = decode_claims(&id, wire.claims, options)?;
    let datatype = match kind {
        EntityKind::Property => wire.datatype,
        EntityKind::Item => None,
    };

    trace!(id = %id, kind = kind.as_str(), properties = claims.len(), "decoded entity");

    Ok(Entity {
        kind,
        id: EntityId::new(id),
        label,
        description,
        aliases,
        datatype,
        claims,
    })
}

fn decode_claims(
    entity_id: &str,
    groups: serde_json::Map<String, Value>,
    options: &DecodeOptions,
) -> Result<ClaimMap, DecodeError> {
    let mut claims = ClaimMap::with_capacity(groups.len());

    for (property, statements) in groups {
        if classify(&property) != IdKind::Property {
            return Err(DecodeError::MalformedEntity {
                id: Some(entity_id.to_string()),
                reason: "claim group is not keyed by a property id",
            });
        }
        claims.add_property(EntityId::new(property.as_str()));

        let statements = Vec::<WireStatement>::deserialize(statements)
            .map_err(|e| DecodeError::json("claims", e))?;

        for statement in statements {
            let claim = decode_statement(statement, Some(property.as_str()), options)?;
            if claim.property != property.as_str() {
                return Err(DecodeError::MalformedEntity {
                    id: Some(entity_id.to_string()),
                    reason: "statement property does not match its claim group",
                });
            }
            claims.push(claim);
        }
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::ValueType;
    use serde_json::json;

    fn earth() -> Value {
        json!({
            "id": "Q2",
            "type": "item",
            "labels": {
                "en": {"language": "en", "value": "Earth"},
                "de": {"language": "de", "value": "Erde"}
            },
            "descriptions": {
                "en": {"language": "en", "value": "third planet closest to the Sun in the Solar System"}
            },
            "aliases": {
                "en": [
                    {"language": "en", "value": "the world"},
                    {"language": "en", "value": "Blue Planet"}
                ]
            },
            "claims": {
                "P31": [
                    {
                        "mainsnak": {
                            "snaktype": "value",
                            "property": "P31",
                            "datatype": "wikibase-item",
                            "datavalue": {
                                "value": {"entity-type": "item", "numeric-id": 3504248, "id": "Q3504248"},
                                "type": "wikibase-entityid"
                            }
                        },
                        "type": "statement",
                        "rank": "normal"
                    }
                ],
                "P18": [
                    {
                        "mainsnak": {
                            "snaktype": "value",
                            "property": "P18",
                            "datatype": "commonsMedia",
                            "datavalue": {"value": "Earth.jpg", "type": "string"}
                        },
                        "type": "statement",
                        "rank": "normal"
                    }
                ]
            }
        })
    }

    #[test]
    fn test_decode_item() {
        let entity = decode_entity(&earth()).unwrap();
        assert!(entity.is_item());
        assert_eq!(entity.id, "Q2");
        assert_eq!(entity.label.as_deref(), Some("Earth"));
        assert_eq!(
            entity.description.as_deref(),
            Some("third planet closest to the Sun in the Solar System")
        );
        assert_eq!(entity.aliases, ["the world", "Blue Planet"]);
        assert!(entity.has_claims());

        let props: Vec<_> = entity.claims.properties().map(|p| p.as_str()).collect();
        assert_eq!(props, ["P31", "P18"]);
        assert_eq!(entity.claims_for("P18")[0].value_type(), ValueType::Media);
    }

    #[test]
    fn test_language_selection() {
        let opts = DecodeOptions::new().with_language("de");
        let entity = decode_entity_with_options(&earth(), &opts).unwrap();
        assert_eq!(entity.label.as_deref(), Some("Erde"));
        assert_eq!(entity.description, None);
        assert!(entity.aliases.is_empty());
    }

    #[test]
    fn test_absent_terms_are_none_not_empty() {
        let entity = decode_entity(&json!({"id": "Q1", "type": "item"})).unwrap();
        assert_eq!(entity.label, None);
        assert_eq!(entity.description, None);
        assert!(!entity.has_claims());

        let entity = decode_entity(&json!({
            "id": "Q1",
            "type": "item",
            "labels": {"en": {"language": "en", "value": ""}}
        }))
        .unwrap();
        assert_eq!(entity.label.as_deref(), Some(""));
    }

    #[test]
    fn test_property_keeps_datatype() {
        let entity = decode_entity(&json!({
            "id": "P106",
            "type": "property",
            "datatype": "wikibase-item",
            "labels": {"en": {"language": "en", "value": "occupation"}}
        }))
        .unwrap();
        assert!(entity.is_property());
        assert_eq!(entity.datatype.as_deref(), Some("wikibase-item"));
    }

    #[test]
    fn test_required_fields() {
        let err = decode_entity(&json!({"type": "item"})).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedEntity);

        let err = decode_entity(&json!({"id": "Q1"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedEntity {
                id: Some("Q1".into()),
                reason: "missing type"
            }
        );

        let err = decode_entity(&json!({"id": "L1", "type": "lexeme"})).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedEntity);

        let err = decode_entity(&json!({"id": "Q1", "type": "property"})).unwrap_err();
        assert!(matches!(err, DecodeError::EntityTypeMismatch { .. }));
    }

    #[test]
    fn test_bad_snak_fails_the_entity() {
        let mut record = earth();
        record["claims"]["P18"][0]["mainsnak"]["datavalue"]["type"] = json!("geo-shape-v2");
        let err = decode_entity(&record).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedSnakType);
    }

    #[test]
    fn test_claim_groups_must_be_properties() {
        for key in ["Q5", "foo"] {
            let record = json!({
                "id": "Q1",
                "type": "item",
                "claims": {
                    key: [{
                        "mainsnak": {"snaktype": "novalue", "property": key},
                        "type": "statement"
                    }]
                }
            });
            let err = decode_entity(&record).unwrap_err();
            assert_eq!(
                err,
                DecodeError::MalformedEntity {
                    id: Some("Q1".into()),
                    reason: "claim group is not keyed by a property id"
                }
            );
        }
    }

    #[test]
    fn test_mismatched_group_property() {
        let mut record = earth();
        record["claims"]["P18"][0]["mainsnak"]["property"] = json!("P31");
        let err = decode_entity(&record).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedEntity);
    }
}
