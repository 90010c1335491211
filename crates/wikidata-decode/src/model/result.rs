//! Top-level decode results.
//!
//! A result with `success == false` is a normal outcome: the remote API
//! answered, but with an error object. Payloads that cannot be decoded at
//! all surface as [`DecodeError`](crate::DecodeError) instead.

use crate::model::{Entity, EntityId, IdKind};

/// Error object reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiError {
    /// Machine-readable code, e.g. `no-such-entity`.
    pub code: Option<String>,
    /// Human-readable message.
    pub info: Option<String>,
}

impl ApiError {
    /// Best available message: `info`, then `code`.
    pub fn message(&self) -> Option<&str> {
        self.info.as_deref().or(self.code.as_deref())
    }
}

/// One hit of an entity search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: EntityId,
    /// Kind derived from the id prefix.
    pub kind: IdKind,
    pub label: Option<String>,
    pub description: Option<String>,
}

impl SearchResult {
    /// Creates a hit, classifying its id.
    pub fn new(id: impl Into<EntityId>, label: Option<String>, description: Option<String>) -> Self {
        let id = id.into();
        Self {
            kind: id.kind(),
            id,
            label,
            description,
        }
    }
}

/// A decoded search response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Search {
    pub success: bool,
    /// The query as echoed back by the API.
    pub query: Option<String>,
    /// Hits in ranking order.
    pub results: Vec<SearchResult>,
    /// Offset of the next page, when more results exist.
    pub continue_offset: Option<u64>,
    /// Present only when `success` is false.
    pub error: Option<ApiError>,
}

impl Search {
    pub fn was_successful(&self) -> bool {
        self.success
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// The highest ranked hit.
    pub fn top_result(&self) -> Option<&SearchResult> {
        self.results.first()
    }
}

/// A decoded get-entities response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityResult {
    pub success: bool,
    /// Entities in response order.
    pub entities: Vec<Entity>,
    /// Ids the API reported as missing, in response order.
    pub missing: Vec<EntityId>,
    /// Present only when `success` is false.
    pub error: Option<ApiError>,
}

impl EntityResult {
    pub fn was_successful(&self) -> bool {
        self.success
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Looks up a decoded entity by id.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }
}
