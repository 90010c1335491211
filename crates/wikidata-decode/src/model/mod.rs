//! Data model types for decoded Wikibase responses.
//!
//! This module contains the owned output graph of a decode call:
//! - Identifiers and their classification
//! - Precision-aware calendar values
//! - Claims and their values
//! - Entities (items and properties)
//! - Search and get-entities results

pub mod calendar;
pub mod claim;
pub mod entity;
pub mod id;
pub mod result;

pub use calendar::{normalize, CalendarValue, Precision, RawTime};
pub use claim::{Claim, ClaimValue, GlobeCoordinates, Quantity, Rank, ValueType, UNITLESS};
pub use entity::{ClaimMap, Entity};
pub use id::{classify, valid_ids, EntityId, EntityKind, IdKind};
pub use result::{ApiError, EntityResult, Search, SearchResult};
