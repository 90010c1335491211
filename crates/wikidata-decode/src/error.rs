//! Error types for Wikibase response decoding.

use thiserror::Error;

/// Failure categories a decode call can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: search decode applied to a body with no `search` section
    MissingSearchSection,
    /// E002: entity record lacks id/type or they contradict each other
    MalformedEntity,
    /// E003: `datavalue.type` outside the recognized set
    UnsupportedSnakType,
    /// E004: time precision code outside the lookup table
    UnsupportedPrecision,
    /// E005: body, JSON, or value payload is structurally broken
    MalformedInput,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MissingSearchSection => "E001",
            ErrorCode::MalformedEntity => "E002",
            ErrorCode::UnsupportedSnakType => "E003",
            ErrorCode::UnsupportedPrecision => "E004",
            ErrorCode::MalformedInput => "E005",
        }
    }
}

/// Error during response decoding.
///
/// Any of these aborts the whole decode call; there is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E001: Missing search section ===
    #[error("[E001] response has no `search` section")]
    MissingSearchSection,

    // === E002: Malformed entity ===
    #[error("[E002] malformed entity {id:?}: {reason}")]
    MalformedEntity {
        id: Option<String>,
        reason: &'static str,
    },

    #[error("[E002] entity {id} declares type {declared:?} but its id is not of that kind")]
    EntityTypeMismatch { id: String, declared: String },

    // === E003: Unsupported snak type ===
    #[error("[E003] unsupported snak value type: {value_type:?}")]
    UnsupportedSnakType { value_type: String },

    // === E004: Unsupported precision ===
    #[error("[E004] unsupported time precision code: {code}")]
    UnsupportedPrecision { code: i64 },

    // === E005: Malformed input ===
    #[error("[E005] invalid JSON in {context}: {message}")]
    InvalidJson {
        context: &'static str,
        message: String,
    },

    #[error("[E005] expected a JSON object for {context}")]
    NotAnObject { context: &'static str },

    #[error("[E005] malformed {kind} value: {message}")]
    MalformedValue { kind: &'static str, message: String },

    #[error("[E005] {snaktype} snak for {property} has no datavalue")]
    MissingDataValue { property: String, snaktype: String },

    #[error("[E005] invalid time {value:?}: {reason}")]
    InvalidTime { value: String, reason: &'static str },

    #[error("[E005] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E005] invalid UTF-8 in response body")]
    InvalidUtf8,

    #[error("[E005] zstd decompression failed: {0}")]
    DecompressionFailed(String),
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::MissingSearchSection => ErrorCode::MissingSearchSection,
            DecodeError::MalformedEntity { .. } | DecodeError::EntityTypeMismatch { .. } => {
                ErrorCode::MalformedEntity
            }
            DecodeError::UnsupportedSnakType { .. } => ErrorCode::UnsupportedSnakType,
            DecodeError::UnsupportedPrecision { .. } => ErrorCode::UnsupportedPrecision,
            _ => ErrorCode::MalformedInput,
        }
    }

    pub(crate) fn json(context: &'static str, err: serde_json::Error) -> Self {
        DecodeError::InvalidJson {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn value(kind: &'static str, err: impl std::fmt::Display) -> Self {
        DecodeError::MalformedValue {
            kind,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_taxonomy() {
        assert_eq!(DecodeError::MissingSearchSection.code().code(), "E001");
        assert_eq!(
            DecodeError::EntityTypeMismatch {
                id: "Q1".into(),
                declared: "property".into()
            }
            .code(),
            ErrorCode::MalformedEntity
        );
        assert_eq!(
            DecodeError::UnsupportedPrecision { code: 15 }.code(),
            ErrorCode::UnsupportedPrecision
        );
        assert_eq!(DecodeError::InvalidUtf8.code(), ErrorCode::MalformedInput);
    }

    #[test]
    fn test_message_carries_code() {
        let err = DecodeError::UnsupportedSnakType {
            value_type: "lexeme-form".into(),
        };
        assert!(err.to_string().starts_with("[E003]"));
        assert!(err.to_string().contains("lexeme-form"));
    }
}
