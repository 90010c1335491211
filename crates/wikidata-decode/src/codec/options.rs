//! Options shared by all decode entry points.

use crate::limits::{MAX_BODY_LEN, MAX_ENTITIES};

/// Default language used to pick labels, descriptions and aliases.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Base URL that commons media filenames are appended to.
pub const COMMONS_FILE_BASE: &str = "https://commons.wikimedia.org/wiki/File:";

/// Options for decoding responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Language code whose label, description and aliases are kept.
    ///
    /// Terms in other languages are ignored; an entity without a term in
    /// this language decodes with `None`.
    pub language: String,
    /// Prefix for commons media values.
    pub media_base_url: String,
    /// Maximum body size in bytes (after decompression).
    pub max_body_len: usize,
    /// Maximum number of entity records per envelope.
    pub max_entities: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            media_base_url: COMMONS_FILE_BASE.to_string(),
            max_body_len: MAX_BODY_LEN,
            max_entities: MAX_ENTITIES,
        }
    }
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the term language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the commons media base URL.
    pub fn with_media_base_url(mut self, base: impl Into<String>) -> Self {
        self.media_base_url = base.into();
        self
    }

    /// Sets the body size limit. Values above [`MAX_BODY_LEN`] are clamped.
    pub fn with_max_body_len(mut self, max: usize) -> Self {
        self.max_body_len = max.min(MAX_BODY_LEN);
        self
    }

    /// Sets the per-envelope entity limit. Values above [`MAX_ENTITIES`] are clamped.
    pub fn with_max_entities(mut self, max: usize) -> Self {
        self.max_entities = max.min(MAX_ENTITIES);
        self
    }
}
