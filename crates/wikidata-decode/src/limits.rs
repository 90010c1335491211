//! Security limits for decoding untrusted response bodies.
//!
//! These bound what a single decode call will accept. Body size is checked
//! before parsing; record counts are checked before any record is decoded
//! into the model. The size limits can be tightened per call through
//! [`DecodeOptions`].
//!
//! [`DecodeOptions`]: crate::codec::DecodeOptions

/// Maximum response body size in bytes, after decompression (64 MiB).
pub const MAX_BODY_LEN: usize = 64 * 1024 * 1024;

/// Maximum number of entity records in one entities envelope.
pub const MAX_ENTITIES: usize = 10_000;

/// Maximum number of hits in one search envelope.
pub const MAX_SEARCH_RESULTS: usize = 10_000;

/// Maximum length of a wire timestamp string.
///
/// Room for a sign, any year that fits an `i64` (19 digits) and the fixed
/// `-MM-DDTHH:MM:SSZ` suffix.
pub const MAX_TIME_LEN: usize = 40;
