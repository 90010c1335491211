//! Raw response body handling: compression sniffing, limits and UTF-8.

use std::borrow::Cow;
use std::io::Read;

use crate::codec::options::DecodeOptions;
use crate::error::DecodeError;

/// Magic number that starts every zstd frame.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Returns true if `input` starts with a zstd frame.
pub fn is_compressed(input: &[u8]) -> bool {
    input.starts_with(&ZSTD_MAGIC)
}

/// Decompresses a zstd body, refusing to grow past `max_len` bytes.
pub fn decompress(input: &[u8], max_len: usize) -> Result<Vec<u8>, DecodeError> {
    let decoder =
        zstd::Decoder::new(input).map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    let mut decompressed = Vec::new();
    decoder
        .take(max_len as u64 + 1)
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    if decompressed.len() > max_len {
        return Err(DecodeError::LengthExceedsLimit {
            field: "body",
            len: decompressed.len(),
            max: max_len,
        });
    }
    Ok(decompressed)
}

/// Checks a text body against the configured size limit.
pub(crate) fn check_len(body: &str, options: &DecodeOptions) -> Result<(), DecodeError> {
    if body.len() > options.max_body_len {
        return Err(DecodeError::LengthExceedsLimit {
            field: "body",
            len: body.len(),
            max: options.max_body_len,
        });
    }
    Ok(())
}

/// Turns raw body bytes into text.
///
/// zstd-compressed bodies are detected by their frame magic and
/// decompressed; plain bodies are borrowed. A leading UTF-8 byte order
/// mark is dropped.
pub fn read_body<'a>(input: &'a [u8], options: &DecodeOptions) -> Result<Cow<'a, str>, DecodeError> {
    let bytes: Cow<'a, [u8]> = if is_compressed(input) {
        Cow::Owned(decompress(input, options.max_body_len)?)
    } else {
        Cow::Borrowed(input)
    };

    let text = match bytes {
        Cow::Borrowed(b) => {
            let b = b.strip_prefix(UTF8_BOM).unwrap_or(b);
            Cow::Borrowed(std::str::from_utf8(b).map_err(|_| DecodeError::InvalidUtf8)?)
        }
        Cow::Owned(mut v) => {
            if v.starts_with(UTF8_BOM) {
                v.drain(..UTF8_BOM.len());
            }
            Cow::Owned(String::from_utf8(v).map_err(|_| DecodeError::InvalidUtf8)?)
        }
    };

    check_len(&text, options)?;
    Ok(text)
}
