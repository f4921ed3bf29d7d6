//! Per-field encoding and decoding.
//!
//! Each record field has a declared size and a storage convention:
//! space-padded CP437 text, a NUL-padded C-string, eight ASCII date
//! digits, or a little-endian integer. Decoders are tolerant: garbage in
//! a non-required field falls back to the field default instead of
//! failing the record.

use crate::encoding::{decode_text, encode_text};
use crate::limits::{COMMENT_LINE_SIZE, MAX_COMMENT_LINES, RECORD_SIZE};
use crate::schema::SauceField;
use crate::util;
use crate::{Result, SauceError};

/// The version a record gets when the input is empty or unencodable.
pub const DEFAULT_VERSION: &str = "00";

/// Encode a space-padded text field to exactly `len` bytes.
/// Code points without a CP437 mapping are dropped.
pub(crate) fn encode_string(text: &str, len: usize) -> Vec<u8> {
    util::pad_truncate(&encode_text(text.trim_end()), len, b" ")
}

/// Decode a space-padded text field.
///
/// Rogue writers NUL-pad these fields, so everything from the first NUL
/// on is ignored. Trailing whitespace is storage padding, not content.
pub(crate) fn decode_string(bytes: &[u8]) -> String {
    decode_text(util::trim_trailing(util::until_nul(bytes)))
}

/// Encode a NUL-padded C-string field to exactly `len` bytes.
pub(crate) fn encode_cstring(text: &str, len: usize) -> Vec<u8> {
    util::pad_truncate(&encode_text(text.trim_end()), len, b"\0")
}

/// Decode a NUL-padded C-string field.
///
/// A zero-filled slot means the writer stored nothing; that decodes to
/// `None`, distinct from a present-but-empty string.
pub(crate) fn decode_cstring(bytes: &[u8]) -> Option<String> {
    if bytes.iter().all(|&b| b == 0) {
        return None;
    }
    Some(decode_text(util::trim_trailing(util::until_nul(bytes))))
}

/// Encode the two version bytes; invalid or empty input becomes "00".
pub(crate) fn encode_version(version: &str) -> Vec<u8> {
    let trimmed = version.trim();
    if trimmed.is_empty()
        || trimmed.len() > SauceField::Version.size()
        || !trimmed.bytes().all(|b| b.is_ascii_graphic())
    {
        return DEFAULT_VERSION.as_bytes().to_vec();
    }
    util::pad_truncate(trimmed.as_bytes(), SauceField::Version.size(), b" ")
}

/// Decode the version field; `None` marks an undecodable version and
/// therefore an invalid record.
pub(crate) fn decode_version(bytes: &[u8]) -> Option<String> {
    let version = decode_string(bytes);
    if version.is_empty() {
        return None;
    }
    Some(version)
}

/// Encode a single comment line to its 64 stored bytes.
pub(crate) fn encode_comment_line(line: &str) -> Vec<u8> {
    encode_string(line, COMMENT_LINE_SIZE)
}

/// Decode a single comment line. An all-NUL line carries no value and
/// decodes to `None`; a blank space-padded line is a real empty line.
pub(crate) fn decode_comment_line(bytes: &[u8]) -> Option<String> {
    if bytes.iter().all(|&b| b == 0) {
        return None;
    }
    Some(decode_string(bytes))
}

/// Clamp a line count into the single count byte.
pub(crate) fn clamp_comment_lines(count: usize) -> u8 {
    count.min(MAX_COMMENT_LINES) as u8
}

/// Overwrite one field of a 128-byte record with raw bytes of the
/// field's exact size.
pub fn write_field(record: &[u8], field: SauceField, raw: &[u8]) -> Result<Vec<u8>> {
    if record.len() != RECORD_SIZE || raw.len() != field.size() {
        return Err(SauceError::InvalidLength {
            pos: field.offset(),
            len: raw.len(),
            buffer_len: record.len(),
        });
    }
    util::replace_slice(record, field.offset(), raw)
}

/// Slice one field out of a 128-byte record.
pub(crate) fn field_bytes(record: &[u8], field: SauceField) -> &[u8] {
    &record[field.range()]
}
