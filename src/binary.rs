//! Tolerant SAUCE operations over an in-memory buffer.
//!
//! This layer locates and splits the trailing SAUCE block of an opaque
//! container without touching unrelated bytes, and without decoding
//! anything it does not have to. It is where the tolerance rules for
//! real-world files live: stale comment pointers, missing EOF
//! sentinels, reserved-but-empty records.
//!
//! Splits return subslices of the input; only the raw field writers
//! allocate.

use std::borrow::Cow;

use crate::field;
use crate::limits::{
    COMMENT_ID_SIZE, COMMENT_LINE_SIZE, EOF_CHARACTER, MAX_COMMENT_LINES, MIN_COMMENT_BLOCK_SIZE,
    RECORD_SIZE,
};
use crate::record::{COMMENT_ID, SAUCE_ID};
use crate::schema::SauceField;
use crate::util;
use crate::{Result, SauceError};

/// Whether `bytes` are exactly one SAUCE record.
///
/// The all-zero trailers produced by writers that reserve space without
/// populating it carry the "SAUCE" id but are not records.
pub fn is_record(bytes: &[u8]) -> bool {
    bytes.len() == RECORD_SIZE
        && bytes.starts_with(SAUCE_ID)
        && !bytes[SAUCE_ID.len()..].iter().all(|&b| b == 0)
}

/// Whether `bytes` are exactly one well-formed comment block: the
/// "COMNT" id followed by whole 64-byte lines, at least one.
pub fn is_comment_block(bytes: &[u8]) -> bool {
    bytes.len() >= MIN_COMMENT_BLOCK_SIZE
        && bytes.starts_with(COMMENT_ID)
        && (bytes.len() - COMMENT_ID_SIZE) % COMMENT_LINE_SIZE == 0
}

/// Like [`is_comment_block`] but without the whole-lines requirement.
/// Used when diagnosing malformed files.
pub fn is_comment_fragment(bytes: &[u8]) -> bool {
    bytes.len() >= MIN_COMMENT_BLOCK_SIZE && bytes.starts_with(COMMENT_ID)
}

/// The record slice at the buffer tail, when one is there.
fn record_at_tail(buf: &[u8]) -> Option<&[u8]> {
    if buf.len() < RECORD_SIZE {
        return None;
    }
    let record = &buf[buf.len() - RECORD_SIZE..];
    is_record(record).then_some(record)
}

/// Split a buffer into `(contents, record, comments)`.
///
/// The comment slice is non-empty only when the record's count field
/// points at a well-formed block directly before the record; a stale
/// pointer leaves those bytes in `contents`. A buffer without a record
/// splits into `(buf, [], [])`.
pub fn split_all(buf: &[u8]) -> (&[u8], &[u8], &[u8]) {
    let Some(record) = record_at_tail(buf) else {
        return (buf, &[], &[]);
    };
    let record_start = buf.len() - RECORD_SIZE;
    let lines = record[SauceField::CommentLines.offset()] as usize;
    if lines > 0 {
        let block_len = COMMENT_ID_SIZE + lines * COMMENT_LINE_SIZE;
        if let Some(comment_start) = record_start.checked_sub(block_len) {
            let comments = &buf[comment_start..record_start];
            if is_comment_block(comments) {
                return (&buf[..comment_start], record, comments);
            }
        }
    }
    (&buf[..record_start], record, &[])
}

/// Split into `(record, comments)`, discarding the contents.
pub fn split_sauce(buf: &[u8]) -> (&[u8], &[u8]) {
    let (_, record, comments) = split_all(buf);
    (record, comments)
}

/// Split into `(contents, record)`, ignoring any comment block.
pub fn split_record(buf: &[u8]) -> (&[u8], &[u8]) {
    let Some(record) = record_at_tail(buf) else {
        return (buf, &[]);
    };
    (&buf[..buf.len() - RECORD_SIZE], record)
}

/// Split with an explicit line count instead of the record's count
/// field. Falls back to a record-only split when the layout for `lines`
/// does not hold.
pub fn split_with(buf: &[u8], lines: u8) -> (&[u8], &[u8], &[u8]) {
    let Some(record) = record_at_tail(buf) else {
        return (buf, &[], &[]);
    };
    let record_start = buf.len() - RECORD_SIZE;
    if lines > 0 {
        let block_len = COMMENT_ID_SIZE + lines as usize * COMMENT_LINE_SIZE;
        if let Some(comment_start) = record_start.checked_sub(block_len) {
            let comments = &buf[comment_start..record_start];
            if is_comment_block(comments) {
                return (&buf[..comment_start], record, comments);
            }
        }
    }
    (&buf[..record_start], record, &[])
}

/// Raw bytes of one record field. Decoding is the codec's job; writers
/// use this to rewrite single fields without a decode/encode round trip.
pub fn read_field(buf: &[u8], field: SauceField) -> Result<&[u8]> {
    let record = record_at_tail(buf).ok_or(SauceError::NoSauce)?;
    Ok(field::field_bytes(record, field))
}

/// Overwrite one record field with raw bytes of the field's exact size,
/// returning the new buffer.
pub fn write_field(buf: &[u8], field: SauceField, raw: &[u8]) -> Result<Vec<u8>> {
    if record_at_tail(buf).is_none() {
        return Err(SauceError::NoSauce);
    }
    if raw.len() != field.size() {
        return Err(SauceError::InvalidLength {
            pos: field.offset(),
            len: raw.len(),
            buffer_len: buf.len(),
        });
    }
    let record_start = buf.len() - RECORD_SIZE;
    util::replace_slice(buf, record_start + field.offset(), raw)
}

/// Everything before the SAUCE block. With `terminate_with_eof` the
/// result is guaranteed to end with the EOF sentinel, appending one if
/// the contents do not already carry it.
pub fn contents(buf: &[u8], terminate_with_eof: bool) -> Cow<'_, [u8]> {
    let (contents, _, _) = split_all(buf);
    if terminate_with_eof {
        eof_terminate(contents)
    } else {
        Cow::Borrowed(contents)
    }
}

/// The strict view a DOS-era pager would show: the contents up to the
/// first EOF sentinel.
pub fn clean_contents(buf: &[u8]) -> &[u8] {
    let (contents, _, _) = split_all(buf);
    match contents.iter().position(|&b| b == EOF_CHARACTER) {
        Some(pos) => &contents[..pos],
        None => contents,
    }
}

/// Whether a plain binary ends with the EOF sentinel.
pub fn eof_terminated(bytes: &[u8]) -> bool {
    bytes.last() == Some(&EOF_CHARACTER)
}

/// Append the EOF sentinel to a plain binary unless it already ends
/// with one.
pub fn eof_terminate(bytes: &[u8]) -> Cow<'_, [u8]> {
    if eof_terminated(bytes) {
        Cow::Borrowed(bytes)
    } else {
        let mut data = bytes.to_vec();
        data.push(EOF_CHARACTER);
        Cow::Owned(data)
    }
}

/// Match the record at the buffer tail, reporting `(position, length)`.
///
/// With `eof_required` the byte before the record must be the EOF
/// sentinel; the reported position is the id byte after the sentinel and
/// the length does not include it.
pub fn match_record(buf: &[u8], eof_required: bool) -> Option<(usize, usize)> {
    let record_start = buf.len().checked_sub(RECORD_SIZE)?;
    if !is_record(&buf[record_start..]) {
        return None;
    }
    if eof_required && (record_start == 0 || buf[record_start - 1] != EOF_CHARACTER) {
        return None;
    }
    Some((record_start, RECORD_SIZE))
}

/// Match the well-formed comment block the tail record points at.
/// Requires a record, otherwise the block has no defined end.
pub fn match_comment_block(buf: &[u8], eof_required: bool) -> Option<(usize, usize)> {
    let (record_start, _) = match_record(buf, false)?;
    let lines = buf[record_start + SauceField::CommentLines.offset()] as usize;
    if lines == 0 {
        return None;
    }
    let block_len = COMMENT_ID_SIZE + lines * COMMENT_LINE_SIZE;
    let start = record_start.checked_sub(block_len)?;
    if !is_comment_block(&buf[start..record_start]) {
        return None;
    }
    if eof_required && (start == 0 || buf[start - 1] != EOF_CHARACTER) {
        return None;
    }
    Some((start, block_len))
}

/// Match a "COMNT" fragment in the tail window, whole lines or not.
/// Unlike [`match_comment_block`] this works without a record and is the
/// tool for diagnosing files whose count field and block disagree.
pub fn match_comment_fragment(buf: &[u8], eof_required: bool) -> Option<(usize, usize)> {
    let end = match match_record(buf, false) {
        Some((record_start, _)) => record_start,
        None => buf.len(),
    };
    // Bounded scan: a fragment cannot be longer than the largest block.
    let window_len = end.min(COMMENT_ID_SIZE + MAX_COMMENT_LINES * COMMENT_LINE_SIZE);
    let window_start = end - window_len;
    let pos = buf[window_start..end]
        .windows(COMMENT_ID_SIZE)
        .position(|window| window == COMMENT_ID.as_slice())?
        + window_start;
    let len = end - pos;
    if len < MIN_COMMENT_BLOCK_SIZE {
        return None;
    }
    if eof_required && (pos == 0 || buf[pos - 1] != EOF_CHARACTER) {
        return None;
    }
    Some((pos, len))
}

/// Recover the comment line count from the block's byte length instead
/// of the record's count field. This is the structural count repair
/// tooling compares against [`comment_lines_field`].
pub fn count_comment_lines(buf: &[u8]) -> Result<usize> {
    let (_, len) = match_comment_fragment(buf, false).ok_or(SauceError::NoComments)?;
    Ok((len - COMMENT_ID_SIZE) / COMMENT_LINE_SIZE)
}

/// The record's comment count field, as stored.
pub fn comment_lines_field(buf: &[u8]) -> Result<u8> {
    Ok(read_field(buf, SauceField::CommentLines)?[0])
}
