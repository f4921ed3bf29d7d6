//! Write, update and strip SAUCE metadata on an in-memory buffer.
//!
//! Writers are total: a malformed block still encodes (defaults fill
//! in), and strip operations on a buffer without a record are no-ops.
//! All operations produce a new buffer and leave the input untouched.

use std::borrow::Cow;

use crate::binary;
use crate::block::SauceBlock;
use crate::record;
use crate::schema::SauceField;

/// Write or replace the SAUCE block of a buffer.
///
/// Any existing block is dropped first, so stale comment blocks can not
/// survive next to the fresh record. An EOF sentinel is inserted between
/// contents and block if the contents do not already end with one.
pub fn write(buf: &[u8], block: &SauceBlock) -> Vec<u8> {
    let body = binary::contents(buf, true);
    let mut out = body.into_owned();
    out.extend_from_slice(&record::encode_comments(block));
    out.extend_from_slice(&record::encode_record(block));
    out
}

/// Drop the comment block and zero the record's count field. A buffer
/// without a record is returned unchanged; a stale nonzero count with no
/// block is repaired to zero.
pub fn remove_comments(buf: &[u8]) -> Cow<'_, [u8]> {
    let (contents, record, comments) = binary::split_all(buf);
    if record.is_empty() {
        return Cow::Borrowed(buf);
    }
    if comments.is_empty() && record[SauceField::CommentLines.offset()] == 0 {
        return Cow::Borrowed(buf);
    }
    let mut out = Vec::with_capacity(contents.len() + record.len());
    out.extend_from_slice(contents);
    out.extend_from_slice(record);
    let count_pos = contents.len() + SauceField::CommentLines.offset();
    out[count_pos] = 0;
    Cow::Owned(out)
}

/// Strip the whole SAUCE block. The EOF sentinel before the block is
/// contents and stays. Returns the input subslice unchanged when no
/// record is present.
pub fn remove_sauce(buf: &[u8]) -> &[u8] {
    let (contents, _, _) = binary::split_all(buf);
    contents
}
