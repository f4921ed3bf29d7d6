//! Read SAUCE metadata from an in-memory buffer.

use crate::binary;
use crate::block::SauceBlock;
use crate::record;
use crate::schema::SauceField;
use crate::{Result, SauceError};

/// Decode the SAUCE block of a buffer.
///
/// A record whose count field points at a missing or mis-shaped comment
/// block still decodes; the block simply has no comments. That mismatch
/// is the single most common defect in wild files.
///
/// # Errors
///
/// - [`SauceError::NoSauce`] when the buffer carries no record.
/// - [`SauceError::InvalidSauce`] when the record is structurally broken.
pub fn sauce(buf: &[u8]) -> Result<SauceBlock> {
    let (record_bytes, comment_bytes) = binary::split_sauce(buf);
    if record_bytes.is_empty() {
        return Err(SauceError::NoSauce);
    }
    let mut block = record::decode_record(record_bytes)?;
    let expected = record_bytes[SauceField::CommentLines.offset()];
    block.comments = match record::decode_comments(comment_bytes, expected) {
        Ok(lines) => lines,
        Err(SauceError::NoComments) => {
            log::warn!(
                "SAUCE record points at {expected} comment lines but no comment block is present"
            );
            Vec::new()
        }
        Err(other) => return Err(other),
    };
    Ok(block)
}

/// The raw `(record, comments)` byte slices of a buffer's SAUCE block.
pub fn raw(buf: &[u8]) -> Result<(&[u8], &[u8])> {
    let (record_bytes, comment_bytes) = binary::split_sauce(buf);
    if record_bytes.is_empty() {
        return Err(SauceError::NoSauce);
    }
    Ok((record_bytes, comment_bytes))
}

/// Decode only the comment lines of a buffer's SAUCE block.
///
/// # Errors
///
/// [`SauceError::NoSauce`] without a record, [`SauceError::NoComments`]
/// when the record expects no comments or the block is missing.
pub fn comments(buf: &[u8]) -> Result<Vec<String>> {
    let (record_bytes, comment_bytes) = binary::split_sauce(buf);
    if record_bytes.is_empty() {
        return Err(SauceError::NoSauce);
    }
    let expected = record_bytes[SauceField::CommentLines.offset()];
    if expected == 0 {
        return Err(SauceError::NoComments);
    }
    record::decode_comments(comment_bytes, expected)
}

/// Everything before the SAUCE block.
pub fn contents(buf: &[u8]) -> &[u8] {
    let (contents, _, _) = binary::split_all(buf);
    contents
}

/// Whether the buffer ends with a SAUCE record.
pub fn has_sauce(buf: &[u8]) -> bool {
    binary::match_record(buf, false).is_some()
}

/// Whether the buffer ends with a record that points at a well-formed
/// comment block.
pub fn has_comments(buf: &[u8]) -> bool {
    binary::match_comment_block(buf, false).is_some()
}
