//! Whole-record and comment-block codec.
//!
//! A record is always encoded decodable: string fields are padded and
//! cut to their declared widths, the comment count is derived from the
//! block's lines, and a `(file_type, data_type)` pair the media registry
//! does not know is rewritten to the none pair.
//!
//! Decoding is tolerant everywhere the wild requires it. Only two things
//! make a record invalid rather than absent: an undecodable version
//! field, and the all-zero "SAUCE" trailers left behind by writers that
//! reserve space without ever filling it.

use bstr::BString;

use crate::block::{MediaFields, SauceBlock};
use crate::data_type::SauceDataType;
use crate::date::SauceDate;
use crate::field;
use crate::limits::{COMMENT_ID_SIZE, COMMENT_LINE_SIZE, RECORD_SIZE, SAUCE_ID_SIZE};
use crate::media;
use crate::schema::SauceField;
use crate::{Result, SauceError};

pub(crate) const SAUCE_ID: &[u8; SAUCE_ID_SIZE] = b"SAUCE";
pub(crate) const COMMENT_ID: &[u8; COMMENT_ID_SIZE] = b"COMNT";

pub use crate::field::write_field;

/// Serialize a block's record to its 128 stored bytes.
pub fn encode_record(block: &SauceBlock) -> Vec<u8> {
    let mut record = Vec::with_capacity(RECORD_SIZE);
    record.extend_from_slice(SAUCE_ID);
    record.extend_from_slice(&field::encode_version(&block.version));
    record.extend_from_slice(&field::encode_string(
        &block.title,
        SauceField::Title.size(),
    ));
    record.extend_from_slice(&field::encode_string(
        &block.author,
        SauceField::Author.size(),
    ));
    record.extend_from_slice(&field::encode_string(
        &block.group,
        SauceField::Group.size(),
    ));
    match block.date {
        Some(date) => record.extend_from_slice(&date.to_bytes()),
        None => record.extend_from_slice(&[b' '; SauceField::Date.size()]),
    }
    record.extend_from_slice(&block.media.file_size.to_le_bytes());

    // An unregistered pair would decode differently than it was written;
    // fall back to the none pair so encode output always round-trips.
    let (data_type, file_type) =
        if media::lookup(block.media.file_type, block.media.data_type).is_some() {
            (block.media.data_type, block.media.file_type)
        } else {
            (SauceDataType::None, 0)
        };
    record.push(data_type.into());
    record.push(file_type);

    record.extend_from_slice(&block.media.t_info_1.to_le_bytes());
    record.extend_from_slice(&block.media.t_info_2.to_le_bytes());
    record.extend_from_slice(&block.media.t_info_3.to_le_bytes());
    record.extend_from_slice(&block.media.t_info_4.to_le_bytes());
    record.push(block.comment_lines());
    record.push(block.media.t_flags);
    record.extend_from_slice(&field::encode_cstring(
        block.media.t_info_s.as_deref().unwrap_or(""),
        SauceField::TInfoS.size(),
    ));

    debug_assert_eq!(record.len(), RECORD_SIZE);
    record
}

/// Serialize a block's comment lines to a comment block. Empty comments
/// produce empty output, no "COMNT" id is written.
pub fn encode_comments(block: &SauceBlock) -> Vec<u8> {
    if block.comments.is_empty() {
        return Vec::new();
    }
    // Only as many lines as the count byte can point at.
    let lines = &block.comments[..block.comment_lines() as usize];
    let mut data = Vec::with_capacity(COMMENT_ID_SIZE + lines.len() * COMMENT_LINE_SIZE);
    data.extend_from_slice(COMMENT_ID);
    for line in lines {
        data.extend_from_slice(&field::encode_comment_line(line));
    }
    data
}

/// Deserialize a 128-byte record into a block with no comments.
///
/// # Errors
///
/// - [`SauceError::NoSauce`] when the input is not 128 bytes or does not
///   carry the "SAUCE" id.
/// - [`SauceError::InvalidSauce`] when the version field does not decode,
///   which includes the all-zero empty-record trailer.
///
/// Any other malformed field decodes to its default.
pub fn decode_record(bytes: &[u8]) -> Result<SauceBlock> {
    if bytes.len() != RECORD_SIZE || !bytes.starts_with(SAUCE_ID) {
        return Err(SauceError::NoSauce);
    }
    if bytes[SAUCE_ID_SIZE..].iter().all(|&b| b == 0) {
        return Err(SauceError::InvalidSauce(BString::new(
            field::field_bytes(bytes, SauceField::Version).to_vec(),
        )));
    }

    let Some(version) = field::decode_version(field::field_bytes(bytes, SauceField::Version))
    else {
        return Err(SauceError::InvalidSauce(BString::new(
            field::field_bytes(bytes, SauceField::Version).to_vec(),
        )));
    };

    let title = field::decode_string(field::field_bytes(bytes, SauceField::Title));
    let author = field::decode_string(field::field_bytes(bytes, SauceField::Author));
    let group = field::decode_string(field::field_bytes(bytes, SauceField::Group));
    let date = SauceDate::from_bytes(field::field_bytes(bytes, SauceField::Date));

    let file_size = u32::from_le_bytes(
        field::field_bytes(bytes, SauceField::FileSize)
            .try_into()
            .unwrap(),
    );

    let data_type = SauceDataType::from(field::field_bytes(bytes, SauceField::DataType)[0]);
    let mut file_type = field::field_bytes(bytes, SauceField::FileType)[0];
    if media::lookup(file_type, data_type).is_none() {
        file_type = 0;
    }

    let word = |f: SauceField| u16::from_le_bytes(field::field_bytes(bytes, f).try_into().unwrap());

    Ok(SauceBlock {
        version,
        title,
        author,
        group,
        date,
        comments: Vec::new(),
        media: MediaFields {
            data_type,
            file_type,
            file_size,
            t_info_1: word(SauceField::TInfo1),
            t_info_2: word(SauceField::TInfo2),
            t_info_3: word(SauceField::TInfo3),
            t_info_4: word(SauceField::TInfo4),
            t_flags: field::field_bytes(bytes, SauceField::TFlags)[0],
            t_info_s: field::decode_cstring(field::field_bytes(bytes, SauceField::TInfoS)),
        },
    })
}

/// Deserialize a comment block.
///
/// The `expected_lines` count (from the record) drives termination; the
/// decoder tolerates short input and returns what it could read. Lines
/// that carry no value (all NUL) are dropped.
///
/// # Errors
///
/// [`SauceError::NoComments`] when lines are expected but the input does
/// not start with the "COMNT" id.
pub fn decode_comments(bytes: &[u8], expected_lines: u8) -> Result<Vec<String>> {
    if expected_lines == 0 {
        return Ok(Vec::new());
    }
    if bytes.len() < COMMENT_ID_SIZE || !bytes.starts_with(COMMENT_ID) {
        return Err(SauceError::NoComments);
    }

    let mut lines = Vec::with_capacity(expected_lines as usize);
    let mut rest = &bytes[COMMENT_ID_SIZE..];
    for _ in 0..expected_lines {
        if rest.len() < COMMENT_LINE_SIZE {
            break;
        }
        let (line, tail) = rest.split_at(COMMENT_LINE_SIZE);
        if let Some(text) = field::decode_comment_line(line) {
            lines.push(text);
        }
        rest = tail;
    }
    Ok(lines)
}
