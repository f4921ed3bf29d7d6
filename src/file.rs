//! Read and mutate SAUCE metadata on seekable streams and files.
//!
//! Reads scan backward from the end of the stream and touch only the
//! SAUCE region, never the whole file. Mutations follow one discipline:
//! truncate at the new contents boundary first, then write the new
//! trailer, so leftover data past the new block can not survive. A crash
//! between truncate and write loses the old block; it can not produce a
//! file with two.
//!
//! A comment pointer that points outside the stream or at bytes that are
//! not a comment block is treated as "no comments", not as an I/O error.
//! Stale pointers are too common in the wild to be fatal. Real OS errors
//! propagate.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::binary;
use crate::block::SauceBlock;
use crate::limits::{COMMENT_ID_SIZE, COMMENT_LINE_SIZE, EOF_CHARACTER, RECORD_SIZE};
use crate::record::{self, COMMENT_ID};
use crate::schema::SauceField;
use crate::{Result, SauceError};

fn stream_err(err: std::io::Error) -> SauceError {
    SauceError::io_error("<stream>", err)
}

/// Read the record at the stream tail. `Ok(None)` when the stream is
/// too short or does not end with a record.
fn record_at_tail<R: Read + Seek>(reader: &mut R) -> Result<Option<(u64, [u8; RECORD_SIZE])>> {
    let len = reader.seek(SeekFrom::End(0)).map_err(stream_err)?;
    if len < RECORD_SIZE as u64 {
        return Ok(None);
    }
    let record_start = len - RECORD_SIZE as u64;
    reader
        .seek(SeekFrom::Start(record_start))
        .map_err(stream_err)?;
    let mut record = [0u8; RECORD_SIZE];
    reader.read_exact(&mut record).map_err(stream_err)?;
    if !binary::is_record(&record) {
        return Ok(None);
    }
    Ok(Some((record_start, record)))
}

/// Read the comment block a record at `record_start` points at.
/// `Ok(None)` covers every stale-pointer shape: count zero, pointer
/// outside the stream, or bytes without the "COMNT" id.
fn comment_block_at<R: Read + Seek>(
    reader: &mut R,
    record_start: u64,
    lines: u8,
) -> Result<Option<(u64, Vec<u8>)>> {
    if lines == 0 {
        return Ok(None);
    }
    let block_len = COMMENT_ID_SIZE + lines as usize * COMMENT_LINE_SIZE;
    let Some(block_start) = record_start.checked_sub(block_len as u64) else {
        return Ok(None);
    };
    reader
        .seek(SeekFrom::Start(block_start))
        .map_err(stream_err)?;
    let mut block = vec![0u8; block_len];
    reader.read_exact(&mut block).map_err(stream_err)?;
    if !block.starts_with(COMMENT_ID) {
        return Ok(None);
    }
    Ok(Some((block_start, block)))
}

/// Decode the SAUCE block at the stream tail.
///
/// Same tolerance as the buffer reader: a record with a dangling comment
/// pointer decodes with no comments.
pub fn sauce<R: Read + Seek>(reader: &mut R) -> Result<SauceBlock> {
    let Some((record_start, record_bytes)) = record_at_tail(reader)? else {
        return Err(SauceError::NoSauce);
    };
    let mut block = record::decode_record(&record_bytes)?;
    let expected = record_bytes[SauceField::CommentLines.offset()];
    block.comments = match comment_block_at(reader, record_start, expected)? {
        Some((_, comment_bytes)) => record::decode_comments(&comment_bytes, expected)?,
        None => {
            if expected > 0 {
                log::warn!(
                    "SAUCE record points at {expected} comment lines but no comment block is present"
                );
            }
            Vec::new()
        }
    };
    Ok(block)
}

/// Raw `(record, comments)` bytes at the stream tail.
pub fn raw<R: Read + Seek>(reader: &mut R) -> Result<(Vec<u8>, Vec<u8>)> {
    let Some((record_start, record_bytes)) = record_at_tail(reader)? else {
        return Err(SauceError::NoSauce);
    };
    let expected = record_bytes[SauceField::CommentLines.offset()];
    let comment_bytes = match comment_block_at(reader, record_start, expected)? {
        Some((_, bytes)) => bytes,
        None => Vec::new(),
    };
    Ok((record_bytes.to_vec(), comment_bytes))
}

/// Decode only the comment lines at the stream tail.
pub fn comments<R: Read + Seek>(reader: &mut R) -> Result<Vec<String>> {
    let Some((record_start, record_bytes)) = record_at_tail(reader)? else {
        return Err(SauceError::NoSauce);
    };
    let expected = record_bytes[SauceField::CommentLines.offset()];
    match comment_block_at(reader, record_start, expected)? {
        Some((_, comment_bytes)) => record::decode_comments(&comment_bytes, expected),
        None => Err(SauceError::NoComments),
    }
}

/// Whether the stream ends with a SAUCE record.
pub fn has_sauce<R: Read + Seek>(reader: &mut R) -> Result<bool> {
    Ok(record_at_tail(reader)?.is_some())
}

/// Whether the stream ends with a record pointing at a comment block.
pub fn has_comments<R: Read + Seek>(reader: &mut R) -> Result<bool> {
    let Some((record_start, record_bytes)) = record_at_tail(reader)? else {
        return Ok(false);
    };
    let expected = record_bytes[SauceField::CommentLines.offset()];
    Ok(comment_block_at(reader, record_start, expected)?.is_some())
}

/// The byte length of the contents, the part of the stream before its
/// SAUCE block.
///
/// When the record expects a comment block that is missing or
/// mis-shaped, the bytes in that region count as contents; the writer's
/// intent is not assumed.
pub fn contents_size<R: Read + Seek>(reader: &mut R) -> Result<u64> {
    let len = reader.seek(SeekFrom::End(0)).map_err(stream_err)?;
    let Some((record_start, record_bytes)) = record_at_tail(reader)? else {
        return Ok(len);
    };
    let expected = record_bytes[SauceField::CommentLines.offset()];
    match comment_block_at(reader, record_start, expected)? {
        Some((block_start, _)) => Ok(block_start),
        None => Ok(record_start),
    }
}

/// Decode the SAUCE block of the file at `path`.
pub fn read_sauce(path: impl AsRef<Path>) -> Result<SauceBlock> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|err| SauceError::io_error(path, err))?;
    sauce(&mut file)
}

/// Decode the comment lines of the file at `path`.
pub fn read_comments(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|err| SauceError::io_error(path, err))?;
    comments(&mut file)
}

fn open_rw(path: &Path, create: bool) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(create)
        .open(path)
        .map_err(|err| SauceError::io_error(path, err))
}

/// Write or replace the SAUCE block of the file at `path`, creating the
/// file when missing.
///
/// The file is truncated at the contents boundary before the new
/// trailer is written; an EOF sentinel is inserted unless the byte
/// before the boundary already is one.
pub fn write_sauce(path: impl AsRef<Path>, block: &SauceBlock) -> Result<()> {
    let path = path.as_ref();
    let mut file = open_rw(path, true)?;
    let boundary = contents_size(&mut file)?;

    let mut needs_eof = true;
    if boundary > 0 {
        file.seek(SeekFrom::Start(boundary - 1))
            .map_err(|err| SauceError::io_error(path, err))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)
            .map_err(|err| SauceError::io_error(path, err))?;
        needs_eof = last[0] != EOF_CHARACTER;
    }

    file.set_len(boundary)
        .map_err(|err| SauceError::io_error(path, err))?;
    file.seek(SeekFrom::Start(boundary))
        .map_err(|err| SauceError::io_error(path, err))?;

    let mut trailer = Vec::new();
    if needs_eof {
        trailer.push(EOF_CHARACTER);
    }
    trailer.extend_from_slice(&record::encode_comments(block));
    trailer.extend_from_slice(&record::encode_record(block));
    file.write_all(&trailer)
        .map_err(|err| SauceError::io_error(path, err))
}

/// Drop the comment block of the file at `path` and zero the record's
/// count field. A file without a record, or a record without comments,
/// is left untouched.
pub fn remove_comments(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = open_rw(path, false)?;
    let Some((record_start, record_bytes)) = record_at_tail(&mut file)? else {
        return Ok(());
    };
    let expected = record_bytes[SauceField::CommentLines.offset()];
    if expected == 0 {
        return Ok(());
    }

    let write_position = match comment_block_at(&mut file, record_start, expected)? {
        Some((block_start, _)) => {
            // The record moves down over the dropped block.
            file.set_len(block_start)
                .map_err(|err| SauceError::io_error(path, err))?;
            block_start
        }
        // Stale pointer: the region is contents, only the count is wrong.
        None => record_start,
    };

    let mut updated = record_bytes;
    updated[SauceField::CommentLines.offset()] = 0;
    file.seek(SeekFrom::Start(write_position))
        .map_err(|err| SauceError::io_error(path, err))?;
    file.write_all(&updated)
        .map_err(|err| SauceError::io_error(path, err))
}

/// Strip the whole SAUCE block of the file at `path` by truncating at
/// the contents boundary. A file without a record is left untouched.
pub fn remove_sauce(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = open_rw(path, false)?;
    let boundary = contents_size(&mut file)?;
    file.set_len(boundary)
        .map_err(|err| SauceError::io_error(path, err))
}
