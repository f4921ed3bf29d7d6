//! SAUCE specification limits and fixed sizes.
//!
//! These constants define the block geometry and maximum field lengths
//! imposed by the SAUCE v00 specification. Every other module is
//! parametrized by them; duplicated literals are how SAUCE libraries rot.

/// Exact byte length of a SAUCE record.
pub const RECORD_SIZE: usize = 128;

/// Byte length of the "SAUCE" / "COMNT" id fields.
pub const SAUCE_ID_SIZE: usize = 5;

/// Byte length of the "COMNT" id preceding the comment lines.
pub const COMMENT_ID_SIZE: usize = 5;

/// Exact byte length of a single comment line (space-padded).
pub const COMMENT_LINE_SIZE: usize = 64;

/// Smallest possible comment block: "COMNT" plus one line.
pub const MIN_COMMENT_BLOCK_SIZE: usize = COMMENT_ID_SIZE + COMMENT_LINE_SIZE;

/// Maximum number of comment lines (the count field is a single byte).
pub const MAX_COMMENT_LINES: usize = 255;

/// Maximum number of bytes for the title field (space-padded to this length).
pub const MAX_TITLE_LENGTH: usize = 35;

/// Maximum number of bytes for the author field (space-padded to this length).
pub const MAX_AUTHOR_LENGTH: usize = 20;

/// Maximum number of bytes for the group field (space-padded to this length).
pub const MAX_GROUP_LENGTH: usize = 20;

/// Exact number of bytes for the date field (CCYYMMDD ASCII digits).
pub const DATE_LENGTH: usize = 8;

/// Maximum number of bytes for the type-dependent string field (NUL-padded).
pub const MAX_INFO_STRING_LENGTH: usize = 22;

/// Largest file size the 32-bit field can carry; larger files store 0.
pub const FILE_SIZE_LIMIT: u64 = u32::MAX as u64;

/// The DOS end-of-file sentinel that precedes a well-formed SAUCE block.
pub const EOF_CHARACTER: u8 = 0x1A;

/// Total byte length of a SAUCE block with `comment_lines` comment lines.
///
/// A block with no comments is just the record; otherwise the "COMNT" id
/// and the comment lines precede it.
pub const fn sauce_block_size(comment_lines: usize) -> usize {
    if comment_lines == 0 {
        RECORD_SIZE
    } else {
        RECORD_SIZE + COMMENT_ID_SIZE + comment_lines * COMMENT_LINE_SIZE
    }
}
