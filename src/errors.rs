use std::path::PathBuf;

use bstr::BString;

#[derive(Debug, thiserror::Error)]
pub enum SauceError {
    /// No SAUCE record at the end of the input. An ordinary condition,
    /// callers are expected to match on it.
    #[error("no SAUCE record present")]
    NoSauce,

    /// A record is present but no usable comment block precedes it.
    /// Also an ordinary condition.
    #[error("no SAUCE comment block present")]
    NoComments,

    /// A record is present but structurally broken. Carries the raw
    /// version bytes that failed to decode (all-NUL for the empty-record
    /// trailers some buggy writers emit).
    #[error("invalid SAUCE record: undecodable version field {0:?}")]
    InvalidSauce(BString),

    /// A raw buffer edit would have grown the buffer.
    #[error("replacing {len} bytes at offset {pos} exceeds buffer of {buffer_len} bytes")]
    InvalidLength {
        pos: usize,
        len: usize,
        buffer_len: usize,
    },

    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("title too long: {0} bytes, only up to 35 bytes are allowed")]
    TitleTooLong(usize),

    #[error("author too long: {0} bytes, only up to 20 bytes are allowed")]
    AuthorTooLong(usize),

    #[error("group too long: {0} bytes, only up to 20 bytes are allowed")]
    GroupTooLong(usize),

    #[error("comment too long: {0} bytes, only up to 64 bytes are allowed")]
    CommentTooLong(usize),

    #[error("comment limit exceeded (255)")]
    CommentLimitExceeded,

    #[error("info string too long: {0} bytes, only up to 22 bytes are allowed")]
    InfoStringTooLong(usize),
}

impl SauceError {
    /// Create an `Io` error with the given path and source error.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SauceError::Io {
            path: path.into(),
            source,
        }
    }
}
