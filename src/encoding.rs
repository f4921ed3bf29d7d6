//! Text transcoding seam.
//!
//! SAUCE text fields are stored as IBM code page 437 bytes. The codec only
//! talks to the [`Transcoder`] trait so the CP437 tables stay isolated in
//! one place; [`Cp437`] is the default implementation, backed by the
//! `codepage-437` crate.
//!
//! Decoding CP437 is total (every byte maps to a code point), so the
//! crate never falls back to another encoding on read. Encoding drops
//! code points that have no CP437 mapping.

use codepage_437::{CP437_CONTROL, FromCp437, ToCp437};

/// Converts between raw field bytes and text.
pub trait Transcoder {
    /// Decode stored bytes to text. `None` when the bytes are not valid
    /// in this encoding.
    fn decode(&self, bytes: &[u8]) -> Option<String>;

    /// Encode text to stored bytes. `None` when the text cannot be
    /// represented in this encoding.
    fn encode(&self, text: &str) -> Option<Vec<u8>>;
}

/// IBM code page 437, the SAUCE default.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cp437;

impl Transcoder for Cp437 {
    fn decode(&self, bytes: &[u8]) -> Option<String> {
        Some(String::from_cp437(bytes.to_vec(), &CP437_CONTROL))
    }

    fn encode(&self, text: &str) -> Option<Vec<u8>> {
        match text.to_cp437(&CP437_CONTROL) {
            Ok(bytes) => Some(bytes.into_owned()),
            Err(_) => None,
        }
    }
}

/// UTF-8 passthrough, for callers that inject their own convention.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8;

impl Transcoder for Utf8 {
    fn decode(&self, bytes: &[u8]) -> Option<String> {
        std::str::from_utf8(bytes).ok().map(str::to_owned)
    }

    fn encode(&self, text: &str) -> Option<Vec<u8>> {
        Some(text.as_bytes().to_vec())
    }
}

/// Decode field bytes with the default encoding.
pub(crate) fn decode_text(bytes: &[u8]) -> String {
    Cp437.decode(bytes).unwrap_or_default()
}

/// Encode text with the default encoding, dropping unmappable code points.
pub(crate) fn encode_text(text: &str) -> Vec<u8> {
    if let Some(bytes) = Cp437.encode(text) {
        return bytes;
    }
    // Unmappable code points somewhere in the input; keep the rest.
    let mut buf = [0u8; 4];
    let mut data = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(bytes) = Cp437.encode(ch.encode_utf8(&mut buf)) {
            data.extend_from_slice(&bytes);
        }
    }
    data
}
