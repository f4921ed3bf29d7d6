use crate::{Result, SauceError};

/// Append `fill` byte-by-byte until the buffer is at least `len` long.
/// A multi-byte fill cycles and may land truncated at the boundary.
pub fn pad_trailing(bytes: &[u8], len: usize, fill: &[u8]) -> Vec<u8> {
    let mut data = bytes.to_vec();
    if fill.is_empty() {
        return data;
    }
    let mut i = 0;
    while data.len() < len {
        data.push(fill[i % fill.len()]);
        i += 1;
    }
    data
}

/// Prepend `fill` byte-by-byte until the buffer is at least `len` long.
pub fn pad_leading(bytes: &[u8], len: usize, fill: &[u8]) -> Vec<u8> {
    if fill.is_empty() || bytes.len() >= len {
        return bytes.to_vec();
    }
    let missing = len - bytes.len();
    let mut data = Vec::with_capacity(len);
    for i in 0..missing {
        data.push(fill[i % fill.len()]);
    }
    data.extend_from_slice(bytes);
    data
}

/// Pad with `fill`, then cut to exactly `len` bytes.
pub fn pad_truncate(bytes: &[u8], len: usize, fill: &[u8]) -> Vec<u8> {
    let mut data = pad_trailing(bytes, len, fill);
    data.truncate(len);
    data
}

/// Return a copy of `bytes` with `replacement` overwriting the range
/// starting at `pos`. The replacement must fit inside the buffer.
pub fn replace_slice(bytes: &[u8], pos: usize, replacement: &[u8]) -> Result<Vec<u8>> {
    let end = match pos.checked_add(replacement.len()) {
        Some(end) if end <= bytes.len() => end,
        _ => {
            return Err(SauceError::InvalidLength {
                pos,
                len: replacement.len(),
                buffer_len: bytes.len(),
            });
        }
    };
    let mut data = bytes.to_vec();
    data[pos..end].copy_from_slice(replacement);
    Ok(data)
}

/// Trim trailing spaces and NUL bytes (storage padding).
pub(crate) fn trim_trailing(buf: &[u8]) -> &[u8] {
    let mut end = buf.len();
    while end > 0 {
        let b = buf[end - 1];
        if b != b' ' && b != 0 {
            break;
        }
        end -= 1;
    }
    &buf[..end]
}

/// Everything before the first NUL byte (tolerance for writers that
/// NUL-pad space-padded fields).
pub(crate) fn until_nul(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(pos) => &buf[..pos],
        None => buf,
    }
}
