//! Primitive decoders (§4.2): pure functions, no I/O.
//!
//! These operate on byte slices already held in memory rather than on a
//! stream — the stream-side little-endian reads are handled by `binread`
//! throughout the rest of the crate (see `header.rs`, `extradata/`, ...).
//! This module covers the handful of places that decode an opaque,
//! already-buffered blob: the size-probe/fill string accessors and the
//! GUID canonical-text round trip.
//!
//! Grounded on `pylnk_integer.c` (little-endian integer decode) and
//! `pylnk_file.c`'s string accessor pairs in `examples/original_source/`.

use byteorder::{ByteOrder, LE};
use encoding_rs::Encoding;

use crate::error::InputError;

/// Reads a little-endian `u16` from the start of `data`.
pub(crate) fn read_u16(data: &[u8]) -> Option<u16> {
    (data.len() >= 2).then(|| LE::read_u16(data))
}

/// Reads a little-endian `u32` from the start of `data`.
pub(crate) fn read_u32(data: &[u8]) -> Option<u32> {
    (data.len() >= 4).then(|| LE::read_u32(data))
}

/// Decodes `bytes` using `encoding`, returning `InputError::InvalidData` on
/// unmappable sequences rather than the lossy-replacement behavior
/// `encoding_rs` defaults to, so malformed strings surface as errors
/// instead of silently becoming `U+FFFD`.
pub(crate) fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Result<String, InputError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(InputError::invalid(format!(
            "unable to decode {} bytes as {}",
            bytes.len(),
            encoding.name()
        )));
    }
    Ok(text.into_owned())
}

/// Decodes a UTF-16LE byte buffer, requiring an even length (§8 boundary:
/// "`IS_UNICODE` set with odd number of bytes in a string" is `InvalidData`).
pub(crate) fn decode_utf16le_strict(bytes: &[u8]) -> Result<String, InputError> {
    if bytes.len() % 2 != 0 {
        return Err(InputError::invalid("UTF-16LE string has an odd byte length"));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| InputError::invalid("invalid UTF-16LE sequence"))
}

/// The size-probe half of the size-probe/fill pattern (§4.2): computes the
/// number of bytes [`fill_utf8`] would write, including the NUL terminator.
pub(crate) fn utf8_fill_size(s: &str) -> usize {
    s.len() + 1
}

/// The fill half of the size-probe/fill pattern: writes `s` as UTF-8 into
/// `buf` followed by a single NUL terminator. `buf` must be at least
/// [`utf8_fill_size`] bytes; returns the number of bytes written.
pub(crate) fn fill_utf8(s: &str, buf: &mut [u8]) -> Result<usize, InputError> {
    let needed = utf8_fill_size(s);
    if buf.len() < needed {
        return Err(InputError::invalid("destination buffer is too small"));
    }
    buf[..s.len()].copy_from_slice(s.as_bytes());
    buf[s.len()] = 0;
    Ok(needed)
}

/// The wide-string counterpart to [`utf8_fill_size`] (§9 "wide vs narrow
/// string API duplication"): the number of `u16` code units
/// [`fill_utf16`] would write, including the NUL terminator.
pub(crate) fn utf16_fill_size(s: &str) -> usize {
    s.encode_utf16().count() + 1
}

/// The wide-string counterpart to [`fill_utf8`]: writes `s` as UTF-16LE
/// code units into `buf` followed by a single NUL terminator.
pub(crate) fn fill_utf16(s: &str, buf: &mut [u16]) -> Result<usize, InputError> {
    let needed = utf16_fill_size(s);
    if buf.len() < needed {
        return Err(InputError::invalid("destination buffer is too small"));
    }
    let mut written = 0;
    for unit in s.encode_utf16() {
        buf[written] = unit;
        written += 1;
    }
    buf[written] = 0;
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_round_trips_with_terminator() {
        let s = "ABC";
        let size = utf8_fill_size(s);
        assert_eq!(size, 4);
        let mut buf = vec![0xffu8; size];
        let written = fill_utf8(s, &mut buf).unwrap();
        assert_eq!(written, size);
        assert_eq!(&buf, b"ABC\0");
    }

    #[test]
    fn fill_rejects_undersized_buffer() {
        let mut buf = [0u8; 2];
        assert!(fill_utf8("ABC", &mut buf).is_err());
    }

    #[test]
    fn odd_length_utf16_is_invalid() {
        assert!(decode_utf16le_strict(&[0x41]).is_err());
    }

    #[test]
    fn utf16_fill_round_trips_with_terminator() {
        let s = "AB";
        let size = utf16_fill_size(s);
        assert_eq!(size, 3);
        let mut buf = vec![0xffffu16; size];
        let written = fill_utf16(s, &mut buf).unwrap();
        assert_eq!(written, size);
        assert_eq!(buf, [b'A' as u16, b'B' as u16, 0]);
    }
}
