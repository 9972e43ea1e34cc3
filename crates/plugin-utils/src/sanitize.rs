//! In-place ASCII sanitizing of raw string buffers
//!
//! Plugins copy player names, server names and the like out of a game's memory
//! into fixed-size buffers and then splice them into hand-built JSON. The bytes
//! may be unterminated, non-ASCII, or contain quotes; [`sanitize`] makes them
//! safe for that without allocating.

const NUL: u8 = 0;
const SPACE: u8 = b' ';
const QUOTE: u8 = b'"';

/// Printable ASCII, space through tilde.
const PRINTABLE: core::ops::RangeInclusive<u8> = 0x20..=0x7E;

/// Lossily reduce `buf` to a NUL-terminated, printable ASCII string.
///
/// The buffer length is its capacity, terminator slot included. The last byte
/// is always set to NUL, so the result is terminated even when the original
/// content filled the whole buffer. Every byte before the first NUL that is a
/// double quote or falls outside printable ASCII (32..=126) becomes a space.
/// Bytes after the first NUL are left untouched.
///
/// # Caller contract
///
/// `buf` must hold at least one byte. An empty buffer has no terminator slot
/// and is returned unchanged.
pub fn sanitize(buf: &mut [u8]) {
    let Some(last) = buf.last_mut() else {
        return;
    };
    *last = NUL;

    for byte in buf.iter_mut().take_while(|byte| **byte != NUL) {
        let value = *byte;
        if value == QUOTE || !PRINTABLE.contains(&value) {
            *byte = SPACE;
        }
    }
}

/// View a sanitized buffer as text, up to its first NUL.
///
/// Returns an empty string if `buf` holds anything other than ASCII before
/// the terminator, which cannot happen after [`sanitize`].
pub fn sanitized_str(buf: &[u8]) -> &str {
    let text = buf.split(|byte| *byte == NUL).next().unwrap_or_default();
    std::str::from_utf8(text).unwrap_or_default()
}

/// Check whether `buf` already satisfies the post-condition of [`sanitize`].
pub fn is_sanitized(buf: &[u8]) -> bool {
    match buf.split_last() {
        Some((&NUL, _)) => buf
            .iter()
            .take_while(|byte| **byte != NUL)
            .all(|byte| *byte != QUOTE && PRINTABLE.contains(byte)),
        _ => false,
    }
}
