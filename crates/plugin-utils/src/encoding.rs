//! UTF-8 to wide text conversion and back
//!
//! Games store text as `wchar_t`, which is 2 bytes (UTF-16) on Windows
//! builds and 4 bytes (UTF-32) on most Unix builds. A plugin reading another
//! process's memory has to pick the width of *that* process, so both widths are
//! exposed side by side through [`WideUnit`] instead of assuming one.
//!
//! The sentinel functions return an empty value on malformed input. That makes
//! a failed conversion indistinguishable from converting empty text; use
//! [`try_narrow_to_wide`] or [`try_wide_to_narrow`] when the difference
//! matters.

use core::fmt;

use crate::{Result, UtilsError};

/// `wchar_t` of the platform this crate is compiled for.
#[cfg(windows)]
pub type WideChar = u16;

/// `wchar_t` of the platform this crate is compiled for.
#[cfg(not(windows))]
pub type WideChar = u32;

/// A wide code unit, either UTF-16 (`u16`) or UTF-32 (`u32`).
pub trait WideUnit: Copy + Eq + Default + fmt::Debug + Send + Sync + 'static {
    /// Size of one code unit in bytes.
    const WIDTH: usize;

    /// Encode valid UTF-8 text into code units of this width.
    fn encode(text: &str) -> Vec<Self>;

    /// Decode code units of this width into UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an encoding error naming the first offending unit.
    fn decode(units: &[Self]) -> Result<String>;

    /// Whether this unit is the NUL terminator.
    fn is_nul(self) -> bool {
        self == Self::default()
    }
}

impl WideUnit for u16 {
    const WIDTH: usize = 2;

    fn encode(text: &str) -> Vec<Self> {
        text.encode_utf16().collect()
    }

    fn decode(units: &[Self]) -> Result<String> {
        let mut out = String::with_capacity(units.len());
        let mut index = 0usize;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(c) => {
                    out.push(c);
                    index = index.saturating_add(c.len_utf16());
                }
                Err(e) => {
                    return Err(UtilsError::UnpairedSurrogate {
                        index,
                        unit: e.unpaired_surrogate(),
                    });
                }
            }
        }
        Ok(out)
    }
}

impl WideUnit for u32 {
    const WIDTH: usize = 4;

    fn encode(text: &str) -> Vec<Self> {
        text.chars().map(u32::from).collect()
    }

    fn decode(units: &[Self]) -> Result<String> {
        units
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                char::from_u32(value).ok_or(UtilsError::InvalidCodePoint { index, value })
            })
            .collect()
    }
}

/// Convert UTF-8 bytes into wide code units.
///
/// # Errors
///
/// Returns [`UtilsError::InvalidUtf8`] if `narrow` is not well-formed UTF-8.
pub fn try_narrow_to_wide<W: WideUnit>(narrow: &[u8]) -> Result<Vec<W>> {
    let text = std::str::from_utf8(narrow).map_err(|e| UtilsError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(W::encode(text))
}

/// Convert wide code units into UTF-8.
///
/// # Errors
///
/// Returns [`UtilsError::UnpairedSurrogate`] for broken UTF-16 and
/// [`UtilsError::InvalidCodePoint`] for values that are not Unicode scalars.
pub fn try_wide_to_narrow<W: WideUnit>(wide: &[W]) -> Result<String> {
    W::decode(wide)
}

/// Convert UTF-8 bytes into wide code units, or an empty buffer on failure.
pub fn narrow_to_wide<W: WideUnit>(narrow: impl AsRef<[u8]>) -> Vec<W> {
    try_narrow_to_wide(narrow.as_ref()).unwrap_or_else(|err| {
        tracing::debug!(error = %err, width = W::WIDTH, "narrow to wide conversion failed");
        Vec::new()
    })
}

/// Convert wide code units into UTF-8, or an empty string on failure.
pub fn wide_to_narrow<W: WideUnit>(wide: &[W]) -> String {
    try_wide_to_narrow(wide).unwrap_or_else(|err| {
        tracing::debug!(error = %err, width = W::WIDTH, "wide to narrow conversion failed");
        String::new()
    })
}

/// Convert a fixed-size, NUL-padded wide field into UTF-8.
///
/// Decoding stops at the first NUL unit; a field without one is decoded
/// entirely.
pub fn wide_to_narrow_until_nul<W: WideUnit>(wide: &[W]) -> String {
    let terminated = wide.split(|unit| unit.is_nul()).next().unwrap_or_default();
    wide_to_narrow(terminated)
}

/// UTF-8 to UTF-16. Empty on malformed input.
pub fn utf8_to_utf16(narrow: impl AsRef<[u8]>) -> Vec<u16> {
    narrow_to_wide(narrow)
}

/// UTF-8 to UTF-32. Empty on malformed input.
pub fn utf8_to_utf32(narrow: impl AsRef<[u8]>) -> Vec<u32> {
    narrow_to_wide(narrow)
}

/// UTF-16 to UTF-8, for processes with a 2-byte `wchar_t`.
///
/// Empty on malformed input.
pub fn utf16_to_utf8(wide: &[u16]) -> String {
    wide_to_narrow(wide)
}

/// UTF-32 to UTF-8, for processes with a 4-byte `wchar_t`.
///
/// Empty on malformed input.
pub fn utf32_to_utf8(wide: &[u32]) -> String {
    wide_to_narrow(wide)
}

/// UTF-8 to the native [`WideChar`] width.
pub fn narrow_to_wchar(narrow: impl AsRef<[u8]>) -> Vec<WideChar> {
    narrow_to_wide(narrow)
}

/// Native [`WideChar`] text to UTF-8.
pub fn wchar_to_narrow(wide: &[WideChar]) -> String {
    wide_to_narrow(wide)
}
