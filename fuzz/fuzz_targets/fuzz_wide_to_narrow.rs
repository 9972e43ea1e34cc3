//! Fuzzes wide to UTF-8 conversion with arbitrary code units.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_wide_to_narrow
#![no_main]
use libfuzzer_sys::fuzz_target;
use mumble_plugin_utils::encoding::{utf16_to_utf8, utf32_to_utf8, wide_to_narrow_until_nul};

fuzz_target!(|data: &[u8]| {
    let utf16: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let utf32: Vec<u32> = data
        .chunks_exact(4)
        .map(|quad| u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]]))
        .collect();

    let _ = utf16_to_utf8(&utf16);
    let _ = utf32_to_utf8(&utf32);
    let _ = wide_to_narrow_until_nul(&utf16);
    let _ = wide_to_narrow_until_nul(&utf32);
});
