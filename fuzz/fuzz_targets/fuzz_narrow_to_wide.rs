//! Fuzzes UTF-8 to wide conversion with arbitrary bytes.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_narrow_to_wide
#![no_main]
use libfuzzer_sys::fuzz_target;
use mumble_plugin_utils::encoding::{utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf32_to_utf8};

fuzz_target!(|data: &[u8]| {
    // Must never panic; malformed input yields an empty result.
    let utf16 = utf8_to_utf16(data);
    let utf32 = utf8_to_utf32(data);
    if let Ok(text) = std::str::from_utf8(data) {
        assert_eq!(utf16_to_utf8(&utf16), text);
        assert_eq!(utf32_to_utf8(&utf32), text);
    } else {
        assert!(utf16.is_empty());
        assert!(utf32.is_empty());
    }
});
