//! Fuzzes in-place sanitizing of raw string buffers.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_sanitize
#![no_main]
use libfuzzer_sys::fuzz_target;
use mumble_plugin_utils::sanitize::{is_sanitized, sanitize};

fuzz_target!(|data: &[u8]| {
    let mut buf = data.to_vec();
    sanitize(&mut buf);
    assert_eq!(buf.len(), data.len());
    if !buf.is_empty() {
        assert!(is_sanitized(&buf));
    }
});
