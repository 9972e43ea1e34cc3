//! Prelude for mumble-plugin-utils
//!
//! This module re-exports the functions a plugin typically calls.
//!
//! # Example
//!
//! ```rust
//! use mumble_plugin_utils::prelude::*;
//!
//! let mut identity = *b"Player\"One\0";
//! sanitize(&mut identity);
//! assert_eq!(sanitized_str(&identity), "Player One");
//! ```

pub use crate::{
    ByteOrder, ErrorCategory, Result, SinCos, TrigBackend, TrigBackendKind, UtilsConfig,
    UtilsError, WideChar, WideUnit,
    byte_order::{
        host_to_network_u16, host_to_network_u32, is_big_endian, network_to_host_u16,
        network_to_host_u32,
    },
    encoding::{
        narrow_to_wchar, narrow_to_wide, try_narrow_to_wide, try_wide_to_narrow, utf8_to_utf16,
        utf8_to_utf32, utf16_to_utf8, utf32_to_utf8, wchar_to_narrow, wide_to_narrow,
        wide_to_narrow_until_nul,
    },
    file::{read_file, read_file_to_string, try_read_file},
    math::{degrees_to_radians, sin_cos},
    sanitize::{is_sanitized, sanitize, sanitized_str},
};
