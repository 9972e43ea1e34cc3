//! Platform helpers for positional-audio game plugins
//!
//! Plugins that read a game's memory and report the player's position and
//! orientation keep running into the same platform variance. This crate hides
//! it behind plain functions:
//!
//! - [`encoding`]: UTF-8 to and from wide text, for both 2-byte (UTF-16) and
//!   4-byte (UTF-32) `wchar_t` layouts
//! - [`sanitize`]: in-place reduction of a raw byte buffer to a NUL-terminated,
//!   printable, quote-free ASCII string that can be spliced into JSON
//! - [`byte_order`]: native byte-order detection and network/host conversion
//! - [`math`]: sine and cosine with floating-point exception reporting behind a
//!   swappable [`TrigBackend`](math::TrigBackend), plus degrees to radians
//! - [`file`]: whole-file reads
//!
//! # Failure policy
//!
//! A plugin must never take the host down. Every sentinel entry point turns a
//! failure into an empty value (or a `false` flag for [`math::sin_cos`]) and
//! logs it at `debug` level. Callers that need to tell "empty input" apart
//! from "failed" use the `try_*` variants, which return [`UtilsError`].
//!
//! # Example
//!
//! ```rust
//! use mumble_plugin_utils::prelude::*;
//!
//! let wide = utf8_to_utf16("Pilot 😀");
//! assert_eq!(utf16_to_utf8(&wide), "Pilot 😀");
//!
//! let mut name = *b"Max \"Mad\" V\x01";
//! sanitize(&mut name);
//! assert_eq!(sanitized_str(&name), "Max  Mad  V");
//!
//! let heading = sin_cos(degrees_to_radians(90.0));
//! assert!((heading.sin - 1.0).abs() < 1e-6);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod byte_order;
pub mod config;
pub mod encoding;
pub mod error;
pub mod file;
pub mod math;
pub mod prelude;
pub mod sanitize;

pub use byte_order::{ByteOrder, is_big_endian, network_to_host_u16};
pub use config::{TrigBackendKind, UtilsConfig};
pub use encoding::{WideChar, WideUnit};
pub use error::{ErrorCategory, UtilsError};
pub use math::{SinCos, TrigBackend, degrees_to_radians, sin_cos};

/// A specialized `Result` type for the checked entry points.
pub type Result<T> = std::result::Result<T, UtilsError>;
