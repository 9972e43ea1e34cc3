//! Error types for the checked entry points
//!
//! The sentinel API never returns these; it logs them and hands back an empty
//! value instead.

use core::fmt;
use std::path::PathBuf;

/// Errors raised by the `try_*` entry points and by config loading.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Narrow input is not well-formed UTF-8
    #[error("Invalid UTF-8 sequence after {valid_up_to} valid bytes")]
    InvalidUtf8 {
        /// Length of the longest valid prefix
        valid_up_to: usize,
    },

    /// A UTF-16 surrogate without its partner
    #[error("Unpaired UTF-16 surrogate 0x{unit:04X} at unit {index}")]
    UnpairedSurrogate {
        /// Position of the offending code unit
        index: usize,
        /// The surrogate code unit
        unit: u16,
    },

    /// A UTF-32 unit that is not a Unicode scalar value
    #[error("Invalid UTF-32 code point 0x{value:08X} at unit {index}")]
    InvalidCodePoint {
        /// Position of the offending code unit
        index: usize,
        /// The raw code unit
        value: u32,
    },

    /// File could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UtilsError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            UtilsError::InvalidUtf8 { .. }
            | UtilsError::UnpairedSurrogate { .. }
            | UtilsError::InvalidCodePoint { .. } => ErrorCategory::Encoding,
            UtilsError::Io { .. } => ErrorCategory::Io,
            UtilsError::Config(_) => ErrorCategory::Config,
        }
    }

    /// Check if retrying the same call could succeed.
    ///
    /// Malformed text stays malformed; a file may appear or become readable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UtilsError::Io { .. })
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UtilsError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl fmt::Display) -> Self {
        UtilsError::Config(msg.to_string())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Text transcoding errors
    Encoding = 0,
    /// File I/O errors
    Io = 1,
    /// Configuration errors
    Config = 2,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Encoding => write!(f, "Encoding"),
            ErrorCategory::Io => write!(f, "IO"),
            ErrorCategory::Config => write!(f, "Config"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        assert_eq!(
            UtilsError::InvalidUtf8 { valid_up_to: 0 }.category(),
            ErrorCategory::Encoding
        );
        assert_eq!(
            UtilsError::UnpairedSurrogate {
                index: 0,
                unit: 0xD800
            }
            .category(),
            ErrorCategory::Encoding
        );
        assert_eq!(UtilsError::config("bad").category(), ErrorCategory::Config);
    }

    #[test]
    fn test_error_is_recoverable() {
        let io = UtilsError::io(
            "missing.bin",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(io.is_recoverable());
        assert!(!UtilsError::InvalidUtf8 { valid_up_to: 3 }.is_recoverable());
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Encoding.to_string(), "Encoding");
        assert_eq!(ErrorCategory::Io.to_string(), "IO");
        assert_eq!(ErrorCategory::Config.to_string(), "Config");
    }
}
