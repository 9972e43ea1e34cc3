//! Whole-file reads
//!
//! Blocking, with no timeout or cancellation. Don't call these from an async
//! executor thread or a real-time callback.

use std::path::Path;

use crate::{Result, UtilsError};

/// Read the whole file at `path`.
///
/// # Errors
///
/// Returns [`UtilsError::Io`] with the path if the file is missing, is not a
/// regular file, or cannot be read.
pub fn try_read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| UtilsError::io(path, source))
}

/// Read the whole file at `path`, or an empty buffer on any I/O error.
pub fn read_file(path: impl AsRef<Path>) -> Vec<u8> {
    try_read_file(path).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "read_file failed, returning empty buffer");
        Vec::new()
    })
}

/// Read the whole file at `path` as UTF-8 text.
///
/// Empty if the file cannot be read or is not valid UTF-8.
pub fn read_file_to_string(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    String::from_utf8(read_file(path)).unwrap_or_else(|err| {
        tracing::debug!(
            path = %path.display(),
            valid_up_to = err.utf8_error().valid_up_to(),
            "file is not valid UTF-8, returning empty string"
        );
        String::new()
    })
}
