//! Startup configuration
//!
//! ```yaml
//! trig_backend: fused   # auto | portable | fused
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::file::try_read_file;
use crate::math::{TrigBackend, backend_for};
use crate::{Result, UtilsError};

/// Which [`TrigBackend`] to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrigBackendKind {
    /// Fused where available, portable otherwise
    #[default]
    Auto,
    /// Independent `sin`/`cos`, no exception reporting
    Portable,
    /// libm `sincosf` with exception reporting; falls back if unavailable
    Fused,
}

/// Plugin utility configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UtilsConfig {
    /// Trigonometric backend selection
    #[serde(default)]
    pub trig_backend: TrigBackendKind,
}

impl UtilsConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Config`] if the document does not describe a
    /// valid configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(UtilsError::config)
    }

    /// Read and parse a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Io`] if the file cannot be read, or
    /// [`UtilsError::Config`] if it is not valid UTF-8 YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = try_read_file(path)?;
        let yaml = std::str::from_utf8(&bytes).map_err(UtilsError::config)?;
        let config = Self::from_yaml_str(yaml)?;
        tracing::debug!(
            path = %path.display(),
            trig_backend = ?config.trig_backend,
            "Loaded plugin utils config"
        );
        Ok(config)
    }

    /// Render as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`UtilsError::Config`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(UtilsError::config)
    }

    /// Resolve the configured trigonometric backend.
    pub fn trig_backend(&self) -> &'static dyn TrigBackend {
        backend_for(self.trig_backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_empty_document_uses_defaults() -> TestResult {
        let config = UtilsConfig::from_yaml_str("{}")?;
        assert_eq!(config, UtilsConfig::default());
        assert_eq!(config.trig_backend, TrigBackendKind::Auto);
        Ok(())
    }

    #[test]
    fn test_parse_backend_kinds() -> TestResult {
        for (text, kind) in [
            ("auto", TrigBackendKind::Auto),
            ("portable", TrigBackendKind::Portable),
            ("fused", TrigBackendKind::Fused),
        ] {
            let config = UtilsConfig::from_yaml_str(&format!("trig_backend: {text}"))?;
            assert_eq!(config.trig_backend, kind);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result = UtilsConfig::from_yaml_str("trig_backend: x87");
        assert!(matches!(result, Err(UtilsError::Config(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = UtilsConfig::from_yaml_str("trig_backend: auto\nbackend: fused");
        assert!(matches!(result, Err(UtilsError::Config(_))));
    }

    #[test]
    fn test_yaml_round_trip() -> TestResult {
        let config = UtilsConfig {
            trig_backend: TrigBackendKind::Portable,
        };
        let decoded = UtilsConfig::from_yaml_str(&config.to_yaml_string()?)?;
        assert_eq!(decoded, config);
        assert_eq!(decoded.trig_backend().name(), "portable");
        Ok(())
    }
}
