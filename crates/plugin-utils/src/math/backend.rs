//! Trigonometric backend trait and selection

use super::{PortableBackend, SinCos};
use crate::TrigBackendKind;

static PORTABLE: PortableBackend = PortableBackend;

#[cfg(all(
    target_os = "linux",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
static FUSED: super::FusedBackend = super::FusedBackend;

/// Source of sine/cosine for [`sin_cos`](super::sin_cos)
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; plugins may evaluate angles from
/// several threads at once. Any FP environment an implementation inspects must
/// be thread-local.
pub trait TrigBackend: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether sine and cosine come from a single primitive
    fn is_fused(&self) -> bool;

    /// Compute sine and cosine of `radians`
    fn sin_cos(&self, radians: f32) -> SinCos;
}

/// Backend chosen for this build
///
/// Returns the fused backend where the platform offers one and the portable
/// backend otherwise.
pub fn default_backend() -> &'static dyn TrigBackend {
    #[cfg(all(
        target_os = "linux",
        any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
    ))]
    {
        &FUSED
    }

    #[cfg(not(all(
        target_os = "linux",
        any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
    )))]
    {
        &PORTABLE
    }
}

/// Backend for a configured [`TrigBackendKind`]
///
/// Asking for [`TrigBackendKind::Fused`] on a platform without it falls back to
/// the portable backend.
pub fn backend_for(kind: TrigBackendKind) -> &'static dyn TrigBackend {
    match kind {
        TrigBackendKind::Auto => default_backend(),
        TrigBackendKind::Portable => &PORTABLE,
        TrigBackendKind::Fused => {
            let backend = default_backend();
            if !backend.is_fused() {
                tracing::warn!(
                    fallback = backend.name(),
                    "Fused sincos unavailable on this platform, using fallback backend"
                );
            }
            backend
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portable_is_selectable_everywhere() {
        let backend = backend_for(TrigBackendKind::Portable);
        assert_eq!(backend.name(), "portable");
        assert!(!backend.is_fused());
    }

    #[test]
    fn test_auto_is_default() {
        assert_eq!(
            backend_for(TrigBackendKind::Auto).name(),
            default_backend().name()
        );
    }

    #[test]
    fn test_fused_request_never_fails() {
        let backend = backend_for(TrigBackendKind::Fused);
        let result = backend.sin_cos(0.0);
        assert!(result.exceptions_clear);
        assert_eq!(
            backend.is_fused(),
            cfg!(all(
                target_os = "linux",
                any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
            ))
        );
    }
}
