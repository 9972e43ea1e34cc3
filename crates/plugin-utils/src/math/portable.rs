//! Backend for platforms without FP environment access

use super::{SinCos, TrigBackend};

/// Independent `sin` and `cos` calls.
///
/// The FP exception flags are not observable here, so
/// [`SinCos::exceptions_clear`] is always `true` and callers should not read
/// meaning into it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortableBackend;

impl TrigBackend for PortableBackend {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn is_fused(&self) -> bool {
        false
    }

    fn sin_cos(&self, radians: f32) -> SinCos {
        SinCos {
            sin: radians.sin(),
            cos: radians.cos(),
            exceptions_clear: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn() {
        let result = PortableBackend.sin_cos(std::f32::consts::FRAC_PI_2);
        assert!((result.sin - 1.0).abs() < 1e-6);
        assert!(result.cos.abs() < 1e-6);
    }

    #[test]
    fn test_flag_is_always_set() {
        let result = PortableBackend.sin_cos(f32::INFINITY);
        assert!(result.sin.is_nan());
        assert!(result.exceptions_clear);
    }
}
