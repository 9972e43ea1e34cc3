//! libm `sincosf` with floating-point exception checks

#![expect(unsafe_code, reason = "FFI into the C math library")]

use libc::c_int;

use super::{SinCos, TrigBackend};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod fe {
    use libc::c_int;

    pub const INVALID: c_int = 0x01;
    pub const DIVBYZERO: c_int = 0x04;
    pub const OVERFLOW: c_int = 0x08;
    pub const UNDERFLOW: c_int = 0x10;
    pub const ALL_EXCEPT: c_int = 0x3D;
}

#[cfg(target_arch = "aarch64")]
mod fe {
    use libc::c_int;

    pub const INVALID: c_int = 0x01;
    pub const DIVBYZERO: c_int = 0x02;
    pub const OVERFLOW: c_int = 0x04;
    pub const UNDERFLOW: c_int = 0x08;
    pub const ALL_EXCEPT: c_int = 0x1F;
}

/// Exceptions that make a result untrustworthy. Inexact is expected.
const FAILURE_EXCEPTIONS: c_int = fe::INVALID | fe::DIVBYZERO | fe::OVERFLOW | fe::UNDERFLOW;

#[link(name = "m")]
unsafe extern "C" {
    safe fn feclearexcept(excepts: c_int) -> c_int;
    safe fn fetestexcept(excepts: c_int) -> c_int;
    fn sincosf(x: f32, sin: *mut f32, cos: *mut f32);
}

/// Single `sincosf` call bracketed by FP exception flag checks.
///
/// The flags are per-thread, so concurrent calls do not interfere.
#[derive(Debug, Default, Clone, Copy)]
pub struct FusedBackend;

impl TrigBackend for FusedBackend {
    fn name(&self) -> &'static str {
        "libm-sincosf"
    }

    fn is_fused(&self) -> bool {
        true
    }

    fn sin_cos(&self, radians: f32) -> SinCos {
        let mut sin = 0.0_f32;
        let mut cos = 0.0_f32;

        // Non-zero only for unsupported flag bits, which ALL_EXCEPT excludes.
        let _cleared = feclearexcept(fe::ALL_EXCEPT);

        // SAFETY: both pointers come from live, exclusive `f32` locals that
        // outlive the call, and `sincosf` writes exactly one `f32` to each.
        unsafe { sincosf(radians, &mut sin, &mut cos) };

        let raised = fetestexcept(FAILURE_EXCEPTIONS);
        if raised != 0 {
            tracing::debug!(radians, raised, "sincosf raised floating-point exceptions");
        }

        SinCos {
            sin,
            cos,
            exceptions_clear: raised == 0,
        }
    }
}
