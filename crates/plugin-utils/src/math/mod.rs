//! Trigonometry for converting game orientation into unit vectors
//!
//! Most games hand out yaw/pitch angles; the voice client wants front and top
//! vectors. The conversion needs sine and cosine of the same angle, and a
//! plugin wants to know if that computation hit a floating-point exception
//! (garbage memory reads happily produce infinities).
//!
//! Platform differences live behind [`TrigBackend`]:
//! - **Linux (x86, x86_64, aarch64)**: [`FusedBackend`], libm `sincosf` with
//!   FP exception flag checks
//! - **Everything else**: [`PortableBackend`], independent `sin`/`cos` and an
//!   always-`true` exception flag

mod backend;
#[cfg(all(
    target_os = "linux",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
mod fused;
mod portable;

pub use backend::{TrigBackend, backend_for, default_backend};
#[cfg(all(
    target_os = "linux",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
pub use fused::FusedBackend;
pub use portable::PortableBackend;

use std::f32::consts::PI;

const PI_OVER_180: f32 = PI / 180.0;

/// Sine and cosine of one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinCos {
    /// Sine of the angle
    pub sin: f32,
    /// Cosine of the angle
    pub cos: f32,
    /// `false` if an invalid, divide-by-zero, overflow or underflow exception
    /// was raised. Backends that cannot observe the FP environment always
    /// report `true`.
    pub exceptions_clear: bool,
}

impl SinCos {
    /// Split into `(sin, cos)`, dropping the exception flag.
    pub fn pair(self) -> (f32, f32) {
        (self.sin, self.cos)
    }
}

/// Compute sine and cosine of `radians` with the build's default backend.
pub fn sin_cos(radians: f32) -> SinCos {
    default_backend().sin_cos(radians)
}

/// Convert degrees to radians.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    PI_OVER_180 * degrees
}
