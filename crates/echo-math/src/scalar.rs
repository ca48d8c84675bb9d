// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, matrix, and quaternion types.
//!
//! All helpers are pure `f32` functions. There is no global tolerance to
//! tweak at runtime: callers wanting a looser comparison pass their own
//! epsilon to [`approx_eq`] or the `*_within` comparison methods.

use std::f32::consts::TAU;

/// Degeneracy threshold for vector lengths, approximate equality, and the
/// slerp linear fallback.
///
/// `EPSILON` is a degeneracy threshold (not numeric precision): vectors with
/// length ≤ `EPSILON` normalize to zero.
pub const EPSILON: f32 = 1e-6;

/// Length threshold below which [`crate::Quat::normalize`] returns identity.
pub const QUAT_EPSILON: f32 = 1e-5;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (360.0 / TAU)
}

/// Linear interpolation `a + (b - a) * t`. `t` is not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: returns `t` such that `lerp(a, b, t) == v`.
///
/// When `a` and `b` are closer than [`EPSILON`] the range is degenerate and
/// `a` itself is returned.
///
/// # Examples
/// ```
/// use echo_math::scalar::inverse_lerp;
/// assert_eq!(inverse_lerp(10.0, 20.0, 15.0), 0.5);
/// assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 3.0);
/// ```
pub fn inverse_lerp(a: f32, b: f32, v: f32) -> f32 {
    let d = b - a;
    if d.abs() < EPSILON {
        a
    } else {
        (v - a) / d
    }
}

/// Modulo whose result takes the sign of the divisor.
///
/// `euclidean_modulo(-1.0, 3.0) == 2.0`, whereas `-1.0 % 3.0 == -1.0`.
pub fn euclidean_modulo(n: f32, m: f32) -> f32 {
    ((n % m) + m) % m
}

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Returns `true` when `|a - b| < epsilon`.
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
