// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: float32 vectors, matrices, and quaternions for Echo's render path.
//!
//! All types are small `Copy` values laid out `#[repr(C)]` so they can be
//! written straight into GPU buffers:
//!
//! * [`Vec2`], [`Vec3`], [`Vec4`]: componentwise arithmetic plus geometric
//!   helpers and matrix/quaternion application.
//! * [`Mat3`], [`Mat4`]: column-major transforms. `Mat3` keeps a 4-float
//!   column stride (12 floats, padding cells always zero) so that both matrix
//!   types share the `col * 4 + row` addressing rule.
//! * [`Quat`]: `(x, y, z, w)` rotations with Euler, axis/angle, and matrix
//!   conversions.
//!
//! Operations never mutate their inputs. Each one returns a new value, so
//! writing the result back into an operand (`m = m.multiply(&m)`,
//! `v += v`) always yields the mathematically correct answer.
//!
//! Degenerate inputs (zero-length vectors, singular 3×3 matrices, zero
//! quaternions) resolve to documented fallback values rather than errors.
//! [`MathError`] covers only invalid indices and wrong-size buffers.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::similar_names,
    clippy::too_many_lines,
    clippy::too_many_arguments,
    clippy::float_cmp,
    clippy::should_implement_trait,
    clippy::doc_markdown,
    clippy::too_long_first_doc_paragraph,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::trivially_copy_pass_by_ref,
    clippy::multiple_crate_versions
)]

mod error;
mod layout;
mod mat3;
mod mat4;
mod prng;
mod quat;
/// Scalar helpers and tolerance constants.
pub mod scalar;
mod vec2;
mod vec3;
mod vec4;

/// Error type for invalid indices and wrong-size buffers.
pub use error::MathError;
/// GPU byte-layout helpers (std140-padded `Vec3`, slice casts).
pub use layout::{pack_padded, slice_as_bytes, PaddedVec3};
/// Column-major 3×3 matrix with 4-float column stride.
pub use mat3::Mat3;
/// Column-major 4×4 matrix.
pub use mat4::Mat4;
/// Deterministic generator backing the `random` constructors.
pub use prng::Prng;
/// Quaternion rotations and the Euler orders accepted by [`Quat::from_euler`].
pub use quat::{AxisAngle, EulerOrder, Quat};
/// Tolerances and scalar utilities.
pub use scalar::{
    approx_eq, clamp, deg_to_rad, euclidean_modulo, inverse_lerp, lerp, rad_to_deg, EPSILON,
    QUAT_EPSILON,
};
/// Two-component vector.
pub use vec2::Vec2;
/// Three-component vector.
pub use vec3::Vec3;
/// Four-component vector.
pub use vec4::Vec4;
