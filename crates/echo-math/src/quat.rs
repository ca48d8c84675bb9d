// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f32::consts::{PI, TAU};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::error::{check_index, exact_array};
use crate::{MathError, Mat3, Mat4, Prng, Vec3, EPSILON, QUAT_EPSILON};

/// Axis order applied by [`Quat::from_euler`].
///
/// The name lists the factors of the Hamilton product: `Xyz` builds
/// `qx * qy * qz`, i.e. intrinsic rotations about X, then the rotated Y,
/// then the twice-rotated Z.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    /// X, then Y, then Z.
    Xyz,
    /// X, then Z, then Y.
    Xzy,
    /// Y, then X, then Z.
    Yxz,
    /// Y, then Z, then X.
    Yzx,
    /// Z, then X, then Y.
    Zxy,
    /// Z, then Y, then X.
    Zyx,
}

impl FromStr for EulerOrder {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xyz" => Ok(Self::Xyz),
            "xzy" => Ok(Self::Xzy),
            "yxz" => Ok(Self::Yxz),
            "yzx" => Ok(Self::Yzx),
            "zxy" => Ok(Self::Zxy),
            "zyx" => Ok(Self::Zyx),
            _ => Err(MathError::UnknownEulerOrder),
        }
    }
}

/// Result of [`Quat::to_axis_angle`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisAngle {
    /// Unit rotation axis; `(1, 0, 0)` when the angle is ~0.
    pub axis: Vec3,
    /// Rotation angle in radians, in `[0, 2π]`.
    pub angle: f32,
}

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * No unit-norm invariant is enforced. Conversions to matrices and
///   [`Quat::conjugate`] as an inverse assume a unit quaternion; call
///   [`Quat::normalize`] to restore one.
/// * `q` and `-q` represent the same rotation.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Quat {
    data: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<Quat>() == 16);

impl Quat {
    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Borrows the components.
    pub fn as_array(&self) -> &[f32; 4] {
        &self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Sets the X component.
    pub fn set_x(&mut self, value: f32) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: f32) {
        self.data[1] = value;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, value: f32) {
        self.data[2] = value;
    }

    /// Sets the scalar component.
    pub fn set_w(&mut self, value: f32) {
        self.data[3] = value;
    }

    /// Component by index (0..=3).
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        check_index(index, 4)?;
        Ok(self.data[index])
    }

    /// Writes the component at `index` (0..=3).
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        check_index(index, 4)?;
        self.data[index] = value;
        Ok(())
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis must already be unit length; it is not normalized here.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Quat, Vec3};
    /// let q = Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2);
    /// assert!(q.rotate(&Vec3::UNIT_X).equals_approximately(&Vec3::UNIT_Y));
    /// ```
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(axis.x() * s, axis.y() * s, axis.z() * s, c)
    }

    /// Rotation encoded by the upper 3×3 block of `m`.
    pub fn from_mat3(m: &Mat3) -> Self {
        Self::from_rotation_cells(m.as_array())
    }

    /// Rotation encoded by the upper 3×3 block of `m`.
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_rotation_cells(m.as_array())
    }

    // Trace / largest-diagonal extraction over stride-4 column storage.
    // Both matrix types keep cell (r, c) at `c * 4 + r`.
    fn from_rotation_cells(m: &[f32]) -> Self {
        let trace = m[0] + m[5] + m[10];
        if trace > 0.0 {
            let root = (trace + 1.0).sqrt();
            let w = 0.5 * root;
            let r = 0.5 / root;
            return Self::new((m[6] - m[9]) * r, (m[8] - m[2]) * r, (m[1] - m[4]) * r, w);
        }

        let i = if m[10] > m[0].max(m[5]) {
            2
        } else {
            usize::from(m[5] > m[0])
        };
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let root = (m[i * 4 + i] - m[j * 4 + j] - m[k * 4 + k] + 1.0).sqrt();
        let r = 0.5 / root;
        let mut out = [0.0; 4];
        out[i] = 0.5 * root;
        out[j] = (m[j * 4 + i] + m[i * 4 + j]) * r;
        out[k] = (m[k * 4 + i] + m[i * 4 + k]) * r;
        out[3] = (m[j * 4 + k] - m[k * 4 + j]) * r;
        Self { data: out }
    }

    /// Builds a rotation from Euler angles (radians) applied in `order`.
    pub fn from_euler(x: f32, y: f32, z: f32, order: EulerOrder) -> Self {
        let (xs, xc) = (x * 0.5).sin_cos();
        let (ys, yc) = (y * 0.5).sin_cos();
        let (zs, zc) = (z * 0.5).sin_cos();

        match order {
            EulerOrder::Xyz => Self::new(
                xs * yc * zc + xc * ys * zs,
                xc * ys * zc - xs * yc * zs,
                xc * yc * zs + xs * ys * zc,
                xc * yc * zc - xs * ys * zs,
            ),
            EulerOrder::Xzy => Self::new(
                xs * yc * zc - xc * ys * zs,
                xc * ys * zc - xs * yc * zs,
                xc * yc * zs + xs * ys * zc,
                xc * yc * zc + xs * ys * zs,
            ),
            EulerOrder::Yxz => Self::new(
                xs * yc * zc + xc * ys * zs,
                xc * ys * zc - xs * yc * zs,
                xc * yc * zs - xs * ys * zc,
                xc * yc * zc + xs * ys * zs,
            ),
            EulerOrder::Yzx => Self::new(
                xs * yc * zc + xc * ys * zs,
                xc * ys * zc + xs * yc * zs,
                xc * yc * zs - xs * ys * zc,
                xc * yc * zc - xs * ys * zs,
            ),
            EulerOrder::Zxy => Self::new(
                xs * yc * zc - xc * ys * zs,
                xc * ys * zc + xs * yc * zs,
                xc * yc * zs + xs * ys * zc,
                xc * yc * zc - xs * ys * zs,
            ),
            EulerOrder::Zyx => Self::new(
                xs * yc * zc - xc * ys * zs,
                xc * ys * zc + xs * yc * zs,
                xc * yc * zs - xs * ys * zc,
                xc * yc * zc + xs * ys * zs,
            ),
        }
    }

    /// Shortest rotation taking unit vector `a` onto unit vector `b`.
    ///
    /// Antiparallel inputs rotate by π about an axis perpendicular to `a`.
    /// All temporaries are locals, so concurrent calls are independent.
    pub fn rotation_to(a: &Vec3, b: &Vec3) -> Self {
        let dot = a.dot(b);
        if dot < -0.999_999 {
            let mut axis = Vec3::UNIT_X.cross(a);
            if axis.length() < 0.000_001 {
                axis = Vec3::UNIT_Y.cross(a);
            }
            trace!(?a, ?b, "quat rotation_to: antiparallel inputs, rotating by pi");
            return Self::from_axis_angle(axis.normalize(), PI);
        }
        if dot > 0.999_999 {
            return Self::identity();
        }
        let axis = a.cross(b);
        Self::new(axis.x(), axis.y(), axis.z(), 1.0 + dot).normalize()
    }

    /// Uniformly distributed random rotation.
    pub fn random(rng: &mut Prng) -> Self {
        let u1 = rng.next_f32();
        let u2 = rng.next_f32();
        let u3 = rng.next_f32();
        let sq1 = (1.0 - u1).sqrt();
        let sq2 = u1.sqrt();
        let (s2, c2) = (TAU * u2).sin_cos();
        let (s3, c3) = (TAU * u3).sin_cos();
        Self::new(sq1 * s2, sq1 * c2, sq2 * s3, sq2 * c3)
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: applied to a vector, the result rotates by
    /// `other` first and then by `self`. Quaternion multiplication is
    /// non‑commutative.
    ///
    /// Inputs need not be normalized; when both operands are unit
    /// quaternions the result is a unit quaternion up to floating‑point error
    /// (consider re‑normalizing over long chains).
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Post-multiplies by a rotation of `angle` about X.
    pub fn rotate_x(&self, angle: f32) -> Self {
        let [qx, qy, qz, qw] = self.data;
        let (bx, bw) = (angle * 0.5).sin_cos();
        Self::new(
            qx * bw + qw * bx,
            qy * bw + qz * bx,
            qz * bw - qy * bx,
            qw * bw - qx * bx,
        )
    }

    /// Post-multiplies by a rotation of `angle` about Y.
    pub fn rotate_y(&self, angle: f32) -> Self {
        let [qx, qy, qz, qw] = self.data;
        let (by, bw) = (angle * 0.5).sin_cos();
        Self::new(
            qx * bw - qz * by,
            qy * bw + qw * by,
            qz * bw + qx * by,
            qw * bw - qy * by,
        )
    }

    /// Post-multiplies by a rotation of `angle` about Z.
    pub fn rotate_z(&self, angle: f32) -> Self {
        let [qx, qy, qz, qw] = self.data;
        let (bz, bw) = (angle * 0.5).sin_cos();
        Self::new(
            qx * bw + qy * bz,
            qy * bw - qx * bz,
            qz * bw + qw * bz,
            qw * bw - qz * bz,
        )
    }

    /// Negates the vector part. Equals the inverse only for unit quaternions.
    pub fn conjugate(&self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, w)
    }

    /// Multiplicative inverse for any nonzero quaternion; the zero
    /// quaternion maps to zero.
    pub fn inverse(&self) -> Self {
        let dot = self.length_squared();
        let inv = if dot == 0.0 { 0.0 } else { 1.0 / dot };
        let [x, y, z, w] = self.data;
        Self::new(-x * inv, -y * inv, -z * inv, w * inv)
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Nearly parallel inputs fall back to componentwise lerp.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let mut cos_omega = self.dot(other);
        let mut b = *other;
        if cos_omega < 0.0 {
            cos_omega = -cos_omega;
            b = b.negate();
        }

        let (scale0, scale1) = if 1.0 - cos_omega > EPSILON {
            let omega = cos_omega.acos();
            let sin_omega = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sin_omega,
                (t * omega).sin() / sin_omega,
            )
        } else {
            (1.0 - t, t)
        };

        self.scale(scale0).add(&b.scale(scale1))
    }

    /// Spherical quadrangle interpolation between `self` and `d` with
    /// control points `b` and `c`.
    pub fn sqlerp(&self, b: &Self, c: &Self, d: &Self, t: f32) -> Self {
        let outer = self.slerp(d, t);
        let inner = b.slerp(c, t);
        outer.slerp(&inner, 2.0 * t * (1.0 - t))
    }

    /// Componentwise linear interpolation (not normalized).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.data[0] + t * (other.data[0] - self.data[0]),
            self.data[1] + t * (other.data[1] - self.data[1]),
            self.data[2] + t * (other.data[2] - self.data[2]),
            self.data[3] + t * (other.data[3] - self.data[3]),
        )
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] + other.data[0],
            self.data[1] + other.data[1],
            self.data[2] + other.data[2],
            self.data[3] + other.data[3],
        )
    }

    /// Componentwise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] - other.data[0],
            self.data[1] - other.data[1],
            self.data[2] - other.data[2],
            self.data[3] - other.data[3],
        )
    }

    /// Multiplies every component by `s`.
    pub fn scale(&self, s: f32) -> Self {
        Self::new(
            self.data[0] * s,
            self.data[1] * s,
            self.data[2] * s,
            self.data[3] * s,
        )
    }

    /// Divides every component by `s`.
    pub fn div_scalar(&self, s: f32) -> Self {
        Self::new(
            self.data[0] / s,
            self.data[1] / s,
            self.data[2] / s,
            self.data[3] / s,
        )
    }

    /// Negates every component (same rotation, other hemisphere).
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0]
            + self.data[1] * other.data[1]
            + self.data[2] * other.data[2]
            + self.data[3] * other.data[3]
    }

    /// Euclidean norm.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= QUAT_EPSILON {
            trace!(len, "quat normalize: degenerate length, using identity");
            return Self::identity();
        }
        self.scale(1.0 / len)
    }

    /// Axis and angle of a unit quaternion.
    ///
    /// `w` is clamped to `[-1, 1]` before `acos`. When the angle is ~0 the
    /// axis is arbitrary and reported as `(1, 0, 0)`.
    pub fn to_axis_angle(&self) -> AxisAngle {
        let angle = self.data[3].clamp(-1.0, 1.0).acos() * 2.0;
        let s = (angle * 0.5).sin();
        let axis = if s > EPSILON {
            Vec3::new(self.data[0] / s, self.data[1] / s, self.data[2] / s)
        } else {
            Vec3::UNIT_X
        };
        AxisAngle { axis, angle }
    }

    /// Angle in radians between the rotations of two unit quaternions.
    pub fn angle(&self, other: &Self) -> f32 {
        let d = self.dot(other);
        (2.0 * d * d - 1.0).clamp(-1.0, 1.0).acos()
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        v.transform_quat(self)
    }

    /// Rotation matrix (3×3) of this unit quaternion.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_quat(self)
    }

    /// Rotation matrix (column-major 4×4) of this unit quaternion.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self)
    }

    /// Componentwise `|a - b| < EPSILON`.
    pub fn equals_approximately(&self, other: &Self) -> bool {
        self.equals_approximately_within(other, EPSILON)
    }

    /// Componentwise `|a - b| < epsilon`.
    pub fn equals_approximately_within(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Quat {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        exact_array::<4>(values).map(Self::from)
    }
}

impl From<Mat3> for Quat {
    fn from(value: Mat3) -> Self {
        Self::from_mat3(&value)
    }
}

impl From<Mat4> for Quat {
    fn from(value: Mat4) -> Self {
        Self::from_mat4(&value)
    }
}

impl core::ops::Index<usize> for Quat {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl core::ops::IndexMut<usize> for Quat {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(&rhs)
    }
}

impl core::ops::Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Quat::add(&self, &rhs)
    }
}

impl core::ops::Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Quat::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}
