// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::{check_index, exact_array};
use crate::{MathError, Mat3, Mat4, Prng, Quat, EPSILON};

/// Float32 3D vector.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`Vec3::transform_mat4`] for points (homogeneous `w = 1`, with
///   perspective divide) and [`Vec3::transform_mat4_upper3x3`] for directions
///   (homogeneous `w = 0`).
/// * Packs to exactly 12 bytes; see [`crate::PaddedVec3`] for the 16-byte
///   uniform-buffer form.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    data: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<Vec3>() == 12);

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Draws a vector uniformly distributed on the sphere of radius `scale`.
    pub fn random(scale: f32, rng: &mut Prng) -> Self {
        let angle = rng.next_f32() * std::f32::consts::TAU;
        let z = rng.next_f32() * 2.0 - 1.0;
        let z_scale = (1.0 - z * z).sqrt() * scale;
        Self::new(angle.cos() * z_scale, angle.sin() * z_scale, z * scale)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Borrows the components as an array.
    pub fn as_array(&self) -> &[f32; 3] {
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

    /// Overwrites all three components.
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.data = [x, y, z];
    }

    /// Component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 2`.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        check_index(index, 3)?;
        Ok(self.data[index])
    }

    /// Writes the component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 2`; the
    /// vector is left unchanged.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        check_index(index, 3)?;
        self.data[index] = value;
        Ok(())
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] + other.data[0],
            self.data[1] + other.data[1],
            self.data[2] + other.data[2],
        )
    }

    /// Componentwise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] - other.data[0],
            self.data[1] - other.data[1],
            self.data[2] - other.data[2],
        )
    }

    /// Componentwise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] * other.data[0],
            self.data[1] * other.data[1],
            self.data[2] * other.data[2],
        )
    }

    /// Componentwise quotient.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] / other.data[0],
            self.data[1] / other.data[1],
            self.data[2] / other.data[2],
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
        )
    }

    /// Divides every component by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(
            self.data[0] / scalar,
            self.data[1] / scalar,
            self.data[2] / scalar,
        )
    }

    /// `self + other * scale`.
    pub fn add_scaled(&self, other: &Self, scale: f32) -> Self {
        Self::new(
            self.data[0] + other.data[0] * scale,
            self.data[1] + other.data[1] * scale,
            self.data[2] + other.data[2] * scale,
        )
    }

    /// Linear interpolation towards `other` by `t` (unclamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.data[0] + t * (other.data[0] - self.data[0]),
            self.data[1] + t * (other.data[1] - self.data[1]),
            self.data[2] + t * (other.data[2] - self.data[2]),
        )
    }

    /// Linear interpolation with a separate factor per component.
    pub fn lerp_v(&self, other: &Self, t: &Self) -> Self {
        Self::new(
            self.data[0] + t.data[0] * (other.data[0] - self.data[0]),
            self.data[1] + t.data[1] * (other.data[1] - self.data[1]),
            self.data[2] + t.data[2] * (other.data[2] - self.data[2]),
        )
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }

    /// Clamps each component to `[min, max]`.
    pub fn clamp(&self, min: f32, max: f32) -> Self {
        Self::new(
            crate::clamp(self.data[0], min, max),
            crate::clamp(self.data[1], min, max),
            crate::clamp(self.data[2], min, max),
        )
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].min(other.data[0]),
            self.data[1].min(other.data[1]),
            self.data[2].min(other.data[2]),
        )
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].max(other.data[0]),
            self.data[1].max(other.data[1]),
            self.data[2].max(other.data[2]),
        )
    }

    /// Rounds every component up.
    pub fn ceil(&self) -> Self {
        Self::new(self.data[0].ceil(), self.data[1].ceil(), self.data[2].ceil())
    }

    /// Rounds every component down.
    pub fn floor(&self) -> Self {
        Self::new(
            self.data[0].floor(),
            self.data[1].floor(),
            self.data[2].floor(),
        )
    }

    /// Rounds every component to the nearest integer (half away from zero).
    pub fn round(&self) -> Self {
        Self::new(
            self.data[0].round(),
            self.data[1].round(),
            self.data[2].round(),
        )
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2])
    }

    /// Componentwise reciprocal `1 / c`.
    pub fn inverse(&self) -> Self {
        Self::new(1.0 / self.data[0], 1.0 / self.data[1], 1.0 / self.data[2])
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude; prefer this over [`Vec3::length`] for comparisons.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.data[0] - other.data[0];
        let dy = self.data[1] - other.data[1];
        let dz = self.data[2] - other.data[2];
        dx * dx + dy * dy + dz * dz
    }

    /// Normalises the vector, returning the zero vector if length ≤ [`EPSILON`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Rescales the vector to `length`. Degenerate input stays zero.
    pub fn set_length(&self, length: f32) -> Self {
        self.normalize().scale(length)
    }

    /// Shortens the vector to `max_len` if it is longer; otherwise returns it
    /// unchanged.
    pub fn truncate(&self, max_len: f32) -> Self {
        if self.length() > max_len {
            self.set_length(max_len)
        } else {
            *self
        }
    }

    /// Angle in radians between `self` and `other`.
    ///
    /// Returns `π/2` when either vector is zero (cosine treated as 0).
    pub fn angle(&self, other: &Self) -> f32 {
        let mag = self.length() * other.length();
        let cosine = if mag == 0.0 { 0.0 } else { self.dot(other) / mag };
        crate::clamp(cosine, -1.0, 1.0).acos()
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

    /// Applies a 4×4 transform to this point (`w = 1`) with perspective divide.
    ///
    /// A computed `w` of exactly zero is treated as one. A non-finite `w` is
    /// divided through unchanged: NaN makes every component NaN, and an
    /// infinite `w` sends finite components to zero.
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        let m = m.as_array();
        let [x, y, z] = self.data;
        let w = m[3] * x + m[7] * y + m[11] * z + m[15];
        let w = if w == 0.0 { 1.0 } else { w };
        Self::new(
            (m[0] * x + m[4] * y + m[8] * z + m[12]) / w,
            (m[1] * x + m[5] * y + m[9] * z + m[13]) / w,
            (m[2] * x + m[6] * y + m[10] * z + m[14]) / w,
        )
    }

    /// Applies only the upper 3×3 block of a 4×4 transform (direction, `w = 0`).
    pub fn transform_mat4_upper3x3(&self, m: &Mat4) -> Self {
        let m = m.as_array();
        let [x, y, z] = self.data;
        Self::new(
            x * m[0] + y * m[4] + z * m[8],
            x * m[1] + y * m[5] + z * m[9],
            x * m[2] + y * m[6] + z * m[10],
        )
    }

    /// Multiplies this vector by a 3×3 matrix (`m * v`).
    pub fn transform_mat3(&self, m: &Mat3) -> Self {
        let m = m.as_array();
        let [x, y, z] = self.data;
        Self::new(
            x * m[0] + y * m[4] + z * m[8],
            x * m[1] + y * m[5] + z * m[9],
            x * m[2] + y * m[6] + z * m[10],
        )
    }

    /// Rotates this vector by `q`.
    ///
    /// Uses `v + 2w(u × v) + 2(u × (u × v))` with `u = q.xyz`, which avoids
    /// the two Hamilton products of `q * v * q⁻¹`. Assumes a unit quaternion.
    pub fn transform_quat(&self, q: &Quat) -> Self {
        let [qx, qy, qz, qw] = q.to_array();
        let w2 = qw * 2.0;
        let [x, y, z] = self.data;

        let uv_x = qy * z - qz * y;
        let uv_y = qz * x - qx * z;
        let uv_z = qx * y - qy * x;

        Self::new(
            x + uv_x * w2 + (qy * uv_z - qz * uv_y) * 2.0,
            y + uv_y * w2 + (qz * uv_x - qx * uv_z) * 2.0,
            z + uv_z * w2 + (qx * uv_y - qy * uv_x) * 2.0,
        )
    }

    /// Rotates this point about the X axis through `pivot` by `angle` radians.
    pub fn rotate_x(&self, pivot: &Self, angle: f32) -> Self {
        let p = self.sub(pivot);
        let (s, c) = angle.sin_cos();
        let r = Self::new(
            p.data[0],
            p.data[1] * c - p.data[2] * s,
            p.data[1] * s + p.data[2] * c,
        );
        r.add(pivot)
    }

    /// Rotates this point about the Y axis through `pivot` by `angle` radians.
    pub fn rotate_y(&self, pivot: &Self, angle: f32) -> Self {
        let p = self.sub(pivot);
        let (s, c) = angle.sin_cos();
        let r = Self::new(
            p.data[2] * s + p.data[0] * c,
            p.data[1],
            p.data[2] * c - p.data[0] * s,
        );
        r.add(pivot)
    }

    /// Rotates this point about the Z axis through `pivot` by `angle` radians.
    pub fn rotate_z(&self, pivot: &Self, angle: f32) -> Self {
        let p = self.sub(pivot);
        let (s, c) = angle.sin_cos();
        let r = Self::new(
            p.data[0] * c - p.data[1] * s,
            p.data[0] * s + p.data[1] * c,
            p.data[2],
        );
        r.add(pivot)
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use echo_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        exact_array::<3>(values).map(Self::from)
    }
}

impl core::ops::Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl core::ops::IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Vec3::mul(&self, &rhs)
    }
}

impl core::ops::Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Vec3::div(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec3::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec3::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl core::ops::DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.div_scalar(rhs);
    }
}
