// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::{check_index, exact_array};
use crate::{MathError, Mat3, Mat4, Prng, Vec3, EPSILON};

/// Float32 2D vector for screen-space and UV math.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    data: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<Vec2>() == 8);

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Vector with both components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Draws a vector uniformly distributed on the circle of radius `scale`.
    pub fn random(scale: f32, rng: &mut Prng) -> Self {
        let angle = rng.next_f32() * std::f32::consts::TAU;
        Self::new(angle.cos() * scale, angle.sin() * scale)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// Borrows the components as an array.
    pub fn as_array(&self) -> &[f32; 2] {
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

    /// Sets the X component.
    pub fn set_x(&mut self, value: f32) {
        self.data[0] = value;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, value: f32) {
        self.data[1] = value;
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f32, y: f32) {
        self.data = [x, y];
    }

    /// Component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 1`.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        check_index(index, 2)?;
        Ok(self.data[index])
    }

    /// Writes the component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 1`; the
    /// vector is left unchanged.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        check_index(index, 2)?;
        self.data[index] = value;
        Ok(())
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.data[0] + other.data[0], self.data[1] + other.data[1])
    }

    /// Componentwise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.data[0] - other.data[0], self.data[1] - other.data[1])
    }

    /// Componentwise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.data[0] * other.data[0], self.data[1] * other.data[1])
    }

    /// Componentwise quotient.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(self.data[0] / other.data[0], self.data[1] / other.data[1])
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.data[0] * scalar, self.data[1] * scalar)
    }

    /// Divides both components by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self::new(self.data[0] / scalar, self.data[1] / scalar)
    }

    /// `self + other * scale`.
    pub fn add_scaled(&self, other: &Self, scale: f32) -> Self {
        Self::new(
            self.data[0] + other.data[0] * scale,
            self.data[1] + other.data[1] * scale,
        )
    }

    /// Linear interpolation towards `other` by `t` (unclamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.data[0] + t * (other.data[0] - self.data[0]),
            self.data[1] + t * (other.data[1] - self.data[1]),
        )
    }

    /// Linear interpolation with a separate factor per component.
    pub fn lerp_v(&self, other: &Self, t: &Self) -> Self {
        Self::new(
            self.data[0] + t.data[0] * (other.data[0] - self.data[0]),
            self.data[1] + t.data[1] * (other.data[1] - self.data[1]),
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
        )
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].min(other.data[0]),
            self.data[1].min(other.data[1]),
        )
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].max(other.data[0]),
            self.data[1].max(other.data[1]),
        )
    }

    /// Rounds both components up.
    pub fn ceil(&self) -> Self {
        Self::new(self.data[0].ceil(), self.data[1].ceil())
    }

    /// Rounds both components down.
    pub fn floor(&self) -> Self {
        Self::new(self.data[0].floor(), self.data[1].floor())
    }

    /// Rounds both components to the nearest integer.
    pub fn round(&self) -> Self {
        Self::new(self.data[0].round(), self.data[1].round())
    }

    /// Negates both components.
    pub fn negate(&self) -> Self {
        Self::new(-self.data[0], -self.data[1])
    }

    /// Componentwise reciprocal.
    pub fn inverse(&self) -> Self {
        Self::new(1.0 / self.data[0], 1.0 / self.data[1])
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// 2D cross product lifted to 3D: `(0, 0, ax * by - ay * bx)`.
    pub fn cross(&self, other: &Self) -> Vec3 {
        let z = self.data[0] * other.data[1] - self.data[1] * other.data[0];
        Vec3::new(0.0, 0.0, z)
    }

    /// Vector length.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared length.
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
        dx * dx + dy * dy
    }

    /// Unit-length copy, or the zero vector if length ≤ [`EPSILON`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Rescales the vector to `length`.
    pub fn set_length(&self, length: f32) -> Self {
        self.normalize().scale(length)
    }

    /// Shortens the vector to `max_len` if it is longer.
    pub fn truncate(&self, max_len: f32) -> Self {
        if self.length() > max_len {
            self.set_length(max_len)
        } else {
            *self
        }
    }

    /// Angle in radians between `self` and `other`.
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
        (self.data[0] - other.data[0]).abs() < epsilon
            && (self.data[1] - other.data[1]).abs() < epsilon
    }

    /// Rotates this point about `pivot` by `angle` radians.
    pub fn rotate(&self, pivot: &Self, angle: f32) -> Self {
        let px = self.data[0] - pivot.data[0];
        let py = self.data[1] - pivot.data[1];
        let (s, c) = angle.sin_cos();
        Self::new(
            px * c - py * s + pivot.data[0],
            px * s + py * c + pivot.data[1],
        )
    }

    /// Applies a 2D affine transform stored in a 3×3 matrix (`z = 1`).
    pub fn transform_mat3(&self, m: &Mat3) -> Self {
        let m = m.as_array();
        let [x, y] = self.data;
        Self::new(m[0] * x + m[4] * y + m[8], m[1] * x + m[5] * y + m[9])
    }

    /// Applies the XY part of a 4×4 transform (`z = 0`, `w = 1`, no divide).
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        let m = m.as_array();
        let [x, y] = self.data;
        Self::new(m[0] * x + m[4] * y + m[12], m[1] * x + m[5] * y + m[13])
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        exact_array::<2>(values).map(Self::from)
    }
}

impl core::ops::Index<usize> for Vec2 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl core::ops::IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Vec2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Vec2::mul(&self, &rhs)
    }
}

impl core::ops::Div for Vec2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Vec2::div(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl core::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec2::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec2::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl core::ops::DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.div_scalar(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn cross_puts_signed_area_in_z() {
        let c = Vec2::new(2.0, 0.0).cross(&Vec2::new(0.0, 3.0));
        assert_eq!(c, Vec3::new(0.0, 0.0, 6.0));
        let r = Vec2::new(0.0, 3.0).cross(&Vec2::new(2.0, 0.0));
        assert_eq!(r, Vec3::new(0.0, 0.0, -6.0));
    }

    #[test]
    fn rotate_about_pivot() {
        let p = Vec2::new(2.0, 1.0).rotate(&Vec2::new(1.0, 1.0), FRAC_PI_2);
        assert!(p.equals_approximately(&Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn transform_mat3_applies_translation() {
        let m = Mat3::translation(Vec2::new(5.0, -1.0));
        assert_eq!(
            Vec2::new(1.0, 1.0).transform_mat3(&m),
            Vec2::new(6.0, 0.0)
        );
    }

    #[test]
    fn random_lands_on_circle() {
        let mut rng = Prng::from_seed_u64(3);
        for _ in 0..64 {
            let v = Vec2::random(2.5, &mut rng);
            assert!((v.length() - 2.5).abs() < 1e-5);
        }
    }
}
