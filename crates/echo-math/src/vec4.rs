// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::{check_index, exact_array};
use crate::{MathError, Mat4, EPSILON};

/// Float32 4D vector; usually a homogeneous point or an RGBA value.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    data: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<Vec4>() == 16);

impl Vec4 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit vector along +W.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Borrows the components as an array.
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

    /// W component.
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

    /// Sets the W component.
    pub fn set_w(&mut self, value: f32) {
        self.data[3] = value;
    }

    /// Overwrites all four components.
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.data = [x, y, z, w];
    }

    /// Component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        check_index(index, 4)?;
        Ok(self.data[index])
    }

    /// Writes the component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `index > 3`; the
    /// vector is left unchanged.
    pub fn set_component(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        check_index(index, 4)?;
        self.data[index] = value;
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(f(ax, bx), f(ay, by), f(az, bz), f(aw, bw))
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(f(x), f(y), f(z), f(w))
    }

    /// Componentwise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Componentwise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Componentwise product.
    pub fn mul(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    /// Componentwise quotient.
    pub fn div(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a / b)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        self.map(|c| c * scalar)
    }

    /// Divides every component by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        self.map(|c| c / scalar)
    }

    /// `self + other * scale`.
    pub fn add_scaled(&self, other: &Self, scale: f32) -> Self {
        self.zip_with(other, |a, b| a + b * scale)
    }

    /// Linear interpolation towards `other` by `t` (unclamped).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.zip_with(other, |a, b| a + t * (b - a))
    }

    /// Linear interpolation with a separate factor per component.
    pub fn lerp_v(&self, other: &Self, t: &Self) -> Self {
        let d = other.sub(self);
        self.add(&d.mul(t))
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }

    /// Clamps each component to `[min, max]`.
    pub fn clamp(&self, min: f32, max: f32) -> Self {
        self.map(|c| crate::clamp(c, min, max))
    }

    /// Componentwise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip_with(other, f32::min)
    }

    /// Componentwise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip_with(other, f32::max)
    }

    /// Rounds every component up.
    pub fn ceil(&self) -> Self {
        self.map(f32::ceil)
    }

    /// Rounds every component down.
    pub fn floor(&self) -> Self {
        self.map(f32::floor)
    }

    /// Rounds every component to the nearest integer.
    pub fn round(&self) -> Self {
        self.map(f32::round)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.map(|c| -c)
    }

    /// Componentwise reciprocal.
    pub fn inverse(&self) -> Self {
        self.map(|c| 1.0 / c)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0]
            + self.data[1] * other.data[1]
            + self.data[2] * other.data[2]
            + self.data[3] * other.data[3]
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
        let d = self.sub(other);
        d.dot(&d)
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

    /// Full 4×4 application `m * v`.
    pub fn transform_mat4(&self, m: &Mat4) -> Self {
        let m = m.as_array();
        let [x, y, z, w] = self.data;
        Self::new(
            m[0] * x + m[4] * y + m[8] * z + m[12] * w,
            m[1] * x + m[5] * y + m[9] * z + m[13] * w,
            m[2] * x + m[6] * y + m[10] * z + m[14] * w,
            m[3] * x + m[7] * y + m[11] * z + m[15] * w,
        )
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        exact_array::<4>(values).map(Self::from)
    }
}

impl core::ops::Index<usize> for Vec4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl core::ops::IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl core::ops::Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec4::add(&self, &rhs)
    }
}

impl core::ops::Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec4::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Vec4::mul(&self, &rhs)
    }
}

impl core::ops::Div for Vec4 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Vec4::div(&self, &rhs)
    }
}

impl core::ops::Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.scale(self)
    }
}

impl core::ops::Div<f32> for Vec4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl core::ops::Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec4::add(self, &rhs);
    }
}

impl core::ops::SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec4::sub(self, &rhs);
    }
}

impl core::ops::MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl core::ops::DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.div_scalar(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn transform_mat4_keeps_w_for_directions() {
        let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let dir = Vec4::new(1.0, 0.0, 0.0, 0.0).transform_mat4(&t);
        assert_eq!(dir, Vec4::new(1.0, 0.0, 0.0, 0.0));
        let point = Vec4::new(1.0, 0.0, 0.0, 1.0).transform_mat4(&t);
        assert_eq!(point, Vec4::new(2.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn lerp_v_interpolates_per_component() {
        let a = Vec4::ZERO;
        let b = Vec4::new(10.0, 10.0, 10.0, 10.0);
        let t = Vec4::new(0.0, 0.25, 0.5, 1.0);
        assert_eq!(a.lerp_v(&b, &t), Vec4::new(0.0, 2.5, 5.0, 10.0));
    }

    #[test]
    fn set_component_rejects_w_plus_one() {
        let mut v = Vec4::ZERO;
        assert!(v.set_component(3, 9.0).is_ok());
        assert_eq!(v.w(), 9.0);
        assert_eq!(
            v.set_component(4, 1.0),
            Err(MathError::IndexOutOfRange { index: 4, len: 4 })
        );
    }
}
