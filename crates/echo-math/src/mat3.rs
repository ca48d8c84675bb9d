// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::error::check_index;
use crate::{MathError, Mat4, Quat, Vec2, Vec3, EPSILON};

/// Column‑major 3×3 matrix stored with a 4‑float column stride.
///
/// - Twelve floats: cell (row `r`, col `c`) lives at index `c * 4 + r`, the
///   same rule [`Mat4`] uses. Indices 3, 7, and 11 are padding; every
///   constructor and operation writes them as `0`, and `IndexMut` refuses
///   to hand them out.
/// - The layout matches a WGSL `mat3x3<f32>` in a uniform buffer, so a
///   `Mat3` can be uploaded with `bytemuck::bytes_of` unchanged.
/// - Doubles as a 2D affine transform: [`Mat3::translation`],
///   [`Mat3::rotation`], and [`Mat3::scaling`] take 2D arguments, with the
///   translation in column 2.
///
/// Local names like `m10` below read "column 1, row 0".
///
/// # Examples
/// ```
/// use echo_math::{Mat3, Vec2};
/// let m = Mat3::translation(Vec2::new(4.0, -2.0)).scale(Vec2::new(2.0, 2.0));
/// assert_eq!(Vec2::new(1.0, 1.0).transform_mat3(&m).to_array(), [6.0, 0.0]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    data: [f32; 12],
}

const _: () = assert!(std::mem::size_of::<Mat3>() == 48);

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::from_cols_array([
            1.0, 0.0, 0.0, // col 0
            0.0, 1.0, 0.0, // col 1
            0.0, 0.0, 1.0, // col 2
        ])
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self { data: [0.0; 12] }
    }

    /// Builds a matrix from nine column-major values.
    pub const fn from_cols_array(m: [f32; 9]) -> Self {
        Self {
            data: [
                m[0], m[1], m[2], 0.0, // col 0
                m[3], m[4], m[5], 0.0, // col 1
                m[6], m[7], m[8], 0.0, // col 2
            ],
        }
    }

    /// Builds a matrix from a raw 12-slot buffer; padding slots are zeroed.
    pub const fn from_raw(mut data: [f32; 12]) -> Self {
        data[3] = 0.0;
        data[7] = 0.0;
        data[11] = 0.0;
        Self { data }
    }

    /// Builds a matrix from three basis columns.
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        let [a, b, c] = c0.to_array();
        let [d, e, f] = c1.to_array();
        let [g, h, i] = c2.to_array();
        Self::from_cols_array([a, b, c, d, e, f, g, h, i])
    }

    /// Upper-left 3×3 block of a 4×4 matrix.
    pub fn from_mat4(m: &Mat4) -> Self {
        let m = m.as_array();
        Self::from_cols_array([m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]])
    }

    /// Rotation matrix for a (unit) quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::from_cols_array([
            1.0 - yy - zz,
            yx + wz,
            zx - wy,
            yx - wz,
            1.0 - xx - zz,
            zy + wx,
            zx + wy,
            zy - wx,
            1.0 - xx - yy,
        ])
    }

    /// 2D translation by `v` (column 2).
    pub fn translation(v: Vec2) -> Self {
        Self::from_cols_array([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, v.x(), v.y(), 1.0])
    }

    /// 2D rotation by `angle` radians (about +Z).
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols_array([c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0])
    }

    /// 3D rotation about +X by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols_array([1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c])
    }

    /// 3D rotation about +Y by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols_array([c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c])
    }

    /// 3D rotation about +Z by `angle` radians; same as [`Mat3::rotation`].
    pub fn rotation_z(angle: f32) -> Self {
        Self::rotation(angle)
    }

    /// Rotation about an arbitrary axis (Rodrigues' formula).
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity.
    pub fn axis_rotation(axis: Vec3, angle: f32) -> Self {
        let n = axis.normalize();
        if n == Vec3::ZERO {
            trace!(?axis, "mat3 axis_rotation: degenerate axis, using identity");
            return Self::identity();
        }
        let [x, y, z] = n.to_array();
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let (s, c) = angle.sin_cos();
        let omc = 1.0 - c;

        Self::from_cols_array([
            xx + (1.0 - xx) * c,
            x * y * omc + z * s,
            x * z * omc - y * s,
            x * y * omc - z * s,
            yy + (1.0 - yy) * c,
            y * z * omc + x * s,
            x * z * omc + y * s,
            y * z * omc - x * s,
            zz + (1.0 - zz) * c,
        ])
    }

    /// 2D non-uniform scale.
    pub fn scaling(v: Vec2) -> Self {
        Self::from_cols_array([v.x(), 0.0, 0.0, 0.0, v.y(), 0.0, 0.0, 0.0, 1.0])
    }

    /// 3D non-uniform scale along the diagonal.
    pub fn scaling_3d(v: Vec3) -> Self {
        Self::from_cols_array([v.x(), 0.0, 0.0, 0.0, v.y(), 0.0, 0.0, 0.0, v.z()])
    }

    /// 2D uniform scale.
    pub fn uniform_scaling(s: f32) -> Self {
        Self::scaling(Vec2::splat(s))
    }

    /// 3D uniform scale.
    pub fn uniform_scaling_3d(s: f32) -> Self {
        Self::scaling_3d(Vec3::splat(s))
    }

    /// Returns the raw 12-slot buffer.
    pub fn to_array(self) -> [f32; 12] {
        self.data
    }

    /// Borrows the raw 12-slot buffer.
    pub fn as_array(&self) -> &[f32; 12] {
        &self.data
    }

    /// Returns the nine logical cells in column-major order.
    pub fn to_cols_array(&self) -> [f32; 9] {
        let m = &self.data;
        [m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]]
    }

    /// Cell at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row` or `col` exceeds 2.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 3 && col < 3, "mat3 cell ({row}, {col}) out of range");
        self.data[col * 4 + row]
    }

    fn col(&self, c: usize) -> Vec3 {
        let o = c * 4;
        Vec3::new(self.data[o], self.data[o + 1], self.data[o + 2])
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = &self.data;
        let b = &rhs.data;
        let (a00, a01, a02) = (a[0], a[1], a[2]);
        let (a10, a11, a12) = (a[4], a[5], a[6]);
        let (a20, a21, a22) = (a[8], a[9], a[10]);
        let (b00, b01, b02) = (b[0], b[1], b[2]);
        let (b10, b11, b12) = (b[4], b[5], b[6]);
        let (b20, b21, b22) = (b[8], b[9], b[10]);

        Self::from_cols_array([
            a00 * b00 + a10 * b01 + a20 * b02,
            a01 * b00 + a11 * b01 + a21 * b02,
            a02 * b00 + a12 * b01 + a22 * b02,
            a00 * b10 + a10 * b11 + a20 * b12,
            a01 * b10 + a11 * b11 + a21 * b12,
            a02 * b10 + a12 * b11 + a22 * b12,
            a00 * b20 + a10 * b21 + a20 * b22,
            a01 * b20 + a11 * b21 + a21 * b22,
            a02 * b20 + a12 * b21 + a22 * b22,
        ])
    }

    /// Componentwise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        let a = self.to_cols_array();
        let b = rhs.to_cols_array();
        Self::from_cols_array(std::array::from_fn(|i| a[i] + b[i]))
    }

    /// Componentwise difference.
    pub fn sub(&self, rhs: &Self) -> Self {
        let a = self.to_cols_array();
        let b = rhs.to_cols_array();
        Self::from_cols_array(std::array::from_fn(|i| a[i] - b[i]))
    }

    /// Multiplies every cell by `s`.
    pub fn multiply_scalar(&self, s: f32) -> Self {
        let a = self.to_cols_array();
        Self::from_cols_array(a.map(|v| v * s))
    }

    /// Negates every cell.
    pub fn negate(&self) -> Self {
        let a = self.to_cols_array();
        Self::from_cols_array(a.map(|v| -v))
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let m = &self.data;
        Self::from_cols_array([m[0], m[4], m[8], m[1], m[5], m[9], m[2], m[6], m[10]])
    }

    /// Determinant by cofactor expansion along column 0.
    pub fn determinant(&self) -> f32 {
        let m = &self.data;
        let (m00, m01, m02) = (m[0], m[1], m[2]);
        let (m10, m11, m12) = (m[4], m[5], m[6]);
        let (m20, m21, m22) = (m[8], m[9], m[10]);

        m00 * (m11 * m22 - m21 * m12) - m10 * (m01 * m22 - m21 * m02)
            + m20 * (m01 * m12 - m11 * m02)
    }

    /// Inverse via the closed-form adjugate.
    ///
    /// A singular matrix (determinant exactly `0`) returns the identity
    /// instead of dividing by zero.
    pub fn inverse(&self) -> Self {
        let m = &self.data;
        let (m00, m01, m02) = (m[0], m[1], m[2]);
        let (m10, m11, m12) = (m[4], m[5], m[6]);
        let (m20, m21, m22) = (m[8], m[9], m[10]);

        let b01 = m22 * m11 - m12 * m21;
        let b11 = -m22 * m10 + m12 * m20;
        let b21 = m21 * m10 - m11 * m20;

        let det = m00 * b01 + m01 * b11 + m02 * b21;
        if det == 0.0 {
            trace!("mat3 inverse: singular matrix, returning identity");
            return Self::identity();
        }
        let inv_det = 1.0 / det;

        Self::from_cols_array([
            b01 * inv_det,
            (-m22 * m01 + m02 * m21) * inv_det,
            (m12 * m01 - m02 * m11) * inv_det,
            b11 * inv_det,
            (m22 * m00 - m02 * m20) * inv_det,
            (-m12 * m00 + m02 * m10) * inv_det,
            b21 * inv_det,
            (-m21 * m00 + m01 * m20) * inv_det,
            (m11 * m00 - m01 * m10) * inv_det,
        ])
    }

    /// Post-multiplies by a 2D translation: `self * translation(v)`.
    pub fn translate(&self, v: Vec2) -> Self {
        let c2 = self
            .col(0)
            .scale(v.x())
            .add_scaled(&self.col(1), v.y())
            .add(&self.col(2));
        Self::from_cols(self.col(0), self.col(1), c2)
    }

    /// Pre-multiplies by a 2D translation: `translation(v) * self`.
    pub fn pre_translate(&self, v: Vec2) -> Self {
        let m = &self.data;
        let mut out = *self;
        for c in 0..3 {
            let o = c * 4;
            let h = m[o + 2];
            out.data[o] = m[o] + v.x() * h;
            out.data[o + 1] = m[o + 1] + v.y() * h;
        }
        out
    }

    /// Post-multiplies by a 2D rotation: `self * rotation(angle)`.
    pub fn rotate(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let c0 = self.col(0);
        let c1 = self.col(1);
        Self::from_cols(
            c0.scale(c).add_scaled(&c1, s),
            c1.scale(c).add_scaled(&c0, -s),
            self.col(2),
        )
    }

    /// Pre-multiplies by a 2D rotation: `rotation(angle) * self`.
    pub fn pre_rotate(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let m = &self.data;
        let mut out = *self;
        for col in 0..3 {
            let o = col * 4;
            let r0 = m[o];
            let r1 = m[o + 1];
            out.data[o] = c * r0 - s * r1;
            out.data[o + 1] = s * r0 + c * r1;
        }
        out
    }

    /// Post-multiplies by a rotation about X: `self * rotation_x(angle)`.
    pub fn rotate_x(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let c1 = self.col(1);
        let c2 = self.col(2);
        Self::from_cols(
            self.col(0),
            c1.scale(c).add_scaled(&c2, s),
            c2.scale(c).add_scaled(&c1, -s),
        )
    }

    /// Post-multiplies by a rotation about Y: `self * rotation_y(angle)`.
    pub fn rotate_y(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let c0 = self.col(0);
        let c2 = self.col(2);
        Self::from_cols(
            c0.scale(c).add_scaled(&c2, -s),
            self.col(1),
            c2.scale(c).add_scaled(&c0, s),
        )
    }

    /// Post-multiplies by a rotation about Z; same as [`Mat3::rotate`].
    pub fn rotate_z(&self, angle: f32) -> Self {
        self.rotate(angle)
    }

    /// Post-multiplies by a 2D scale: columns 0 and 1 scale, column 2 is kept.
    pub fn scale(&self, v: Vec2) -> Self {
        Self::from_cols(
            self.col(0).scale(v.x()),
            self.col(1).scale(v.y()),
            self.col(2),
        )
    }

    /// Pre-multiplies by a 2D scale: rows 0 and 1 scale.
    pub fn pre_scale(&self, v: Vec2) -> Self {
        let mut out = *self;
        for c in 0..3 {
            out.data[c * 4] *= v.x();
            out.data[c * 4 + 1] *= v.y();
        }
        out
    }

    /// Post-multiplies by a 3D scale.
    pub fn scale_3d(&self, v: Vec3) -> Self {
        Self::from_cols(
            self.col(0).scale(v.x()),
            self.col(1).scale(v.y()),
            self.col(2).scale(v.z()),
        )
    }

    /// Post-multiplies by a 2D uniform scale.
    pub fn uniform_scale(&self, s: f32) -> Self {
        self.scale(Vec2::splat(s))
    }

    /// Post-multiplies by a 3D uniform scale.
    pub fn uniform_scale_3d(&self, s: f32) -> Self {
        self.scale_3d(Vec3::splat(s))
    }

    /// 2D translation stored in column 2.
    pub fn get_translation(&self) -> Vec2 {
        Vec2::new(self.data[8], self.data[9])
    }

    /// Replaces the 2D translation; column 2 becomes `(v.x, v.y, 1)`.
    pub fn set_translation(&self, v: Vec2) -> Self {
        Self::from_cols(self.col(0), self.col(1), Vec3::new(v.x(), v.y(), 1.0))
    }

    /// First two components of basis column `axis` (0 = x, 1 = y).
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `axis > 1`.
    pub fn get_axis(&self, axis: usize) -> Result<Vec2, MathError> {
        check_index(axis, 2)?;
        let o = axis * 4;
        Ok(Vec2::new(self.data[o], self.data[o + 1]))
    }

    /// Replaces the first two components of basis column `axis`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `axis > 1`.
    pub fn set_axis(&self, v: Vec2, axis: usize) -> Result<Self, MathError> {
        check_index(axis, 2)?;
        let mut out = *self;
        out.data[axis * 4] = v.x();
        out.data[axis * 4 + 1] = v.y();
        Ok(out)
    }

    /// Full basis column `axis` (0..=2).
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `axis > 2`.
    pub fn get_axis_3d(&self, axis: usize) -> Result<Vec3, MathError> {
        check_index(axis, 3)?;
        Ok(self.col(axis))
    }

    /// Replaces basis column `axis` (0..=2).
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `axis > 2`.
    pub fn set_axis_3d(&self, v: Vec3, axis: usize) -> Result<Self, MathError> {
        check_index(axis, 3)?;
        let mut out = *self;
        let o = axis * 4;
        out.data[o..o + 3].copy_from_slice(v.as_array());
        Ok(out)
    }

    /// 2D scale factors: lengths of the XY parts of columns 0 and 1.
    ///
    /// Only meaningful for shear-free matrices.
    pub fn get_scaling(&self) -> Vec2 {
        let m = &self.data;
        Vec2::new(m[0].hypot(m[1]), m[4].hypot(m[5]))
    }

    /// 3D scale factors: lengths of the three basis columns.
    pub fn get_3d_scaling(&self) -> Vec3 {
        Vec3::new(
            self.col(0).length(),
            self.col(1).length(),
            self.col(2).length(),
        )
    }

    /// Cellwise `|a - b| < EPSILON` over the nine logical cells.
    pub fn equals_approximately(&self, other: &Self) -> bool {
        self.equals_approximately_within(other, EPSILON)
    }

    /// Cellwise `|a - b| < epsilon` over the nine logical cells.
    pub fn equals_approximately_within(&self, other: &Self, epsilon: f32) -> bool {
        self.to_cols_array()
            .iter()
            .zip(other.to_cols_array().iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self::from_cols_array(value)
    }
}

impl From<[f32; 12]> for Mat3 {
    fn from(value: [f32; 12]) -> Self {
        Self::from_raw(value)
    }
}

/// Accepts either the nine logical cells or the padded 12-slot buffer.
impl TryFrom<&[f32]> for Mat3 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        if let Ok(cells) = <[f32; 9]>::try_from(values) {
            return Ok(Self::from_cols_array(cells));
        }
        <[f32; 12]>::try_from(values)
            .map(Self::from_raw)
            .map_err(|_| MathError::InvalidSize {
                expected: 9,
                actual: values.len(),
            })
    }
}

impl From<Mat4> for Mat3 {
    fn from(value: Mat4) -> Self {
        Self::from_mat4(&value)
    }
}

impl From<Quat> for Mat3 {
    fn from(value: Quat) -> Self {
        Self::from_quat(&value)
    }
}

/// Indexes the raw 12-slot buffer (`col * 4 + row`).
impl core::ops::Index<usize> for Mat3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

/// Mutable access to a logical cell of the raw buffer.
///
/// # Panics
/// Panics if `index` is out of range or names a padding slot (3, 7, 11),
/// so the zero-padding invariant survives indexed writes.
impl core::ops::IndexMut<usize> for Mat3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        assert!(
            !matches!(index, 3 | 7 | 11),
            "mat3 index {index} is a padding slot"
        );
        &mut self.data[index]
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.transform_mat3(&self)
    }
}

impl core::ops::Mul<f32> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl core::ops::Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Mat3::add(&self, &rhs)
    }
}

impl core::ops::Sub for Mat3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Mat3::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Mat3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padding_is_zero(m: &Mat3) -> bool {
        m[3] == 0.0 && m[7] == 0.0 && m[11] == 0.0
    }

    #[test]
    fn from_raw_clears_padding() {
        let m = Mat3::from_raw([1.0; 12]);
        assert!(padding_is_zero(&m));
        assert_eq!(m.to_cols_array(), [1.0; 9]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn at_rejects_col_three() {
        let _ = Mat3::identity().at(0, 3);
    }

    #[test]
    #[should_panic(expected = "padding slot")]
    fn index_mut_rejects_padding() {
        let mut m = Mat3::identity();
        m[7] = 1.0;
    }

    #[test]
    fn singular_inverse_is_identity() {
        let m = Mat3::from_cols_array([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 0.0]);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Mat3::identity());
    }

    #[test]
    fn rotation_is_volume_preserving() {
        let mut angle = 0.0_f32;
        for _ in 0..16 {
            assert!((Mat3::rotation(angle).determinant() - 1.0).abs() < 1e-5);
            angle += 0.41;
        }
    }

    #[test]
    fn transpose_in_place_assignment() {
        let mut m = Mat3::from_cols_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        m = m.transpose();
        assert_eq!(
            m.to_cols_array(),
            [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]
        );
        assert!(padding_is_zero(&m));
    }

    #[test]
    fn axis_rotation_matches_rotation_x() {
        let a = Mat3::axis_rotation(Vec3::new(2.0, 0.0, 0.0), 0.7);
        let b = Mat3::rotation_x(0.7);
        assert!(a.equals_approximately(&b));
    }

    #[test]
    fn try_from_rejects_ten_floats() {
        let ten = [0.0_f32; 10];
        assert_eq!(
            Mat3::try_from(&ten[..]),
            Err(MathError::InvalidSize {
                expected: 9,
                actual: 10
            })
        );
    }
}
