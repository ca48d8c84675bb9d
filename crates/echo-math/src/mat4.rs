// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::error::{check_index, exact_array};
use crate::{MathError, Mat3, Quat, Vec3, Vec4, EPSILON};

/// Column‑major 4×4 matrix laid out for direct GPU upload.
///
/// - Cell (row `r`, col `c`) lives at index `c * 4 + r`; translation occupies
///   indices 12..=14.
/// - Represents affine and projective transforms. [`Vec3::transform_mat4`]
///   treats vectors as points (`w = 1`) and divides by the resulting `w`.
/// - Methods named `translate`, `rotate_*`, `scale` post-multiply
///   (`self * T`: `T` acts first on a column vector); their `pre_*`
///   counterparts pre-multiply (`T * self`: `T` acts last).
///
/// # Examples
/// Basic transformations:
/// ```
/// use echo_math::{Mat4, Vec3};
/// let t = Mat4::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    data: [f32; 16],
}

const _: () = assert!(std::mem::size_of::<Mat4>() == 64);

impl Mat4 {
    /// Returns the identity matrix.
    ///
    /// Column-major layout with ones on the diagonal.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Returns the all-zero matrix.
    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Builds a matrix from four columns.
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        let mut data = [0.0; 16];
        for (i, c) in [c0, c1, c2, c3].iter().enumerate() {
            data[i * 4..i * 4 + 4].copy_from_slice(c.as_array());
        }
        Self { data }
    }

    /// Embeds a 3×3 matrix in the upper-left block; translation is zero.
    pub fn from_mat3(m: &Mat3) -> Self {
        let m = m.as_array();
        Self::new([
            m[0], m[1], m[2], 0.0, // col 0
            m[4], m[5], m[6], 0.0, // col 1
            m[8], m[9], m[10], 0.0, // col 2
            0.0, 0.0, 0.0, 1.0, // col 3
        ])
    }

    /// Rotation matrix for a (unit) quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        Self::from_mat3(&Mat3::from_quat(q))
    }

    /// Builds a translation matrix.
    ///
    /// Column-major layout: translation occupies the last column.
    pub fn translation(v: Vec3) -> Self {
        let [tx, ty, tz] = v.to_array();
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub fn scaling(v: Vec3) -> Self {
        let [sx, sy, sz] = v.to_array();
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a uniform scale matrix.
    pub fn uniform_scaling(s: f32) -> Self {
        Self::scaling(Vec3::splat(s))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix from an axis and angle in radians
    /// (Rodrigues' formula).
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation.
    pub fn axis_rotation(axis: Vec3, angle: f32) -> Self {
        Self::from_mat3(&Mat3::axis_rotation(axis, angle))
    }

    /// Perspective projection mapping view-space depth `-near..-far` to NDC
    /// depth `0..1`.
    ///
    /// `fov_y` is the vertical field of view in radians. Passing
    /// `f32::INFINITY` for `far` selects the infinite-far limit
    /// (`m[10] = -1`, `m[14] = -near`).
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = (std::f32::consts::FRAC_PI_2 - 0.5 * fov_y).tan();
        let mut data = [0.0; 16];
        data[0] = f / aspect;
        data[5] = f;
        data[11] = -1.0;

        if far.is_finite() {
            let range_inv = 1.0 / (near - far);
            data[10] = far * range_inv;
            data[14] = far * near * range_inv;
        } else {
            data[10] = -1.0;
            data[14] = -near;
        }
        Self::new(data)
    }

    /// Reverse-Z perspective projection: near maps to depth `1`, far to `0`.
    ///
    /// `f32::INFINITY` for `far` gives `m[10] = 0`, `m[14] = near`.
    pub fn perspective_reverse_z(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let mut data = [0.0; 16];
        data[0] = f / aspect;
        data[5] = f;
        data[11] = -1.0;

        if far == f32::INFINITY {
            data[10] = 0.0;
            data[14] = near;
        } else {
            let range_inv = 1.0 / (far - near);
            data[10] = near * range_inv;
            data[14] = far * near * range_inv;
        }
        Self::new(data)
    }

    /// Orthographic projection of the box `[left, right] × [bottom, top]`
    /// with depth `-near..-far` mapped to `0..1`.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut data = [0.0; 16];
        data[0] = 2.0 / (right - left);
        data[5] = 2.0 / (top - bottom);
        data[10] = 1.0 / (near - far);
        data[12] = (right + left) / (left - right);
        data[13] = (top + bottom) / (bottom - top);
        data[14] = near / (near - far);
        data[15] = 1.0;
        Self::new(data)
    }

    /// Off-axis perspective frustum with depth mapped to `0..1`.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = near - far;

        let mut data = [0.0; 16];
        data[0] = 2.0 * near / dx;
        data[5] = 2.0 * near / dy;
        data[8] = (left + right) / dx;
        data[9] = (top + bottom) / dy;
        data[10] = far / dz;
        data[11] = -1.0;
        data[14] = near * far / dz;
        Self::new(data)
    }

    /// Off-axis reverse-Z frustum: near maps to `1`, far to `0`.
    /// `f32::INFINITY` for `far` selects the infinite-far limit.
    pub fn frustum_reverse_z(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let dx = right - left;
        let dy = top - bottom;

        let mut data = [0.0; 16];
        data[0] = 2.0 * near / dx;
        data[5] = 2.0 * near / dy;
        data[8] = (left + right) / dx;
        data[9] = (top + bottom) / dy;
        data[11] = -1.0;

        if far == f32::INFINITY {
            data[10] = 0.0;
            data[14] = near;
        } else {
            let range_inv = 1.0 / (far - near);
            data[10] = near * range_inv;
            data[14] = far * near * range_inv;
        }
        Self::new(data)
    }

    /// Object transform at `position` whose +Z axis points at `target`.
    pub fn aim(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let z_axis = target.sub(&position).normalize();
        Self::basis_at(z_axis, up, position)
    }

    /// Camera transform at `eye` looking at `target` (camera looks down its
    /// local -Z). This is the inverse of [`Mat4::look_at`].
    pub fn camera_aim(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z_axis = eye.sub(&target).normalize();
        Self::basis_at(z_axis, up, eye)
    }

    fn basis_at(z_axis: Vec3, up: Vec3, origin: Vec3) -> Self {
        let x_axis = up.cross(&z_axis).normalize();
        let y_axis = z_axis.cross(&x_axis).normalize();
        Self::from_cols(
            Vec4::new(x_axis.x(), x_axis.y(), x_axis.z(), 0.0),
            Vec4::new(y_axis.x(), y_axis.y(), y_axis.z(), 0.0),
            Vec4::new(z_axis.x(), z_axis.y(), z_axis.z(), 0.0),
            Vec4::new(origin.x(), origin.y(), origin.z(), 1.0),
        )
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Rows are the Gram–Schmidt camera basis; the last column moves `eye`
    /// to the origin.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z_axis = eye.sub(&target).normalize();
        let x_axis = up.cross(&z_axis).normalize();
        let y_axis = z_axis.cross(&x_axis).normalize();

        Self::new([
            x_axis.x(),
            y_axis.x(),
            z_axis.x(),
            0.0,
            x_axis.y(),
            y_axis.y(),
            z_axis.y(),
            0.0,
            x_axis.z(),
            y_axis.z(),
            z_axis.z(),
            0.0,
            -x_axis.dot(&eye),
            -y_axis.dot(&eye),
            -z_axis.dot(&eye),
            1.0,
        ])
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Borrows the column-major array.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// Cell at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row` or `col` exceeds 3.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "mat4 cell ({row}, {col}) out of range");
        self.data[col * 4 + row]
    }

    fn col(&self, c: usize) -> Vec4 {
        let o = c * 4;
        Vec4::new(
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        )
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// Multiplication follows column‑major semantics (`self` on the left,
    /// `rhs` on the right) to mirror GPU‑style transforms.
    ///
    /// # Examples
    /// ```
    /// use echo_math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::scaling(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b).to_array(), b.to_array());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = &self.data;
        let b = &rhs.data;

        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);
        let (b00, b01, b02, b03) = (b[0], b[1], b[2], b[3]);
        let (b10, b11, b12, b13) = (b[4], b[5], b[6], b[7]);
        let (b20, b21, b22, b23) = (b[8], b[9], b[10], b[11]);
        let (b30, b31, b32, b33) = (b[12], b[13], b[14], b[15]);

        Self::new([
            a00 * b00 + a10 * b01 + a20 * b02 + a30 * b03,
            a01 * b00 + a11 * b01 + a21 * b02 + a31 * b03,
            a02 * b00 + a12 * b01 + a22 * b02 + a32 * b03,
            a03 * b00 + a13 * b01 + a23 * b02 + a33 * b03,
            a00 * b10 + a10 * b11 + a20 * b12 + a30 * b13,
            a01 * b10 + a11 * b11 + a21 * b12 + a31 * b13,
            a02 * b10 + a12 * b11 + a22 * b12 + a32 * b13,
            a03 * b10 + a13 * b11 + a23 * b12 + a33 * b13,
            a00 * b20 + a10 * b21 + a20 * b22 + a30 * b23,
            a01 * b20 + a11 * b21 + a21 * b22 + a31 * b23,
            a02 * b20 + a12 * b21 + a22 * b22 + a32 * b23,
            a03 * b20 + a13 * b21 + a23 * b22 + a33 * b23,
            a00 * b30 + a10 * b31 + a20 * b32 + a30 * b33,
            a01 * b30 + a11 * b31 + a21 * b32 + a31 * b33,
            a02 * b30 + a12 * b31 + a22 * b32 + a32 * b33,
            a03 * b30 + a13 * b31 + a23 * b32 + a33 * b33,
        ])
    }

    /// Componentwise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(std::array::from_fn(|i| self.data[i] + rhs.data[i]))
    }

    /// Componentwise difference.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(std::array::from_fn(|i| self.data[i] - rhs.data[i]))
    }

    /// Multiplies every cell by `s`.
    pub fn multiply_scalar(&self, s: f32) -> Self {
        Self::new(self.data.map(|v| v * s))
    }

    /// Negates every cell.
    pub fn negate(&self) -> Self {
        Self::new(self.data.map(|v| -v))
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self::new(std::array::from_fn(|i| self.data[(i % 4) * 4 + i / 4]))
    }

    // 2×2 minors shared by `determinant` and `inverse`.
    fn minors(&self) -> [f32; 12] {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);
        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    /// Determinant by full cofactor expansion.
    pub fn determinant(&self) -> f32 {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Inverse by cofactor expansion.
    ///
    /// There is no singular-matrix guard: a zero determinant yields
    /// non-finite cells. Check [`Mat4::determinant`] first if the input may
    /// be degenerate.
    pub fn inverse(&self) -> Self {
        let a = &self.data;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 {
            trace!("mat4 inverse: zero determinant, result is non-finite");
        }
        let inv = 1.0 / det;

        Self::new([
            (a11 * b11 - a12 * b10 + a13 * b09) * inv,
            (a02 * b10 - a01 * b11 - a03 * b09) * inv,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv,
            (a22 * b04 - a21 * b05 - a23 * b03) * inv,
            (a12 * b08 - a10 * b11 - a13 * b07) * inv,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv,
            (a32 * b02 - a30 * b05 - a33 * b01) * inv,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv,
            (a01 * b08 - a00 * b10 - a03 * b06) * inv,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv,
            (a21 * b02 - a20 * b04 - a23 * b00) * inv,
            (a11 * b07 - a10 * b09 - a12 * b06) * inv,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv,
            (a31 * b01 - a30 * b03 - a32 * b00) * inv,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv,
        ])
    }

    /// Post-multiplies by a translation: `self * translation(v)`.
    ///
    /// Columns 0..=2 are copied through; only column 3 changes.
    pub fn translate(&self, v: Vec3) -> Self {
        let c3 = self
            .col(0)
            .scale(v.x())
            .add_scaled(&self.col(1), v.y())
            .add_scaled(&self.col(2), v.z())
            .add(&self.col(3));
        Self::from_cols(self.col(0), self.col(1), self.col(2), c3)
    }

    /// Pre-multiplies by a translation: `translation(v) * self`.
    ///
    /// Row 3 is copied through; rows 0..=2 gain `v * row3`.
    pub fn pre_translate(&self, v: Vec3) -> Self {
        let [tx, ty, tz] = v.to_array();
        let m = &self.data;
        let mut out = *self;
        for c in 0..4 {
            let o = c * 4;
            let w = m[o + 3];
            out.data[o] = m[o] + tx * w;
            out.data[o + 1] = m[o + 1] + ty * w;
            out.data[o + 2] = m[o + 2] + tz * w;
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
            self.col(3),
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
            self.col(3),
        )
    }

    /// Post-multiplies by a rotation about Z: `self * rotation_z(angle)`.
    pub fn rotate_z(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let c0 = self.col(0);
        let c1 = self.col(1);
        Self::from_cols(
            c0.scale(c).add_scaled(&c1, s),
            c1.scale(c).add_scaled(&c0, -s),
            self.col(2),
            self.col(3),
        )
    }

    /// Post-multiplies by an axis/angle rotation.
    pub fn axis_rotate(&self, axis: Vec3, angle: f32) -> Self {
        self.multiply(&Self::axis_rotation(axis, angle))
    }

    /// Pre-multiplies by a rotation about X: `rotation_x(angle) * self`.
    pub fn pre_rotate_x(&self, angle: f32) -> Self {
        self.pre_rotate_rows(angle, 1, 2)
    }

    /// Pre-multiplies by a rotation about Y: `rotation_y(angle) * self`.
    pub fn pre_rotate_y(&self, angle: f32) -> Self {
        self.pre_rotate_rows(angle, 2, 0)
    }

    /// Pre-multiplies by a rotation about Z: `rotation_z(angle) * self`.
    pub fn pre_rotate_z(&self, angle: f32) -> Self {
        self.pre_rotate_rows(angle, 0, 1)
    }

    // Plane rotation of rows `i` and `j` in every column:
    // row_i' = c*row_i - s*row_j, row_j' = s*row_i + c*row_j.
    fn pre_rotate_rows(&self, angle: f32, i: usize, j: usize) -> Self {
        let (s, c) = angle.sin_cos();
        let m = &self.data;
        let mut out = *self;
        for col in 0..4 {
            let o = col * 4;
            let ri = m[o + i];
            let rj = m[o + j];
            out.data[o + i] = c * ri - s * rj;
            out.data[o + j] = s * ri + c * rj;
        }
        out
    }

    /// Post-multiplies by a scale: columns 0..=2 scale, column 3 is kept.
    pub fn scale(&self, v: Vec3) -> Self {
        Self::from_cols(
            self.col(0).scale(v.x()),
            self.col(1).scale(v.y()),
            self.col(2).scale(v.z()),
            self.col(3),
        )
    }

    /// Pre-multiplies by a scale: rows 0..=2 scale, row 3 is kept.
    pub fn pre_scale(&self, v: Vec3) -> Self {
        let [sx, sy, sz] = v.to_array();
        let mut out = *self;
        for c in 0..4 {
            out.data[c * 4] *= sx;
            out.data[c * 4 + 1] *= sy;
            out.data[c * 4 + 2] *= sz;
        }
        out
    }

    /// Post-multiplies by a uniform scale.
    pub fn uniform_scale(&self, s: f32) -> Self {
        self.scale(Vec3::splat(s))
    }

    /// Translation stored in column 3.
    pub fn get_translation(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Replaces the translation; column 3 becomes `(v, 1)`.
    pub fn set_translation(&self, v: Vec3) -> Self {
        let mut out = *self;
        out.data[12..15].copy_from_slice(v.as_array());
        out.data[15] = 1.0;
        out
    }

    /// XYZ of basis column `axis` (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] for the translation column
    /// (`axis == 3`) or beyond.
    pub fn get_axis(&self, axis: usize) -> Result<Vec3, MathError> {
        check_index(axis, 3)?;
        let o = axis * 4;
        Ok(Vec3::new(self.data[o], self.data[o + 1], self.data[o + 2]))
    }

    /// Replaces the XYZ of basis column `axis`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] when `axis > 2`.
    pub fn set_axis(&self, v: Vec3, axis: usize) -> Result<Self, MathError> {
        check_index(axis, 3)?;
        let mut out = *self;
        let o = axis * 4;
        out.data[o..o + 3].copy_from_slice(v.as_array());
        Ok(out)
    }

    /// Scale factors as lengths of the three basis columns.
    ///
    /// Only meaningful for shear-free matrices.
    pub fn get_scaling(&self) -> Vec3 {
        let m = &self.data;
        Vec3::new(
            Vec3::new(m[0], m[1], m[2]).length(),
            Vec3::new(m[4], m[5], m[6]).length(),
            Vec3::new(m[8], m[9], m[10]).length(),
        )
    }

    /// Transforms a point (`w = 1`) including perspective divide.
    ///
    /// Forwards to [`Vec3::transform_mat4`].
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        point.transform_mat4(self)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        direction.transform_mat4_upper3x3(self)
    }

    /// Full homogeneous product `self * v`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        v.transform_mat4(self)
    }

    /// Cellwise `|a - b| < EPSILON`.
    pub fn equals_approximately(&self, other: &Self) -> bool {
        self.equals_approximately_within(other, EPSILON)
    }

    /// Cellwise `|a - b| < epsilon`.
    pub fn equals_approximately_within(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        exact_array::<16>(values).map(Self::new)
    }
}

impl From<Mat3> for Mat4 {
    fn from(value: Mat3) -> Self {
        Self::from_mat3(&value)
    }
}

impl From<Quat> for Mat4 {
    fn from(value: Quat) -> Self {
        Self::from_quat(&value)
    }
}

impl core::ops::Index<usize> for Mat4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl core::ops::IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs.transform_mat4(&self)
    }
}

impl core::ops::Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.multiply_scalar(rhs)
    }
}

impl core::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Mat4::add(&self, &rhs)
    }
}

impl core::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Mat4::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
