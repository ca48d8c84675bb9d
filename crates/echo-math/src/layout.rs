// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! GPU byte layouts.
//!
//! Every math type is `#[repr(C)]` + [`Pod`], so a value or a slice of
//! values can be handed to a buffer upload without copying. Sizes:
//!
//! | Type         | Bytes | Notes                                   |
//! |--------------|-------|-----------------------------------------|
//! | `Vec2`       | 8     |                                         |
//! | `Vec3`       | 12    | vertex-attribute form                   |
//! | `PaddedVec3` | 16    | std140 / WGSL uniform form, zero pad    |
//! | `Vec4`       | 16    |                                         |
//! | `Quat`       | 16    | `(x, y, z, w)`                          |
//! | `Mat3`       | 48    | three 16-byte columns, pad cells zero   |
//! | `Mat4`       | 64    | column-major                            |
//!
//! All bytes are native-endian.

use bytemuck::{Pod, Zeroable};

use crate::{MathError, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

/// `Vec3` widened to 16 bytes for uniform and storage buffers.
///
/// std140 and WGSL align `vec3<f32>` to 16 bytes; arrays of bare `Vec3`
/// would be read with the wrong stride.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PaddedVec3 {
    xyz: [f32; 3],
    pad: f32,
}

const _: () = assert!(std::mem::size_of::<PaddedVec3>() == 16);

impl PaddedVec3 {
    /// Wraps `v` with a zero pad word.
    pub fn new(v: Vec3) -> Self {
        Self {
            xyz: v.to_array(),
            pad: 0.0,
        }
    }

    /// Drops the pad word.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::from(self.xyz)
    }
}

impl From<Vec3> for PaddedVec3 {
    fn from(value: Vec3) -> Self {
        Self::new(value)
    }
}

impl From<PaddedVec3> for Vec3 {
    fn from(value: PaddedVec3) -> Self {
        value.to_vec3()
    }
}

/// Widens every vector to its 16-byte uniform form.
pub fn pack_padded(values: &[Vec3]) -> Vec<PaddedVec3> {
    values.iter().copied().map(PaddedVec3::new).collect()
}

/// Views a slice of layout types as raw bytes for upload.
pub fn slice_as_bytes<T: Pod>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

fn read_exact<T: Pod>(bytes: &[u8]) -> Result<T, MathError> {
    let expected = std::mem::size_of::<T>();
    if bytes.len() != expected {
        return Err(MathError::InvalidSize {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytemuck::pod_read_unaligned(bytes))
}

macro_rules! impl_byte_layout {
    ($($ty:ident),* $(,)?) => {$(
        impl $ty {
            /// Native-endian bytes of the value.
            pub fn as_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }

            /// Reads a value from exactly `size_of::<Self>()` bytes.
            ///
            /// The input may be unaligned.
            ///
            /// # Errors
            /// Returns [`MathError::InvalidSize`] when `bytes` has the wrong length.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
                read_exact(bytes)
            }
        }
    )*};
}

impl_byte_layout!(Vec2, Vec3, Vec4, Quat, Mat4, PaddedVec3);

impl Mat3 {
    /// Native-endian bytes, 48 in total (padding cells included).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a matrix from exactly 48 bytes; padding cells are zeroed.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidSize`] unless `bytes.len() == 48`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        read_exact::<[f32; 12]>(bytes).map(Self::from_raw)
    }
}
