// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors reported by fallible accessors and buffer constructors.
///
/// Numeric degeneracies (zero-length vectors, singular matrices) are never
/// reported here; they resolve to fallback values at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A component or axis index was outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of addressable elements.
        len: usize,
    },

    /// A raw buffer had the wrong number of elements.
    #[error("invalid buffer size: expected {expected}, got {actual}")]
    InvalidSize {
        /// Element (or byte) count the constructor requires.
        expected: usize,
        /// Element (or byte) count that was supplied.
        actual: usize,
    },

    /// An Euler order string was not one of `xyz, xzy, yxz, yzx, zxy, zyx`.
    #[error("unknown euler order")]
    UnknownEulerOrder,
}

/// Returns `IndexOutOfRange` unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), MathError> {
    if index < len {
        Ok(())
    } else {
        Err(MathError::IndexOutOfRange { index, len })
    }
}

/// Copies `N` floats out of `values`, or reports the size mismatch.
pub(crate) fn exact_array<const N: usize>(values: &[f32]) -> Result<[f32; N], MathError> {
    <[f32; N]>::try_from(values).map_err(|_| MathError::InvalidSize {
        expected: N,
        actual: values.len(),
    })
}
