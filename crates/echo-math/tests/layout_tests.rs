// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Byte-level layout checks for GPU upload.

use echo_math::{
    pack_padded, slice_as_bytes, Mat3, Mat4, MathError, PaddedVec3, Quat, Vec2, Vec3, Vec4,
};

#[test]
fn sizes_match_gpu_expectations() {
    assert_eq!(core::mem::size_of::<Vec2>(), 8);
    assert_eq!(core::mem::size_of::<Vec3>(), 12);
    assert_eq!(core::mem::size_of::<PaddedVec3>(), 16);
    assert_eq!(core::mem::size_of::<Vec4>(), 16);
    assert_eq!(core::mem::size_of::<Quat>(), 16);
    assert_eq!(core::mem::size_of::<Mat3>(), 48);
    assert_eq!(core::mem::size_of::<Mat4>(), 64);
}

#[test]
fn vec3_packs_to_twelve_bytes_in_component_order() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let bytes = v.as_bytes();
    assert_eq!(bytes.len(), 12);
    assert_eq!(&bytes[4..8], &2.0_f32.to_ne_bytes());
}

#[test]
fn padded_vec3_packs_to_sixteen_with_zero_pad() {
    let p = PaddedVec3::from(Vec3::new(-1.0, 0.5, 9.0));
    let bytes = p.as_bytes();
    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[12..16], &[0u8; 4]);
    assert_eq!(Vec3::from(p), Vec3::new(-1.0, 0.5, 9.0));
}

#[test]
fn mat4_bytes_are_column_major() {
    let m = Mat4::translation(Vec3::new(4.0, 5.0, 6.0));
    let bytes = m.as_bytes();
    assert_eq!(bytes.len(), 64);
    // Cell 12 (column 3, row 0) holds the X translation.
    assert_eq!(&bytes[48..52], &4.0_f32.to_ne_bytes());
}

#[test]
fn mat3_bytes_include_zero_padding() {
    let m = Mat3::from_cols_array([1.0; 9]);
    let bytes = m.as_bytes();
    assert_eq!(bytes.len(), 48);
    for pad in [3usize, 7, 11] {
        assert_eq!(&bytes[pad * 4..pad * 4 + 4], &[0u8; 4], "pad cell {pad}");
    }
}

#[test]
fn bytes_round_trip_through_from_bytes() {
    let q = Quat::new(0.1, 0.2, 0.3, 0.9);
    assert_eq!(Quat::from_bytes(q.as_bytes()), Ok(q));
    let m = Mat4::perspective(1.0, 1.5, 0.1, 100.0);
    assert_eq!(Mat4::from_bytes(m.as_bytes()), Ok(m));
    let v = Vec2::new(3.0, -4.0);
    assert_eq!(Vec2::from_bytes(v.as_bytes()), Ok(v));
}

#[test]
fn from_bytes_reports_wrong_length() {
    assert_eq!(
        Mat4::from_bytes(&[0u8; 60]),
        Err(MathError::InvalidSize {
            expected: 64,
            actual: 60
        })
    );
    assert!(Mat3::from_bytes(&[0u8; 36]).is_err());
    assert!(PaddedVec3::from_bytes(&[0u8; 12]).is_err());
}

#[test]
fn packed_arrays_use_uniform_stride() {
    let points = [Vec3::ONE, Vec3::UNIT_Y, Vec3::new(7.0, 8.0, 9.0)];
    let packed = pack_padded(&points);
    assert_eq!(packed.len(), 3);
    let bytes = slice_as_bytes(&packed);
    assert_eq!(bytes.len(), 48);
    assert_eq!(&bytes[32..36], &7.0_f32.to_ne_bytes());

    let tight = slice_as_bytes(&points);
    assert_eq!(tight.len(), 36);
    assert_eq!(&tight[24..28], &7.0_f32.to_ne_bytes());
}
