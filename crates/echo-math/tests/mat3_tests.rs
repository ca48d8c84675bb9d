// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! 3×3 matrix behavior: 2D affine helpers, 3D rotations, and the invariant
//! that the three padding cells of the 12-float layout stay zero.

use core::f32::consts::FRAC_PI_2;
use echo_math::{Mat3, Mat4, MathError, Quat, Vec2, Vec3};

fn assert_padding_zero(m: &Mat3, ctx: &str) {
    let raw = m.as_array();
    assert_eq!([raw[3], raw[7], raw[11]], [0.0; 3], "{ctx}: {raw:?}");
}

fn assert_mat_close(a: &Mat3, b: &Mat3, eps: f32) {
    assert!(
        a.equals_approximately_within(b, eps),
        "matrices differ:\n{:?}\n{:?}",
        a.to_cols_array(),
        b.to_cols_array()
    );
}

fn sample() -> Mat3 {
    Mat3::from_cols_array([
        2.0, 0.5, 0.0, // col 0
        -1.0, 1.5, 0.0, // col 1
        3.0, -4.0, 1.0, // col 2
    ])
}

#[test]
fn padding_cells_stay_zero_after_every_operation() {
    let m = sample();
    let other = Mat3::axis_rotation(Vec3::new(1.0, 2.0, 3.0), 0.8);
    let results = [
        ("identity", Mat3::identity()),
        ("from_raw", Mat3::from_raw([9.0; 12])),
        ("from_quat", Mat3::from_quat(&Quat::from_axis_angle(Vec3::UNIT_Y, 0.4))),
        ("from_mat4", Mat3::from_mat4(&Mat4::from([5.0; 16]))),
        ("multiply", m.multiply(&other)),
        ("add", m.add(&other)),
        ("sub", m.sub(&other)),
        ("negate", m.negate()),
        ("multiply_scalar", m.multiply_scalar(3.0)),
        ("transpose", m.transpose()),
        ("inverse", m.inverse()),
        ("translate", m.translate(Vec2::new(1.0, 2.0))),
        ("pre_translate", m.pre_translate(Vec2::new(1.0, 2.0))),
        ("rotate", m.rotate(0.3)),
        ("pre_rotate", m.pre_rotate(0.3)),
        ("rotate_x", m.rotate_x(0.3)),
        ("rotate_y", m.rotate_y(0.3)),
        ("scale", m.scale(Vec2::new(2.0, 3.0))),
        ("pre_scale", m.pre_scale(Vec2::new(2.0, 3.0))),
        ("scale_3d", m.scale_3d(Vec3::new(2.0, 3.0, 4.0))),
        ("set_translation", m.set_translation(Vec2::new(7.0, 8.0))),
    ];
    for (name, result) in &results {
        assert_padding_zero(result, name);
    }
}

#[test]
#[should_panic(expected = "padding slot")]
fn index_write_to_padding_slot_panics() {
    let mut m = Mat3::identity();
    m[3] = 42.0;
}

#[test]
fn index_write_to_logical_cell_keeps_padding_zero() {
    let mut m = Mat3::identity();
    // column 2, row 0
    m[8] = 5.0;
    assert_eq!(m.at(0, 2), 5.0);
    assert_eq!(m.get_translation(), Vec2::new(5.0, 0.0));
    assert_padding_zero(&m, "index_mut");
}

#[test]
fn singular_inverse_returns_identity() {
    let singular = Mat3::from_cols_array([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 0.0]);
    assert_eq!(singular.determinant(), 0.0);
    assert_eq!(singular.inverse(), Mat3::identity());
}

#[test]
fn inverse_round_trips() {
    let m = sample();
    assert_mat_close(&m.multiply(&m.inverse()), &Mat3::identity(), 1e-5);
    assert!((m.determinant() - 3.5).abs() < 1e-5);
}

#[test]
fn post_helpers_equal_explicit_products() {
    let m = sample();
    let v = Vec2::new(0.5, -2.0);
    assert_mat_close(&m.translate(v), &m.multiply(&Mat3::translation(v)), 1e-5);
    assert_mat_close(&m.rotate(0.6), &m.multiply(&Mat3::rotation(0.6)), 1e-5);
    assert_mat_close(&m.scale(v), &m.multiply(&Mat3::scaling(v)), 1e-5);
    assert_mat_close(&m.rotate_x(0.6), &m.multiply(&Mat3::rotation_x(0.6)), 1e-5);
    assert_mat_close(&m.rotate_y(0.6), &m.multiply(&Mat3::rotation_y(0.6)), 1e-5);
    assert_mat_close(&m.rotate_z(0.6), &m.multiply(&Mat3::rotation_z(0.6)), 1e-5);
    let s3 = Vec3::new(2.0, 3.0, 4.0);
    assert_mat_close(&m.scale_3d(s3), &m.multiply(&Mat3::scaling_3d(s3)), 1e-5);
    assert_mat_close(
        &m.uniform_scale(2.5),
        &m.multiply(&Mat3::uniform_scaling(2.5)),
        1e-5,
    );
    assert_mat_close(
        &m.uniform_scale_3d(2.5),
        &m.multiply(&Mat3::uniform_scaling_3d(2.5)),
        1e-5,
    );
}

#[test]
fn pre_helpers_equal_explicit_products() {
    let m = sample();
    let v = Vec2::new(0.5, -2.0);
    assert_mat_close(
        &m.pre_translate(v),
        &Mat3::translation(v).multiply(&m),
        1e-5,
    );
    assert_mat_close(&m.pre_rotate(0.6), &Mat3::rotation(0.6).multiply(&m), 1e-5);
    assert_mat_close(&m.pre_scale(v), &Mat3::scaling(v).multiply(&m), 1e-5);
}

#[test]
fn translation_round_trip() {
    let m = Mat3::identity().translate(Vec2::new(3.0, -4.0));
    assert_eq!(m.get_translation().to_array(), [3.0, -4.0]);
    let n = m.set_translation(Vec2::new(1.0, 1.0));
    assert_eq!(n.get_translation().to_array(), [1.0, 1.0]);
}

#[test]
fn axis_accessors_are_range_checked() {
    let m = Mat3::rotation(FRAC_PI_2);
    assert!(m.get_axis(0).is_ok_and(|a| a.equals_approximately(&Vec2::UNIT_Y)));
    assert_eq!(
        m.get_axis(2),
        Err(MathError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(m.get_axis_3d(2).is_ok_and(|a| a == Vec3::UNIT_Z));
    assert!(m.get_axis_3d(3).is_err());
    assert!(m.set_axis(Vec2::ONE, 1).is_ok_and(|r| r[4] == 1.0 && r[5] == 1.0));
    assert!(m.set_axis_3d(Vec3::ONE, 3).is_err());
}

#[test]
fn scaling_is_recovered() {
    let m = Mat3::rotation(0.7).scale(Vec2::new(2.0, 5.0));
    let s = m.get_scaling();
    assert!(s.equals_approximately_within(&Vec2::new(2.0, 5.0), 1e-5), "{s:?}");
    let r = Mat3::rotation_y(0.7).scale_3d(Vec3::new(2.0, 3.0, 4.0));
    let s3 = r.get_3d_scaling();
    assert!(s3.equals_approximately_within(&Vec3::new(2.0, 3.0, 4.0), 1e-5), "{s3:?}");
}

#[test]
fn axis_rotation_zero_axis_is_identity() {
    assert_eq!(Mat3::axis_rotation(Vec3::ZERO, 1.2), Mat3::identity());
    assert_mat_close(
        &Mat3::axis_rotation(Vec3::UNIT_X, 0.5),
        &Mat3::rotation_x(0.5),
        1e-6,
    );
}

#[test]
fn slice_construction_accepts_nine_or_twelve() {
    let nine = [1.0_f32; 9];
    let twelve = [1.0_f32; 12];
    assert!(Mat3::try_from(&nine[..]).is_ok());
    let m = Mat3::try_from(&twelve[..]);
    assert!(m.is_ok_and(|m| m.as_array()[3] == 0.0));
    assert!(matches!(
        Mat3::try_from(&twelve[..10]),
        Err(MathError::InvalidSize { .. })
    ));
}

#[test]
fn from_quat_agrees_with_quat_rotation() {
    let q = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 1.1);
    let v = Vec3::new(1.0, -2.0, 0.5);
    let by_matrix = v.transform_mat3(&Mat3::from(q));
    let by_quat = q.rotate(&v);
    assert!(by_matrix.equals_approximately_within(&by_quat, 1e-5));
}
