// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI};
use echo_math::{EulerOrder, Mat3, Mat4, MathError, Prng, Quat, Vec3};

fn assert_quat_close(a: &Quat, b: &Quat, eps: f32) {
    assert!(
        a.equals_approximately_within(b, eps),
        "quaternions differ: {:?} vs {:?}",
        a.to_array(),
        b.to_array()
    );
}

fn assert_same_rotation(a: &Quat, b: &Quat, eps: f32) {
    assert!(
        a.equals_approximately_within(b, eps) || a.equals_approximately_within(&b.negate(), eps),
        "rotations differ: {:?} vs {:?}",
        a.to_array(),
        b.to_array()
    );
}

fn axis(v: Vec3, angle: f32) -> Quat {
    Quat::from_axis_angle(v, angle)
}

#[test]
fn quarter_turn_about_z_maps_x_to_y() {
    let q = axis(Vec3::UNIT_Z, FRAC_PI_2);
    let v = q.rotate(&Vec3::UNIT_X);
    assert!(v.equals_approximately(&Vec3::UNIT_Y), "{v:?}");
    assert!((q * Vec3::UNIT_X).equals_approximately(&Vec3::UNIT_Y));
}

#[test]
fn multiply_composes_right_to_left() {
    let yaw = axis(Vec3::UNIT_Y, FRAC_PI_2);
    let pitch = axis(Vec3::UNIT_X, FRAC_PI_2);
    let composed = yaw.multiply(&pitch);
    let v = Vec3::new(0.3, -0.7, 1.1);
    let stepwise = yaw.rotate(&pitch.rotate(&v));
    assert!(composed.rotate(&v).equals_approximately_within(&stepwise, 1e-5));
    assert_ne!(composed.to_array(), pitch.multiply(&yaw).to_array());
}

#[test]
fn multiply_matches_matrix_product() {
    let a = axis(Vec3::new(0.0, 0.6, 0.8), 0.9);
    let b = axis(Vec3::new(1.0, 0.0, 0.0), -0.4);
    let via_quat = a.multiply(&b).to_mat4();
    let via_mat = a.to_mat4().multiply(&b.to_mat4());
    assert!(via_quat.equals_approximately_within(&via_mat, 1e-5));
}

#[test]
fn rotate_axis_helpers_post_multiply() {
    let q = axis(Vec3::new(0.0, 0.6, 0.8), 0.9);
    assert_quat_close(&q.rotate_x(0.5), &q.multiply(&axis(Vec3::UNIT_X, 0.5)), 1e-6);
    assert_quat_close(&q.rotate_y(0.5), &q.multiply(&axis(Vec3::UNIT_Y, 0.5)), 1e-6);
    assert_quat_close(&q.rotate_z(0.5), &q.multiply(&axis(Vec3::UNIT_Z, 0.5)), 1e-6);
}

#[test]
fn euler_orders_match_axis_products() {
    let (x, y, z) = (0.3, -0.8, 1.2);
    let qx = axis(Vec3::UNIT_X, x);
    let qy = axis(Vec3::UNIT_Y, y);
    let qz = axis(Vec3::UNIT_Z, z);
    let cases = [
        (EulerOrder::Xyz, qx * qy * qz),
        (EulerOrder::Xzy, qx * qz * qy),
        (EulerOrder::Yxz, qy * qx * qz),
        (EulerOrder::Yzx, qy * qz * qx),
        (EulerOrder::Zxy, qz * qx * qy),
        (EulerOrder::Zyx, qz * qy * qx),
    ];
    for (order, expected) in cases {
        let q = Quat::from_euler(x, y, z, order);
        assert!(
            q.equals_approximately_within(&expected, 1e-6),
            "{order:?}: {q:?} vs {expected:?}"
        );
    }
}

#[test]
fn euler_order_parses_from_str() {
    let order: Result<EulerOrder, _> = "yzx".parse();
    assert_eq!(order, Ok(EulerOrder::Yzx));
    assert_eq!("xy".parse::<EulerOrder>(), Err(MathError::UnknownEulerOrder));
}

#[test]
fn from_matrix_round_trip_respects_double_cover() {
    let mut rng = Prng::from_seed(0xDEAD_BEEF, 0x1234_5678);
    for _ in 0..64 {
        let q = Quat::random(&mut rng);
        assert!((q.length() - 1.0).abs() < 1e-5);
        assert_same_rotation(&Quat::from_mat4(&q.to_mat4()), &q, 1e-4);
        assert_same_rotation(&Quat::from_mat3(&q.to_mat3()), &q, 1e-4);
    }
}

#[test]
fn from_matrix_handles_half_turns() {
    // Trace is negative for π rotations; exercises the largest-diagonal path.
    for v in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z] {
        let q = axis(v, PI);
        assert_same_rotation(&Quat::from(q.to_mat3()), &q, 1e-5);
        assert_same_rotation(&Quat::from(Mat4::from_quat(&q)), &q, 1e-5);
    }
}

#[test]
fn from_rotation_matrix_about_z() {
    let q = Quat::from_mat3(&Mat3::rotation_z(FRAC_PI_2));
    assert_same_rotation(&q, &axis(Vec3::UNIT_Z, FRAC_PI_2), 1e-6);
}

#[test]
fn slerp_endpoints_and_midpoint() {
    let a = Quat::identity();
    let b = axis(Vec3::UNIT_Z, FRAC_PI_2);
    assert_quat_close(&a.slerp(&b, 0.0), &a, 1e-6);
    assert_quat_close(&a.slerp(&b, 1.0), &b, 1e-6);
    assert_quat_close(&a.slerp(&b, 0.5), &axis(Vec3::UNIT_Z, FRAC_PI_2 * 0.5), 1e-6);
}

#[test]
fn slerp_takes_shortest_path() {
    let a = Quat::identity();
    let b = axis(Vec3::UNIT_Z, FRAC_PI_2);
    let mid = a.slerp(&b.negate(), 0.5);
    assert_quat_close(&mid, &axis(Vec3::UNIT_Z, FRAC_PI_2 * 0.5), 1e-6);
}

#[test]
fn slerp_of_nearly_equal_inputs_is_finite() {
    let a = axis(Vec3::UNIT_Y, 0.25);
    let r = a.slerp(&a, 0.3);
    assert!(r.to_array().iter().all(|c| c.is_finite()));
    assert_quat_close(&r, &a, 1e-6);
}

#[test]
fn sqlerp_passes_through_endpoints() {
    let a = Quat::identity();
    let b = axis(Vec3::UNIT_X, 0.4);
    let c = axis(Vec3::UNIT_X, 0.8);
    let d = axis(Vec3::UNIT_X, 1.2);
    assert_quat_close(&a.sqlerp(&b, &c, &d, 0.0), &a, 1e-6);
    assert_quat_close(&a.sqlerp(&b, &c, &d, 1.0), &d, 1e-6);
}

#[test]
fn inverse_and_conjugate() {
    let q = axis(Vec3::new(0.0, 0.6, 0.8), 1.3);
    assert_quat_close(&q.multiply(&q.inverse()), &Quat::identity(), 1e-6);
    assert_quat_close(&q.conjugate(), &q.inverse(), 1e-6);

    // Non-unit input: inverse still works, conjugate does not.
    let scaled = q.scale(2.0);
    assert_quat_close(&scaled.multiply(&scaled.inverse()), &Quat::identity(), 1e-5);
}

#[test]
fn axis_angle_round_trip() {
    let dir = Vec3::new(0.0, 0.6, 0.8);
    let aa = axis(dir, 1.3).to_axis_angle();
    assert!((aa.angle - 1.3).abs() < 1e-5);
    assert!(aa.axis.equals_approximately_within(&dir, 1e-5));
}

#[test]
fn axis_angle_tolerates_w_slightly_above_one() {
    let aa = Quat::new(0.0, 0.0, 0.0, 1.000_000_1).to_axis_angle();
    assert!(aa.angle.is_finite());
    assert_eq!(aa.axis, Vec3::UNIT_X);
}

#[test]
fn angle_between_rotations() {
    let a = Quat::identity();
    let b = axis(Vec3::UNIT_Y, 0.7);
    assert!((a.angle(&b) - 0.7).abs() < 1e-5);
    assert!(a.angle(&a).abs() < 1e-3);
}

#[test]
fn rotation_to_aligns_vectors() {
    let cases = [
        (Vec3::UNIT_X, Vec3::UNIT_Y),
        (Vec3::UNIT_Z, Vec3::new(0.6, 0.0, 0.8)),
        (Vec3::UNIT_Y, Vec3::UNIT_Y),
        (Vec3::UNIT_Y, Vec3::new(0.0, -1.0, 0.0)),
        (Vec3::UNIT_X, Vec3::new(-1.0, 0.0, 0.0)),
    ];
    for (from, to) in cases {
        let q = Quat::rotation_to(&from, &to);
        let r = q.rotate(&from);
        assert!(
            r.equals_approximately_within(&to, 1e-5),
            "{from:?} -> {to:?} gave {r:?}"
        );
    }
    assert_eq!(
        Quat::rotation_to(&Vec3::UNIT_Z, &Vec3::UNIT_Z),
        Quat::identity()
    );
}

#[test]
fn normalize_and_length() {
    let q = Quat::new(1.0, 2.0, 2.0, 4.0);
    assert_eq!(q.length(), 5.0);
    assert_eq!(q.length_squared(), 25.0);
    assert_quat_close(&q.normalize(), &Quat::new(0.2, 0.4, 0.4, 0.8), 1e-6);
    assert_eq!(Quat::new(0.0, 0.0, 1e-6, 0.0).normalize(), Quat::identity());
}

#[test]
fn componentwise_arithmetic() {
    let a = Quat::new(1.0, 2.0, 3.0, 4.0);
    let b = Quat::new(0.5, 0.5, 0.5, 0.5);
    assert_eq!((a + b).to_array(), [1.5, 2.5, 3.5, 4.5]);
    assert_eq!((a - b).to_array(), [0.5, 1.5, 2.5, 3.5]);
    assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0, 8.0]);
    assert_eq!(a.div_scalar(2.0).to_array(), [0.5, 1.0, 1.5, 2.0]);
    assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);
    assert_eq!(a.lerp(&b, 0.5).to_array(), [0.75, 1.25, 1.75, 2.25]);
    assert_eq!(a.dot(&b), 5.0);
}

#[test]
fn accessors_and_indexing() {
    let mut q = Quat::default();
    assert_eq!(q, Quat::identity());
    q.set_x(1.0);
    q[1] = 2.0;
    assert!(q.set_component(2, 3.0).is_ok());
    q.set_w(4.0);
    assert_eq!([q.x(), q.y(), q.z(), q.w()], [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(q.get(3), Ok(4.0));
    assert!(q.get(4).is_err());
    assert!(q.set_component(7, 0.0).is_err());
    let raw = [1.0_f32, 2.0, 3.0];
    assert_eq!(
        Quat::try_from(&raw[..]),
        Err(MathError::InvalidSize {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn multiply_into_operand_matches_fresh_product() {
    let q = axis(Vec3::UNIT_Y, 0.4);
    let expected = q.multiply(&q);
    let mut r = q;
    r = r.multiply(&r);
    assert_eq!(r, expected);
}
