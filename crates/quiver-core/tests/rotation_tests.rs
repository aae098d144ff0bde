// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use core::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use quiver_core::Vec3;

fn approx_eq3(a: [f32; 3], b: [f32; 3]) {
    const ABS_TOL: f32 = 1e-5;
    const REL_TOL: f32 = 1e-6;
    for i in 0..3 {
        let ai = a[i];
        let bi = b[i];
        let diff = (ai - bi).abs();
        let scale = ai.abs().max(bi.abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol} (scale={scale})"
        );
    }
}

#[test]
fn rot_z_maps_x_to_y() {
    let mut v = Vec3::UNIT_X;
    v.rotate_z(FRAC_PI_2);
    approx_eq3(v.to_array(), [0.0, 1.0, 0.0]);
}

#[test]
fn rot_x_maps_y_to_z() {
    let mut v = Vec3::UNIT_Y;
    v.rotate_x(FRAC_PI_2);
    approx_eq3(v.to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn rot_y_maps_z_to_x() {
    let mut v = Vec3::UNIT_Z;
    v.rotate_y(FRAC_PI_2);
    approx_eq3(v.to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn inverse_rotation_round_trips() {
    let original = Vec3::new(1.0, 2.0, 3.0);

    let mut v = original;
    v.rotate_x(0.7);
    v.rotate_x(-0.7);
    approx_eq3(v.to_array(), original.to_array());

    let mut v = original;
    v.rotate_y(1.3);
    v.rotate_y(-1.3);
    approx_eq3(v.to_array(), original.to_array());

    let mut v = original;
    v.rotate_z(-2.1);
    v.rotate_z(2.1);
    approx_eq3(v.to_array(), original.to_array());
}

#[test]
fn rotation_preserves_length() {
    let original = Vec3::new(1.0, 2.0, 3.0);
    let before = original.length_squared();
    let mut v = original;
    v.rotate_z(1.3);
    v.rotate_x(-0.4);
    let after = v.length_squared();
    assert!(
        ((after - before) / before).abs() < 1e-5,
        "length drifted: {before} -> {after}"
    );
}

#[test]
fn composed_quarter_turns_match_a_half_turn() {
    let mut twice = Vec3::new(3.0, -1.0, 2.0);
    twice.rotate_z(FRAC_PI_4);
    twice.rotate_z(FRAC_PI_4);

    let mut once = Vec3::new(3.0, -1.0, 2.0);
    once.rotate_z(FRAC_PI_2);

    approx_eq3(twice.to_array(), once.to_array());
}

#[test]
fn each_output_axis_reads_the_pre_rotation_operands() {
    // A naive in-place formulation would feed the already-rotated first axis
    // into the second axis' formula. A quarter turn about Z makes the
    // corruption obvious: naive code maps (1, 0) to (0, 0) instead of (0, 1).
    let mut v = Vec3::UNIT_X;
    v.rotate_z(FRAC_PI_2);
    assert!(
        v.length_squared() > 0.5,
        "second axis consumed the rotated first axis: {v:?}"
    );
    approx_eq3(v.to_array(), [0.0, 1.0, 0.0]);
}
