use super::*;
use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

#[test]
fn cross_sign_gives_orientation() {
    assert_eq!(cross(v(1.0, 0.0), v(0.0, 1.0)), 1.0);
    assert_eq!(cross(v(0.0, 1.0), v(1.0, 0.0)), -1.0);
    assert_eq!(cross(v(2.0, 2.0), v(3.0, 3.0)), 0.0);
}

#[test]
fn polar_angle_covers_all_quadrants() {
    assert_eq!(polar_angle(v(1.0, 0.0)), 0.0);
    assert!((polar_angle(v(1.0, 1.0)) - FRAC_PI_4).abs() < 1e-12);
    assert!((polar_angle(v(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
    assert!((polar_angle(v(-1.0, 0.0)) - PI).abs() < 1e-12);
    // Negative atan2 results are lifted into [0, 2π).
    assert!((polar_angle(v(0.0, -1.0)) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert!((polar_angle(v(1.0, -1.0)) - 7.0 * FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn segment_orientation_is_canonical() {
    let s = Segment::new(v(1.0, 1.0), v(1.0, -1.0)).oriented();
    assert_eq!(s.a, v(1.0, -1.0));
    assert_eq!(s.b, v(1.0, 1.0));
    // Already counter-clockwise stays put.
    assert_eq!(s.oriented(), s);
}

#[test]
fn ray_crossing_hits_inside_segment() {
    // Vertical segment at x = 2, ray along +x.
    let seg = Segment::new(v(2.0, -1.0), v(2.0, 1.0));
    let p = ray_crossing(&seg, v(1.0, 0.0)).expect("crossing");
    assert!((p - v(2.0, 0.0)).norm() < 1e-12);
}

#[test]
fn ray_crossing_rejects_outside_parameter() {
    // The supporting line crosses the +x ray at (2, 0), outside [a, b].
    let seg = Segment::new(v(2.0, 1.0), v(2.0, 3.0));
    assert!(ray_crossing(&seg, v(1.0, 0.0)).is_none());
}

#[test]
fn ray_crossing_rejects_parallel() {
    let seg = Segment::new(v(1.0, 1.0), v(3.0, 1.0));
    assert!(ray_crossing(&seg, v(1.0, 0.0)).is_none());
}

#[test]
fn clip_to_wedge_returns_both_crossings() {
    let seg = Segment::new(v(2.0, 0.0), v(0.0, 2.0));
    let d = std::f64::consts::FRAC_1_SQRT_2;
    let (p, q) = clip_to_wedge(&seg, v(1.0, 0.0), v(d, d)).expect("clip");
    assert!((p - v(2.0, 0.0)).norm() < 1e-12);
    assert!((q - v(1.0, 1.0)).norm() < 1e-12);
}

#[test]
fn clip_to_wedge_rejects_degenerate_segment() {
    let seg = Segment::new(v(1.0, 1.0), v(1.0, 1.0));
    assert!(clip_to_wedge(&seg, v(1.0, 0.0), v(0.0, 1.0)).is_none());
}
