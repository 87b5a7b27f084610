//! Pure vector operations shared by the projector and the merge step.

use nalgebra::Vector2;

use super::types::{Real, Segment};

/// 2D cross product `v.x*w.y - v.y*w.x`.
///
/// Sign gives the orientation of `w` relative to `v`; zero means collinear.
#[inline]
pub fn cross<T: Real>(v: Vector2<T>, w: Vector2<T>) -> T {
    v.x * w.y - v.y * w.x
}

/// Polar angle of `v` normalized into `[0, 2π)`.
#[inline]
pub fn polar_angle<T: Real>(v: Vector2<T>) -> T {
    let t = v.y.atan2(v.x);
    if t < T::zero() {
        t + T::two_pi()
    } else {
        t
    }
}

/// Point where the line supporting `seg` crosses the origin ray along `dir`.
///
/// `None` when the line is parallel to the ray (`cross(u, dir) == 0`) or the
/// crossing falls outside the segment (parameter outside `[0, 1]`).
pub fn ray_crossing<T: Real>(seg: &Segment<T>, dir: Vector2<T>) -> Option<Vector2<T>> {
    let u = seg.b - seg.a;
    let s = cross(u, dir);
    if s == T::zero() {
        return None;
    }
    let i = cross(dir, seg.a / s);
    if i >= T::zero() && i <= T::one() {
        Some(seg.a + u * i)
    } else {
        None
    }
}

/// Clip `seg` to the angular wedge spanned by the origin rays `v` then `w`.
///
/// Returns the crossing on each ray, or `None` when either crossing is
/// missing or the segment has collapsed to a point.
pub fn clip_to_wedge<T: Real>(
    seg: &Segment<T>,
    v: Vector2<T>,
    w: Vector2<T>,
) -> Option<(Vector2<T>, Vector2<T>)> {
    if seg.a == seg.b {
        return None;
    }
    let p = ray_crossing(seg, v)?;
    let q = ray_crossing(seg, w)?;
    Some((p, q))
}
