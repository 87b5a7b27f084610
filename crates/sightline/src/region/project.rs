//! Projection of a single obstacle segment into its view-ray pair.

use nalgebra::Vector2;

use crate::geom::{cross, polar_angle, Real, Segment, ViewRay};

use super::Boundary;

/// Point where `seg`'s supporting line crosses the positive x-axis strictly
/// inside the segment, if anywhere.
///
/// Such a segment wraps the angular origin: its endpoints' polar angles span
/// a reflex wedge once normalized into `[0, 2π)`, which would break the
/// sortedness the merge relies on. The caller splits at the returned point.
pub(crate) fn wrap_point<T: Real>(seg: &Segment<T>) -> Option<Vector2<T>> {
    let s = seg.b - seg.a;
    if s.y == T::zero() {
        return None;
    }
    let i = -seg.a.y / s.y;
    if i > T::zero() && i < T::one() {
        let cx = seg.a.x + s.x * i;
        if cx > T::zero() {
            // The crossing lies on the axis by definition; constructing the
            // y-coordinate would leave rounding residue, and a residual
            // y != 0 makes the split halves wrap again.
            return Some(Vector2::new(cx, T::zero()));
        }
    }
    None
}

/// Fresh view-ray pair of a canonically oriented, non-wrapping span `a → b`.
fn ray_pair<T: Real>(a: Vector2<T>, b: Vector2<T>) -> [ViewRay<T>; 2] {
    let (a, b) = if cross(a, b) < T::zero() { (b, a) } else { (a, b) };
    let ta = polar_angle(a);
    let tb = polar_angle(b);
    // An end point exactly on the positive x-axis closes the pair at 2π, so
    // within the pair the first angle stays strictly below the second.
    let tb = if tb == T::zero() { T::two_pi() } else { tb };
    [
        ViewRay::starting(ta, a.normalize(), a.norm()),
        ViewRay::ending(tb, b.normalize(), b.norm()),
    ]
}

/// Project one obstacle segment into its angularly ordered boundary.
///
/// The preprocessor already splits wrapping segments; the check here keeps
/// the projector total for callers feeding it raw segments. Segments
/// collinear with the origin are not projectable and must be filtered first.
pub fn project_segment<T: Real>(seg: &Segment<T>) -> Boundary<T> {
    debug_assert!(
        cross(seg.a, seg.b) != T::zero(),
        "collinear segment reached the projector"
    );
    let seg = seg.oriented();
    let rays = match wrap_point(&seg) {
        Some(c) => {
            let [r0, r1] = ray_pair(c, seg.b);
            let [r2, r3] = ray_pair(seg.a, c);
            vec![r0, r1, r2, r3]
        }
        None => ray_pair(seg.a, seg.b).to_vec(),
    };
    Boundary { rays }
}
