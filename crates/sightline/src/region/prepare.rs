//! Obstacle preprocessing: collinear filtering, orientation, wrap splitting.

use crate::geom::{cross, Real, Segment};

use super::project::wrap_point;

/// Preprocessed obstacle set, with counts for reporting.
#[derive(Clone, Debug)]
pub struct Prepared<T: Real> {
    pub segments: Vec<Segment<T>>,
    /// Segments collinear with the origin (zero visible extent), removed.
    pub dropped: usize,
    /// Segments split in two at their positive-x-axis crossing.
    pub split: usize,
}

/// Filter, orient, and split an obstacle list.
///
/// Three order-preserving steps, each total over segments:
/// 1. drop segments collinear with the origin (`cross(a, b) == 0`, which
///    also covers zero-length segments and segments through the viewpoint);
/// 2. reorder endpoints counter-clockwise as seen from the origin;
/// 3. split a segment whose supporting line crosses the positive x-axis
///    strictly inside the segment, so no piece spans a reflex wedge.
///
/// Idempotent: running the result through `prepare` again is a no-op.
pub fn prepare<T: Real>(segments: &[Segment<T>]) -> Prepared<T> {
    let mut out = Vec::with_capacity(segments.len());
    let mut dropped = 0;
    let mut split = 0;

    for seg in segments {
        if cross(seg.a, seg.b) == T::zero() {
            dropped += 1;
            continue;
        }
        let seg = seg.oriented();
        match wrap_point(&seg) {
            Some(c) => {
                split += 1;
                // Increasing-angle order: the piece starting on the axis
                // (angle 0) first, the piece ending on it (angle 2π) second.
                out.push(Segment::new(c, seg.b));
                out.push(Segment::new(seg.a, c));
            }
            None => out.push(seg),
        }
    }

    Prepared {
        segments: out,
        dropped,
        split,
    }
}
