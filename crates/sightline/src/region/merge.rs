//! Occlusion-resolving merge of two angularly sorted boundaries.

use crate::geom::{clip_to_wedge, Real, Segment, ViewRay};

use super::Boundary;

/// Edge straddling read position `k` of one input stream: the span from ray
/// `k-1`'s departing bound to ray `k`'s arriving bound. `None` when either
/// bound is absent or `k` is not interior to the stream.
fn pending_edge<T: Real>(rays: &[ViewRay<T>], k: usize) -> Option<Segment<T>> {
    if k == 0 || k >= rays.len() {
        return None;
    }
    let w = &rays[k - 1];
    let v = &rays[k];
    match (w.outer, v.inner) {
        (Some(l), Some(r)) => Some(Segment::new(w.dir * l, v.dir * r)),
        _ => None,
    }
}

/// Merge two angularly sorted boundaries, resolving occlusion between them.
///
/// Rays are interleaved by angle (ties favour `left`) and never dropped, so
/// the output length is exactly `left.len() + right.len()`. From the second
/// output ray on, the wedge between the last two appended rays is
/// re-resolved: each input contributes at most one candidate edge (the edge
/// straddling its read position), candidates are clipped to the two wedge
/// rays, and the nearest one (lexicographically by left crossing distance,
/// then right crossing distance) claims the wedge by rewriting the
/// second-to-last ray's `outer` and the last ray's `inner`. A wedge with no
/// surviving candidate, including the zero-width wedge between tied angles,
/// carries no edge.
///
/// Each input must be internally consistent (nearest surface wins within
/// itself), which is what makes checking only the current wedge sufficient:
/// the only conflicts a merge can introduce are between one edge of each
/// input overlapping in angle.
pub fn merge<T: Real>(left: &Boundary<T>, right: &Boundary<T>) -> Boundary<T> {
    let a = &left.rays[..];
    let b = &right.rays[..];

    let mut out: Vec<ViewRay<T>> = Vec::with_capacity(a.len() + b.len());
    let mut ai = 0usize;
    let mut bi = 0usize;

    while ai < a.len() || bi < b.len() {
        let take_left = if bi >= b.len() {
            true
        } else if ai >= a.len() {
            false
        } else {
            a[ai].theta <= b[bi].theta
        };

        if take_left {
            debug_assert!(
                ai == 0 || a[ai - 1].theta <= a[ai].theta,
                "left input to merge is not angularly sorted"
            );
            out.push(a[ai]);
            ai += 1;
        } else {
            debug_assert!(
                bi == 0 || b[bi - 1].theta <= b[bi].theta,
                "right input to merge is not angularly sorted"
            );
            out.push(b[bi]);
            bi += 1;
        }

        let n = out.len();
        if n < 2 {
            continue;
        }

        // Straddle index per stream: for the stream just consumed that is
        // its last consumed ray, for the other the next unconsumed one; the
        // candidate edge is the pair around that position either way.
        let ka = if take_left { ai - 1 } else { ai };
        let kb = if take_left { bi } else { bi - 1 };

        let mut claim: Option<(T, T)> = None;

        if out[n - 2].theta != out[n - 1].theta {
            let (wl, wr) = (out[n - 2].dir, out[n - 1].dir);
            for edge in [pending_edge(a, ka), pending_edge(b, kb)].into_iter().flatten() {
                if let Some((p, q)) = clip_to_wedge(&edge, wl, wr) {
                    let cut = (p.norm(), q.norm());
                    let nearer = match claim {
                        None => true,
                        Some(best) => cut < best,
                    };
                    if nearer {
                        claim = Some(cut);
                    }
                }
            }
        }

        match claim {
            Some((l, r)) => {
                out[n - 2].outer = Some(l);
                out[n - 1].inner = Some(r);
            }
            None => {
                out[n - 2].outer = None;
                out[n - 1].inner = None;
            }
        }
    }

    Boundary { rays: out }
}
