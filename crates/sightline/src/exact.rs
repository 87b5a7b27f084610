//! Exact-arithmetic mirror of the rational parts of the pipeline.
//!
//! Distances and angles are irrational in general, so constructions run on
//! floats; orientation, collinearity, angular order, and the wrap split are
//! rational questions and are answered here without rounding. The float
//! preprocessor is validated against this module in tests, and callers that
//! want exact splitting can preprocess here and convert the result down to
//! any [`Real`] instantiation.

use std::cmp::Ordering;

use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};

use crate::geom::{Real, Segment};

/// Exact point relative to the viewpoint at the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatPoint {
    pub x: BigRational,
    pub y: BigRational,
}

impl RatPoint {
    pub fn new(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }
}

/// Exact obstacle segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatSegment {
    pub a: RatPoint,
    pub b: RatPoint,
}

impl RatSegment {
    pub fn new(a: RatPoint, b: RatPoint) -> Self {
        Self { a, b }
    }
}

/// Exact 2D cross product.
pub fn cross(v: &RatPoint, w: &RatPoint) -> BigRational {
    &v.x * &w.y - &v.y * &w.x
}

/// Does the segment lie on a line through the viewpoint?
///
/// Also true for zero-length segments; both contribute no angular extent.
pub fn collinear_with_origin(seg: &RatSegment) -> bool {
    cross(&seg.a, &seg.b).is_zero()
}

/// Endpoints reordered counter-clockwise as seen from the origin.
pub fn canonicalize(seg: RatSegment) -> RatSegment {
    if cross(&seg.a, &seg.b).is_negative() {
        RatSegment::new(seg.b, seg.a)
    } else {
        seg
    }
}

/// Quadrant index of a non-origin point under the `[0, 2π)` angle
/// convention: the positive x-axis opens quadrant 0, each boundary ray
/// belongs to the quadrant it opens.
fn quadrant(v: &RatPoint) -> u8 {
    if v.x.is_positive() && !v.y.is_negative() {
        0
    } else if !v.x.is_positive() && v.y.is_positive() {
        1
    } else if v.x.is_negative() && !v.y.is_positive() {
        2
    } else {
        3
    }
}

/// Exact order of two non-origin points by polar angle in `[0, 2π)`.
///
/// No `atan2` involved: compare quadrants, then the cross product sign.
/// `Equal` means the points are on the same ray from the origin.
pub fn angle_cmp(v: &RatPoint, w: &RatPoint) -> Ordering {
    match quadrant(v).cmp(&quadrant(w)) {
        Ordering::Equal => {
            let c = cross(v, w);
            if c.is_positive() {
                Ordering::Less
            } else if c.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        other => other,
    }
}

/// Exact positive-x-axis crossing strictly inside the segment, if any.
///
/// Same predicate as the float preprocessor's wrap test; the returned point
/// has an exactly zero y-coordinate.
pub fn wrap_point(seg: &RatSegment) -> Option<RatPoint> {
    let sy = &seg.b.y - &seg.a.y;
    if sy.is_zero() {
        return None;
    }
    let i = -(&seg.a.y) / &sy;
    if i > BigRational::zero() && i < BigRational::one() {
        let sx = &seg.b.x - &seg.a.x;
        let cx = &seg.a.x + &sx * &i;
        if cx.is_positive() {
            return Some(RatPoint::new(cx, BigRational::zero()));
        }
    }
    None
}

/// Exactly preprocessed obstacle set.
#[derive(Clone, Debug)]
pub struct PreparedExact {
    pub segments: Vec<RatSegment>,
    pub dropped: usize,
    pub split: usize,
}

/// Exact counterpart of [`crate::region::prepare`]: drop collinear
/// segments, orient the rest, split wraps at the exact axis crossing.
pub fn prepare(segments: &[RatSegment]) -> PreparedExact {
    let mut out = Vec::with_capacity(segments.len());
    let mut dropped = 0;
    let mut split = 0;

    for seg in segments {
        if collinear_with_origin(seg) {
            dropped += 1;
            continue;
        }
        let seg = canonicalize(seg.clone());
        match wrap_point(&seg) {
            Some(c) => {
                split += 1;
                out.push(RatSegment::new(c.clone(), seg.b));
                out.push(RatSegment::new(seg.a, c));
            }
            None => out.push(seg),
        }
    }

    PreparedExact {
        segments: out,
        dropped,
        split,
    }
}

/// Parse a plain decimal literal (`-12.345`) into an exact rational.
pub fn parse_decimal(text: &str) -> Option<BigRational> {
    let t = text.trim();
    let (neg, t) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let (int_part, frac_part) = match t.split_once('.') {
        Some((i, f)) => (i, f),
        None => (t, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    let num: BigInt = format!("0{int_part}{frac_part}").parse().ok()?;
    let den: BigInt = format!("1{}", "0".repeat(frac_part.len())).parse().ok()?;
    let r = BigRational::new(num, den);
    Some(if neg { -r } else { r })
}

fn scalar<T: Real>(r: &BigRational) -> Option<T> {
    r.to_f64().map(nalgebra::convert)
}

/// Convert an exact segment down to a float instantiation.
///
/// `None` only when a coordinate does not fit the target scalar.
pub fn to_segment<T: Real>(seg: &RatSegment) -> Option<Segment<T>> {
    let a = nalgebra::Vector2::new(scalar(&seg.a.x)?, scalar(&seg.a.y)?);
    let b = nalgebra::Vector2::new(scalar(&seg.b.x)?, scalar(&seg.b.y)?);
    Some(Segment::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::polar_angle;
    use crate::region::prepare as prepare_float;
    use nalgebra::Vector2;

    fn rp(x: i64, y: i64) -> RatPoint {
        RatPoint::new(
            BigRational::from_integer(BigInt::from(x)),
            BigRational::from_integer(BigInt::from(y)),
        )
    }

    #[test]
    fn parse_decimal_is_exact() {
        let tenth = parse_decimal("0.1").expect("parse");
        let one = BigRational::from_integer(BigInt::from(1));
        let ten = BigRational::from_integer(BigInt::from(10));
        assert_eq!(tenth * ten, one);
        assert_eq!(
            parse_decimal("-2.50").expect("parse"),
            BigRational::new(BigInt::from(-5), BigInt::from(2))
        );
        assert_eq!(
            parse_decimal(".5").expect("parse"),
            BigRational::new(BigInt::from(1), BigInt::from(2))
        );
        assert!(parse_decimal("").is_none());
        assert!(parse_decimal("1.2.3").is_none());
        assert!(parse_decimal("abc").is_none());
    }

    #[test]
    fn angle_cmp_agrees_with_atan2_order() {
        let pts = [
            rp(1, 0),
            rp(3, 1),
            rp(1, 1),
            rp(0, 1),
            rp(-2, 1),
            rp(-1, 0),
            rp(-1, -3),
            rp(0, -1),
            rp(2, -1),
        ];
        for v in &pts {
            for w in &pts {
                let fv = polar_angle(Vector2::new(
                    v.x.to_f64().unwrap(),
                    v.y.to_f64().unwrap(),
                ));
                let fw = polar_angle(Vector2::new(
                    w.x.to_f64().unwrap(),
                    w.y.to_f64().unwrap(),
                ));
                let expect = fv.partial_cmp(&fw).unwrap();
                assert_eq!(angle_cmp(v, w), expect, "{v:?} vs {w:?}");
            }
        }
    }

    #[test]
    fn angle_cmp_same_ray_is_equal() {
        assert_eq!(angle_cmp(&rp(1, 2), &rp(2, 4)), Ordering::Equal);
    }

    #[test]
    fn exact_prepare_matches_float_prepare() {
        // One plain, one collinear, one wrapping segment.
        let exact_in = [
            RatSegment::new(rp(1, 1), rp(-1, 1)),
            RatSegment::new(rp(2, 2), rp(5, 5)),
            RatSegment::new(rp(1, 1), rp(1, -1)),
        ];
        let float_in = [
            Segment::new(Vector2::new(1.0, 1.0), Vector2::new(-1.0, 1.0)),
            Segment::new(Vector2::new(2.0, 2.0), Vector2::new(5.0, 5.0)),
            Segment::new(Vector2::new(1.0, 1.0), Vector2::new(1.0, -1.0)),
        ];

        let e = prepare(&exact_in);
        let f = prepare_float(&float_in);

        assert_eq!(e.dropped, f.dropped);
        assert_eq!(e.split, f.split);
        assert_eq!(e.segments.len(), f.segments.len());
        for (es, fs) in e.segments.iter().zip(&f.segments) {
            let down: Segment<f64> = to_segment(es).expect("fits f64");
            assert!((down.a - fs.a).norm() < 1e-12);
            assert!((down.b - fs.b).norm() < 1e-12);
        }
    }

    #[test]
    fn wrap_point_lands_exactly_on_axis() {
        let seg = canonicalize(RatSegment::new(rp(1, 1), rp(1, -1)));
        let c = wrap_point(&seg).expect("wraps");
        assert!(c.y.is_zero());
        assert_eq!(c.x, BigRational::from_integer(BigInt::from(1)));
        // Split halves do not wrap again.
        assert!(wrap_point(&RatSegment::new(c.clone(), seg.b.clone())).is_none());
        assert!(wrap_point(&RatSegment::new(seg.a.clone(), c)).is_none());
    }
}
