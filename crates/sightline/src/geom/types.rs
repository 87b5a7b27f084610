//! Core value types: the scalar trait, obstacle segments, view rays.

use nalgebra::{RealField, Vector2};
use std::fmt;

use super::kernel::cross;

/// Scalars the visibility pipeline runs on.
///
/// `RealField` supplies `sqrt`/`atan2`/`two_pi`; `Copy` keeps the vector math
/// by-value; `Display` is needed by the text output formats. Instantiated
/// with `f64` and `f32`.
pub trait Real: RealField + Copy + fmt::Display {}

impl<T: RealField + Copy + fmt::Display> Real for T {}

/// Obstacle segment with endpoints relative to the viewpoint at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T: Real> {
    pub a: Vector2<T>,
    pub b: Vector2<T>,
}

impl<T: Real> Segment<T> {
    #[inline]
    pub fn new(a: Vector2<T>, b: Vector2<T>) -> Self {
        Self { a, b }
    }

    /// Endpoints reordered so `cross(a, b) >= 0`, i.e. counter-clockwise as
    /// seen from the origin. Algorithms assume this canonical orientation.
    #[inline]
    pub fn oriented(self) -> Self {
        if cross(self.a, self.b) < T::zero() {
            Self::new(self.b, self.a)
        } else {
            self
        }
    }
}

/// Boundary event at one polar angle.
///
/// `inner` bounds the edge arriving from the previous ray of the boundary;
/// `outer` bounds the edge departing toward the next ray. A freshly projected
/// pair carries exactly one bound per ray ([`ViewRay::starting`] /
/// [`ViewRay::ending`]); merged boundaries may carry both once neighbouring
/// obstacles have clipped each other. Absent bounds are `None`, never a
/// sentinel distance.
///
/// `dir` caches the unit vector at `theta` so downstream geometry works with
/// an internally consistent direction instead of re-deriving it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRay<T: Real> {
    pub theta: T,
    pub dir: Vector2<T>,
    pub inner: Option<T>,
    pub outer: Option<T>,
}

impl<T: Real> ViewRay<T> {
    /// Ray opening an obstacle's angular range: an edge departs at `dist`.
    #[inline]
    pub fn starting(theta: T, dir: Vector2<T>, dist: T) -> Self {
        Self {
            theta,
            dir,
            inner: None,
            outer: Some(dist),
        }
    }

    /// Ray closing an obstacle's angular range: an edge arrives at `dist`.
    #[inline]
    pub fn ending(theta: T, dir: Vector2<T>, dist: T) -> Self {
        Self {
            theta,
            dir,
            inner: Some(dist),
            outer: None,
        }
    }
}
