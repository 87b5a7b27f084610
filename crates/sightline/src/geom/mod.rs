//! Geometry kernel: scalar abstraction, obstacle segments, view rays.
//!
//! Everything here is a pure function over immutable values. The kernel is
//! generic over [`Real`] so the same code runs in `f64` (default) and `f32`
//! (the single-precision path the downstream executables use); orientation
//! and interval comparisons are exact (`==`, `<=`), never tolerance windows,
//! so that angular sortedness survives recursive merging.

mod kernel;
mod types;

pub use kernel::{clip_to_wedge, cross, polar_angle, ray_crossing};
pub use types::{Real, Segment, ViewRay};

#[cfg(test)]
mod tests;
