//! Visibility boundaries: preprocessing, projection, merging, drivers.
//!
//! A [`Boundary`] is the sole artifact flowing through the pipeline: an
//! angularly sorted sequence of view rays conceptually covering `[0, 2π)`,
//! where gaps (rays without bounds between them) denote open sky. Fresh
//! boundaries come from [`project_segment`]; [`merge`] combines two of them
//! while resolving occlusion; [`visible_region`] drives the whole
//! divide-and-conquer.

mod merge;
mod prepare;
mod project;
mod solve;

pub use merge::merge;
pub use prepare::{prepare, Prepared};
pub use project::project_segment;
pub use solve::{visible_region, visible_region_par};

use std::fmt;

use crate::geom::{Real, Segment, ViewRay};


/// Angularly sorted sequence of view rays describing what the origin sees.
#[derive(Clone, Debug, PartialEq)]
pub struct Boundary<T: Real> {
    pub rays: Vec<ViewRay<T>>,
}

impl<T: Real> Default for Boundary<T> {
    fn default() -> Self {
        Self { rays: Vec::new() }
    }
}

impl<T: Real> Boundary<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Maximal unoccluded line-of-sight edges, one per consecutive ray pair
    /// that carries both a departing and an arriving bound.
    pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.rays.windows(2).filter_map(|w| {
            let (p, q) = (&w[0], &w[1]);
            match (p.outer, q.inner) {
                (Some(po), Some(qi)) => Some(Segment::new(p.dir * po, q.dir * qi)),
                _ => None,
            }
        })
    }

    /// Check the angular sortedness contract.
    ///
    /// A violation indicates a bug in the projector or the merge, never a
    /// user-input problem, and must not be silently tolerated downstream.
    pub fn verify(&self) -> Result<(), BoundaryError> {
        for (i, w) in self.rays.windows(2).enumerate() {
            if w[1].theta < w[0].theta {
                return Err(BoundaryError::UnsortedRays { index: i + 1 });
            }
        }
        Ok(())
    }
}

/// Internal-consistency violations of a boundary.
#[derive(Debug)]
pub enum BoundaryError {
    /// Ray at `index` has a smaller angle than its predecessor.
    UnsortedRays { index: usize },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::UnsortedRays { index } => {
                write!(f, "boundary ray {index} breaks angular sortedness")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}
