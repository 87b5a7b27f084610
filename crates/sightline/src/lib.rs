//! Visibility regions from a fixed viewpoint among 2D segment obstacles.
//!
//! The solver projects every obstacle into a pair of angular boundary events
//! ("view rays") and combines the pairs with a merge-sort-shaped divide and
//! conquer. The merge step is the core: it interleaves two angularly sorted
//! partial boundaries and resolves occlusion between them by clipping the
//! competing edges of each wedge and keeping the nearest surface.
//!
//! Layout
//! - `geom`: scalar abstraction, segment/view-ray types, the vector kernel.
//! - `region`: preprocessing, projection, the occlusion merge, and the
//!   sequential/parallel drivers.
//! - `exact`: rational-arithmetic predicates used to validate float runs.
//! - `io`: text formats for obstacle lists and boundaries.
//! - `generate`: synthetic scenes for tests and benchmarks.

pub mod exact;
pub mod generate;
pub mod geom;
pub mod io;
pub mod region;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{cross, polar_angle, Real, Segment, ViewRay};
    pub use crate::region::{
        merge, prepare, project_segment, visible_region, visible_region_par, Boundary, Prepared,
    };
    pub use nalgebra::Vector2 as Vec2;
}
