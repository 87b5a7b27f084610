//! Divide-and-conquer drivers: project leaves, merge pairwise, bottom up.

use rayon::prelude::*;

use crate::geom::{Real, Segment};

use super::{merge, prepare, project_segment, Boundary};

fn join_pair<T: Real>(pair: &[Boundary<T>]) -> Boundary<T> {
    match pair {
        [a, b] => merge(a, b),
        [a] => a.clone(),
        _ => Boundary::default(),
    }
}

/// Sequential reference solver.
///
/// Preprocesses the obstacles, projects each surviving segment into its ray
/// pair, then runs balanced bottom-up merge passes until one boundary
/// remains. The explicit pass structure keeps stack depth constant for any
/// obstacle count and is the same merge tree the parallel driver executes.
/// The split point does not affect the result; any balanced partition works.
pub fn visible_region<T: Real>(segments: &[Segment<T>]) -> Boundary<T> {
    let prepared = prepare(segments);
    let mut level: Vec<Boundary<T>> = prepared.segments.iter().map(project_segment).collect();
    while level.len() > 1 {
        level = level.chunks(2).map(join_pair).collect();
    }
    level.pop().unwrap_or_default()
}

/// Parallel solver: one rayon task per merge node, joined level by level.
///
/// Runs the identical merge tree as [`visible_region`], so for the same
/// input the two produce bit-identical boundaries; the sequential driver is
/// the correctness oracle for this one.
pub fn visible_region_par<T>(segments: &[Segment<T>]) -> Boundary<T>
where
    T: Real + Send + Sync,
{
    let prepared = prepare(segments);
    let mut level: Vec<Boundary<T>> = prepared
        .segments
        .par_iter()
        .map(project_segment)
        .collect();
    while level.len() > 1 {
        level = level.par_chunks(2).map(join_pair).collect();
    }
    level.pop().unwrap_or_default()
}
