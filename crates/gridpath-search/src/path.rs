use gridpath_core::Point;

use crate::context::{NONE, SearchContext};

/// Walk parent links from `goal` back to the start, returning cells in
/// start → goal order.
pub(crate) fn reconstruct(ctx: &SearchContext, goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut key = goal;
    while key != NONE {
        path.push(ctx.point(key));
        key = ctx.node(key).parent;
    }
    path.reverse();
    path
}

/// Compress a cell path into the cells where the step between consecutive
/// cells changes.
///
/// Steps are compared as raw displacements, so a `(2, 1)` step followed by
/// a `(4, 2)` step keeps the cell between them. The first and last cells are
/// always kept, and straight segments between consecutive waypoints retrace
/// the input path.
pub fn waypoints(path: &[Point]) -> Vec<Point> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Vec::new();
    };
    let mut out = vec![first];
    for w in path.windows(3) {
        if w[1] - w[0] != w[2] - w[1] {
            out.push(w[1]);
        }
    }
    if path.len() > 1 {
        out.push(last);
    }
    out
}
