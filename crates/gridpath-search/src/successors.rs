use std::f64::consts::SQRT_2;

use gridpath_core::Point;

use crate::context::{Candidate, SearchContext};
use crate::options::SearchOptions;
use crate::traits::SearchMap;

/// Whether moving from `from` by the unit offset `d` is legal.
///
/// The target must be on the grid and traversable. Diagonal moves also
/// need `allow_diagonal`; a diagonal past one blocked flanking cell needs
/// `cut_corners`, and past two needs `allow_squeeze` as well. Off-grid
/// flanking cells count as blocked.
pub fn is_legal_move<M: SearchMap + ?Sized>(
    map: &M,
    options: &SearchOptions,
    from: Point,
    d: Point,
) -> bool {
    if !map.traversable(from + d) {
        return false;
    }
    if !d.is_diagonal() {
        return true;
    }
    if !options.allow_diagonal {
        return false;
    }
    let flank_x = !map.traversable(from.shift(d.x, 0));
    let flank_y = !map.traversable(from.shift(0, d.y));
    if flank_x && flank_y && !options.allow_squeeze {
        return false;
    }
    !((flank_x || flank_y) && !options.cut_corners)
}

/// Cost of a single unit move.
#[inline]
pub fn step_cost(d: Point) -> f64 {
    if d.is_diagonal() { SQRT_2 } else { 1.0 }
}

/// Reusable successor buffer.
///
/// Offsets are scanned row by row (`dy` outer, `dx` inner), which fixes the
/// order in which equal-priority successors enter OPEN.
pub(crate) struct Successors {
    buf: Vec<Candidate>,
}

impl Successors {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Legal, not-yet-closed successors of the node at `key`.
    pub(crate) fn expand<M: SearchMap + ?Sized>(
        &mut self,
        map: &M,
        options: &SearchOptions,
        ctx: &SearchContext,
        key: usize,
        goal: Point,
    ) -> &[Candidate] {
        self.buf.clear();
        let p = ctx.point(key);
        let g = ctx.node(key).g;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let d = Point::new(dx, dy);
                if !is_legal_move(map, options, p, d) {
                    continue;
                }
                let n = p + d;
                let Some(nk) = ctx.key(n) else {
                    continue;
                };
                if ctx.is_closed(nk) {
                    continue;
                }
                self.buf.push(Candidate {
                    key: nk,
                    g: g + step_cost(d),
                    h: options.heuristic(n, goal),
                    parent: key,
                });
            }
        }
        &self.buf
    }
}
