//! Line of sight between cell centers.
//!
//! The segment is rasterized as a supercover: every cell whose interior it
//! crosses is visited, in order. When the segment passes exactly through a
//! grid corner it touches all four cells sharing that corner; the two
//! flanking cells are then judged by the corner-cutting policy.

use gridpath_core::Point;

use crate::traits::SearchMap;

/// Whether the straight segment from `from` to `to` crosses no obstacle.
///
/// Both endpoints are checked. Off-grid cells block sight. With
/// `cut_corners` disabled, a segment grazing the corner of an obstacle is
/// blocked; with it enabled, at least one flanking cell must still be free.
pub fn line_of_sight<M: SearchMap + ?Sized>(
    map: &M,
    from: Point,
    to: Point,
    cut_corners: bool,
) -> bool {
    let blocked = |p: Point| !map.traversable(p);

    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let sx = if to.x > from.x { 1 } else { -1 };
    let sy = if to.y > from.y { 1 } else { -1 };
    let mut p = from;

    // Degenerate segments walk a single row or column.
    if dx == 0 {
        loop {
            if blocked(p) {
                return false;
            }
            if p.y == to.y {
                return true;
            }
            p.y += sy;
        }
    }
    if dy == 0 {
        loop {
            if blocked(p) {
                return false;
            }
            if p.x == to.x {
                return true;
            }
            p.x += sx;
        }
    }

    // error > 0: the next boundary crossed is vertical (step x).
    // error < 0: the next boundary crossed is horizontal (step y).
    // error == 0: the segment passes through a corner.
    let mut error = dx - dy;
    let (dx2, dy2) = (dx * 2, dy * 2);
    let mut n = dx + dy;
    while n > 0 {
        if blocked(p) {
            return false;
        }
        if error > 0 {
            p.x += sx;
            error -= dy2;
            n -= 1;
        } else if error < 0 {
            p.y += sy;
            error += dx2;
            n -= 1;
        } else {
            let flank_x = blocked(p.shift(sx, 0));
            let flank_y = blocked(p.shift(0, sy));
            if (flank_x && flank_y) || ((flank_x || flank_y) && !cut_corners) {
                return false;
            }
            p = p.shift(sx, sy);
            error += dx2 - dy2;
            n -= 2;
        }
    }
    !blocked(p)
}
