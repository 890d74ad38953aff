use gridpath_core::{GridMap, Point};

/// Read-only map interface consumed by the search engine.
///
/// Cells are addressed as `Point { x: column, y: row }`. The engine only
/// asks about cells inside `0..width × 0..height`, except through
/// [`on_grid`](Self::on_grid), which must answer for any point.
pub trait SearchMap {
    /// Cell the search starts from.
    fn start(&self) -> Point;

    /// Cell the search tries to reach.
    fn goal(&self) -> Point;

    /// Number of columns.
    fn width(&self) -> i32;

    /// Number of rows.
    fn height(&self) -> i32;

    /// Whether `p` lies inside the map.
    fn on_grid(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width() && p.y < self.height()
    }

    /// Whether `p` blocks movement and sight.
    fn is_obstacle(&self, p: Point) -> bool;

    /// Whether a move may end on `p`.
    fn traversable(&self, p: Point) -> bool {
        self.on_grid(p) && !self.is_obstacle(p)
    }
}

impl SearchMap for GridMap {
    fn start(&self) -> Point {
        GridMap::start(self)
    }

    fn goal(&self) -> Point {
        GridMap::goal(self)
    }

    fn width(&self) -> i32 {
        GridMap::width(self)
    }

    fn height(&self) -> i32 {
        GridMap::height(self)
    }

    fn on_grid(&self, p: Point) -> bool {
        self.contains(p)
    }

    fn is_obstacle(&self, p: Point) -> bool {
        GridMap::is_obstacle(self, p)
    }
}

impl<M: SearchMap + ?Sized> SearchMap for &M {
    fn start(&self) -> Point {
        (**self).start()
    }

    fn goal(&self) -> Point {
        (**self).goal()
    }

    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn on_grid(&self, p: Point) -> bool {
        (**self).on_grid(p)
    }

    fn is_obstacle(&self, p: Point) -> bool {
        (**self).is_obstacle(p)
    }

    fn traversable(&self, p: Point) -> bool {
        (**self).traversable(p)
    }
}
