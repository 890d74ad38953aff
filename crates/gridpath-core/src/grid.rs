//! An integer-cell obstacle map with start and goal cells.
//!
//! [`Cell`] is a newtype over `i32` terrain values where [`Cell::FREE`] is
//! traversable and every other value blocks movement. [`GridMap`] stores
//! cells row-major over `Range::new(0, 0, width, height)`.

use crate::geom::{Point, Range};

/// A map cell value, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// Traversable terrain.
    pub const FREE: Cell = Cell(0);
    /// The default blocking terrain.
    pub const OBSTACLE: Cell = Cell(1);

    /// Create a new cell with the given value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this terrain blocks movement.
    pub const fn is_obstacle(self) -> bool {
        self.0 != Self::FREE.0
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A rectangular obstacle map with a start and a goal cell.
///
/// The map is read-only during a search and may be shared between
/// independent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl GridMap {
    /// Create a new map filled with [`Cell::FREE`]. Start and goal both
    /// default to the origin.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Cell::FREE; bounds.len()],
            bounds,
            start: Point::ZERO,
            goal: Point::ZERO,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// Returns the bounding range of the map.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width of the map in cells.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the map in cells.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the map contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Mark a cell as [`Cell::OBSTACLE`]. Does nothing if out of bounds.
    pub fn set_obstacle(&mut self, p: Point) {
        self.set(p, Cell::OBSTACLE);
    }

    /// Fill the entire map with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Whether `p` blocks movement. Points off the map count as obstacles.
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.at(p).is_none_or(Cell::is_obstacle)
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The start cell.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Set the start cell.
    pub fn set_start(&mut self, p: Point) {
        self.start = p;
    }

    /// Set the goal cell.
    pub fn set_goal(&mut self, p: Point) {
        self.goal = p;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = GridMap::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.count(Cell::FREE), 50);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = GridMap::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Cell(42));
        assert_eq!(g.at(p), Some(Cell(42)));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell(0)));
        assert_eq!(g.at(Point::new(10, 10)), None);
        // Out of bounds writes are ignored.
        g.set(Point::new(-1, 0), Cell(7));
        assert_eq!(g.count(Cell(7)), 0);
    }

    #[test]
    fn test_obstacles() {
        let mut g = GridMap::new(3, 3);
        g.set_obstacle(Point::new(1, 1));
        g.set(Point::new(2, 0), Cell(5));
        assert!(g.is_obstacle(Point::new(1, 1)));
        assert!(g.is_obstacle(Point::new(2, 0)));
        assert!(!g.is_obstacle(Point::new(0, 0)));
        // Off the map counts as blocked.
        assert!(g.is_obstacle(Point::new(3, 0)));
        assert!(g.is_obstacle(Point::new(0, -1)));
    }

    #[test]
    fn test_fill_and_count() {
        let mut g = GridMap::new(5, 5);
        g.fill(Cell::OBSTACLE);
        assert_eq!(g.count(Cell::OBSTACLE), 25);
        g.set(Point::new(0, 0), Cell::FREE);
        assert_eq!(g.count(Cell::OBSTACLE), 24);
        assert_eq!(g.count(Cell::FREE), 1);
    }

    #[test]
    fn test_iter() {
        let mut g = GridMap::new(3, 2);
        g.set(Point::new(1, 0), Cell(5));
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), Cell(5)));
        assert_eq!(items[4], (Point::new(1, 1), Cell::FREE));
    }

    #[test]
    fn test_endpoints() {
        let mut g = GridMap::new(4, 4);
        assert_eq!(g.start(), Point::ZERO);
        g.set_start(Point::new(1, 2));
        g.set_goal(Point::new(3, 3));
        assert_eq!(g.start(), Point::new(1, 2));
        assert_eq!(g.goal(), Point::new(3, 3));
    }
}
