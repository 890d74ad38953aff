//! **gridpath-core**: geometry primitives and obstacle maps.
//!
//! This crate provides the types shared by the *gridpath* search engine:
//! integer points, half-open rectangles, and a row-major obstacle grid with
//! start and goal cells.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Cell, GridMap};
