//! Best-first search on 2D obstacle grids.
//!
//! One engine, [`GridSearch`], runs as:
//!
//! - **Dijkstra** (uniform-cost; [`SearchType::Bfs`] and
//!   [`SearchType::Dijkstra`] force the heuristic to zero)
//! - **Weighted A\*** ([`SearchType::AStar`], `f = g + hweight · h`)
//! - **Theta\*** ([`SearchType::Theta`]), which re-parents successors to
//!   their grandparent whenever it has [line of sight](line_of_sight),
//!   producing any-angle paths
//!
//! Movement is 4- or 8-connected with configurable corner cutting and
//! squeezing. Results carry the full parent-linked cell path and a
//! compressed [waypoint](waypoints) path.
//!
//! ```
//! use gridpath_core::{GridMap, Point};
//! use gridpath_search::{GridSearch, Metric, SearchOptions, SearchType};
//!
//! let mut map = GridMap::new(5, 5);
//! map.set_goal(Point::new(4, 4));
//! let engine = GridSearch::new(
//!     SearchOptions::new(SearchType::AStar).with_metric(Metric::Euclidean),
//! )?;
//! let result = engine.find_path(&map)?;
//! assert!(result.found);
//! assert_eq!(result.waypoints, vec![Point::new(0, 0), Point::new(4, 4)]);
//! # Ok::<(), gridpath_search::SearchError>(())
//! ```
//!
//! # Collaborators
//!
//! | Trait | Role |
//! |---|---|
//! | [`SearchMap`] | bounds, endpoints and obstacle queries (read-only) |
//! | [`Diagnostics`] | observes OPEN and CLOSED after each expansion |

mod context;
mod diagnostics;
mod distance;
mod error;
mod los;
mod options;
mod path;
mod search;
mod successors;
mod theta;
mod traits;

pub use diagnostics::{Diagnostics, LogDiagnostics, NoDiagnostics, NodeView, Snapshot};
pub use distance::{Metric, chebyshev, euclidean, manhattan, octile};
pub use error::{Result, SearchError};
pub use los::line_of_sight;
pub use options::{SearchOptions, SearchType, TieBreak};
pub use path::waypoints;
pub use search::{GridSearch, SearchResult};
pub use successors::{is_legal_move, step_cost};
pub use traits::SearchMap;
