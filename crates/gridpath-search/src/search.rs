use std::time::{Duration, Instant};

use gridpath_core::Point;

use crate::context::{Candidate, NONE, SearchContext};
use crate::diagnostics::{Diagnostics, NoDiagnostics, Snapshot};
use crate::error::{Result, SearchError};
use crate::options::SearchOptions;
use crate::path;
use crate::successors::Successors;
use crate::theta::rewrite_parent;
use crate::traits::SearchMap;

/// Outcome of one search call. All data is owned by the caller.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Whether the goal was expanded.
    pub found: bool,
    /// `g` of the goal, or 0 when not found.
    pub cost: f64,
    /// Wall time spent searching and rebuilding the path.
    pub elapsed: Duration,
    /// `|OPEN| + |CLOSED|` at termination.
    pub nodes_discovered: usize,
    /// `|CLOSED|` at termination.
    pub expansion_steps: usize,
    /// Every parent-linked cell from start to goal.
    pub path: Vec<Point>,
    /// `path` reduced to its direction changes.
    pub waypoints: Vec<Point>,
}

impl SearchResult {
    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Best-first grid search engine.
///
/// The engine holds only validated options. Each call builds its own OPEN
/// and CLOSED sets, so a single engine can serve any number of searches,
/// including concurrent ones over a shared map.
#[derive(Debug, Clone)]
pub struct GridSearch {
    options: SearchOptions,
}

impl GridSearch {
    /// Create an engine, rejecting inconsistent options.
    pub fn new(options: SearchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this engine runs with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search from `map.start()` to `map.goal()`.
    pub fn find_path<M: SearchMap + ?Sized>(&self, map: &M) -> Result<SearchResult> {
        self.find_path_with(map, &mut NoDiagnostics)
    }

    /// Search from `map.start()` to `map.goal()`, reporting OPEN and CLOSED
    /// to `diagnostics` after every expansion and once at the end.
    pub fn find_path_with<M, D>(&self, map: &M, diagnostics: &mut D) -> Result<SearchResult>
    where
        M: SearchMap + ?Sized,
        D: Diagnostics + ?Sized,
    {
        let started = Instant::now();
        let opts = &self.options;
        let start = map.start();
        let goal = map.goal();

        let mut ctx = SearchContext::new(map.width(), map.height(), opts);
        let endpoint_key = |p: Point| {
            if !map.on_grid(p) {
                return Err(SearchError::EndpointOffGrid { point: p });
            }
            ctx.key(p).ok_or(SearchError::EndpointOffGrid { point: p })
        };
        let start_key = endpoint_key(start)?;
        let goal_key = endpoint_key(goal)?;

        log::debug!(
            "{} search from {} to {} on {}x{} map (metric={}, hweight={})",
            opts.search_type,
            start,
            goal,
            map.width(),
            map.height(),
            opts.metric,
            opts.hweight
        );

        // A blocked start is never seeded, so OPEN is empty from the outset.
        if start == goal || map.traversable(start) {
            ctx.relax(Candidate {
                key: start_key,
                g: 0.0,
                h: opts.heuristic(start, goal),
                parent: NONE,
            });
        } else {
            log::debug!("start {} is blocked", start);
        }

        let mut successors = Successors::new();
        let found = loop {
            let Some(current) = ctx.pop_min() else {
                break false;
            };
            if current == goal_key {
                break true;
            }

            for &cand in successors.expand(map, opts, &ctx, current, goal) {
                let cand = rewrite_parent(map, opts, &ctx, cand);
                ctx.relax(cand);
            }

            diagnostics.observe(&Snapshot::new(&ctx), false);
        };
        diagnostics.observe(&Snapshot::new(&ctx), true);

        let (cost, path) = if found {
            (ctx.node(goal_key).g, path::reconstruct(&ctx, goal_key))
        } else {
            (0.0, Vec::new())
        };
        let elapsed = started.elapsed();
        let waypoints = path::waypoints(&path);

        let result = SearchResult {
            found,
            cost,
            elapsed,
            nodes_discovered: ctx.open_len() + ctx.closed_len(),
            expansion_steps: ctx.closed_len(),
            path,
            waypoints,
        };
        log::debug!(
            "search {}: cost={:.3} discovered={} steps={} path={} waypoints={} in {:?}",
            if result.found { "found" } else { "exhausted" },
            result.cost,
            result.nodes_discovered,
            result.expansion_steps,
            result.path.len(),
            result.waypoints.len(),
            result.elapsed
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::options::SearchType;
    use gridpath_core::GridMap;

    fn open_map(w: i32, h: i32, start: (i32, i32), goal: (i32, i32)) -> GridMap {
        let mut map = GridMap::new(w, h);
        map.set_start(Point::new(start.0, start.1));
        map.set_goal(Point::new(goal.0, goal.1));
        map
    }

    #[test]
    fn rejects_invalid_options() {
        let err = GridSearch::new(SearchOptions::default().with_hweight(-2.0)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfiguration { .. }));
    }

    #[test]
    fn off_grid_endpoints_fail_fast() {
        let engine = GridSearch::new(SearchOptions::default()).unwrap();
        let map = open_map(3, 3, (0, 0), (3, 1));
        assert_eq!(
            engine.find_path(&map),
            Err(SearchError::EndpointOffGrid {
                point: Point::new(3, 1)
            })
        );
        let map = open_map(3, 3, (-1, 0), (1, 1));
        assert!(engine.find_path(&map).is_err());
    }

    #[test]
    fn start_equals_goal() {
        let engine = GridSearch::new(SearchOptions::default()).unwrap();
        let map = open_map(4, 4, (2, 1), (2, 1));
        let r = engine.find_path(&map).unwrap();
        assert!(r.found);
        assert_eq!(r.cost, 0.0);
        assert_eq!(r.path, vec![Point::new(2, 1)]);
        assert_eq!(r.waypoints, vec![Point::new(2, 1)]);
        assert_eq!(r.expansion_steps, 1);
        assert_eq!(r.nodes_discovered, 1);
    }

    #[test]
    fn blocked_start_is_not_expanded() {
        let engine = GridSearch::new(SearchOptions::default()).unwrap();
        let mut map = open_map(4, 1, (0, 0), (3, 0));
        map.set_obstacle(Point::new(0, 0));
        let r = engine.find_path(&map).unwrap();
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.expansion_steps, 0);
        assert_eq!(r.nodes_discovered, 0);

        // Standing on the goal still counts, blocked or not.
        let mut map = open_map(4, 1, (2, 0), (2, 0));
        map.set_obstacle(Point::new(2, 0));
        let r = engine.find_path(&map).unwrap();
        assert!(r.found);
        assert_eq!(r.path, vec![Point::new(2, 0)]);
    }

    #[test]
    fn straight_corridor() {
        let engine = GridSearch::new(SearchOptions::new(SearchType::Dijkstra)).unwrap();
        let map = open_map(6, 1, (0, 0), (5, 0));
        let r = engine.find_path(&map).unwrap();
        assert!(r.found);
        assert_eq!(r.cost, 5.0);
        assert_eq!(r.path.len(), 6);
        assert_eq!(r.waypoints, vec![Point::new(0, 0), Point::new(5, 0)]);
        assert!(r.elapsed_secs() >= 0.0);
    }

    #[test]
    fn counts_match_open_and_closed() {
        let engine =
            GridSearch::new(SearchOptions::new(SearchType::AStar).with_metric(Metric::Euclidean))
                .unwrap();
        let map = open_map(5, 5, (0, 0), (4, 4));
        let r = engine.find_path(&map).unwrap();
        assert!(r.found);
        assert!(r.expansion_steps >= 5);
        assert!(r.nodes_discovered >= r.expansion_steps);
    }
}
