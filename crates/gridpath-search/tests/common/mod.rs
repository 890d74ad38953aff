#![allow(dead_code)]

use std::collections::HashMap;

use gridpath_core::{GridMap, Point};
use gridpath_search::{Diagnostics, NodeView, SearchMap, Snapshot};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A map drawn as text: `#` obstacle, `S` start, `G` goal, anything else
/// free. Rows must share one width.
pub struct AsciiMap {
    rows: Vec<Vec<bool>>,
    start: Point,
    goal: Point,
}

impl AsciiMap {
    pub fn new(text: &str) -> Self {
        let mut rows = Vec::new();
        let mut start = Point::ZERO;
        let mut goal = Point::ZERO;
        for (y, line) in text.trim().lines().enumerate() {
            let mut row = Vec::new();
            for (x, ch) in line.trim().chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    'S' => start = p,
                    'G' => goal = p,
                    _ => {}
                }
                row.push(ch == '#');
            }
            rows.push(row);
        }
        let width = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == width), "ragged map");
        Self { rows, start, goal }
    }
}

impl SearchMap for AsciiMap {
    fn start(&self) -> Point {
        self.start
    }

    fn goal(&self) -> Point {
        self.goal
    }

    fn width(&self) -> i32 {
        self.rows[0].len() as i32
    }

    fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    fn is_obstacle(&self, p: Point) -> bool {
        !self.on_grid(p) || self.rows[p.y as usize][p.x as usize]
    }
}

/// Open map with the given endpoints.
pub fn open_map(w: i32, h: i32, start: (i32, i32), goal: (i32, i32)) -> GridMap {
    let mut map = GridMap::new(w, h);
    map.set_start(Point::new(start.0, start.1));
    map.set_goal(Point::new(goal.0, goal.1));
    map
}

/// Seeded random map with roughly `percent`% obstacles. Start and goal are
/// opposite corners and always free.
pub fn random_map(seed: u64, w: i32, h: i32, percent: u32) -> GridMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = open_map(w, h, (0, 0), (w - 1, h - 1));
    for p in map.bounds() {
        if rng.random_range(0..100u32) < percent {
            map.set_obstacle(p);
        }
    }
    map.set(map.start(), gridpath_core::Cell::FREE);
    map.set(map.goal(), gridpath_core::Cell::FREE);
    map
}

/// Records every snapshot the engine reports.
#[derive(Default)]
pub struct Recorder {
    pub steps: usize,
    pub finals: usize,
    pub violations: Vec<String>,
    pub last_closed: HashMap<Point, NodeView>,
    pub last_open_len: usize,
}

impl Diagnostics for Recorder {
    fn observe(&mut self, snapshot: &Snapshot<'_>, is_final: bool) {
        if is_final {
            self.finals += 1;
        } else {
            self.steps += 1;
        }

        let open: Vec<NodeView> = snapshot.open().collect();
        let closed: HashMap<Point, NodeView> = snapshot.closed().map(|n| (n.pos, n)).collect();
        if open.len() != snapshot.open_len() || closed.len() != snapshot.closed_len() {
            self.violations.push("reported sizes disagree with contents".into());
        }
        for n in &open {
            if closed.contains_key(&n.pos) {
                self.violations.push(format!("{} is both open and closed", n.pos));
            }
            match n.parent {
                Some(p) if !closed.contains_key(&p) => self
                    .violations
                    .push(format!("{} has a parent {} outside CLOSED", n.pos, p)),
                _ => {}
            }
        }
        for n in closed.values() {
            if let Some(p) = n.parent {
                match closed.get(&p) {
                    Some(parent) if parent.g <= n.g => {}
                    _ => self
                        .violations
                        .push(format!("closed {} has a bad parent {}", n.pos, p)),
                }
            }
        }

        self.last_open_len = open.len();
        self.last_closed = closed;
    }
}
