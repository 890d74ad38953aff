//! Per-call search state: node storage plus the OPEN and CLOSED sets.
//!
//! Every cell owns one slot in a flat row-major array addressed by its key
//! (`y * width + x`). A slot is in exactly one of three states, so OPEN and
//! CLOSED are disjoint by construction. Closed slots are never written
//! again, which makes a key a stable handle for parent back-references.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Point;

use crate::options::{SearchOptions, TieBreak};

/// Parent sentinel for the start node.
pub(crate) const NONE: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unseen,
    Open,
    Closed,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
    /// Bumped on every relaxation so older heap entries can be skipped.
    pub(crate) stamp: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            parent: NONE,
            state: NodeState::Unseen,
            stamp: 0,
        }
    }
}

/// A successor proposal, not yet merged into OPEN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) key: usize,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: usize,
}

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the entry with
/// the smallest `f`, then the preferred `g`, then the oldest insertion.
#[derive(Debug, Clone, Copy)]
struct NodeRef {
    key: usize,
    f: f64,
    rank: f64,
    seq: u64,
    stamp: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.rank.total_cmp(&other.rank))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

pub(crate) struct SearchContext {
    nodes: Vec<Node>,
    width: usize,
    height: usize,
    hweight: f64,
    tie_break: TieBreak,
    heap: BinaryHeap<NodeRef>,
    open_len: usize,
    closed_len: usize,
    seq: u64,
}

impl SearchContext {
    pub(crate) fn new(width: i32, height: i32, options: &SearchOptions) -> Self {
        let width = width.max(0) as usize;
        let height = height.max(0) as usize;
        Self {
            nodes: vec![Node::default(); width * height],
            width,
            height,
            hweight: options.hweight,
            tie_break: options.tie_break,
            heap: BinaryHeap::new(),
            open_len: 0,
            closed_len: 0,
            seq: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to its key. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn key(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Convert a key back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, key: usize) -> Point {
        Point::new((key % self.width) as i32, (key / self.width) as i32)
    }

    // -----------------------------------------------------------------------
    // Node access
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn node(&self, key: usize) -> &Node {
        &self.nodes[key]
    }

    #[inline]
    pub(crate) fn is_closed(&self, key: usize) -> bool {
        self.nodes[key].state == NodeState::Closed
    }

    /// Priority of a node, always derived from its current `g` and `h`.
    #[inline]
    pub(crate) fn f(&self, node: &Node) -> f64 {
        node.g + self.hweight * node.h
    }

    pub(crate) fn open_len(&self) -> usize {
        self.open_len
    }

    pub(crate) fn closed_len(&self) -> usize {
        self.closed_len
    }

    /// Iterate over `(key, node)` pairs in the given state, in key order.
    pub(crate) fn nodes_in(&self, state: NodeState) -> impl Iterator<Item = (usize, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.state == state)
    }

    // -----------------------------------------------------------------------
    // OPEN / CLOSED transitions
    // -----------------------------------------------------------------------

    /// Merge a candidate into OPEN.
    ///
    /// An undiscovered cell is always inserted. An OPEN entry is replaced
    /// only when the candidate has a smaller `f`, or an equal `f` and a
    /// preferred `g`. Closed cells are never touched. Returns whether the
    /// candidate was stored.
    pub(crate) fn relax(&mut self, cand: Candidate) -> bool {
        let hweight = self.hweight;
        let tie_break = self.tie_break;
        let node = &mut self.nodes[cand.key];
        let cand_f = cand.g + hweight * cand.h;
        match node.state {
            NodeState::Closed => return false,
            NodeState::Open => {
                let cur_f = node.g + hweight * node.h;
                let better = cand_f < cur_f || (cand_f == cur_f && tie_break.prefers(cand.g, node.g));
                if !better {
                    return false;
                }
            }
            NodeState::Unseen => self.open_len += 1,
        }

        node.g = cand.g;
        node.h = cand.h;
        node.parent = cand.parent;
        node.state = NodeState::Open;
        node.stamp = node.stamp.wrapping_add(1);
        let stamp = node.stamp;

        self.seq += 1;
        self.heap.push(NodeRef {
            key: cand.key,
            f: cand_f,
            rank: tie_break.rank(cand.g),
            seq: self.seq,
            stamp,
        });
        true
    }

    /// Remove the best OPEN node and move it to CLOSED, returning its key.
    pub(crate) fn pop_min(&mut self) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let node = &mut self.nodes[entry.key];
            // Skip stale entries.
            if node.state != NodeState::Open || node.stamp != entry.stamp {
                continue;
            }
            node.state = NodeState::Closed;
            self.open_len -= 1;
            self.closed_len += 1;
            return Some(entry.key);
        }
        None
    }
}
