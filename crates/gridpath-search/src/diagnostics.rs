//! Observation hooks for OPEN and CLOSED.
//!
//! A [`Diagnostics`] sink is called once after every expansion and once
//! more when the search loop exits. It only ever sees a borrowed
//! [`Snapshot`], so it cannot influence the search.

use gridpath_core::Point;

use crate::context::{NONE, Node, NodeState, SearchContext};

/// Read-only copy of one node's search state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeView {
    pub pos: Point,
    pub g: f64,
    pub h: f64,
    pub f: f64,
    pub parent: Option<Point>,
}

/// Borrowed view of OPEN and CLOSED at one instant.
pub struct Snapshot<'a> {
    ctx: &'a SearchContext,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(ctx: &'a SearchContext) -> Self {
        Self { ctx }
    }

    fn view(&self, key: usize, node: &Node) -> NodeView {
        NodeView {
            pos: self.ctx.point(key),
            g: node.g,
            h: node.h,
            f: self.ctx.f(node),
            parent: (node.parent != NONE).then(|| self.ctx.point(node.parent)),
        }
    }

    /// Number of discovered, not yet expanded nodes.
    pub fn open_len(&self) -> usize {
        self.ctx.open_len()
    }

    /// Number of expanded nodes.
    pub fn closed_len(&self) -> usize {
        self.ctx.closed_len()
    }

    /// OPEN members in row-major order.
    pub fn open(&self) -> impl Iterator<Item = NodeView> + '_ {
        self.ctx
            .nodes_in(NodeState::Open)
            .map(|(key, node)| self.view(key, node))
    }

    /// CLOSED members in row-major order.
    pub fn closed(&self) -> impl Iterator<Item = NodeView> + '_ {
        self.ctx
            .nodes_in(NodeState::Closed)
            .map(|(key, node)| self.view(key, node))
    }

    /// The OPEN member with the smallest `f`, if any.
    pub fn best_open(&self) -> Option<NodeView> {
        self.open().min_by(|a, b| a.f.total_cmp(&b.f))
    }
}

/// Sink for per-expansion snapshots.
pub trait Diagnostics {
    /// Called after each expansion with `is_final == false`, and once when
    /// the loop exits with `is_final == true`.
    fn observe(&mut self, snapshot: &Snapshot<'_>, is_final: bool);
}

/// Discards every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    #[inline]
    fn observe(&mut self, _snapshot: &Snapshot<'_>, _is_final: bool) {}
}

/// Reports OPEN/CLOSED sizes through the `log` facade.
///
/// Per-expansion lines go to `trace`, the final line to `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn observe(&mut self, snapshot: &Snapshot<'_>, is_final: bool) {
        if is_final {
            log::debug!(
                "search finished: open={} closed={}",
                snapshot.open_len(),
                snapshot.closed_len()
            );
            return;
        }
        // Finding the best entry scans every cell.
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        match snapshot.best_open() {
            Some(best) => log::trace!(
                "step {}: open={} best={} f={:.3} g={:.3}",
                snapshot.closed_len(),
                snapshot.open_len(),
                best.pos,
                best.f,
                best.g
            ),
            None => log::trace!("step {}: open is empty", snapshot.closed_len()),
        }
    }
}
