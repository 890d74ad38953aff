//! Search configuration.
//!
//! [`SearchOptions`] is read-only for the duration of a search. Integer
//! codes for the search mode and metric are accepted through
//! `TryFrom<i32>`; unknown codes are rejected with
//! [`SearchError::InvalidConfiguration`].

use std::fmt;

use gridpath_core::Point;

use crate::distance::Metric;
use crate::error::{Result, SearchError};

/// Which flavour of best-first search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SearchType {
    /// Uninformed; runs exactly like [`SearchType::Dijkstra`] on weighted moves.
    Bfs = 0,
    /// Uninformed uniform-cost search.
    Dijkstra = 1,
    /// Weighted A*.
    #[default]
    AStar = 2,
    /// Any-angle A* with line-of-sight parent rewriting.
    Theta = 3,
}

impl SearchType {
    /// Whether the heuristic participates in the priority.
    #[inline]
    pub fn is_informed(self) -> bool {
        matches!(self, SearchType::AStar | SearchType::Theta)
    }

    /// Whether successors may be re-parented to their grandparent.
    #[inline]
    pub fn is_any_angle(self) -> bool {
        self == SearchType::Theta
    }
}

impl TryFrom<i32> for SearchType {
    type Error = SearchError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(SearchType::Bfs),
            1 => Ok(SearchType::Dijkstra),
            2 => Ok(SearchType::AStar),
            3 => Ok(SearchType::Theta),
            other => Err(SearchError::config(format!(
                "unknown search type code {other}"
            ))),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchType::Bfs => "bfs",
            SearchType::Dijkstra => "dijkstra",
            SearchType::AStar => "astar",
            SearchType::Theta => "theta",
        })
    }
}

/// Preference between two candidates with equal `f`.
///
/// The same policy orders extraction from OPEN and decides whether a
/// successor replaces an OPEN entry of equal `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TieBreak {
    /// Prefer the candidate further from the start.
    #[default]
    LargerG,
    /// Prefer the candidate closer to the start.
    SmallerG,
}

impl TieBreak {
    /// Whether `a` is strictly preferred over `b` given equal `f`.
    #[inline]
    pub fn prefers(self, a: f64, b: f64) -> bool {
        match self {
            TieBreak::LargerG => a > b,
            TieBreak::SmallerG => a < b,
        }
    }

    /// Map `g` onto a key where larger always means preferred.
    #[inline]
    pub(crate) fn rank(self, g: f64) -> f64 {
        match self {
            TieBreak::LargerG => g,
            TieBreak::SmallerG => -g,
        }
    }
}

/// Options controlling a single search call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchOptions {
    pub search_type: SearchType,
    pub metric: Metric,
    /// Multiplier applied to the heuristic in `f = g + hweight * h`.
    pub hweight: f64,
    /// Permit 8-connected moves.
    pub allow_diagonal: bool,
    /// Permit a diagonal move past one blocked flanking cell.
    pub cut_corners: bool,
    /// Permit a diagonal move between two blocked flanking cells.
    pub allow_squeeze: bool,
    pub tie_break: TieBreak,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            search_type: SearchType::AStar,
            metric: Metric::Diagonal,
            hweight: 1.0,
            allow_diagonal: true,
            cut_corners: false,
            allow_squeeze: false,
            tie_break: TieBreak::LargerG,
        }
    }
}

impl SearchOptions {
    /// Default options with the given search mode.
    pub fn new(search_type: SearchType) -> Self {
        Self {
            search_type,
            ..Self::default()
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_hweight(mut self, hweight: f64) -> Self {
        self.hweight = hweight;
        self
    }

    pub fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    pub fn with_cut_corners(mut self, allow: bool) -> Self {
        self.cut_corners = allow;
        self
    }

    pub fn with_squeeze(mut self, allow: bool) -> Self {
        self.allow_squeeze = allow;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Reject inconsistent options.
    pub fn validate(&self) -> Result<()> {
        if !self.hweight.is_finite() || self.hweight < 0.0 {
            return Err(SearchError::config(format!(
                "hweight must be a finite non-negative number, got {}",
                self.hweight
            )));
        }
        if self.allow_squeeze && !self.cut_corners {
            return Err(SearchError::config(
                "allow_squeeze requires cut_corners",
            ));
        }
        Ok(())
    }

    /// Heuristic estimate from `a` to `b`; always zero for uninformed modes.
    #[inline]
    pub fn heuristic(&self, a: Point, b: Point) -> f64 {
        if !self.search_type.is_informed() {
            return 0.0;
        }
        self.metric.distance(a, b)
    }
}
