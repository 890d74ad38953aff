use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use gridpath_core::Point;

use crate::error::SearchError;

#[inline]
fn deltas(a: Point, b: Point) -> (f64, f64) {
    (f64::from((a.x - b.x).abs()), f64::from((a.y - b.y).abs()))
}

/// Octile distance: diagonal steps cost √2, straight steps cost 1.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.min(dy) * SQRT_2 + (dx - dy).abs()
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx + dy
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.hypot(dy)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.max(dy)
}

/// Distance metric used for heuristics and any-angle segment costs.
///
/// The discriminants are the integer codes accepted by
/// [`Metric::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Metric {
    /// Octile distance.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "octile"))]
    Diagonal = 0,
    Manhattan = 1,
    Euclidean = 2,
    Chebyshev = 3,
}

impl Metric {
    /// Distance from `a` to `b` under this metric.
    #[inline]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            Metric::Diagonal => octile(a, b),
            Metric::Manhattan => manhattan(a, b),
            Metric::Euclidean => euclidean(a, b),
            Metric::Chebyshev => chebyshev(a, b),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Metric::Diagonal => "diagonal",
            Metric::Manhattan => "manhattan",
            Metric::Euclidean => "euclidean",
            Metric::Chebyshev => "chebyshev",
        }
    }
}

impl TryFrom<i32> for Metric {
    type Error = SearchError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Metric::Diagonal),
            1 => Ok(Metric::Manhattan),
            2 => Ok(Metric::Euclidean),
            3 => Ok(Metric::Chebyshev),
            other => Err(SearchError::config(format!("unknown metric code {other}"))),
        }
    }
}

impl FromStr for Metric {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diagonal" | "octile" => Ok(Metric::Diagonal),
            "manhattan" => Ok(Metric::Manhattan),
            "euclidean" => Ok(Metric::Euclidean),
            "chebyshev" => Ok(Metric::Chebyshev),
            _ => Err(SearchError::config(format!("unknown metric \"{s}\""))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
