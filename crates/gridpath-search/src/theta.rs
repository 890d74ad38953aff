use crate::context::{Candidate, NONE, SearchContext};
use crate::los::line_of_sight;
use crate::options::SearchOptions;
use crate::traits::SearchMap;

/// Any-angle parent rewriting.
///
/// If the candidate's parent has a parent of its own and that grandparent
/// sees the candidate, the candidate is re-parented to the grandparent and
/// its `g` becomes `grandparent.g + metric(grandparent, candidate)`.
/// Line of sight is the only condition, so a rewrite may produce a unit
/// diagonal segment even when `allow_diagonal` is off. Outside
/// [`SearchType::Theta`](crate::SearchType::Theta) the candidate is returned
/// unchanged.
pub(crate) fn rewrite_parent<M: SearchMap + ?Sized>(
    map: &M,
    options: &SearchOptions,
    ctx: &SearchContext,
    mut cand: Candidate,
) -> Candidate {
    if !options.search_type.is_any_angle() || cand.parent == NONE {
        return cand;
    }
    let grand = ctx.node(cand.parent).parent;
    if grand == NONE || grand == cand.key {
        return cand;
    }
    let gp = ctx.point(grand);
    let cp = ctx.point(cand.key);
    if line_of_sight(map, gp, cp, options.cut_corners) {
        cand.g = ctx.node(grand).g + options.metric.distance(gp, cp);
        cand.parent = grand;
    }
    cand
}
