//! Breadth-first traversal, direction-optimizing and simple.
//!
//! [`breadth_first`] alternates between two ways of advancing a frontier:
//!
//! - **top-down**: scan the frontier's outward adjacencies and claim
//!   unvisited neighbors, cheap while the frontier is small;
//! - **bottom-up**: scan the *unvisited* nodes' inward adjacencies for a
//!   frontier member, cheap when the frontier is a large share of the
//!   graph, because each unvisited node stops at its first hit
//!   ([`Flow::Found`]).
//!
//! Switching is threshold-driven: after a top-down step whose next
//! frontier's outward edge budget `mf` exceeds `m / top_down_limit`, go
//! bottom-up; once the frontier shrinks below `n / (bottom_up_factor * m / n)`,
//! come back. The defaults are the constants from Beamer's
//! direction-optimizing BFS and can be overridden through
//! [`DirectionPolicy`] for tuning.
//!
//! Every visited node is emitted to the visitor exactly once together with
//! its level, which equals the fewest edges on any path from the start.
//! The visitor returning `false` aborts the traversal.

use crate::graph::half::Half;
use crate::graph::visit::{Flow, GraphCensus, OutDegree, VisitAdjOk, VisitIn, VisitOut};
use crate::perf::{FastMap, FastSet};
use crate::search_error::GraphSearchError;

/// Switching thresholds for direction-optimizing traversal.
///
/// Both fields must be non-zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DirectionPolicy {
    /// A top-down step whose next frontier's outward edge budget exceeds
    /// `num_edges / top_down_limit` triggers the switch to bottom-up.
    pub top_down_limit: usize,
    /// Bottom-up continues until the frontier shrinks below
    /// `num_nodes / (bottom_up_factor * mean_degree)`.
    pub bottom_up_factor: usize,
}

impl DirectionPolicy {
    /// The heuristic constants from the Beamer direction-optimizing BFS.
    pub const BEAMER: Self = Self {
        top_down_limit: 10,
        bottom_up_factor: 14,
    };
}

impl Default for DirectionPolicy {
    fn default() -> Self {
        Self::BEAMER
    }
}

/// Direction-optimizing breadth-first traversal with the default policy.
///
/// Emits `(node, level)` to the visitor for every node reachable from
/// `start`, levels in non-decreasing order. Returns the predecessor map
/// (each visited node maps to the frontier node it was claimed by, `None`
/// for the start) and whether the traversal ran to completion; `false`
/// means the visitor aborted it.
///
/// # Errors
/// [`GraphSearchError::EmptyCensus`] if the census enumerates no nodes,
/// [`GraphSearchError::StartNotInCensus`] if it does not contain `start`.
pub fn breadth_first<G, V>(
    graph: &G,
    start: G::Node,
    visit: V,
) -> Result<(FastMap<G::Node, Option<G::Node>>, bool), GraphSearchError>
where
    G: VisitOut + VisitIn + OutDegree + GraphCensus,
    V: FnMut(G::Node, usize) -> bool,
{
    breadth_first_with_policy(graph, start, visit, DirectionPolicy::default())
}

/// [`breadth_first`] with explicit switching thresholds.
pub fn breadth_first_with_policy<G, V>(
    graph: &G,
    start: G::Node,
    mut visit: V,
    policy: DirectionPolicy,
) -> Result<(FastMap<G::Node, Option<G::Node>>, bool), GraphSearchError>
where
    G: VisitOut + VisitIn + OutDegree + GraphCensus,
    V: FnMut(G::Node, usize) -> bool,
{
    let mut unvisited: FastSet<G::Node> = graph.nodes().collect();
    let n = unvisited.len();
    if n == 0 {
        return Err(GraphSearchError::EmptyCensus);
    }
    if !unvisited.remove(&start) {
        return Err(GraphSearchError::StartNotInCensus(format!("{start:?}")));
    }
    let m = graph.num_edges();
    // switch points; when the scaled mean degree rounds to zero (edgeless
    // or ultra-sparse graph) the switch-back threshold clamps to n so a
    // bottom-up excursion returns to top-down after one step instead of
    // dividing by zero
    let ctb = m / policy.top_down_limit.max(1);
    let k = policy.bottom_up_factor.saturating_mul(m) / n;
    let cbt = if k == 0 { n } else { n / k };

    let mut visited: FastMap<G::Node, Option<G::Node>> = FastMap::default();
    let mut level_num = 0usize;
    if !visit(start, level_num) {
        return Ok((visited, false));
    }
    visited.insert(start, None);
    let mut frontier = vec![start];

    loop {
        level_num += 1;
        let (next, mf) = match top_down(graph, level_num, &frontier, &mut visit, &mut visited, &mut unvisited) {
            Some(step) => step,
            None => return Ok((visited, false)),
        };
        if next.is_empty() {
            return Ok((visited, true));
        }
        if mf <= ctb {
            // stick with top-down
            frontier = next;
            continue;
        }
        // switch to bottom-up
        let mut frontier_set: FastSet<G::Node> = next.into_iter().collect();
        loop {
            level_num += 1;
            let (next, _mf) =
                match bottom_up(graph, level_num, &frontier_set, &mut visit, &mut visited, &mut unvisited) {
                    Some(step) => step,
                    None => return Ok((visited, false)),
                };
            if next.is_empty() {
                return Ok((visited, true));
            }
            if next.len() < cbt {
                // switch back to top-down
                frontier = next.into_iter().collect();
                break;
            }
            frontier_set = next;
        }
    }
}

/// One top-down step: claim unvisited outward neighbors of the frontier.
///
/// Returns the next frontier and its outward edge budget, or `None` when
/// the visitor aborted.
fn top_down<G, V>(
    graph: &G,
    level_num: usize,
    frontier: &[G::Node],
    visit: &mut V,
    visited: &mut FastMap<G::Node, Option<G::Node>>,
    unvisited: &mut FastSet<G::Node>,
) -> Option<(Vec<G::Node>, usize)>
where
    G: VisitOut + OutDegree,
    V: FnMut(G::Node, usize) -> bool,
{
    let mut next = Vec::new();
    let mut mf_next = 0usize;
    for &v in frontier {
        let ok = graph.visit_out(v, |half: Half<G::Node, G::Edge>| {
            let nb = half.node;
            if visited.contains_key(&nb) {
                return Flow::Continue;
            }
            if !visit(nb, level_num) {
                return Flow::Stop;
            }
            visited.insert(nb, Some(v));
            unvisited.remove(&nb);
            next.push(nb);
            mf_next += graph.out_degree(nb);
            Flow::Continue
        });
        if !ok {
            return None;
        }
    }
    Some((next, mf_next))
}

/// One bottom-up step: each unvisited node scans its inward adjacencies
/// for a frontier member and claims itself when one turns up.
///
/// Returns the next frontier and its outward edge budget, or `None` when
/// the visitor aborted.
fn bottom_up<G, V>(
    graph: &G,
    level_num: usize,
    frontier: &FastSet<G::Node>,
    visit: &mut V,
    visited: &mut FastMap<G::Node, Option<G::Node>>,
    unvisited: &mut FastSet<G::Node>,
) -> Option<(FastSet<G::Node>, usize)>
where
    G: VisitIn + OutDegree,
    V: FnMut(G::Node, usize) -> bool,
{
    let mut next = FastSet::default();
    let mut mf_next = 0usize;
    // candidates leave `unvisited` as they claim themselves, so scan a
    // snapshot
    let candidates: Vec<G::Node> = unvisited.iter().copied().collect();
    for v in candidates {
        let ok = graph.visit_in(v, |half: Half<G::Node, G::Edge>| {
            let nb = half.node;
            if !frontier.contains(&nb) {
                return Flow::Continue;
            }
            if !visit(v, level_num) {
                return Flow::Stop;
            }
            visited.insert(v, Some(nb));
            unvisited.remove(&v);
            next.insert(v);
            mf_next += graph.out_degree(v);
            // one frontier parent is enough; end this node's inward scan
            Flow::Found
        });
        if !ok {
            return None;
        }
    }
    Some((next, mf_next))
}

/// Plain frontier-by-frontier breadth-first traversal.
///
/// Visits every node reachable from `start` exactly once, top-down only,
/// without level bookkeeping. Returns `false` iff the visitor aborted the
/// traversal.
pub fn breadth_first_simple<G, V>(graph: &G, start: G::Node, mut visit: V) -> bool
where
    G: VisitAdjOk,
    V: FnMut(G::Node) -> bool,
{
    if !visit(start) {
        return false;
    }
    let mut visited: FastSet<G::Node> = FastSet::default();
    visited.insert(start);
    let mut frontier = vec![start];
    let mut next = Vec::new();
    while !frontier.is_empty() {
        for &v in &frontier {
            let ok = graph.visit_adj_ok(v, |half| {
                let nb = half.node;
                if visited.insert(nb) {
                    if !visit(nb) {
                        return false;
                    }
                    next.push(nb);
                }
                true
            });
            if !ok {
                return false;
            }
        }
        std::mem::swap(&mut frontier, &mut next);
        next.clear();
    }
    true
}
