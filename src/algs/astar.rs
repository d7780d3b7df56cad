//! A* and algorithm A searches.
//!
//! [`a_star_a`] implements both algorithm A and A*; the difference is
//! strictly in the heuristic the caller provides through
//! [`Heuristic`](crate::graph::visit::Heuristic). An *admissible* estimate
//! (never exceeding the true remaining distance) makes it A* and the
//! returned path is shortest; an inadmissible estimate makes it algorithm
//! A, which still returns a path whose quality degrades gracefully with
//! the estimate's.
//!
//! [`a_star_m`] additionally assumes the estimate is *monotonic*
//! (`estimate(a, t) <= weight(a, b) + estimate(b, t)` for every edge), in
//! which case a node popped from the open heap is final and never needs
//! reconsideration: a closed set replaces algorithm A's ability to re-open
//! finalized nodes.
//!
//! Both searches order the open heap on `f = g + h` and terminate when the
//! end node is popped, not when it is first reached. On equal `g`, the
//! path with fewer hops wins, which makes results deterministic on graphs
//! with equal-weight alternatives.

use crate::algs::tent_heap::TentHeap;
use crate::algs::trace_path;
use crate::graph::half::{Half, PathStep};
use crate::graph::visit::{Heuristic, VisitAdj, Weighted};
use crate::perf::FastMap;

/// Per-reached-node state.
struct Reached<N, E> {
    /// Best known path distance from the start node.
    g: f64,
    /// Number of nodes on the best known path.
    hops: usize,
    /// Predecessor half the best known path arrives by.
    prev: Option<(N, E)>,
    /// Slot on the open heap, while the node is open.
    slot: Option<usize>,
    /// Finalized under the monotonicity promise; never set by `a_star_a`.
    closed: bool,
}

fn engine<G>(
    graph: &G,
    start: G::Node,
    end: G::Node,
    monotonic: bool,
) -> (Vec<PathStep<G::Node, G::Edge>>, f64)
where
    G: VisitAdj + Heuristic,
    G::Edge: Weighted,
{
    let mut reached: FastMap<G::Node, Reached<G::Node, G::Edge>> = FastMap::default();
    let mut heap: TentHeap<G::Node> = TentHeap::new();

    // the start node is reached initially, at its heuristic estimate
    let slot = heap.push(start, graph.estimate(start, end), 0.0, 1);
    reached.insert(
        start,
        Reached {
            g: 0.0,
            hops: 1,
            prev: None,
            slot: Some(slot),
            closed: false,
        },
    );

    while let Some(slot) = heap.pop() {
        let record = heap.record(slot);
        let best = record.node;
        let best_g = record.dist;
        let best_hops = record.hops;
        heap.release(slot);
        if let Some(rn) = reached.get_mut(&best) {
            rn.slot = None;
            if monotonic {
                rn.closed = true;
            }
        }

        if best == end {
            let path = trace_path(
                |n| reached.get(&n).and_then(|rn| rn.prev.clone()),
                best,
                best_hops,
            );
            return (path, best_g);
        }

        graph.visit_adj(best, |Half { edge, node: nb }| {
            let w = edge.weight();
            crate::debug_invariants!(crate::algs::validate_weight(w), "edge weight");
            let g = best_g + w;
            match reached.get_mut(&nb) {
                Some(rn) => {
                    if rn.closed {
                        // monotonicity means f cannot improve
                        return;
                    }
                    if g > rn.g {
                        return; // no better than the known path
                    }
                    if g == rn.g && best_hops + 1 >= rn.hops {
                        // same length, at least as many hops: keep the old one
                        return;
                    }
                    rn.prev = Some((best, edge));
                    rn.g = g;
                    rn.hops = best_hops + 1;
                    let f = g + graph.estimate(nb, end);
                    match rn.slot {
                        Some(slot) => heap.decrease(slot, f, g, rn.hops),
                        // node was already finalized once; algorithm A
                        // re-opens it with the shorter path
                        None => rn.slot = Some(heap.push(nb, f, g, rn.hops)),
                    }
                }
                None => {
                    // first visit to this node
                    let f = g + graph.estimate(nb, end);
                    let slot = heap.push(nb, f, g, best_hops + 1);
                    reached.insert(
                        nb,
                        Reached {
                            g,
                            hops: best_hops + 1,
                            prev: Some((best, edge)),
                            slot: Some(slot),
                            closed: false,
                        },
                    );
                }
            }
        });
    }
    (Vec::new(), f64::INFINITY) // no path
}

/// Find a path between two nodes, guided by a heuristic estimate.
///
/// With an admissible estimate this is A* and the returned path is a
/// shortest path; with an inadmissible one it is algorithm A and the path
/// may be suboptimal. Result shape matches
/// [`dijkstra_shortest_path`](crate::algs::dijkstra::dijkstra_shortest_path):
/// `(edge, node)` steps plus the total distance, or `(empty, +inf)` when
/// `end` is unreachable.
pub fn a_star_a<G>(graph: &G, start: G::Node, end: G::Node) -> (Vec<PathStep<G::Node, G::Edge>>, f64)
where
    G: VisitAdj + Heuristic,
    G::Edge: Weighted,
{
    engine(graph, start, end, false)
}

/// A* optimized for monotonic estimates.
///
/// The caller promises `estimate(a, t) <= weight(a, b) + estimate(b, t)`
/// for every edge `(a, b)`. Under that promise a popped node is final, so
/// the search maintains a closed set and never revisits; handing a
/// non-monotonic estimate to this entry point can return suboptimal paths.
pub fn a_star_m<G>(graph: &G, start: G::Node, end: G::Node) -> (Vec<PathStep<G::Node, G::Edge>>, f64)
where
    G: VisitAdj + Heuristic,
    G::Edge: Weighted,
{
    engine(graph, start, end, true)
}
