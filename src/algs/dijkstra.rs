//! Dijkstra shortest-path searches.
//!
//! One engine drives three public entry points: the single-pair search
//! ([`dijkstra_shortest_path`]), the single-source predecessor map
//! ([`dijkstra_all_paths`]), and the streaming arborescence variant
//! ([`dijkstra_arborescence`]). The loop is the classic one (relax the
//! current node's half-edges, then finalize the tentative node with the
//! smallest distance) with two structural points worth naming:
//!
//! - The start node is finalized immediately and never enters the heap, so
//!   the very first iteration relaxes its neighbors without a special case.
//! - Heap slots are recycled through the free list the moment a node is
//!   finalized; see [`tent_heap`](crate::algs::tent_heap).
//!
//! Within one search, nodes are finalized in non-decreasing distance order.
//! Edge weights must be non-negative and finite; violations leave the
//! result undefined (checked in debug builds).

use crate::algs::tent_heap::TentHeap;
use crate::algs::trace_path;
use crate::graph::half::{FromHalf, Half, PathStep};
use crate::graph::visit::{ArborBuilder, VisitAdj, Weighted};
use crate::perf::FastMap;

/// Search status of a reached node. Nodes the search has not discovered
/// are absent from the reached map entirely.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Status {
    /// A path is known but may still improve; the payload is the node's
    /// slot in the tentative heap.
    Tentative(usize),
    /// The shortest path is finalized.
    Done,
}

/// Per-reached-node state: status plus the predecessor half the best known
/// path arrives by.
struct Reached<N, E> {
    status: Status,
    prev: Option<(N, E)>,
}

/// Hook invoked as each node is finalized, in non-decreasing distance
/// order. `from` is the predecessor node and arriving edge on the shortest
/// path, `None` for the start node.
trait DoneSink<N, E> {
    fn done(&mut self, node: N, from: Option<(N, &E)>);
}

/// Single-pair searches do not observe finalization.
struct NoSink;

impl<N, E> DoneSink<N, E> for NoSink {
    fn done(&mut self, _node: N, _from: Option<(N, &E)>) {}
}

/// Accumulates the predecessor map for [`dijkstra_all_paths`].
struct MapSink<N, E> {
    from: FastMap<N, FromHalf<N, E>>,
}

impl<N, E> DoneSink<N, E> for MapSink<N, E>
where
    N: Copy + Eq + std::hash::Hash + Ord,
    E: Clone,
{
    fn done(&mut self, node: N, from: Option<(N, &E)>) {
        let half = FromHalf {
            from: from.map(|(p, _)| p),
            edge: from.map(|(_, e)| e.clone()),
        };
        self.from.insert(node, half);
    }
}

/// Streams finalized nodes into a caller's [`ArborBuilder`], remembering
/// each node's tree handle so its successors link to the tree rather than
/// to the searched graph.
struct ArborSink<'b, B, N, T> {
    builder: &'b mut B,
    trees: FastMap<N, T>,
    root: Option<T>,
}

impl<N, E, B> DoneSink<N, E> for ArborSink<'_, B, N, B::Tree>
where
    N: Copy + Eq + std::hash::Hash + Ord,
    B: ArborBuilder<N, E>,
{
    fn done(&mut self, node: N, from: Option<(N, &E)>) {
        let tree = match from {
            None => self.builder.link_from(None, node),
            Some((prev, edge)) => match self.trees.get(&prev) {
                Some(pt) => self.builder.link_from(Some((pt, edge)), node),
                // a finalized node's predecessor is always finalized first
                None => return,
            },
        };
        if self.root.is_none() {
            self.root = Some(tree.clone());
        }
        self.trees.insert(node, tree);
    }
}

/// The shared loop. Runs until `end` is finalized (when given) or the
/// tentative set is exhausted; reports every finalization to `sink`.
///
/// Returns the found path and its distance for single-pair searches, or
/// `(empty, +inf)` when `end` is unreachable or absent.
fn engine<G, S>(
    graph: &G,
    start: G::Node,
    end: Option<G::Node>,
    sink: &mut S,
) -> (Vec<PathStep<G::Node, G::Edge>>, f64)
where
    G: VisitAdj,
    G::Edge: Weighted,
    S: DoneSink<G::Node, G::Edge>,
{
    let mut reached: FastMap<G::Node, Reached<G::Node, G::Edge>> = FastMap::default();
    // the start node is Done from the outset and skips the heap
    reached.insert(
        start,
        Reached {
            status: Status::Done,
            prev: None,
        },
    );
    sink.done(start, None);

    let mut heap: TentHeap<G::Node> = TentHeap::new();
    let mut current = start;
    let mut current_dist = 0.0_f64;
    let mut current_hops = 1_usize; // the start node's path is itself

    loop {
        graph.visit_adj(current, |Half { edge, node: nb }| {
            let w = edge.weight();
            crate::debug_invariants!(crate::algs::validate_weight(w), "edge weight");
            let dist = current_dist + w;
            match reached.get_mut(&nb) {
                Some(rn) => match rn.status {
                    Status::Done => {} // finalized, cannot improve
                    Status::Tentative(slot) => {
                        if dist < heap.record(slot).dist {
                            // shorter path through `current`: re-point and reheap
                            rn.prev = Some((current, edge));
                            heap.decrease(slot, dist, dist, current_hops + 1);
                        }
                    }
                },
                None => {
                    // first visit to this node
                    let slot = heap.push(nb, dist, dist, current_hops + 1);
                    reached.insert(
                        nb,
                        Reached {
                            status: Status::Tentative(slot),
                            prev: Some((current, edge)),
                        },
                    );
                }
            }
        });

        if end == Some(current) {
            let path = trace_path(
                |n| reached.get(&n).and_then(|rn| rn.prev.clone()),
                current,
                current_hops,
            );
            return (path, current_dist);
        }

        let slot = match heap.pop() {
            Some(slot) => slot,
            // no more reachable nodes
            None => return (Vec::new(), f64::INFINITY),
        };
        let record = heap.record(slot);
        current = record.node;
        current_dist = record.dist;
        current_hops = record.hops;
        heap.release(slot);
        if let Some(rn) = reached.get_mut(&current) {
            rn.status = Status::Done;
            let from = rn.prev.clone();
            sink.done(current, from.as_ref().map(|(p, e)| (*p, e)));
        }
    }
}

/// Find a shortest path between two nodes.
///
/// The path length minimized is the sum of edge weights along the path,
/// which must be non-negative and finite. The result is the path as
/// `(edge, node)` steps, the first being the start node with no edge,
/// plus the total distance. If `end` cannot be reached the path is empty
/// and the distance `+inf`.
///
/// When `start == end` the path is the single start step at distance 0.
///
/// # Example
/// ```rust
/// use graph_search::adjacency::Digraph;
/// use graph_search::algs::dijkstra::dijkstra_shortest_path;
///
/// let mut g = Digraph::new();
/// let a = g.add_node("a");
/// let b = g.add_node("b");
/// let c = g.add_node("c");
/// g.link(a, b, 7.0);
/// g.link(a, c, 9.0);
/// g.link(b, c, 1.0);
/// let (path, dist) = dijkstra_shortest_path(&g, a, c);
/// assert_eq!(dist, 8.0);
/// let names: Vec<_> = path.iter().map(|s| *g.node(s.node)).collect();
/// assert_eq!(names, vec!["a", "b", "c"]);
/// ```
pub fn dijkstra_shortest_path<G>(
    graph: &G,
    start: G::Node,
    end: G::Node,
) -> (Vec<PathStep<G::Node, G::Edge>>, f64)
where
    G: VisitAdj,
    G::Edge: Weighted,
{
    engine(graph, start, Some(end), &mut NoSink)
}

/// Find shortest paths from `start` to every reachable node.
///
/// Returns the predecessor map: each reachable node maps to the
/// [`FromHalf`] its shortest path arrives by, with `start` mapping to the
/// root entry `{from: None, edge: None}`. Following `from` links from any
/// key terminates at `start`.
pub fn dijkstra_all_paths<G>(graph: &G, start: G::Node) -> FastMap<G::Node, FromHalf<G::Node, G::Edge>>
where
    G: VisitAdj,
    G::Edge: Weighted,
{
    let mut sink = MapSink {
        from: FastMap::default(),
    };
    engine(graph, start, None, &mut sink);
    sink.from
}

/// Find shortest paths from `start` to every reachable node, streaming the
/// resulting tree into `builder`.
///
/// `builder.link_from` is invoked once per reachable node in
/// non-decreasing distance order; the returned handle of the first call
/// (the start node) is the arborescence root and is returned here. Prefer
/// [`dijkstra_all_paths`] unless results must flow into a custom tree
/// structure as they are found.
pub fn dijkstra_arborescence<G, B>(graph: &G, start: G::Node, builder: &mut B) -> Option<B::Tree>
where
    G: VisitAdj,
    G::Edge: Weighted,
    B: ArborBuilder<G::Node, G::Edge>,
{
    let mut sink = ArborSink {
        builder,
        trees: FastMap::default(),
        root: None,
    };
    engine(graph, start, None, &mut sink);
    sink.root
}
