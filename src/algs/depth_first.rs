//! Recursive depth-first traversal.

use crate::graph::visit::VisitAdjOk;
use crate::perf::FastSet;

/// Traverse nodes reachable from `start` in depth-first pre-order.
///
/// The visitor is called for each node with the current depth, starting
/// with `(start, 0)`; depth increases by one per recursion. A node is
/// visited at most once, so cycles and self-loops are safe. If the visitor
/// returns `false` for any node the traversal stops and `false` propagates
/// up immediately; otherwise `true` is returned.
pub fn depth_first<G, V>(graph: &G, start: G::Node, mut visit: V) -> bool
where
    G: VisitAdjOk,
    V: FnMut(G::Node, usize) -> bool,
{
    let mut seen: FastSet<G::Node> = FastSet::default();
    recurse(graph, start, 0, &mut seen, &mut visit)
}

fn recurse<G, V>(
    graph: &G,
    n: G::Node,
    depth: usize,
    seen: &mut FastSet<G::Node>,
    visit: &mut V,
) -> bool
where
    G: VisitAdjOk,
    V: FnMut(G::Node, usize) -> bool,
{
    if !seen.insert(n) {
        return true;
    }
    if !visit(n, depth) {
        return false;
    }
    graph.visit_adj_ok(n, |half| recurse(graph, half.node, depth + 1, seen, visit))
}
