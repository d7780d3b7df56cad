//! Undirected adjacency graph with shared edge payloads.
//!
//! An undirected edge must present the same payload from both endpoints so
//! that weight and identity agree in both directions. `Undirected` wraps a
//! [`Digraph`] whose payload is `Rc<E>`: one `link` call installs a
//! reciprocal arc pair sharing a single allocation, and traversals clone
//! the `Rc` handle (cheap) without copying `E`.

use std::rc::Rc;

use crate::adjacency::digraph::Digraph;
use crate::adjacency::node_id::NodeId;
use crate::graph::half::Half;
use crate::graph::visit::{
    Estimator, Flow, Graph, GraphCensus, Heuristic, OutDegree, VisitAdj, VisitAdjOk, VisitIn,
    VisitOut,
};

/// An arena-backed undirected graph with per-node data `D` and shared edge
/// payload `Rc<E>`.
///
/// # Example
/// ```rust
/// use graph_search::adjacency::Undirected;
/// use graph_search::graph::visit::{OutDegree, GraphCensus};
/// let mut g = Undirected::new();
/// let a = g.add_node("a");
/// let b = g.add_node("b");
/// g.link(a, b, 7.0);
/// assert_eq!(g.num_edges(), 1);
/// assert_eq!(g.out_degree(a), 1);
/// assert_eq!(g.out_degree(b), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Undirected<D, E = f64> {
    inner: Digraph<D, Rc<E>>,
    edges: usize,
}

impl<D, E> Default for Undirected<D, E> {
    fn default() -> Self {
        Self {
            inner: Digraph::default(),
            edges: 0,
        }
    }
}

impl<D, E> Undirected<D, E> {
    /// Creates a new, empty `Undirected` graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node carrying `data` and return its handle.
    pub fn add_node(&mut self, data: D) -> NodeId {
        self.inner.add_node(data)
    }

    /// Add an undirected edge between `a` and `b` carrying `edge`.
    ///
    /// Both endpoints see the same `Rc<E>` payload.
    pub fn link(&mut self, a: NodeId, b: NodeId, edge: E) {
        let shared = Rc::new(edge);
        self.inner.link(a, b, Rc::clone(&shared));
        self.inner.link(b, a, shared);
        self.edges += 1;
    }

    /// Borrow the data of `n`.
    pub fn node(&self, n: NodeId) -> &D {
        self.inner.node(n)
    }

    /// Mutably borrow the data of `n`.
    pub fn node_mut(&mut self, n: NodeId) -> &mut D {
        self.inner.node_mut(n)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<D, E> Graph for Undirected<D, E> {
    type Node = NodeId;
    type Edge = Rc<E>;
}

impl<D, E> VisitAdj for Undirected<D, E> {
    fn visit_adj<F>(&self, n: NodeId, visit: F)
    where
        F: FnMut(Half<NodeId, Rc<E>>),
    {
        self.inner.visit_adj(n, visit)
    }
}

impl<D, E> VisitAdjOk for Undirected<D, E> {
    fn visit_adj_ok<F>(&self, n: NodeId, visit: F) -> bool
    where
        F: FnMut(Half<NodeId, Rc<E>>) -> bool,
    {
        self.inner.visit_adj_ok(n, visit)
    }
}

impl<D, E> OutDegree for Undirected<D, E> {
    fn out_degree(&self, n: NodeId) -> usize {
        self.inner.out_degree(n)
    }
}

impl<D, E> VisitOut for Undirected<D, E> {
    fn visit_out<F>(&self, n: NodeId, visit: F) -> bool
    where
        F: FnMut(Half<NodeId, Rc<E>>) -> Flow,
    {
        self.inner.visit_out(n, visit)
    }
}

impl<D, E> VisitIn for Undirected<D, E> {
    fn visit_in<F>(&self, n: NodeId, visit: F) -> bool
    where
        F: FnMut(Half<NodeId, Rc<E>>) -> Flow,
    {
        self.inner.visit_in(n, visit)
    }
}

impl<D, E> GraphCensus for Undirected<D, E> {
    fn nodes(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        self.inner.nodes()
    }

    fn num_nodes(&self) -> usize {
        self.inner.num_nodes()
    }

    /// Each undirected edge counts once, not once per direction.
    fn num_edges(&self) -> usize {
        self.edges
    }
}

impl<D: Estimator, E> Heuristic for Undirected<D, E> {
    fn estimate(&self, from: NodeId, target: NodeId) -> f64 {
        self.inner.estimate(from, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::visit::Weighted;

    #[test]
    fn link_is_reciprocal_and_shares_payload() {
        let mut g = Undirected::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.link(a, b, 7.0);

        let mut from_a = Vec::new();
        g.visit_adj(a, |h| from_a.push(h));
        let mut from_b = Vec::new();
        g.visit_adj(b, |h| from_b.push(h));

        assert_eq!(from_a.len(), 1);
        assert_eq!(from_b.len(), 1);
        assert_eq!(from_a[0].node, b);
        assert_eq!(from_b[0].node, a);
        // same allocation, seen from both sides
        assert!(Rc::ptr_eq(&from_a[0].edge, &from_b[0].edge));
        assert_eq!(from_a[0].edge.weight(), 7.0);
    }

    #[test]
    fn edge_count_ignores_direction() {
        let mut g = Undirected::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.link(a, b, 1.0);
        g.link(b, c, 1.0);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.out_degree(b), 2);
    }
}
