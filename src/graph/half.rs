//! Half-edges and path elements: the value types of the search contract.
//!
//! An adjacency is always reported as a [`Half`]: the edge payload plus the
//! node on the far side. The same data read the other way around, a
//! predecessor node plus the edge used to arrive, is a [`FromHalf`]. Paths
//! are sequences of [`PathStep`], starting with `{edge: None, node: start}`.

/// A directed adjacency as seen from one endpoint: the edge payload plus the
/// node reached by following it.
///
/// For an undirected edge, each endpoint's adjacency list holds a `Half`
/// carrying the *same* payload (share it behind an `Rc` when cloning the
/// payload itself would be wrong or wasteful).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Half<N, E> {
    /// Payload of the edge leading to `node`.
    pub edge: E,
    /// The node at the far end of the edge.
    pub node: N,
}

impl<N, E> Half<N, E> {
    /// Create a half-edge from its payload and target node.
    #[inline]
    pub fn new(edge: E, node: N) -> Self {
        Half { edge, node }
    }
}

/// One element of a returned path: the edge used to arrive at `node`.
///
/// A path from `start` to `end` has the shape
/// `[{None, start}, {Some(e1), n1}, …, {Some(ek), end}]`; only the start
/// node has no arriving edge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep<N, E> {
    /// Edge leading to `node` from the previous path element, `None` for
    /// the start node.
    pub edge: Option<E>,
    /// The node reached at this step.
    pub node: N,
}

impl<N, E> PathStep<N, E> {
    /// The leading step of every path: the start node, no arriving edge.
    #[inline]
    pub fn start(node: N) -> Self {
        PathStep { edge: None, node }
    }

    /// An interior or final step: `node` reached via `edge`.
    #[inline]
    pub fn via(edge: E, node: N) -> Self {
        PathStep {
            edge: Some(edge),
            node,
        }
    }
}

/// A predecessor half-edge: the node a shortest path arrives from, plus the
/// edge it arrives by.
///
/// [`dijkstra_all_paths`](crate::algs::dijkstra::dijkstra_all_paths) maps
/// every reachable node to its `FromHalf`; the start node maps to
/// `{from: None, edge: None}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FromHalf<N, E> {
    /// Predecessor node on the shortest path, `None` for the start node.
    pub from: Option<N>,
    /// Edge from `from` to this node, `None` for the start node.
    pub edge: Option<E>,
}

impl<N, E> FromHalf<N, E> {
    /// Whether this entry is the root of the predecessor tree (the start
    /// node of the search).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.from.is_none()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn from_half_json_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let fh = FromHalf {
            from: Some(3u32),
            edge: Some(2.5f64),
        };
        let s = serde_json::to_string(&fh)?;
        let fh2: FromHalf<u32, f64> = serde_json::from_str(&s)?;
        assert_eq!(fh2, fh);
        Ok(())
    }

    #[test]
    fn path_step_json_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let step = PathStep::via(7.0f64, 1u32);
        let s = serde_json::to_string(&step)?;
        let step2: PathStep<u32, f64> = serde_json::from_str(&s)?;
        assert_eq!(step2, step);
        Ok(())
    }
}
