//! # graph-search
//!
//! graph-search is a library of shortest-path and traversal algorithms that
//! operate over caller-defined graph representations. There is no mandatory
//! graph container: algorithms are generic over a small set of capability
//! traits (adjacency visitation, edge weight, heuristic estimate, node
//! census) and each algorithm bounds on exactly the capabilities it needs.
//!
//! ## Features
//! - Dijkstra single-pair and single-source searches sharing one
//!   priority-queue engine with heap-slot recycling
//! - A* and algorithm A (monotonic and general heuristics)
//! - Direction-optimizing breadth-first traversal (top-down frontier
//!   expansion combined with bottom-up unvisited scanning), plus a simple
//!   BFS and a recursive DFS
//! - A bundled arena-backed adjacency container ([`adjacency::Digraph`],
//!   [`adjacency::Undirected`]) implementing every capability
//!
//! ## Usage
//! Add `graph-search` as a dependency in your `Cargo.toml` and enable
//! features as needed:
//!
//! ```toml
//! [dependencies]
//! graph-search = "0.1"
//! # Optional features:
//! # features = ["fast-hash", "serde", "check-invariants"]
//! ```
//!
//! ## Shared payloads
//! Undirected edges must present the same payload from both endpoints so
//! that weight and identity agree in both directions. Instantiate a graph
//! with `Edge = Rc<T>` (as [`adjacency::Undirected`] does) and algorithms
//! will clone the `Rc` handle (cheap) without copying `T`;
//! [`Weighted`](crate::graph::visit::Weighted) has blanket impls for `&T`
//! and `Rc<T>` so shared payloads keep the weight capability.

// Re-export our major subsystems:
pub mod adjacency;
pub mod algs;
pub mod debug_invariants;
pub mod graph;
pub mod perf;
pub mod search_error;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::adjacency::{Digraph, NodeId, Undirected};
    pub use crate::algs::astar::{a_star_a, a_star_m};
    pub use crate::algs::breadth_first::{
        breadth_first, breadth_first_simple, breadth_first_with_policy, DirectionPolicy,
    };
    pub use crate::algs::depth_first::depth_first;
    pub use crate::algs::dijkstra::{
        dijkstra_all_paths, dijkstra_arborescence, dijkstra_shortest_path,
    };
    pub use crate::graph::bounds::{EdgeLike, NodeLike};
    pub use crate::graph::half::{FromHalf, Half, PathStep};
    pub use crate::graph::visit::{
        ArborBuilder, Estimator, Flow, Graph, GraphCensus, Heuristic, OutDegree, VisitAdj,
        VisitAdjOk, VisitIn, VisitOut, Weighted,
    };
    pub use crate::search_error::GraphSearchError;
}
