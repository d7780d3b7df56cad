//! Bundled arena-backed adjacency containers.
//!
//! [`Digraph`] and [`Undirected`] are concrete graph representations that
//! implement every capability trait of [`crate::graph::visit`], so the
//! search algorithms work on them out of the box. They are collaborators of
//! the core, not part of it: the algorithms never name these types, only
//! the traits.

pub mod digraph;
pub mod node_id;
pub mod undirected;

pub use digraph::Digraph;
pub use node_id::NodeId;
pub use undirected::Undirected;
