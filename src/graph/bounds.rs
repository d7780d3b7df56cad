//! Common bound aliases used across the graph contract.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses.

/// Canonical bound set for node handles.
///
/// Rationale:
/// - `Copy` for cheap pass-by-value in tight loops
/// - `Eq + Hash` for hash-keyed reached/visited maps
/// - `Ord` to allow deterministic ordering (and the `deterministic-order`
///   container fallback)
/// - `Debug` for diagnostics and error payloads
///
/// Two handles compare equal iff they name the same node of the same graph;
/// the caller guarantees handles are never mixed across graphs.
pub trait NodeLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> NodeLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}

/// Minimal bound we expect for edge payloads carried in halves and paths.
/// Keep this deliberately small to avoid over-constraining caller types.
pub trait EdgeLike: Clone {}
impl<T: Clone> EdgeLike for T {}
