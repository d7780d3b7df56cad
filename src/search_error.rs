//! GraphSearchError: Unified error type for graph-search public APIs
//!
//! This error type is used throughout the graph-search library to provide
//! robust, non-panicking error handling for all public APIs.

use thiserror::Error;

/// Unified error type for graph-search operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphSearchError {
    /// The graph census enumerated no nodes; direction-optimizing
    /// breadth-first traversal needs the full node set up front.
    #[error("graph census is empty; direction-optimizing traversal needs the full node set")]
    EmptyCensus,
    /// The start node was not part of the graph census.
    #[error("census error: start node `{0}` not in the graph's node set")]
    StartNotInCensus(String),
    /// Internal invariant of the tentative-heap store broken.
    #[error("tentative-heap invariant broken: {0}")]
    HeapInvariant(&'static str),
    /// An edge weight outside the contract (negative, NaN, or infinite).
    #[error("edge weight {0} violates the non-negative finite contract")]
    WeightContract(f64),
}
