//! The graph contract: bound aliases, half-edge value types, and the
//! capability traits caller representations implement.

pub mod bounds;
pub mod half;
pub mod visit;

pub use bounds::{EdgeLike, NodeLike};
pub use half::{FromHalf, Half, PathStep};
pub use visit::{
    ArborBuilder, Estimator, Flow, Graph, GraphCensus, Heuristic, OutDegree, VisitAdj, VisitAdjOk,
    VisitIn, VisitOut, Weighted,
};
