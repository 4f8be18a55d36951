//! Weighted graph and all-pairs shortest routes.

mod solver;
mod weighted;

pub use solver::{RouteInfo, ShortestPathSolver};
pub use weighted::{Edge, EdgeId, GraphError, VertexId, WeightedGraph};
