//! Route graph build errors.

use crate::graph::GraphError;

/// Errors that abort building a route graph.
///
/// No partially built graph is ever exposed alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Routing settings cannot produce valid travel times
    #[error("invalid routing settings: {0}")]
    InvalidSettings(&'static str),

    /// A line references a stop that is not in the catalogue
    #[error("line {line} references unknown stop {stop}")]
    UnknownStop { line: String, stop: String },

    /// Graph construction failed
    #[error(transparent)]
    Graph(#[from] GraphError),
}
