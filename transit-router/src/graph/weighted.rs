//! Directed weighted graph over dense vertex ids.

/// Vertex identifier: a dense index in `0..vertex_count`.
pub type VertexId = usize;

/// Edge identifier: assigned densely in insertion order.
pub type EdgeId = usize;

/// A directed edge. Weights are travel minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Errors from graph access with out-of-range ids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Vertex id is not in `0..vertex_count`
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// No edge with this id was added
    #[error("unknown edge {0}")]
    UnknownEdge(EdgeId),
}

/// Append-only directed graph with weighted edges.
///
/// The vertex count is fixed at construction. Edges can be added but never
/// removed or re-weighted, and each vertex keeps its outgoing edges in
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl WeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add a directed edge and return its id.
    ///
    /// # Errors
    ///
    /// Returns `VertexOutOfRange` if either endpoint is not a vertex of
    /// this graph. The graph is left unchanged.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
    ) -> Result<EdgeId, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let id = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.incidence[from].push(id);
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge, GraphError> {
        self.edges.get(id).ok_or(GraphError::UnknownEdge(id))
    }

    /// All edges, indexed by edge id.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> Result<&[EdgeId], GraphError> {
        self.check_vertex(vertex)?;
        Ok(&self.incidence[vertex])
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
