//! All-pairs shortest routes with route reconstruction.
//!
//! The solver takes ownership of a finished [`WeightedGraph`] and runs
//! Floyd-Warshall over it once, at construction. Each table entry keeps the
//! best known weight and the last edge of that route, which is enough to
//! rebuild the full edge sequence by walking predecessors backwards.

use tracing::debug;

use super::weighted::{EdgeId, GraphError, VertexId, WeightedGraph};

/// Best known route between one ordered pair of vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RouteEntry {
    weight: f64,
    /// Last edge of the route; `None` only for the trivial route v -> v.
    prev_edge: Option<EdgeId>,
}

/// A reconstructed route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Total weight of the route.
    pub weight: f64,
    /// Edges from origin to destination, in riding order.
    pub edges: Vec<EdgeId>,
}

/// Precomputed minimum-weight routes between every ordered vertex pair.
///
/// Construction costs O(N³) time and O(N²) memory; every query afterwards
/// costs O(route length). The graph is owned so it cannot change under the
/// precomputed table.
#[derive(Debug, Clone)]
pub struct ShortestPathSolver {
    graph: WeightedGraph,
    /// Row-major `vertex_count × vertex_count` table.
    routes: Vec<Option<RouteEntry>>,
}

impl ShortestPathSolver {
    /// Solve all pairs over `graph`.
    ///
    /// # Panics
    ///
    /// Panics if any edge weight is negative or NaN. Relaxation relies on
    /// non-negative weights, so such a graph is a construction bug rather
    /// than a recoverable condition.
    pub fn new(graph: WeightedGraph) -> Self {
        let n = graph.vertex_count();
        let mut solver = Self {
            graph,
            routes: vec![None; n * n],
        };

        solver.initialize();
        for through in 0..n {
            solver.relax_through(through);
        }

        debug!(
            vertices = n,
            edges = solver.graph.edge_count(),
            reachable_pairs = solver.routes.iter().filter(|r| r.is_some()).count(),
            "all-pairs routes precomputed"
        );

        solver
    }

    /// The graph the table was computed over.
    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Weight of the best route from `from` to `to`, if one exists.
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.entry(from, to).map(|r| r.weight)
    }

    /// Last edge of the best route from `from` to `to`.
    ///
    /// `None` when there is no route, and for the empty route `v -> v`.
    pub fn predecessor(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.entry(from, to).and_then(|r| r.prev_edge)
    }

    /// Rebuild the best route from `from` to `to`.
    ///
    /// Returns `Ok(None)` when `to` is unreachable from `from`. The route
    /// from a vertex to itself has weight zero and no edges.
    ///
    /// # Errors
    ///
    /// Returns `VertexOutOfRange` if either vertex is not in the graph.
    pub fn build_route(
        &self,
        from: VertexId,
        to: VertexId,
    ) -> Result<Option<RouteInfo>, GraphError> {
        self.graph.incident_edges(from)?;
        self.graph.incident_edges(to)?;

        let Some(entry) = self.entry(from, to) else {
            return Ok(None);
        };

        let mut edges = Vec::new();
        let mut prev = entry.prev_edge;
        while let Some(edge_id) = prev {
            edges.push(edge_id);
            let edge = self.graph.edge(edge_id)?;
            prev = self.predecessor(from, edge.from);
        }
        edges.reverse();

        Ok(Some(RouteInfo {
            weight: entry.weight,
            edges,
        }))
    }

    fn entry(&self, from: VertexId, to: VertexId) -> Option<RouteEntry> {
        let n = self.graph.vertex_count();
        if from >= n || to >= n {
            return None;
        }
        self.routes[from * n + to]
    }

    /// Seed the table with the empty route per vertex and the cheapest
    /// direct edge per pair. The first edge wins a tie.
    fn initialize(&mut self) {
        let n = self.graph.vertex_count();
        for vertex in 0..n {
            self.routes[vertex * n + vertex] = Some(RouteEntry {
                weight: 0.0,
                prev_edge: None,
            });
        }

        for (edge_id, edge) in self.graph.edges().iter().enumerate() {
            assert!(
                edge.weight >= 0.0,
                "edge {edge_id} ({} -> {}) has invalid weight {}; weights must be non-negative",
                edge.from,
                edge.to,
                edge.weight
            );

            let slot = &mut self.routes[edge.from * n + edge.to];
            if slot.is_none_or(|current| edge.weight < current.weight) {
                *slot = Some(RouteEntry {
                    weight: edge.weight,
                    prev_edge: Some(edge_id),
                });
            }
        }
    }

    /// Improve every pair `(i, j)` using routes that pass through `through`.
    fn relax_through(&mut self, through: VertexId) {
        let n = self.graph.vertex_count();
        for from in 0..n {
            let Some(head) = self.routes[from * n + through] else {
                continue;
            };
            for to in 0..n {
                let Some(tail) = self.routes[through * n + to] else {
                    continue;
                };

                let candidate = head.weight + tail.weight;
                let slot = &mut self.routes[from * n + to];
                if slot.is_none_or(|current| candidate < current.weight) {
                    *slot = Some(RouteEntry {
                        weight: candidate,
                        // An empty tail (through == to) ends on the head's last edge
                        prev_edge: tail.prev_edge.or(head.prev_edge),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -> 1 -> 2 -> 3 with a pricier shortcut 0 -> 3, plus isolated 4.
    fn sample_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new(5);
        graph.add_edge(0, 1, 1.0).unwrap(); // e0
        graph.add_edge(1, 2, 2.0).unwrap(); // e1
        graph.add_edge(2, 3, 3.0).unwrap(); // e2
        graph.add_edge(0, 3, 10.0).unwrap(); // e3
        graph
    }

    #[test]
    fn trivial_route_is_empty() {
        let solver = ShortestPathSolver::new(sample_graph());
        for v in 0..5 {
            assert_eq!(solver.distance(v, v), Some(0.0));
            assert_eq!(
                solver.build_route(v, v).unwrap(),
                Some(RouteInfo {
                    weight: 0.0,
                    edges: vec![]
                })
            );
        }
    }

    #[test]
    fn multi_edge_route_beats_direct_edge() {
        let solver = ShortestPathSolver::new(sample_graph());
        let route = solver.build_route(0, 3).unwrap().unwrap();
        assert_eq!(route.weight, 6.0);
        assert_eq!(route.edges, vec![0, 1, 2]);
    }

    #[test]
    fn direct_edge_route() {
        let solver = ShortestPathSolver::new(sample_graph());
        let route = solver.build_route(1, 2).unwrap().unwrap();
        assert_eq!(route.weight, 2.0);
        assert_eq!(route.edges, vec![1]);
    }

    #[test]
    fn unreachable_pairs() {
        let solver = ShortestPathSolver::new(sample_graph());
        assert_eq!(solver.build_route(3, 0).unwrap(), None);
        assert_eq!(solver.build_route(0, 4).unwrap(), None);
        assert_eq!(solver.distance(4, 0), None);
    }

    #[test]
    fn out_of_range_vertex_is_an_error() {
        let solver = ShortestPathSolver::new(sample_graph());
        assert!(matches!(
            solver.build_route(0, 9),
            Err(GraphError::VertexOutOfRange { vertex: 9, .. })
        ));
        assert!(solver.build_route(9, 0).is_err());
    }

    #[test]
    fn parallel_edges_collapse_to_cheapest() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, 5.0).unwrap();
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(0, 1, 3.0).unwrap();

        let solver = ShortestPathSolver::new(graph);
        let route = solver.build_route(0, 1).unwrap().unwrap();
        assert_eq!(route.weight, 2.0);
        assert_eq!(route.edges, vec![1]);
    }

    #[test]
    fn tied_parallel_edges_keep_the_first() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, 2.0).unwrap();
        graph.add_edge(0, 1, 2.0).unwrap();

        let solver = ShortestPathSolver::new(graph);
        assert_eq!(solver.predecessor(0, 1), Some(0));
    }

    #[test]
    fn self_loops_do_not_disturb_trivial_routes() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 0, 0.0).unwrap();
        graph.add_edge(0, 1, 1.0).unwrap();

        let solver = ShortestPathSolver::new(graph);
        assert!(solver.build_route(0, 0).unwrap().unwrap().edges.is_empty());
        assert_eq!(solver.build_route(0, 1).unwrap().unwrap().edges, vec![1]);
    }

    #[test]
    fn empty_graph() {
        let solver = ShortestPathSolver::new(WeightedGraph::new(0));
        assert!(solver.build_route(0, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "weights must be non-negative")]
    fn negative_weight_fails_fast() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 0, -0.5).unwrap();
        let _ = ShortestPathSolver::new(graph);
    }

    #[test]
    #[should_panic(expected = "weights must be non-negative")]
    fn nan_weight_fails_fast() {
        let mut graph = WeightedGraph::new(2);
        graph.add_edge(0, 1, f64::NAN).unwrap();
        let _ = ShortestPathSolver::new(graph);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Random graphs with small integral weights so that sums are exact.
    fn arb_graph() -> impl Strategy<Value = WeightedGraph> {
        (1usize..8).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, 0u32..20), 0..30).prop_map(move |edges| {
                let mut graph = WeightedGraph::new(n);
                for (from, to, weight) in edges {
                    graph.add_edge(from, to, f64::from(weight)).unwrap();
                }
                graph
            })
        })
    }

    proptest! {
        /// Every vertex reaches itself at zero cost with no edges
        #[test]
        fn self_routes_are_trivial(graph in arb_graph()) {
            let solver = ShortestPathSolver::new(graph);
            for v in 0..solver.graph().vertex_count() {
                let route = solver.build_route(v, v).unwrap().unwrap();
                prop_assert_eq!(route.weight, 0.0);
                prop_assert!(route.edges.is_empty());
            }
        }

        /// Reconstructed routes chain from origin to destination and sum to the reported weight
        #[test]
        fn routes_chain_and_sum(graph in arb_graph()) {
            let solver = ShortestPathSolver::new(graph);
            let g = solver.graph();
            let n = g.vertex_count();
            for from in 0..n {
                for to in 0..n {
                    let Some(route) = solver.build_route(from, to).unwrap() else {
                        continue;
                    };
                    let edges: Vec<_> = route.edges.iter().map(|&e| *g.edge(e).unwrap()).collect();
                    let total: f64 = edges.iter().map(|e| e.weight).sum();
                    prop_assert_eq!(total, route.weight);

                    if from == to {
                        prop_assert!(edges.is_empty());
                        continue;
                    }
                    prop_assert_eq!(edges.first().unwrap().from, from);
                    prop_assert_eq!(edges.last().unwrap().to, to);
                    for pair in edges.windows(2) {
                        prop_assert_eq!(pair[0].to, pair[1].from);
                    }
                }
            }
        }

        /// No pair can be improved by going through a third vertex
        #[test]
        fn triangle_inequality(graph in arb_graph()) {
            let solver = ShortestPathSolver::new(graph);
            let n = solver.graph().vertex_count();
            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        if let (Some(ik), Some(kj)) = (solver.distance(i, k), solver.distance(k, j)) {
                            let ij = solver.distance(i, j);
                            prop_assert!(ij.is_some_and(|ij| ij <= ik + kj));
                        }
                    }
                }
            }
        }

        /// Solving the same graph twice gives identical tables
        #[test]
        fn solving_is_deterministic(graph in arb_graph()) {
            let first = ShortestPathSolver::new(graph.clone());
            let second = ShortestPathSolver::new(graph);
            prop_assert_eq!(first.routes, second.routes);
        }

        /// A direct edge is never beaten by the table
        #[test]
        fn table_never_exceeds_direct_edges(graph in arb_graph()) {
            let solver = ShortestPathSolver::new(graph);
            for edge in solver.graph().edges() {
                let best = solver.distance(edge.from, edge.to).unwrap();
                prop_assert!(best <= edge.weight);
            }
        }
    }
}
