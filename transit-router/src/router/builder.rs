//! Route graph construction and query translation.
//!
//! Every stop becomes a vertex. For every line, every stop on its ridden
//! sequence gets an edge to each later stop on that sequence, weighted as
//! one boarding wait plus the ride time over the accumulated road distance.
//! A rider therefore pays the wait once per boarding, however many stops
//! they stay on for, and a change of line shows up as a second edge.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::catalogue::Catalogue;
use crate::domain::{Line, StopId};
use crate::graph::{EdgeId, RouteInfo, ShortestPathSolver, VertexId, WeightedGraph};

use super::config::RoutingSettings;
use super::error::BuildError;
use super::itinerary::{Itinerary, RideSegment, RouteOutcome};

/// What an edge means to a rider: one ride on `line` from `from` to `to`
/// passing `stop_count` stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteSegment {
    pub line: String,
    pub from: VertexId,
    pub to: VertexId,
    pub stop_count: usize,
}

/// A transit network compiled into a solved weighted graph.
///
/// Built once from a catalogue; immutable afterwards and safe to query
/// from several threads.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    settings: RoutingSettings,
    vertex_by_stop: HashMap<String, VertexId>,
    stop_by_vertex: Vec<String>,
    /// Indexed by edge id.
    segments: Vec<RouteSegment>,
    edge_by_segment: HashMap<RouteSegment, EdgeId>,
    solver: ShortestPathSolver,
}

impl RouteGraph {
    /// Build and solve the route graph for `catalogue`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` for unusable settings and `UnknownStop`
    /// when a line references a stop the catalogue does not have.
    pub fn build(catalogue: &Catalogue, settings: RoutingSettings) -> Result<Self, BuildError> {
        settings.validate()?;

        let mut builder = Builder::new(catalogue, settings);
        for (id, stop) in catalogue.stops() {
            builder.register_stop(id, &stop.name);
        }

        let mut graph = WeightedGraph::new(builder.stop_by_vertex.len());
        for line in catalogue.lines() {
            builder.add_line(&mut graph, line)?;
        }

        debug!(
            stops = graph.vertex_count(),
            lines = catalogue.line_count(),
            edges = graph.edge_count(),
            "route graph built"
        );

        Ok(Self {
            settings,
            vertex_by_stop: builder.vertex_by_stop,
            stop_by_vertex: builder.stop_by_vertex,
            segments: builder.segments,
            edge_by_segment: builder.edge_by_segment,
            solver: ShortestPathSolver::new(graph),
        })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &WeightedGraph {
        self.solver.graph()
    }

    pub fn solver(&self) -> &ShortestPathSolver {
        &self.solver
    }

    /// Vertex registered for a stop name.
    pub fn vertex_id(&self, stop: &str) -> Option<VertexId> {
        self.vertex_by_stop.get(stop).copied()
    }

    /// Stop name registered for a vertex.
    pub fn stop_name(&self, vertex: VertexId) -> Option<&str> {
        self.stop_by_vertex.get(vertex).map(String::as_str)
    }

    /// Ride described by an edge.
    pub fn segment(&self, edge: EdgeId) -> Option<&RouteSegment> {
        self.segments.get(edge)
    }

    /// Edge for a ride. When several edges describe the same ride, the
    /// first one added is returned.
    pub fn edge_id(&self, segment: &RouteSegment) -> Option<EdgeId> {
        self.edge_by_segment.get(segment).copied()
    }

    /// Fastest itinerary between two stops, by name.
    pub fn route(&self, from: &str, to: &str) -> RouteOutcome {
        let Some(from_id) = self.vertex_id(from) else {
            return RouteOutcome::NotFound {
                stop: from.to_string(),
            };
        };
        let Some(to_id) = self.vertex_id(to) else {
            return RouteOutcome::NotFound {
                stop: to.to_string(),
            };
        };

        match self.solver.build_route(from_id, to_id) {
            Ok(Some(route)) => RouteOutcome::Found(self.itinerary(route)),
            Ok(None) => RouteOutcome::Unreachable,
            // Interned ids are exactly the graph's vertices
            Err(err) => unreachable!("interned stop missing from graph: {err}"),
        }
    }

    fn itinerary(&self, route: RouteInfo) -> Itinerary {
        let edges = self.graph().edges();
        let segments = route
            .edges
            .iter()
            .map(|&edge_id| {
                let segment = &self.segments[edge_id];
                RideSegment {
                    line: segment.line.clone(),
                    board_stop: self.stop_by_vertex[segment.from].clone(),
                    alight_stop: self.stop_by_vertex[segment.to].clone(),
                    stop_count: segment.stop_count,
                    wait_minutes: self.settings.bus_wait_time,
                    minutes: edges[edge_id].weight,
                }
            })
            .collect();

        Itinerary {
            total_minutes: route.weight,
            segments,
        }
    }
}

/// Lookup tables filled while the graph is under construction.
struct Builder<'a> {
    catalogue: &'a Catalogue,
    settings: RoutingSettings,
    vertex_by_stop: HashMap<String, VertexId>,
    stop_by_vertex: Vec<String>,
    /// Catalogue id of each vertex's stop, indexed by vertex.
    stop_ids: Vec<StopId>,
    segments: Vec<RouteSegment>,
    edge_by_segment: HashMap<RouteSegment, EdgeId>,
}

impl<'a> Builder<'a> {
    fn new(catalogue: &'a Catalogue, settings: RoutingSettings) -> Self {
        Self {
            catalogue,
            settings,
            vertex_by_stop: HashMap::with_capacity(catalogue.stop_count()),
            stop_by_vertex: Vec::with_capacity(catalogue.stop_count()),
            stop_ids: Vec::with_capacity(catalogue.stop_count()),
            segments: Vec::new(),
            edge_by_segment: HashMap::new(),
        }
    }

    /// Intern a stop name, returning its vertex.
    fn register_stop(&mut self, id: StopId, name: &str) -> VertexId {
        if let Some(&vertex) = self.vertex_by_stop.get(name) {
            return vertex;
        }

        let vertex = self.stop_by_vertex.len();
        self.vertex_by_stop.insert(name.to_string(), vertex);
        self.stop_by_vertex.push(name.to_string());
        self.stop_ids.push(id);
        vertex
    }

    fn add_line(&mut self, graph: &mut WeightedGraph, line: &Line) -> Result<(), BuildError> {
        let stops = line
            .route_stops()
            .into_iter()
            .map(|name| self.resolve(line, name))
            .collect::<Result<Vec<_>, _>>()?;

        let edges_before = graph.edge_count();
        for (start, &(origin, _)) in stops.iter().enumerate() {
            let mut meters = 0.0;
            for (hop, pair) in stops[start..].windows(2).enumerate() {
                let (_, prev_stop) = pair[0];
                let (destination, next_stop) = pair[1];
                meters += self.catalogue.road_distance(prev_stop, next_stop);

                let weight = self.settings.bus_wait_time + self.settings.ride_minutes(meters);
                let edge = graph.add_edge(origin, destination, weight)?;
                self.store_segment(
                    RouteSegment {
                        line: line.name.clone(),
                        from: origin,
                        to: destination,
                        stop_count: hop + 1,
                    },
                    edge,
                );
            }
        }

        trace!(
            line = %line.name,
            stops = stops.len(),
            edges = graph.edge_count() - edges_before,
            "line added to route graph"
        );
        Ok(())
    }

    fn resolve(&self, line: &Line, name: &str) -> Result<(VertexId, StopId), BuildError> {
        let vertex = self
            .vertex_by_stop
            .get(name)
            .copied()
            .ok_or_else(|| BuildError::UnknownStop {
                line: line.name.clone(),
                stop: name.to_string(),
            })?;
        Ok((vertex, self.stop_ids[vertex]))
    }

    fn store_segment(&mut self, segment: RouteSegment, edge: EdgeId) {
        debug_assert_eq!(edge, self.segments.len());
        self.edge_by_segment.entry(segment.clone()).or_insert(edge);
        self.segments.push(segment);
    }
}
