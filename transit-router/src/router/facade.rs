//! Query surface over a catalogue and its route graph.

use crate::catalogue::{Catalogue, CatalogueError, LineStats};

use super::builder::RouteGraph;
use super::config::RoutingSettings;
use super::error::BuildError;
use super::itinerary::RouteOutcome;

/// A transit network ready to answer queries.
///
/// Owns the catalogue together with the route graph built from it, so the
/// two can never drift apart.
///
/// # Examples
///
/// ```
/// use transit_router::catalogue::Catalogue;
/// use transit_router::domain::{Coordinates, LineKind};
/// use transit_router::router::{RoutingSettings, TransitRouter};
///
/// let mut catalogue = Catalogue::new();
/// catalogue.add_stop("Depot", Coordinates::new(55.0, 37.0)).unwrap();
/// catalogue.add_stop("Market", Coordinates::new(55.01, 37.0)).unwrap();
/// catalogue.set_distance("Depot", "Market", 1000.0).unwrap();
/// catalogue
///     .add_line("7", LineKind::ThereAndBack, ["Depot", "Market"])
///     .unwrap();
///
/// // 6 minute wait, 30 km/h = 500 m per minute
/// let router = TransitRouter::new(catalogue, RoutingSettings::new(6.0, 30.0)).unwrap();
/// let itinerary = router.route("Market", "Depot").into_itinerary().unwrap();
/// assert_eq!(itinerary.total_minutes, 8.0);
/// assert_eq!(itinerary.segments[0].line, "7");
/// ```
#[derive(Debug, Clone)]
pub struct TransitRouter {
    catalogue: Catalogue,
    graph: RouteGraph,
}

impl TransitRouter {
    /// Build the route graph for `catalogue` and take ownership of both.
    pub fn new(catalogue: Catalogue, settings: RoutingSettings) -> Result<Self, BuildError> {
        let graph = RouteGraph::build(&catalogue, settings)?;
        Ok(Self { catalogue, graph })
    }

    /// Fastest itinerary between two stops, by name.
    pub fn route(&self, from: &str, to: &str) -> RouteOutcome {
        self.graph.route(from, to)
    }

    /// Statistics for a line; `None` if there is no such line.
    pub fn line_stats(&self, line: &str) -> Result<Option<LineStats>, CatalogueError> {
        self.catalogue.line_stats(line)
    }

    /// Lines serving a stop; `None` if there is no such stop.
    pub fn lines_at(&self, stop: &str) -> Option<Vec<&str>> {
        self.catalogue.lines_at(stop)
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn settings(&self) -> &RoutingSettings {
        self.graph.settings()
    }
}
