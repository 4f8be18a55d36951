//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalogue::LineStats;
use crate::router::Itinerary;

/// Query for the fastest route between two stops.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Statistics for one line.
#[derive(Debug, Serialize)]
pub struct LineStatsResponse {
    /// Stops on the ridden sequence, repeats included
    pub stop_count: usize,

    /// Distinct stops
    pub unique_stop_count: usize,

    /// Road length in meters
    pub route_length: f64,

    /// Road length over great-circle length
    pub curvature: f64,
}

impl From<LineStats> for LineStatsResponse {
    fn from(stats: LineStats) -> Self {
        Self {
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
            route_length: stats.route_length,
            curvature: stats.curvature,
        }
    }
}

/// Lines serving a stop.
#[derive(Debug, Serialize)]
pub struct StopLinesResponse {
    /// Line names, sorted
    pub lines: Vec<String>,
}

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Waiting for a bus at a stop
    Wait { stop_name: String, time: f64 },

    /// Riding a bus over `span_count` stops
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

/// The fastest route, as alternating waits and rides.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Total minutes
    pub total_time: f64,

    /// Wait and ride steps in order
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    /// Split each ride of an itinerary into its boarding wait and the ride itself.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let items = itinerary
            .segments
            .iter()
            .flat_map(|segment| {
                [
                    RouteItem::Wait {
                        stop_name: segment.board_stop.clone(),
                        time: segment.wait_minutes,
                    },
                    RouteItem::Bus {
                        bus: segment.line.clone(),
                        span_count: segment.stop_count,
                        time: segment.ride_minutes(),
                    },
                ]
            })
            .collect();

        Self {
            total_time: itinerary.total_minutes,
            items,
        }
    }
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
