//! Route query results.

/// One contiguous ride on a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct RideSegment {
    /// Line ridden.
    pub line: String,
    /// Stop where the bus is boarded.
    pub board_stop: String,
    /// Stop where the bus is left.
    pub alight_stop: String,
    /// Number of stops ridden.
    pub stop_count: usize,
    /// Boarding wait included in `minutes`.
    pub wait_minutes: f64,
    /// Total minutes for this segment, boarding wait included.
    pub minutes: f64,
}

impl RideSegment {
    /// Minutes spent on the bus, excluding the boarding wait.
    pub fn ride_minutes(&self) -> f64 {
        self.minutes - self.wait_minutes
    }
}

/// The fastest way between two stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub total_minutes: f64,
    pub segments: Vec<RideSegment>,
}

impl Itinerary {
    /// Number of line changes.
    pub fn change_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }

    /// True when origin and destination are the same stop.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Outcome of a route query.
///
/// Every outcome is an expected answer; none of them is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// The fastest itinerary.
    Found(Itinerary),
    /// Both stops exist but no sequence of rides connects them.
    Unreachable,
    /// A stop name is not in the network.
    NotFound { stop: String },
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    /// Borrow the itinerary, if one was found.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            RouteOutcome::Found(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    /// Take the itinerary, if one was found.
    pub fn into_itinerary(self) -> Option<Itinerary> {
        match self {
            RouteOutcome::Found(itinerary) => Some(itinerary),
            _ => None,
        }
    }
}
