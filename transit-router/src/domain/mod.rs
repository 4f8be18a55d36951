//! Domain types for the transit network.
//!
//! Stops, lines and coordinates as the rest of the crate sees them.
//! These carry no validation of their own; the catalogue checks
//! cross-references when stops and lines are combined.

mod geo;
mod line;
mod stop;

pub use geo::{Coordinates, EARTH_RADIUS_M};
pub use line::{Line, LineKind};
pub use stop::{Stop, StopId};
