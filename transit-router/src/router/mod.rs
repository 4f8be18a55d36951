//! Fastest-route engine for the transit network.
//!
//! Compiles a [`Catalogue`](crate::catalogue::Catalogue) into a weighted
//! graph whose edges are whole rides (board once, ride N stops), solves
//! all pairs up front, and turns solved edge sequences back into
//! itineraries of line rides.

mod builder;
mod config;
mod error;
mod facade;
mod itinerary;

pub use builder::{RouteGraph, RouteSegment};
pub use config::RoutingSettings;
pub use error::BuildError;
pub use facade::TransitRouter;
pub use itinerary::{Itinerary, RideSegment, RouteOutcome};
