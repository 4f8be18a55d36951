//! In-memory transit catalogue.
//!
//! Holds the already-validated network the router is built from: stops
//! with coordinates, lines with their stop sequences, and measured road
//! distances. Also answers the static per-line and per-stop statistics.

mod error;
mod model;
mod stats;

pub use error::CatalogueError;
pub use model::Catalogue;
pub use stats::LineStats;
