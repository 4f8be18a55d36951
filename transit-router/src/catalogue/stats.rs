//! Derived line statistics.

use crate::domain::Line;

use super::error::CatalogueError;
use super::model::Catalogue;

/// Static statistics for one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStats {
    /// Stops on the ridden sequence, repeats included.
    pub stop_count: usize,
    /// Distinct stops on the line.
    pub unique_stop_count: usize,
    /// Road length of the ridden sequence in meters.
    pub route_length: f64,
    /// Road length divided by great-circle length; 0 when the latter is 0.
    pub curvature: f64,
}

/// Compute statistics for `line` against the stops and distances in `catalogue`.
pub(super) fn compute(catalogue: &Catalogue, line: &Line) -> Result<LineStats, CatalogueError> {
    let route = line.route_stops();

    let ids = route
        .iter()
        .map(|name| {
            catalogue
                .stop_id(name)
                .ok_or_else(|| CatalogueError::UnknownStop((*name).to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();

    let mut route_length = 0.0;
    let mut geo_length = 0.0;
    for pair in ids.windows(2) {
        route_length += catalogue.road_distance(pair[0], pair[1]);
        geo_length += catalogue.geo_distance(pair[0], pair[1]);
    }

    let curvature = if geo_length > 0.0 {
        route_length / geo_length
    } else {
        0.0
    };

    Ok(LineStats {
        stop_count: ids.len(),
        unique_stop_count: unique.len(),
        route_length,
        curvature,
    })
}
