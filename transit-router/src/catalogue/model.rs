//! The in-memory transit catalogue.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::{Coordinates, Line, LineKind, Stop, StopId};

use super::error::CatalogueError;
use super::stats::{self, LineStats};

/// Stops, lines and measured road distances of one transit network.
///
/// Stops iterate in insertion order and lines in name order. A `StopId`
/// is only meaningful for the catalogue that issued it.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    lines: BTreeMap<String, Line>,
    /// Stop name -> names of lines that publish it.
    lines_by_stop: HashMap<String, BTreeSet<String>>,
    /// Road distances in meters, as recorded (not symmetric).
    distances: HashMap<(StopId, StopId), f64>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateStop` if the name is already registered and
    /// `InvalidCoordinates` if latitude or longitude is not finite.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }
        if !coordinates.is_finite() {
            return Err(CatalogueError::InvalidCoordinates(name));
        }

        let id = StopId(self.stops.len());
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        Ok(id)
    }

    /// Record the road distance from `from` to `to` in meters.
    ///
    /// Only the given direction is recorded; the reverse pair falls back to
    /// it in [`road_distance`](Self::road_distance) unless set separately.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    /// Register a line with its published stop names.
    ///
    /// Stop names are not checked here: they may be registered later, and
    /// dangling references are reported when the line is used.
    pub fn add_line<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        kind: LineKind,
        stops: impl IntoIterator<Item = S>,
    ) -> Result<(), CatalogueError> {
        let line = Line::new(name, kind, stops);
        if self.lines.contains_key(&line.name) {
            return Err(CatalogueError::DuplicateLine(line.name));
        }

        for stop in &line.stops {
            self.lines_by_stop
                .entry(stop.clone())
                .or_default()
                .insert(line.name.clone());
        }
        self.lines.insert(line.name.clone(), line);
        Ok(())
    }

    /// Look up a stop id by name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.0])
    }

    /// Look up a stop by id.
    pub fn stop_by_id(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    /// All stops with their ids, in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// All lines, ordered by name.
    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.lines.values()
    }

    /// Look up a line by name.
    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.get(name)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Road distance in meters between two stops.
    ///
    /// Uses the recorded `(from, to)` distance, then the recorded
    /// `(to, from)` distance, then the great-circle distance.
    ///
    /// # Panics
    ///
    /// Panics if either id was not issued by this catalogue.
    pub fn road_distance(&self, from: StopId, to: StopId) -> f64 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or_else(|| self.geo_distance(from, to))
    }

    /// Great-circle distance in meters between two stops.
    ///
    /// # Panics
    ///
    /// Panics if either id was not issued by this catalogue.
    pub fn geo_distance(&self, from: StopId, to: StopId) -> f64 {
        self.stops[from.0]
            .coordinates
            .distance_to(&self.stops[to.0].coordinates)
    }

    /// Statistics for the named line, or `None` if there is no such line.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStop` if the line references an unregistered stop.
    pub fn line_stats(&self, name: &str) -> Result<Option<LineStats>, CatalogueError> {
        match self.lines.get(name) {
            Some(line) => stats::compute(self, line).map(Some),
            None => Ok(None),
        }
    }

    /// Names of the lines serving a stop, sorted.
    ///
    /// Returns `None` for an unregistered stop and an empty list for a stop
    /// no line serves.
    pub fn lines_at(&self, stop: &str) -> Option<Vec<&str>> {
        self.stop_index.get(stop)?;
        Some(
            self.lines_by_stop
                .get(stop)
                .map(|lines| lines.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        )
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}
