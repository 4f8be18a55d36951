//! Routing configuration.

use serde::{Deserialize, Serialize};

use super::error::BuildError;

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Parameters that turn distances into travel minutes.
///
/// Field names match the `routing_settings` object of the usual transit
/// request documents, so the struct deserializes from them directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting each time a bus is boarded.
    pub bus_wait_time: f64,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings from a boarding wait in minutes and a speed in km/h.
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Bus speed in meters per minute.
    pub fn speed_m_per_min(&self) -> f64 {
        self.bus_velocity * METERS_PER_KM / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `meters`.
    pub fn ride_minutes(&self, meters: f64) -> f64 {
        meters / self.speed_m_per_min()
    }

    /// Check the settings can produce non-negative, finite edge weights.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(BuildError::InvalidSettings(
                "bus_wait_time must be a non-negative number of minutes",
            ));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(BuildError::InvalidSettings(
                "bus_velocity must be a positive speed in km/h",
            ));
        }
        Ok(())
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}
