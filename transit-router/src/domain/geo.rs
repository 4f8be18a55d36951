//! Geographic coordinates and great-circle distance.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Identical points are exactly zero apart.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }

        let lat_a = self.lat.to_radians();
        let lat_b = other.lat.to_radians();
        let dlng = (self.lng - other.lng).abs().to_radians();

        // Rounding can push the cosine fractionally past 1 for near-identical points
        let cos_angle = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * dlng.cos();
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}
