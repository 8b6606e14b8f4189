//! Geographic coordinate type and distance functions.
//!
//! Coordinates are WGS-84-style decimal degrees held as `f64`; all
//! great-circle distances are in kilometres.  Distances involving a location
//! that does not exist are reported as `f64::INFINITY` — a sentinel meaning
//! "unreachable / incomparable".  Callers must test it with [`is_reachable`]
//! instead of doing arithmetic on it.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
    }

    /// Planar distance on raw degree coordinates.
    ///
    /// Not a physical distance — used only where relative closeness on the
    /// coordinate plane is what matters (cluster assignment).
    #[inline]
    pub fn euclidean_deg(self, other: GeoPoint) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// `true` if a distance value denotes a real, finite separation.
///
/// The infinite sentinel produced by lookups against absent locations must
/// only ever be compared, never added or multiplied.
#[inline]
pub fn is_reachable(distance_km: f64) -> bool {
    distance_km.is_finite()
}
