//! # Geodesic Utilities
//!
//! Great-circle distance and coordinate helpers for the map layer.
//!
//! Distances use the haversine formula on a spherical Earth of radius
//! 6 371 000 m, which is accurate to well under 0.5 % at distribution-
//! network scales.
//!
//! ## Example
//!
//! ```rust
//! use grid_core::geo::{GeoPoint, haversine_distance};
//!
//! let rio = GeoPoint { lat: -22.9068, lon: -43.1729 };
//! let sao_paulo = GeoPoint { lat: -23.5505, lon: -46.6333 };
//!
//! let d = haversine_distance(rio, sao_paulo);
//! assert!(d > 350_000.0 && d < 420_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default map center (Rio de Janeiro interior region)
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: -22.15018,
    lon: -42.92185,
};

/// Default map zoom level
pub const DEFAULT_ZOOM: u8 = 13;

/// A point on the Earth's surface in decimal degrees.
///
/// ## JSON Example
///
/// ```json
/// { "lat": -22.9068, "lon": -43.1729 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Validate coordinate ranges: lat in [-90, 90], lon in [-180, 180].
    ///
    /// [`haversine_distance`] itself accepts any finite coordinates;
    /// callers that receive untrusted input should validate first.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.lat.is_finite() || self.lat < -90.0 || self.lat > 90.0 {
            return Err(CalcError::invalid_input(
                "lat",
                self.lat.to_string(),
                "Latitude must be within [-90, 90] degrees",
            ));
        }
        if !self.lon.is_finite() || self.lon < -180.0 || self.lon > 180.0 {
            return Err(CalcError::invalid_input(
                "lon",
                self.lon.to_string(),
                "Longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(())
    }

    /// Check if the point falls inside Brazil's bounding box
    pub fn is_within_brazil(&self) -> bool {
        self.lat >= -33.75 && self.lat <= 5.27 && self.lon >= -73.99 && self.lon <= -28.85
    }

    /// Format for display with hemisphere indicators (Portuguese: L = leste,
    /// O = oeste), e.g. `22.15018°S 42.92185°O`
    pub fn format_coords(&self) -> String {
        let lat_dir = if self.lat >= 0.0 { 'N' } else { 'S' };
        let lon_dir = if self.lon >= 0.0 { 'L' } else { 'O' };
        format!(
            "{:.5}\u{b0}{} {:.5}\u{b0}{}",
            self.lat.abs(),
            lat_dir,
            self.lon.abs(),
            lon_dir
        )
    }
}

/// Great-circle distance between two points in meters (haversine formula).
///
/// Symmetric, zero for identical points, and strictly increasing with
/// angular separation along a fixed bearing.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_for_same_point() {
        assert_eq!(haversine_distance(DEFAULT_CENTER, DEFAULT_CENTER), 0.0);
    }

    #[test]
    fn test_rio_to_sao_paulo() {
        // Rio de Janeiro to São Paulo is roughly 360 km
        let rj = GeoPoint::new(-22.9068, -43.1729);
        let sp = GeoPoint::new(-23.5505, -46.6333);
        let d = haversine_distance(rj, sp);
        assert!(d > 350_000.0);
        assert!(d < 420_000.0);
    }

    #[test]
    fn test_symmetric() {
        let a = GeoPoint::new(-22.15, -42.92);
        let b = GeoPoint::new(-22.20, -42.95);
        let ab = haversine_distance(a, b);
        let ba = haversine_distance(b, a);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_increases_with_separation() {
        let origin = GeoPoint::new(-22.15, -42.92);
        let near = GeoPoint::new(-22.151, -42.92);
        let mid = GeoPoint::new(-22.2, -42.92);
        let far = GeoPoint::new(-22.4, -42.92);
        let d_near = haversine_distance(origin, near);
        let d_mid = haversine_distance(origin, mid);
        let d_far = haversine_distance(origin, far);
        assert!(d_near < d_mid);
        assert!(d_mid < d_far);
    }

    #[test]
    fn test_one_degree_latitude() {
        // One degree of latitude is about 111.2 km on the sphere
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = haversine_distance(a, b);
        assert!((d - 111_195.0).abs() < 100.0);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(GeoPoint::new(-22.9, -43.2).validate().is_ok());
        assert!(GeoPoint::new(91.0, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -181.0).validate().is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_within_brazil() {
        assert!(GeoPoint::new(-22.15018, -42.92185).is_within_brazil());
        assert!(GeoPoint::new(-23.5505, -46.6333).is_within_brazil());
        assert!(!GeoPoint::new(48.8566, 2.3522).is_within_brazil()); // Paris
        assert!(!GeoPoint::new(-34.6037, -58.3816).is_within_brazil()); // Buenos Aires
        assert!(!GeoPoint::new(40.7128, -74.0060).is_within_brazil()); // New York
    }

    #[test]
    fn test_default_center_within_brazil() {
        assert!(DEFAULT_CENTER.is_within_brazil());
    }

    #[test]
    fn test_format_coords() {
        let s = GeoPoint::new(-22.15018, -42.92185).format_coords();
        assert!(s.contains('S'));
        assert!(s.contains('O'));
        assert!(s.contains("22.15018"));

        assert!(GeoPoint::new(5.0, -60.0).format_coords().contains('N'));
        assert!(GeoPoint::new(0.0, 10.0).format_coords().contains('L'));
    }

    #[test]
    fn test_serialization() {
        let p = GeoPoint::new(-22.9068, -43.1729);
        let json = serde_json::to_string(&p).unwrap();
        let roundtrip: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, roundtrip);
    }
}
