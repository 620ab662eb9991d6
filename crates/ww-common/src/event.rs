//! Sighting records and flat-earth geometry.
//!
//! All spatial reasoning in the engine happens in raw decimal degrees on a
//! flat-earth approximation: one degree of latitude ≈ 111 km, and a square
//! in (lat, long) space stands in for a real-world region. This matches the
//! resolution of the underlying sighting records and is not a projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded observation: when, which pods, and where.
///
/// Immutable once loaded. The `pods` label is the raw, possibly compound
/// string from the record (e.g. `"J"`, `"JKL"`, `"L12s"`); classification
/// against known pod codes happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingEvent {
    /// Date of the observation.
    pub date: NaiveDate,
    /// Raw pod label as recorded, possibly naming several pods.
    pub pods: String,
    /// Latitude in decimal degrees (WGS84).
    pub latitude: f64,
    /// Longitude in decimal degrees (WGS84).
    pub longitude: f64,
}

impl SightingEvent {
    /// Month of the observation, 1-12.
    pub fn month(&self) -> u32 {
        use chrono::Datelike;
        self.date.month()
    }

    /// The event's location as a value type.
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A geographic coordinate. Value type, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from raw coordinates.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// An axis-aligned box in (lat, long) space.
///
/// Invariant: `lat_min < lat_max` and `long_min < long_max`. Containment is
/// strict on every edge; a point exactly on a boundary is outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub long_min: f64,
    pub long_max: f64,
}

impl BoundingBox {
    /// Creates a box from its edges, or `None` if the invariant fails
    /// (including NaN edges, which fail every comparison).
    pub fn new(lat_min: f64, lat_max: f64, long_min: f64, long_max: f64) -> Option<Self> {
        if !(lat_min < lat_max && long_min < long_max) {
            return None;
        }
        Some(Self {
            lat_min,
            lat_max,
            long_min,
            long_max,
        })
    }

    /// Square of the given half-width centered on `center`.
    ///
    /// Returns `None` for a non-positive or NaN half-width.
    pub fn centered(center: GeoPoint, half_width: f64) -> Option<Self> {
        if !(half_width > 0.0) {
            return None;
        }
        Self::new(
            center.latitude - half_width,
            center.latitude + half_width,
            center.longitude - half_width,
            center.longitude + half_width,
        )
    }

    /// Strict containment on all four edges.
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.lat_min < point.latitude
            && point.latitude < self.lat_max
            && self.long_min < point.longitude
            && point.longitude < self.long_max
    }

    /// Area in squared degrees.
    pub fn area(&self) -> f64 {
        (self.lat_max - self.lat_min) * (self.long_max - self.long_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn event_month_and_location() {
        let event = SightingEvent {
            date: date(2019, 7, 4),
            pods: "JK".to_string(),
            latitude: 48.52,
            longitude: -123.15,
        };
        assert_eq!(event.month(), 7);
        assert_eq!(event.location(), GeoPoint::new(48.52, -123.15));
    }

    #[test]
    fn bounding_box_rejects_inverted_edges() {
        assert!(BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_none());
        assert!(BoundingBox::new(0.0, 1.0, 1.0, 1.0).is_none());
        assert!(BoundingBox::new(f64::NAN, 1.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn centered_square_has_expected_edges() {
        let b = BoundingBox::centered(GeoPoint::new(48.5, -123.0), 1.0).unwrap();
        assert_eq!(b.lat_min, 47.5);
        assert_eq!(b.lat_max, 49.5);
        assert_eq!(b.long_min, -124.0);
        assert_eq!(b.long_max, -122.0);
        assert!((b.area() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn centered_rejects_non_positive_half_width() {
        let c = GeoPoint::new(0.0, 0.0);
        assert!(BoundingBox::centered(c, 0.0).is_none());
        assert!(BoundingBox::centered(c, -1.0).is_none());
        assert!(BoundingBox::centered(c, f64::NAN).is_none());
    }

    #[test]
    fn containment_is_strict() {
        let b = BoundingBox::centered(GeoPoint::new(0.0, 0.0), 1.0).unwrap();
        assert!(b.contains(GeoPoint::new(0.5, -0.5)));
        assert!(!b.contains(GeoPoint::new(1.0, 0.0))); // on the edge
        assert!(!b.contains(GeoPoint::new(0.0, -1.0)));
        assert!(!b.contains(GeoPoint::new(2.0, 0.0)));
    }
}
