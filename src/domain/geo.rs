//! Great-circle distance and bounding boxes on a spherical Earth.
//!
//! Everything here is pure: no I/O and no state. Range validation of
//! latitude/longitude happens where data enters the system; these helpers
//! only reject values that cannot be computed with (NaN, infinities).

use serde::Serialize;
use utoipa::ToSchema;

use super::DomainError;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate kilometers per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.0;

/// Four decimal places of a kilometer, roughly 10 meters.
const DISTANCE_SCALE: f64 = 10_000.0;

/// Axis-aligned latitude/longitude rectangle, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }

    pub fn width_degrees(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height_degrees(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Haversine distance in kilometers between two points given in degrees,
/// rounded to four decimal places.
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, DomainError> {
    for (name, value) in [("lat1", lat1), ("lon1", lon1), ("lat2", lat2), ("lon2", lon2)] {
        if !value.is_finite() {
            return Err(DomainError::InvalidCoordinate(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
    }

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(round_distance(EARTH_RADIUS_KM * c))
}

/// Degree-space box around a center that contains every point within
/// `distance_km` of it.
///
/// The box over-approximates: it is a square in degree space, widened in
/// longitude by `1 / |cos(lat)|`, so its corners can sit noticeably farther
/// than `distance_km` away. It is a cheap pre-filter for candidate rows and
/// must always be followed by an exact [`calculate_distance`] check.
///
/// Bounds are clamped to -90..90 and -180..180 rather than wrapped, so a box
/// touching the antimeridian does not include points on the far side of it.
pub fn get_bounding_box(center_lat: f64, center_lon: f64, distance_km: f64) -> BoundingBox {
    let lat_delta = distance_km / KM_PER_DEGREE;
    let lon_delta = lat_delta / center_lat.to_radians().cos().abs();

    BoundingBox {
        min_lat: (center_lat - lat_delta).max(-90.0),
        max_lat: (center_lat + lat_delta).min(90.0),
        min_lon: (center_lon - lon_delta).max(-180.0),
        max_lon: (center_lon + lon_delta).min(180.0),
    }
}

/// True when both values are finite and strictly inside (-90, 90) / (-180, 180).
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude > -90.0 && latitude < 90.0 && longitude > -180.0 && longitude < 180.0
}

fn round_distance(distance_km: f64) -> f64 {
    (distance_km * DISTANCE_SCALE).round() / DISTANCE_SCALE
}
