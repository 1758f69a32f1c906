//! Geographic coordinate module
//!
//! Provides the query/node position type and great-circle distance
//! calculations on a spherical Earth.

mod types;

pub use types::{CoordError, GeoPoint, EARTH_RADIUS_KM, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Great-circle distance between two points in kilometres (haversine).
///
/// # Arguments
///
/// * `a` - First point
/// * `b` - Second point
#[inline]
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (lat_a, lon_a) = a.to_radians();
    let (lat_b, lon_b) = b.to_radians();

    let dlat = lat_a - lat_b;
    let dlon = lon_a - lon_b;

    let h = (dlat / 2.0).sin().powi(2) + lat_b.cos() * lat_a.cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}
