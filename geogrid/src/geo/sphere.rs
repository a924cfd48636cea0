//! Spherical-earth primitives: great-circle distance, initial bearing and the direct geodesic problem.
//!
//! All functions treat the Earth as a sphere. This is precise enough for fields spanning a few kilometres, which is
//! what the rest of the crate works with.

use crate::geo::{Bearing, GeoPoint};
use std::f64::consts::PI;

/// Radius of the Earth used by [`distance`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius of the Earth used by [`move_point`], in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in metres, calculated with the Haversine formula.
///
/// Altitude is not taken into account.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + a.lat_rad().cos() * b.lat_rad().cos() * (d_lon / 2.0).sin() * (d_lon / 2.0).sin();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c * 1000.0
}

/// Initial bearing of the great circle going from `a` to `b`.
pub fn bearing(a: &GeoPoint, b: &GeoPoint) -> Bearing {
    let lat1 = a.lat_rad();
    let lat2 = b.lat_rad();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    Bearing::new((y.atan2(x).to_degrees() + 360.0) % 360.0)
}

/// Returns the point reached by travelling `distance_m` metres from `origin` along the great circle with the given
/// initial `bearing`.
///
/// The longitude of the result is normalized into `[-180, 180)`. Altitude of the origin is kept.
pub fn move_point(origin: &GeoPoint, distance_m: f64, bearing: Bearing) -> GeoPoint {
    let brng = bearing.radians();
    let lat = origin.lat_rad();
    let lon = origin.lon_rad();
    let angular = distance_m / EARTH_RADIUS_M;

    let lat_result = (lat.sin() * angular.cos() + lat.cos() * angular.sin() * brng.cos()).asin();
    let d_lon = (brng.sin() * angular.sin() * lat.cos())
        .atan2(angular.cos() - lat.sin() * lat_result.sin());
    let lon_result = (lon + d_lon + 3.0 * PI).rem_euclid(2.0 * PI) - PI;

    origin.moved_to(lon_result.to_degrees(), lat_result.to_degrees())
}
