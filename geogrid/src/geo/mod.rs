//! Points in geographic coordinates (see [`GeoPoint`]), compass bearings (see [`Bearing`]) and the spherical-earth
//! primitives every other module builds on (see [`sphere`]).

mod bearing;
mod point;
pub mod sphere;

pub use bearing::Bearing;
pub use point::GeoPoint;
pub use sphere::{bearing, distance, move_point};
