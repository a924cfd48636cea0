//! Rotation of annotations about a center point.
//!
//! Rotation is a planar rotation applied directly to `(longitude, latitude)` pairs relative to the center. This is a
//! flat-earth approximation that only holds while the rotated area is small. Angles follow the compass convention:
//! positive angles turn clockwise.

use crate::geo::{Bearing, GeoPoint};
use crate::orientation::center_point;
use crate::ring::Ring;
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// Direction of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RotationMode {
    /// Turn by `-bearing`, so that a line going along the bearing ends up pointing north.
    AlignNorth,
    /// Turn by `bearing - 360`, undoing [`RotationMode::AlignNorth`].
    Revert,
}

impl RotationMode {
    /// Clockwise rotation angle in degrees for the given bearing, or `None` if no rotation is needed.
    pub fn angle(&self, bearing: Bearing) -> Option<f64> {
        if bearing.is_north() {
            return None;
        }

        Some(match self {
            RotationMode::AlignNorth => -bearing.degrees(),
            RotationMode::Revert => bearing.degrees() - 360.0,
        })
    }
}

/// Geometries that can be rotated about a point.
pub trait Rotate: Sized {
    /// Returns a copy of `self` rotated about `center` by the angle `mode` derives from `bearing`.
    fn rotated_about(&self, center: &GeoPoint, bearing: Bearing, mode: RotationMode) -> Self;
}

impl Rotate for GeoPoint {
    fn rotated_about(&self, center: &GeoPoint, bearing: Bearing, mode: RotationMode) -> Self {
        let Some(angle) = mode.angle(bearing) else {
            return *self;
        };

        // nalgebra rotates counterclockwise
        let rotation = Rotation2::new(-angle.to_radians());
        let offset = rotation * Vector2::new(self.lon() - center.lon(), self.lat() - center.lat());

        self.moved_to(center.lon() + offset.x, center.lat() + offset.y)
    }
}

impl Rotate for Ring {
    fn rotated_about(&self, center: &GeoPoint, bearing: Bearing, mode: RotationMode) -> Self {
        self.map_points(|p| p.rotated_about(center, bearing, mode))
    }
}

/// Rotates `item` about `center` so that `bearing` points north.
pub fn rotate_to_north<T: Rotate>(item: &T, center: &GeoPoint, bearing: Bearing) -> T {
    item.rotated_about(center, bearing, RotationMode::AlignNorth)
}

/// Undoes [`rotate_to_north`].
pub fn revert_rotation<T: Rotate>(item: &T, center: &GeoPoint, bearing: Bearing) -> T {
    item.rotated_about(center, bearing, RotationMode::Revert)
}

/// Rotates every ring of the batch about the batch's [`center_point`].
///
/// An empty batch gives an empty result.
pub fn rotate_rings(rings: &[Ring], bearing: Bearing, mode: RotationMode) -> Vec<Ring> {
    let Some(center) = center_point(rings) else {
        return vec![];
    };

    log::trace!("Rotating {} rings about {center} ({mode:?}, {bearing})", rings.len());

    rings
        .iter()
        .map(|ring| ring.rotated_about(&center, bearing, mode))
        .collect()
}

/// Rotates the batch so that `bearing` points north. See [`rotate_rings`].
pub fn rotate_rings_to_north(rings: &[Ring], bearing: Bearing) -> Vec<Ring> {
    rotate_rings(rings, bearing, RotationMode::AlignNorth)
}

/// Undoes [`rotate_rings_to_north`].
pub fn revert_rings_rotation(rings: &[Ring], bearing: Bearing) -> Vec<Ring> {
    rotate_rings(rings, bearing, RotationMode::Revert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::{best_field_bearing, longest_edge};
    use crate::test_data::three_fields;
    use approx::assert_abs_diff_eq;

    #[test]
    fn north_bearing_is_identity() {
        let point = GeoPoint::new(149.1, -35.2);
        let center = GeoPoint::new(149.0, -35.0);

        assert_eq!(rotate_to_north(&point, &center, Bearing::NORTH), point);
        assert_eq!(revert_rotation(&point, &center, Bearing::NORTH), point);
    }

    #[test]
    fn east_turns_to_north() {
        let center = GeoPoint::new(10.0, 10.0);
        let east = GeoPoint::new(11.0, 10.0);

        let rotated = rotate_to_north(&east, &center, Bearing::new(90.0));

        assert_abs_diff_eq!(rotated, GeoPoint::new(10.0, 11.0), epsilon = 1e-12);
    }

    #[test]
    fn revert_turns_north_back_to_bearing() {
        let center = GeoPoint::new(0.0, 0.0);
        let north = GeoPoint::new(0.0, 1.0);

        let reverted = revert_rotation(&north, &center, Bearing::new(45.0));

        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(reverted, GeoPoint::new(half_sqrt2, half_sqrt2), epsilon = 1e-12);
    }

    #[test]
    fn rotation_keeps_altitude_and_label() {
        let center = GeoPoint::new(0.0, 0.0);
        let ring = Ring::labeled(vec![GeoPoint::with_altitude(1.0, 0.0, 42.0)], "hill");

        let rotated = rotate_to_north(&ring, &center, Bearing::new(30.0));

        assert_eq!(rotated.label(), Some("hill"));
        assert_eq!(rotated.points()[0].alt(), Some(42.0));
    }

    #[test]
    fn align_then_revert_is_identity() {
        let rings = three_fields();
        let bearing = best_field_bearing(&rings).expect("fields have edges");

        let restored = revert_rings_rotation(&rotate_rings_to_north(&rings, bearing), bearing);

        assert_eq!(restored.len(), rings.len());
        for (original, restored) in rings.iter().zip(&restored) {
            assert_eq!(original.label(), restored.label());
            for (a, b) in original.iter_points().zip(restored.iter_points()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn aligned_longest_edge_points_north() {
        let rings = three_fields();
        let bearing = best_field_bearing(&rings).expect("fields have edges");

        let rotated = rotate_rings_to_north(&rings, bearing);
        let (a, b) = longest_edge(&rotated).expect("rotated fields have edges");

        assert_abs_diff_eq!(a.lon(), b.lon(), epsilon = 1e-6);
        assert!(b.lat() > a.lat());
    }

    #[test]
    fn empty_batch() {
        assert!(rotate_rings_to_north(&[], Bearing::new(10.0)).is_empty());
    }
}
