//! Field orientation: the center of a batch of annotations and the bearing that frames them best.

use crate::error::{GeoGridError, Result};
use crate::geo::{Bearing, GeoPoint};
use crate::ring::Ring;

/// Average position of all points of all usable rings.
///
/// Altitude follows the rule of [`GeoPoint::mean`]: present altitudes are divided by the number of all averaged
/// points, and the result has no altitude if none of them has one.
///
/// Returns `None` for an empty batch. A batch where no ring is usable has nothing to average, and the returned point
/// has `NaN` coordinates.
pub fn center_point(rings: &[Ring]) -> Option<GeoPoint> {
    if rings.is_empty() {
        return None;
    }

    let center = GeoPoint::mean(
        rings
            .iter()
            .filter(|ring| ring.is_usable())
            .flat_map(Ring::iter_points),
    );

    Some(center.unwrap_or_else(|| {
        log::warn!(
            "None of the {} rings has at least {} points, center point is undefined",
            rings.len(),
            Ring::MIN_USABLE_POINTS
        );
        GeoPoint::new(f64::NAN, f64::NAN)
    }))
}

/// The longest edge among all edges of all rings, measured as great-circle distance.
///
/// Every ring takes part, usable or not. If several edges have the same length, the first one wins. Returns `None`
/// if there are no edges of non-zero length.
pub fn longest_edge(rings: &[Ring]) -> Option<(GeoPoint, GeoPoint)> {
    let mut longest = None;
    let mut max_length = 0.0;

    for edge in rings.iter().flat_map(Ring::iter_edges) {
        let length = edge.length();
        if length > max_length {
            max_length = length;
            longest = Some(edge.to_points());
        }
    }

    longest
}

/// Bearing of the [`longest_edge`] of the batch, folded into `[0, 180)`.
///
/// A line and its reverse describe the same field orientation, so the bearing always frames the field left to right.
pub fn best_field_bearing(rings: &[Ring]) -> Result<Bearing> {
    let (a, b) = longest_edge(rings).ok_or(GeoGridError::NullArgument("longest edge"))?;
    let bearing = crate::geo::bearing(&a, &b).fold_to_half_turn();

    log::debug!("Best field bearing for {} rings: {bearing}", rings.len());

    Ok(bearing)
}
