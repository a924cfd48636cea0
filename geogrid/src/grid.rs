//! Mapping between geographic coordinates and a local grid of units.
//!
//! The grid covers a *field*: the rectangle around a batch of annotations, oriented along their
//! [best bearing](crate::best_field_bearing). [`FieldGrid`] holds the field's top-left anchor, size and bearing, and
//! converts points both ways with the help of a [`UnitConversion`].
//!
//! # Forward and inverse mapping
//!
//! The two directions do not treat the bearing the same way:
//!
//! * [`FieldGrid::local_to_geo`] walks from the anchor along the bearing for `x` and along the bearing turned right
//!   by 90° for `y`.
//! * [`FieldGrid::geo_to_local`] measures plain east-west and north-south distances from the anchor, ignoring the
//!   bearing.
//!
//! The two agree for fields oriented east-west (bearing close to 90°) and for points to the right of and below the
//! anchor, which covers the fields produced by [`FieldGrid::fit`] for annotations framed along their longest side.
//! For other orientations a round trip through both functions does not return the starting point.

use crate::cartesian::{GridSize, LocalPoint, LocalPolygon};
use crate::error::{GeoGridError, Result};
use crate::geo::{distance, move_point, Bearing, GeoPoint};
use crate::orientation::{best_field_bearing, center_point};
use crate::projection::Projection;
use crate::ring::Ring;
use crate::units::UnitConversion;

/// Local grid laid over a field. See module documentation for details.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGrid<U> {
    top_left: GeoPoint,
    size: GridSize,
    bearing: Bearing,
    units: U,
}

impl<U: UnitConversion> FieldGrid<U> {
    /// Creates a new grid from its parts.
    pub fn new(top_left: GeoPoint, size: GridSize, bearing: Bearing, units: U) -> Self {
        Self {
            top_left,
            size,
            bearing,
            units,
        }
    }

    /// Lays a grid over the given annotations.
    ///
    /// The bearing is the [best field bearing](best_field_bearing) of the rings, the size is given by [`field_size`]
    /// and the anchor by [`top_left_anchor`].
    pub fn fit(rings: &[Ring], units: U) -> Result<Self> {
        let bearing = best_field_bearing(rings)?;
        let size = field_size(rings, bearing, &units)?;
        let top_left = top_left_anchor(rings, size, bearing, &units)?;

        Ok(Self::new(top_left, size, bearing, units))
    }

    /// Geographic point of the grid origin.
    pub fn top_left(&self) -> GeoPoint {
        self.top_left
    }

    /// Size of the grid.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Direction of the grid's x axis.
    pub fn bearing(&self) -> Bearing {
        self.bearing
    }

    /// Unit conversion used by the grid.
    pub fn units(&self) -> &U {
        &self.units
    }

    /// Converts a geographic point into grid coordinates.
    ///
    /// `x` is the distance between the anchor and the point projected onto the anchor's parallel, `y` is the distance
    /// between the anchor and the point projected onto the anchor's meridian. Both are converted into units and
    /// rounded. The bearing of the grid is not applied.
    pub fn geo_to_local(&self, point: &GeoPoint) -> LocalPoint {
        let x_change = GeoPoint::new(point.lon(), self.top_left.lat());
        let y_change = GeoPoint::new(self.top_left.lon(), point.lat());

        let x = self
            .units
            .units_x_for_meters(distance(&self.top_left, &x_change));
        let y = self
            .units
            .units_y_for_meters(distance(&self.top_left, &y_change));

        LocalPoint::new(x.round() as i32, y.round() as i32)
    }

    /// Converts grid coordinates into a geographic point.
    ///
    /// Moves from the anchor by `x` along the grid's bearing and by `y` along the bearing turned right by 90°. The
    /// longitude is taken from the first move and the latitude from the second.
    pub fn local_to_geo(&self, point: &LocalPoint) -> GeoPoint {
        let x = self.units.meters_for_units_x(f64::from(point.x));
        let y = self.units.meters_for_units_y(f64::from(point.y));

        let x_move = move_point(&self.top_left, x, self.bearing);
        let y_move = move_point(&self.top_left, y, self.bearing.plus_90());

        GeoPoint::new(x_move.lon(), y_move.lat())
    }

    /// Converts every point of the ring into grid coordinates.
    pub fn project_ring(&self, ring: &Ring) -> Vec<LocalPoint> {
        ring.iter_points().map(|p| self.geo_to_local(p)).collect()
    }

    /// Converts a sequence of grid points into an unlabeled ring.
    pub fn unproject_points(&self, points: &[LocalPoint]) -> Ring {
        Ring::new(points.iter().map(|p| self.local_to_geo(p)).collect())
    }

    /// Projects the ring onto the grid as a closed polygon.
    ///
    /// Every vertex goes through [`FieldGrid::geo_to_local`] and then through `mutator`, if one is given. It can be
    /// used, for example, to shift the vertices by a pixel offset.
    pub fn polygon_shape(
        &self,
        ring: &Ring,
        mutator: Option<&dyn Fn(LocalPoint) -> LocalPoint>,
    ) -> LocalPolygon {
        let points = ring
            .iter_points()
            .map(|p| self.geo_to_local(p))
            .map(|p| match mutator {
                Some(mutator) => mutator(p),
                None => p,
            })
            .collect();

        LocalPolygon::new(points)
    }

    /// Returns true if `point` lies within the bounding rectangle of the ring projected onto the grid.
    ///
    /// This is a cheap test that also accepts points near the ring but outside of it. See [`FieldGrid::point_inside`]
    /// for the exact one.
    pub fn point_intersects(&self, point: &LocalPoint, ring: &Ring) -> bool {
        self.polygon_shape(ring, None)
            .bounding_rect()
            .is_some_and(|rect| rect.contains(point))
    }

    /// Returns true if `point` lies inside the ring projected onto the grid, or on its boundary.
    pub fn point_inside(&self, point: &LocalPoint, ring: &Ring) -> bool {
        self.polygon_shape(ring, None).contains_point(point)
    }
}

impl<U: UnitConversion> Projection for FieldGrid<U> {
    type InPoint = GeoPoint;
    type OutPoint = LocalPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        input.is_finite().then(|| self.geo_to_local(input))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let point = self.local_to_geo(input);
        point.is_finite().then_some(point)
    }
}

/// Size of a grid covering all the rings with the units' margin around them.
///
/// For every point, the east-west and north-south distances to the batch's [`center_point`] are measured. The
/// largest of each is doubled to cover both sides of the center, converted into units and increased by the margin.
/// The size does not depend on the bearing.
pub fn field_size<U: UnitConversion + ?Sized>(
    rings: &[Ring],
    bearing: Bearing,
    units: &U,
) -> Result<GridSize> {
    let center = center_point(rings).ok_or(GeoGridError::NullArgument("rings"))?;

    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;

    for point in rings.iter().flat_map(Ring::iter_points) {
        let x_change = GeoPoint::new(point.lon(), center.lat());
        let y_change = GeoPoint::new(center.lon(), point.lat());

        max_x = max_x.max(distance(&x_change, &center));
        max_y = max_y.max(distance(&y_change, &center));
    }

    let width = (units.units_x_for_meters(max_x) * 2.0) as i32 + units.margin_x();
    let height = (units.units_y_for_meters(max_y) * 2.0) as i32 + units.margin_y();
    let size = GridSize::new(width, height);

    log::debug!("Field size for {} rings at {bearing}: {size}", rings.len());

    Ok(size)
}

/// Geographic point of the top-left corner of a field of the given size, centered on the batch's [`center_point`]
/// and oriented along `bearing`.
///
/// The longitude comes from moving half the width against the bearing, the latitude from moving half the height
/// along the bearing turned left by 90°.
pub fn top_left_anchor<U: UnitConversion + ?Sized>(
    rings: &[Ring],
    size: GridSize,
    bearing: Bearing,
    units: &U,
) -> Result<GeoPoint> {
    let center = center_point(rings).ok_or(GeoGridError::NullArgument("rings"))?;

    let half_width = units.meters_for_units_x(size.half_width());
    let half_height = units.meters_for_units_y(size.half_height());

    let x_move = move_point(&center, half_width, bearing.plus_180());
    let y_move = move_point(&center, half_height, bearing.minus_90());

    let top_left = GeoPoint::new(x_move.lon(), y_move.lat());
    log::debug!("Top-left anchor of {size} field around {center}: {top_left}");

    Ok(top_left)
}
