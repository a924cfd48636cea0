//! Geographic annotations framed on a local grid.
//!
//! The crate takes a batch of polygon annotations drawn over a field ([`Ring`]s of [`GeoPoint`]s), finds the
//! direction the field is laid out along and lays a rectangular grid of units over it. Annotations can then be moved
//! between geographic coordinates and integer grid coordinates.
//!
//! ```
//! use geogrid::{lonlat, CellSize, FieldGrid, Ring};
//!
//! let field = Ring::labeled(
//!     vec![
//!         lonlat!(149.3890, -35.0755),
//!         lonlat!(149.3951, -35.0755),
//!         lonlat!(149.3949, -35.0770),
//!         lonlat!(149.3891, -35.0764),
//!     ],
//!     "east",
//! );
//!
//! let grid = FieldGrid::fit(&[field.clone()], CellSize::square(2.5, 10.0)).expect("field has edges");
//! assert!((grid.bearing().degrees() - 90.0).abs() < 0.01);
//!
//! let shape = grid.polygon_shape(&field, None);
//! assert_eq!(shape.points().len(), 4);
//! ```
//!
//! The main parts are:
//!
//! * [`geo`]: geographic points, bearings and great-circle math on a spherical Earth;
//! * [`orientation`]: the center and the best bearing of a batch of annotations;
//! * [`rotation`]: turning annotations around their center so that the field points north and back;
//! * [`grid`]: the grid itself, its size and anchor;
//! * [`cartesian`]: integer points, rectangles and polygons on the grid;
//! * `geojson` (with the `geojson` feature): reading and writing annotations as GeoJSON.

pub mod cartesian;
pub mod error;
pub mod geo;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod grid;
pub mod orientation;
pub mod projection;
pub mod ring;
pub mod rotation;
pub mod units;

#[cfg(test)]
mod test_data;

pub use cartesian::{GridSize, LocalPoint, LocalPolygon, Rect};
pub use error::{GeoGridError, Result};
pub use geo::{Bearing, GeoPoint};
pub use grid::{field_size, top_left_anchor, FieldGrid};
pub use orientation::{best_field_bearing, center_point, longest_edge};
pub use projection::Projection;
pub use ring::{Edge, Ring};
pub use rotation::{
    revert_rings_rotation, revert_rotation, rotate_rings, rotate_rings_to_north, rotate_to_north, Rotate,
    RotationMode,
};
pub use units::{CellSize, UnitConversion};
