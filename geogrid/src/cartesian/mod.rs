//! Types and functions on geometries in local grid coordinates.
//!
//! The local grid has its origin in the top-left corner of the field, with `x` growing to the right and `y` growing
//! down.

mod orient;
mod point;
mod polygon;
mod rect;
mod size;

pub use orient::Orientation;
pub use point::{CartesianPoint2d, LocalPoint};
pub use polygon::LocalPolygon;
pub use rect::Rect;
pub use size::GridSize;
