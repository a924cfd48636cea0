//! Conversion between metres and local grid units.
//!
//! The grid functions make no assumption about what a local unit is (a pixel, a cell of a game board, a plot of
//! land). They only call the methods of [`UnitConversion`], which the caller provides. [`CellSize`] is a ready-made
//! implementation for grids of rectangular cells of fixed size.

use serde::{Deserialize, Serialize};

/// Converts distances between metres and local grid units, independently for each axis.
///
/// Implementations must be free of side effects: grid functions may call them any number of times and from any
/// thread.
pub trait UnitConversion {
    /// Number of x units covering `meters`.
    fn units_x_for_meters(&self, meters: f64) -> f64;
    /// Distance in metres covered by `units` x units.
    fn meters_for_units_x(&self, units: f64) -> f64;
    /// Number of y units covering `meters`.
    fn units_y_for_meters(&self, meters: f64) -> f64;
    /// Distance in metres covered by `units` y units.
    fn meters_for_units_y(&self, units: f64) -> f64;
    /// Extra x units added to the field on top of what the annotations cover.
    fn margin_x(&self) -> i32;
    /// Extra y units added to the field on top of what the annotations cover.
    fn margin_y(&self) -> i32;
}

impl<T: UnitConversion + ?Sized> UnitConversion for &T {
    fn units_x_for_meters(&self, meters: f64) -> f64 {
        (**self).units_x_for_meters(meters)
    }

    fn meters_for_units_x(&self, units: f64) -> f64 {
        (**self).meters_for_units_x(units)
    }

    fn units_y_for_meters(&self, meters: f64) -> f64 {
        (**self).units_y_for_meters(meters)
    }

    fn meters_for_units_y(&self, units: f64) -> f64 {
        (**self).meters_for_units_y(units)
    }

    fn margin_x(&self) -> i32 {
        (**self).margin_x()
    }

    fn margin_y(&self) -> i32 {
        (**self).margin_y()
    }
}

/// Grid of rectangular cells of fixed size.
///
/// ```
/// use geogrid::{CellSize, UnitConversion};
///
/// let cells = CellSize::square(2.5, 10.0);
/// assert_eq!(cells.units_x_for_meters(25.0), 10.0);
/// assert_eq!(cells.margin_y(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CellSize {
    /// Width of a cell in metres.
    pub width_m: f64,
    /// Height of a cell in metres.
    pub height_m: f64,
    /// Empty border added around the annotated area, in metres.
    #[serde(default)]
    pub border_m: f64,
}

impl CellSize {
    /// Creates a new cell size.
    pub fn new(width_m: f64, height_m: f64, border_m: f64) -> Self {
        Self {
            width_m,
            height_m,
            border_m,
        }
    }

    /// Creates a cell size for square cells.
    pub fn square(side_m: f64, border_m: f64) -> Self {
        Self::new(side_m, side_m, border_m)
    }
}

impl UnitConversion for CellSize {
    fn units_x_for_meters(&self, meters: f64) -> f64 {
        meters / self.width_m
    }

    fn meters_for_units_x(&self, units: f64) -> f64 {
        units * self.width_m
    }

    fn units_y_for_meters(&self, meters: f64) -> f64 {
        meters / self.height_m
    }

    fn meters_for_units_y(&self, units: f64) -> f64 {
        units * self.height_m
    }

    fn margin_x(&self) -> i32 {
        (self.border_m / self.width_m).round() as i32
    }

    fn margin_y(&self) -> i32 {
        (self.border_m / self.height_m).round() as i32
    }
}
