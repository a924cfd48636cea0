use serde::{Deserialize, Serialize};

/// Size of the local grid in units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct GridSize {
    width: i32,
    height: i32,
}

impl GridSize {
    /// Creates a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Width in x units.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Half of the width, without rounding.
    pub fn half_width(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    /// Height in y units.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Half of the height, without rounding.
    pub fn half_height(&self) -> f64 {
        f64::from(self.height) / 2.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
