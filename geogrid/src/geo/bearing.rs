use serde::{Deserialize, Serialize};

/// Compass direction in degrees: 0 is north, values grow clockwise.
///
/// The value is always normalized into `[0, 360)`. Derived directions ([`Bearing::plus_90`] and friends) wrap with
/// true modulo arithmetic, so they stay in range whatever the offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(from = "f64")]
pub struct Bearing(f64);

impl Bearing {
    /// Due north.
    pub const NORTH: Self = Self(0.0);

    /// Creates a bearing from a value in degrees, wrapping it into `[0, 360)`.
    pub fn new(degrees: f64) -> Self {
        Self(wrap(degrees))
    }

    /// Value of the bearing in degrees.
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Value of the bearing in radians.
    pub fn radians(&self) -> f64 {
        self.0.to_radians()
    }

    /// Returns true for a bearing pointing exactly north.
    pub fn is_north(&self) -> bool {
        self.0 == 0.0
    }

    /// Direction perpendicular to the bearing, to the right of it.
    pub fn plus_90(&self) -> Self {
        self.offset(90.0)
    }

    /// Reverse direction.
    pub fn plus_180(&self) -> Self {
        self.offset(180.0)
    }

    /// Same as [`Bearing::minus_90`].
    pub fn plus_270(&self) -> Self {
        self.offset(270.0)
    }

    /// Direction perpendicular to the bearing, to the left of it.
    pub fn minus_90(&self) -> Self {
        self.offset(-90.0)
    }

    /// Same as [`Bearing::plus_90`].
    pub fn minus_270(&self) -> Self {
        self.offset(-270.0)
    }

    /// Folds the bearing into `[0, 180)`, treating a line and its reverse as the same orientation.
    pub fn fold_to_half_turn(&self) -> Self {
        if self.0 >= 180.0 {
            Self(self.0 - 180.0)
        } else {
            *self
        }
    }

    fn offset(&self, degrees: f64) -> Self {
        Self::new(self.0 + degrees)
    }
}

impl From<f64> for Bearing {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Bearing> for f64 {
    fn from(value: Bearing) -> Self {
        value.0
    }
}

impl std::fmt::Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

fn wrap(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_wraps_into_range() {
        assert_eq!(Bearing::new(370.0).degrees(), 10.0);
        assert_eq!(Bearing::new(-90.0).degrees(), 270.0);
        assert_eq!(Bearing::new(360.0).degrees(), 0.0);
        assert_eq!(Bearing::new(-1e-18).degrees(), 0.0);
    }

    #[test]
    fn offsets() {
        let bearing = Bearing::new(300.0);

        assert_eq!(bearing.plus_90().degrees(), 30.0);
        assert_eq!(bearing.plus_180().degrees(), 120.0);
        assert_eq!(bearing.plus_270().degrees(), 210.0);
        assert_eq!(bearing.minus_90().degrees(), 210.0);
        assert_eq!(bearing.minus_270().degrees(), 30.0);
    }

    #[test]
    fn offsets_near_wrap_stay_in_range() {
        for degrees in [0.0, 45.0, 89.9, 180.0, 269.5, 359.99] {
            let bearing = Bearing::new(degrees);
            for derived in [
                bearing.plus_90(),
                bearing.plus_180(),
                bearing.plus_270(),
                bearing.minus_90(),
                bearing.minus_270(),
            ] {
                assert!((0.0..360.0).contains(&derived.degrees()), "{derived}");
            }
        }
    }

    #[test]
    fn deserialized_value_is_wrapped() {
        let bearing: Bearing = serde_json::from_str("400.0").expect("valid json");
        assert_eq!(bearing.degrees(), 40.0);

        let bearing: Bearing = serde_json::from_str("-90").expect("valid json");
        assert_eq!(bearing.degrees(), 270.0);

        assert_eq!(serde_json::to_string(&Bearing::new(45.5)).expect("serializable"), "45.5");
    }

    #[test]
    fn fold_to_half_turn() {
        assert_abs_diff_eq!(Bearing::new(270.5).fold_to_half_turn().degrees(), 90.5);
        assert_eq!(Bearing::new(180.0).fold_to_half_turn().degrees(), 0.0);
        assert_eq!(Bearing::new(12.0).fold_to_half_turn().degrees(), 12.0);
    }
}
