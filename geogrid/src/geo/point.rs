use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// Point on the surface of the Earth with an optional altitude.
///
/// Longitude and latitude are in degrees. The altitude is kept apart from the planar coordinates: it is carried
/// through rotations, averaged separately by [`center_point`](crate::center_point) and ignored by every distance or
/// bearing computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<f64>,
}

impl GeoPoint {
    /// Creates a new point without altitude from longitude and latitude (in degrees).
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    /// Creates a new point with the given altitude.
    pub const fn with_altitude(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Altitude, if the point has one.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Returns a copy of the point with the given longitude and latitude, keeping the altitude.
    pub fn moved_to(&self, lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: self.alt,
        }
    }

    /// Returns true if both longitude and latitude are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Average position of the points, or `None` if there are none.
    ///
    /// The altitudes that are present are summed and divided by the number of all points, so a point without
    /// altitude counts as being at zero. The result has no altitude if none of the points has one.
    pub fn mean<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<Self> {
        let mut lon_sum = 0.0;
        let mut lat_sum = 0.0;
        let mut alt_sum = None;
        let mut count = 0usize;

        for point in points {
            lon_sum += point.lon;
            lat_sum += point.lat;
            if let Some(alt) = point.alt {
                *alt_sum.get_or_insert(0.0) += alt;
            }
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let count = count as f64;
        Some(Self {
            lon: lon_sum / count,
            lat: lat_sum / count,
            alt: alt_sum.map(|sum| sum / count),
        })
    }
}

impl AbsDiffEq for GeoPoint {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let alt_eq = match (self.alt, other.alt) {
            (Some(a), Some(b)) => a.abs_diff_eq(&b, epsilon),
            (None, None) => true,
            _ => false,
        };

        self.lon.abs_diff_eq(&other.lon, epsilon)
            && self.lat.abs_diff_eq(&other.lat, epsilon)
            && alt_eq
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.alt {
            Some(alt) => write!(f, "({}, {}, {})", self.lon, self.lat, alt),
            None => write!(f, "({}, {})", self.lon, self.lat),
        }
    }
}

/// Creates a new [`GeoPoint`] from longitude and latitude values (in degrees).
///
/// ```
/// use geogrid::lonlat;
///
/// let point = lonlat!(149.38, -35.07);
/// assert_eq!(point.lat(), -35.07);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::geo::GeoPoint::new($lon, $lat)
    };
}
