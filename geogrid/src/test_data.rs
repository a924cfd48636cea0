//! Three annotated fields south-east of Canberra, shared by the tests of several modules.
//!
//! The rings repeat their first point at the end, like GeoJSON polygons do. The longest edge is the northern side of
//! the `east` field, running due east for about 555 metres.

use crate::geo::GeoPoint;
use crate::ring::Ring;
use crate::units::CellSize;

pub(crate) fn three_fields() -> Vec<Ring> {
    vec![
        Ring::labeled(
            vec![
                GeoPoint::new(149.3865874610993, -35.07597449607705),
                GeoPoint::new(149.3876738387109, -35.07607456965434),
                GeoPoint::new(149.3878, -35.0772),
                GeoPoint::new(149.3869, -35.0778),
                GeoPoint::new(149.3861, -35.0770),
                GeoPoint::new(149.3865874610993, -35.07597449607705),
            ],
            "west",
        ),
        Ring::labeled(
            vec![
                GeoPoint::new(149.3890, -35.0755),
                GeoPoint::new(149.3951, -35.0755),
                GeoPoint::new(149.3949, -35.0770),
                GeoPoint::new(149.3905, -35.0772),
                GeoPoint::new(149.3891, -35.0764),
                GeoPoint::new(149.3890, -35.0755),
            ],
            "east",
        ),
        Ring::labeled(
            vec![
                GeoPoint::new(149.3880, -35.0790),
                GeoPoint::new(149.3920, -35.0789),
                GeoPoint::new(149.3915, -35.0800),
                GeoPoint::new(149.3882, -35.0801),
                GeoPoint::new(149.3880, -35.0790),
            ],
            "south",
        ),
    ]
}

/// Same fields plus a few rings that are too short to be used.
pub(crate) fn fields_with_extras() -> Vec<Ring> {
    let mut rings = three_fields();
    rings.push(Ring::new(vec![GeoPoint::new(149.3900, -35.0760)]));
    rings.push(Ring::new(vec![
        GeoPoint::new(149.0, -34.0),
        GeoPoint::new(149.5, -34.5),
    ]));
    rings
}

/// Square 2.5 m cells with a 10 m border on every side.
pub(crate) fn cells() -> CellSize {
    CellSize::square(2.5, 10.0)
}
