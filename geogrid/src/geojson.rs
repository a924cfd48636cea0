//! Reading and writing rings as GeoJSON.
//!
//! Every geometry found in the document becomes one or more rings:
//!
//! * `Polygon`: its exterior ring, holes are dropped;
//! * `MultiPolygon`: the exterior ring of every polygon;
//! * `Point`: a ring of the single point;
//! * `MultiPoint` and `LineString`: a ring of all their positions;
//! * `MultiLineString`: a ring per line;
//! * `GeometryCollection`: whatever its members give.
//!
//! Features pass their `name` property on as the label of their rings. Features without geometry are skipped.

use crate::error::{GeoGridError, Result};
use crate::geo::GeoPoint;
use crate::ring::Ring;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Position, Value};

const LABEL_PROPERTY: &str = "name";

/// Reads all rings from a GeoJSON document.
pub fn read_rings(text: &str) -> Result<Vec<Ring>> {
    let document: GeoJson = text.parse()?;
    let mut rings = vec![];

    match &document {
        GeoJson::Geometry(geometry) => collect_geometry(geometry, None, &mut rings)?,
        GeoJson::Feature(feature) => collect_feature(feature, &mut rings)?,
        GeoJson::FeatureCollection(collection) => {
            for feature in &collection.features {
                collect_feature(feature, &mut rings)?;
            }
        }
    }

    log::debug!("Read {} rings from GeoJSON", rings.len());

    Ok(rings)
}

/// Writes rings as a GeoJSON feature collection with a `Polygon` feature per ring.
pub fn write_rings(rings: &[Ring]) -> String {
    let collection = FeatureCollection {
        bbox: None,
        features: rings.iter().map(to_feature).collect(),
        foreign_members: None,
    };

    GeoJson::from(collection).to_string()
}

fn collect_feature(feature: &Feature, rings: &mut Vec<Ring>) -> Result<()> {
    let Some(geometry) = &feature.geometry else {
        log::trace!("Skipping feature without geometry");
        return Ok(());
    };

    let label = feature
        .property(LABEL_PROPERTY)
        .and_then(JsonValue::as_str);
    collect_geometry(geometry, label, rings)
}

fn collect_geometry(geometry: &Geometry, label: Option<&str>, rings: &mut Vec<Ring>) -> Result<()> {
    match &geometry.value {
        Value::Point(position) => rings.push(to_ring(std::slice::from_ref(position), label)?),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            rings.push(to_ring(positions, label)?)
        }
        Value::MultiLineString(lines) => {
            for line in lines {
                rings.push(to_ring(line, label)?);
            }
        }
        Value::Polygon(polygon) => rings.push(exterior_ring(polygon, label)?),
        Value::MultiPolygon(polygons) => {
            for polygon in polygons {
                rings.push(exterior_ring(polygon, label)?);
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_geometry(geometry, label, rings)?;
            }
        }
    }

    Ok(())
}

fn exterior_ring(polygon: &[Vec<Position>], label: Option<&str>) -> Result<Ring> {
    to_ring(polygon.first().map(Vec::as_slice).unwrap_or_default(), label)
}

fn to_ring(positions: &[Position], label: Option<&str>) -> Result<Ring> {
    let points = positions
        .iter()
        .map(to_point)
        .collect::<Result<Vec<_>>>()?;

    Ok(match label {
        Some(label) => Ring::labeled(points, label),
        None => Ring::new(points),
    })
}

fn to_point(position: &Position) -> Result<GeoPoint> {
    match position.as_slice() {
        [lon, lat] => Ok(GeoPoint::new(*lon, *lat)),
        [lon, lat, alt, ..] => Ok(GeoPoint::with_altitude(*lon, *lat, *alt)),
        _ => Err(GeoGridError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn to_feature(ring: &Ring) -> Feature {
    let exterior = ring
        .iter_points()
        .map(|p| match p.alt() {
            Some(alt) => vec![p.lon(), p.lat(), alt],
            None => vec![p.lon(), p.lat()],
        })
        .collect();

    let properties = ring.label().map(|label| {
        let mut properties = JsonObject::new();
        properties.insert(LABEL_PROPERTY.to_string(), JsonValue::from(label));
        properties
    });

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![exterior]))),
        id: None,
        properties,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::three_fields;
    use assert_matches::assert_matches;

    const THREE_FIELDS: &str = include_str!("../test-data/three_fields.geojson");
    const EXTRAS: &str = include_str!("../test-data/extras.geojson");

    #[test]
    fn reads_feature_collection() {
        let rings = read_rings(THREE_FIELDS).expect("valid GeoJSON");

        assert_eq!(rings, three_fields());
    }

    #[test]
    fn reads_extras() {
        let rings = read_rings(EXTRAS).expect("valid GeoJSON");

        let sizes: Vec<_> = rings.iter().map(Ring::len).collect();
        assert_eq!(sizes, vec![6, 6, 5, 1, 1, 5, 5]);

        let usable: Vec<_> = rings.iter().map(Ring::is_usable).collect();
        assert_eq!(usable, vec![true, true, true, false, false, true, true]);

        let labels: Vec<_> = rings.iter().map(Ring::label).collect();
        assert_eq!(
            labels,
            vec![
                Some("west"),
                Some("east"),
                Some("south"),
                Some("gate"),
                None,
                Some("fence"),
                Some("trees")
            ]
        );

        assert!(rings
            .iter()
            .flat_map(|r| r.iter_points())
            .all(GeoPoint::is_finite));
        assert_eq!(rings[3].points()[0].alt(), Some(585.5));
    }

    #[test]
    fn reads_single_polygon() {
        let text = r#"{
            "type": "Polygon",
            "coordinates": [
                [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
                [[0.2, 0.1], [0.8, 0.1], [0.8, 0.5], [0.2, 0.1]]
            ]
        }"#;

        let rings = read_rings(text).expect("valid GeoJSON");

        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
        assert_eq!(rings[0].label(), None);
    }

    #[test]
    fn reads_multi_geometries() {
        let text = r#"{
            "type": "Feature",
            "properties": {"name": "plots"},
            "geometry": {
                "type": "GeometryCollection",
                "geometries": [
                    {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                            [[[2.0, 0.0], [3.0, 0.0], [3.0, 1.0], [2.0, 0.0]]]
                        ]
                    },
                    {
                        "type": "MultiLineString",
                        "coordinates": [[[0.0, 5.0], [1.0, 5.0]], [[0.0, 6.0], [1.0, 6.0]]]
                    }
                ]
            }
        }"#;

        let rings = read_rings(text).expect("valid GeoJSON");

        assert_eq!(rings.len(), 4);
        assert!(rings.iter().all(|r| r.label() == Some("plots")));
        assert_eq!(rings[1].points()[0], GeoPoint::new(2.0, 0.0));
        assert_eq!(rings[3].len(), 2);
    }

    #[test]
    fn rejects_short_positions() {
        let text = r#"{"type": "LineString", "coordinates": [[1.0, 2.0], [3.0]]}"#;

        assert_matches!(read_rings(text), Err(GeoGridError::Conversion(_)));
    }

    #[test]
    fn rejects_invalid_text() {
        assert_matches!(read_rings("not json"), Err(GeoGridError::GeoJson(_)));
    }

    #[test]
    fn writes_and_reads_back() {
        let mut rings = three_fields();
        rings.push(Ring::new(vec![
            GeoPoint::with_altitude(149.0, -35.0, 600.0),
            GeoPoint::with_altitude(149.1, -35.0, 610.0),
            GeoPoint::with_altitude(149.1, -35.1, 620.0),
        ]));

        let text = write_rings(&rings);

        assert_eq!(read_rings(&text).expect("written GeoJSON is valid"), rings);
    }

    #[test]
    fn writes_empty_collection() {
        let rings = read_rings(&write_rings(&[])).expect("written GeoJSON is valid");
        assert!(rings.is_empty());
    }
}
