use crate::cartesian::{LocalPoint, Orientation, Rect};
use serde::{Deserialize, Serialize};

/// Closed polygon in local grid coordinates.
///
/// The last point is connected back to the first one. Repeating the first point at the end is allowed and makes no
/// difference to containment checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LocalPolygon {
    points: Vec<LocalPoint>,
}

impl LocalPolygon {
    /// Creates a new polygon.
    pub fn new(points: Vec<LocalPoint>) -> Self {
        Self { points }
    }

    /// Vertices of the polygon in order.
    pub fn points(&self) -> &[LocalPoint] {
        &self.points
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_points(self) -> Vec<LocalPoint> {
        self.points
    }

    /// Iterates over the sides of the polygon, including the one between the last and the first points.
    pub fn iter_sides(&self) -> impl Iterator<Item = (&'_ LocalPoint, &'_ LocalPoint)> {
        self.points
            .iter()
            .zip(self.points.iter().skip(1).chain(self.points.first()))
    }

    /// Axis-aligned bounding rectangle, or `None` for a polygon without points.
    pub fn bounding_rect(&self) -> Option<Rect<i32>> {
        Rect::from_points(self.points.iter())
    }

    /// Returns true if the `point` lies inside or on one of the polygon's sides.
    pub fn contains_point(&self, point: &LocalPoint) -> bool {
        let mut wn = 0i64;

        for (from, to) in self.iter_sides() {
            let orientation = Orientation::triplet(from, to, point);
            if orientation == Orientation::Collinear && is_between(from, to, point) {
                return true;
            }

            if from.y <= point.y {
                if to.y > point.y && orientation == Orientation::Counterclockwise {
                    wn += 1;
                }
            } else if to.y <= point.y && orientation == Orientation::Clockwise {
                wn -= 1;
            }
        }

        wn != 0
    }
}

impl From<Vec<LocalPoint>> for LocalPolygon {
    fn from(value: Vec<LocalPoint>) -> Self {
        Self::new(value)
    }
}

fn is_between(from: &LocalPoint, to: &LocalPoint, point: &LocalPoint) -> bool {
    point.x >= from.x.min(to.x)
        && point.x <= from.x.max(to.x)
        && point.y >= from.y.min(to.y)
        && point.y <= from.y.max(to.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> LocalPolygon {
        LocalPolygon::new(vec![
            LocalPoint::new(0, 0),
            LocalPoint::new(10, 10),
            LocalPoint::new(10, 0),
        ])
    }

    #[test]
    fn contains_point() {
        let polygon = triangle();

        assert!(polygon.contains_point(&LocalPoint::new(0, 0)));
        assert!(polygon.contains_point(&LocalPoint::new(10, 10)));
        assert!(polygon.contains_point(&LocalPoint::new(5, 0)));
        assert!(polygon.contains_point(&LocalPoint::new(5, 5)));
        assert!(polygon.contains_point(&LocalPoint::new(8, 2)));
        assert!(!polygon.contains_point(&LocalPoint::new(2, 3)));
        assert!(!polygon.contains_point(&LocalPoint::new(2, -3)));
        assert!(!polygon.contains_point(&LocalPoint::new(11, 0)));
    }

    #[test]
    fn winding_does_not_matter() {
        let mut points = triangle().into_points();
        points.reverse();
        let polygon = LocalPolygon::new(points);

        assert!(polygon.contains_point(&LocalPoint::new(8, 2)));
        assert!(!polygon.contains_point(&LocalPoint::new(2, 3)));
    }

    #[test]
    fn repeated_first_point() {
        let polygon = LocalPolygon::new(vec![
            LocalPoint::new(0, 0),
            LocalPoint::new(4, 0),
            LocalPoint::new(4, 4),
            LocalPoint::new(0, 4),
            LocalPoint::new(0, 0),
        ]);

        assert!(polygon.contains_point(&LocalPoint::new(2, 2)));
        assert!(!polygon.contains_point(&LocalPoint::new(5, 2)));
        assert_eq!(polygon.iter_sides().count(), 5);
    }

    #[test]
    fn bounding_rect() {
        assert_eq!(triangle().bounding_rect(), Some(Rect::new(0, 0, 10, 10)));
        assert_eq!(LocalPolygon::default().bounding_rect(), None);
    }
}
