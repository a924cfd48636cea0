//! Ring is the exterior boundary of a polygon annotation: a sequence of geographic points with an optional label.
//!
//! A ring is always treated as closed: there is an edge between its last and its first points, whether or not the
//! first point is repeated at the end of the sequence. [`Ring::iter_edges`] takes care of the closing edge.
//!
//! Rings with fewer than [`Ring::MIN_USABLE_POINTS`] points cannot bound an area. Aggregate computations over a batch
//! of rings (e.g. [`center_point`](crate::center_point)) skip such rings, but iterating over the points of a ring
//! never does.

use crate::geo::{bearing, distance, Bearing, GeoPoint};
use serde::{Deserialize, Serialize};

/// Exterior ring of a polygon annotation. See module level documentation for details.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Ring {
    points: Vec<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Ring {
    /// Minimum number of points in a usable ring.
    pub const MIN_USABLE_POINTS: usize = 3;

    /// Creates a new unlabeled ring.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self {
            points,
            label: None,
        }
    }

    /// Creates a new ring with the given label.
    pub fn labeled(points: Vec<GeoPoint>, label: impl Into<String>) -> Self {
        Self {
            points,
            label: Some(label.into()),
        }
    }

    /// Points of the ring.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Label of the ring, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of points in the ring.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the ring has enough points to bound an area.
    pub fn is_usable(&self) -> bool {
        self.points.len() >= Self::MIN_USABLE_POINTS
    }

    /// Average position of the ring's points, or `None` for an empty ring.
    ///
    /// Unlike [`center_point`](crate::center_point), this does not check whether the ring is usable. Altitude is
    /// averaged as in [`GeoPoint::mean`].
    pub fn center(&self) -> Option<GeoPoint> {
        GeoPoint::mean(&self.points)
    }

    /// Iterates over the points of the ring.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ GeoPoint> {
        self.points.iter()
    }

    /// Same as [`Ring::iter_points`] but repeats the first point again at the end of the iterator.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &'_ GeoPoint> {
        self.points.iter().chain(self.points.first())
    }

    /// Iterates over the edges of the ring, including the edge between the last and the first points.
    ///
    /// A ring of a single point has one zero-length edge.
    pub fn iter_edges(&self) -> impl Iterator<Item = Edge<'_>> {
        EdgeIterator {
            points: self.iter_points_closing(),
            prev_point: None,
        }
    }

    /// Builds a new ring by transforming every point of this one. The label is kept.
    pub fn map_points(&self, f: impl FnMut(&GeoPoint) -> GeoPoint) -> Self {
        Self {
            points: self.points.iter().map(f).collect(),
            label: self.label.clone(),
        }
    }
}

impl From<Vec<GeoPoint>> for Ring {
    fn from(value: Vec<GeoPoint>) -> Self {
        Self::new(value)
    }
}

/// Straight edge between two consecutive points of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a>(pub &'a GeoPoint, pub &'a GeoPoint);

impl Edge<'_> {
    /// Great-circle length of the edge in metres.
    pub fn length(&self) -> f64 {
        distance(self.0, self.1)
    }

    /// Initial bearing from the first point of the edge to the second.
    pub fn bearing(&self) -> Bearing {
        bearing(self.0, self.1)
    }

    /// Copies the endpoints out of the ring.
    pub fn to_points(&self) -> (GeoPoint, GeoPoint) {
        (*self.0, *self.1)
    }
}

struct EdgeIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a GeoPoint>,
{
    points: Iter,
    prev_point: Option<&'a GeoPoint>,
}

impl<'a, Iter> Iterator for EdgeIterator<'a, Iter>
where
    Iter: Iterator<Item = &'a GeoPoint>,
{
    type Item = Edge<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_point = self.points.next()?;
        let prev_point = self.prev_point.replace(next_point);

        match prev_point {
            Some(prev) => Some(Edge(prev, next_point)),
            None => self.next(),
        }
    }
}
