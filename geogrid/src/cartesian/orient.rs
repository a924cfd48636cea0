use crate::cartesian::LocalPoint;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points, as seen with `y` axis pointing up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    pub fn triplet(p: &LocalPoint, q: &LocalPoint, r: &LocalPoint) -> Self {
        let (px, py) = (i64::from(p.x), i64::from(p.y));
        let (qx, qy) = (i64::from(q.x), i64::from(q.y));
        let (rx, ry) = (i64::from(r.x), i64::from(r.y));

        match (qy - py) * (rx - qx) - (qx - px) * (ry - qy) {
            0 => Self::Collinear,
            v if v > 0 => Self::Clockwise,
            _ => Self::Counterclockwise,
        }
    }
}
