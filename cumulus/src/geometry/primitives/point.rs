use crate::geometry::geo_traits::DistanceTo;
use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point on the integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point(pub i32, pub i32);

impl Point {
    pub fn x(&self) -> i32 {
        self.0
    }

    pub fn y(&self) -> i32 {
        self.1
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Point {
        Point(self.0 + dx, self.1 + dy)
    }
}

impl DistanceTo<Point> for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    fn sq_distance_to(&self, other: &Point) -> f64 {
        let dx = (self.0 - other.0) as f64;
        let dy = (self.1 - other.1) as f64;
        dx.powi(2) + dy.powi(2)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(i32, i32)> for Point {
    fn from(p: (i32, i32)) -> Self {
        Point(p.0, p.1)
    }
}
