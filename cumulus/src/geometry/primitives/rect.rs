use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Size;
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the integer grid
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    pub fn try_new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Returns the rectangle of `size` whose [`Rect::center`] equals `center`.
    /// The top-left corner sits at `center - size / 2`, with integer half-extents.
    pub fn centered_at(center: Point, size: Size) -> Self {
        debug_assert!(size.is_valid());
        let x_min = center.x() - size.width / 2;
        let y_min = center.y() - size.height / 2;
        Rect {
            x_min,
            y_min,
            x_max: x_min + size.width,
            y_max: y_min + size.height,
        }
    }

    /// Returns a new rectangle with the same dimensions, shifted by `dx` and `dy`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Rect {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Center under integer division: `top-left + size / 2`.
    /// Inverse of [`Rect::centered_at`] for any parity of the dimensions.
    pub fn center(&self) -> Point {
        Point(
            self.x_min + self.width() / 2,
            self.y_min + self.height() / 2,
        )
    }

    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: i32::min(a.x_min, b.x_min),
            y_min: i32::min(a.y_min, b.y_min),
            x_max: i32::max(a.x_max, b.x_max),
            y_max: i32::max(a.y_max, b.y_max),
        }
    }
}

impl CollidesWith<Rect> for Rect {
    /// Open-interior overlap: rectangles sharing only an edge or a corner
    /// do not collide. Dense packing depends on this tolerance.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        i32::max(self.x_min, other.x_min) < i32::min(self.x_max, other.x_max)
            && i32::max(self.y_min, other.y_min) < i32::min(self.y_max, other.y_max)
    }
}

impl CollidesWith<Point> for Rect {
    /// Closed bounds: a point on the boundary is inside.
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
