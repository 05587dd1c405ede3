use serde::{Deserialize, Serialize};
use std::fmt;

/// Extents of an axis-aligned rectangle, as requested by the caller.
/// Only strictly positive dimensions describe a placeable rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn min_dimension(&self) -> i32 {
        i32::min(self.width, self.height)
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Size { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
