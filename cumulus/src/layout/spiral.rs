use crate::geometry::primitives::{Point, Size};
use crate::util::SpiralConfig;

/// Generates a lazy, infinite sequence of candidate points spiraling
/// outward from a fixed center.
///
/// The angle advances monotonically and never rewinds; the radius grows
/// linearly with the angle (Archimedean spiral). The angular step adapts
/// to the rectangle currently being placed: the arc between consecutive
/// points is kept below half its smallest dimension, so the search cannot
/// step over a slot the rectangle would have fit in.
#[derive(Debug, Clone)]
pub struct SpiralGenerator {
    center: Point,
    config: SpiralConfig,
    angle: f64,
}

impl SpiralGenerator {
    pub fn new(center: Point, config: SpiralConfig) -> Self {
        Self {
            center,
            config,
            angle: 0.0,
        }
    }

    /// Advances the spiral and returns the next candidate center for a
    /// rectangle of `size`.
    pub fn next_point(&mut self, size: Size) -> Point {
        self.angle += self.angle_step(size);
        let radius = self.config.expansion_rate * self.angle;
        let x = self.center.x() as f64 + radius * self.angle.cos();
        let y = self.center.y() as f64 + radius * self.angle.sin();
        //round to nearest: truncation would pull every candidate towards
        //the top-left and skew the cluster over many insertions
        Point(x.round() as i32, y.round() as i32)
    }

    pub fn current_angle(&self) -> f64 {
        self.angle
    }

    /// Step that advances the point by an arc of roughly half the smallest
    /// dimension of `size`, clamped to the configured bounds.
    fn angle_step(&self, size: Size) -> f64 {
        let target_arc = size.min_dimension() as f64 / 2.0;
        let radius = f64::max(self.config.expansion_rate * self.angle, 1.0);
        (target_arc / radius).clamp(self.config.min_angle_step, self.config.max_angle_step)
    }
}
