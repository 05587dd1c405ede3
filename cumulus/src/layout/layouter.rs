use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect, Size};
use crate::layout::spiral::SpiralGenerator;
use crate::util::LayoutConfig;
use crate::util::assertions;
use log::debug;
use thiserror::Error;

/// Packs rectangles one by one into a non-overlapping cluster around a
/// fixed anchor point.
///
/// Each call to [`CloudLayouter::place_next`] grows the cluster by exactly
/// one rectangle: the first collision-free point on the spiral is accepted
/// and the rectangle is then pulled towards the anchor until it touches
/// another one. The cluster stays dense, roughly circular and centered on
/// the anchor, for any sequence of sizes.
///
/// One layouter drives one layout session; a new cloud starts with a new
/// layouter. The placed rectangles are never removed or reordered.
pub struct CloudLayouter {
    anchor: Point,
    config: LayoutConfig,
    spiral: SpiralGenerator,
    placed: Vec<Rect>,
    probe_counter: usize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid rectangle size {width}x{height}, both dimensions must be positive")]
    InvalidSize { width: i32, height: i32 },
    #[error("no collision-free position found after probing {probes} spiral points")]
    PlacementExhausted { probes: usize },
}

impl CloudLayouter {
    pub fn new(anchor: Point, config: LayoutConfig) -> Self {
        Self {
            anchor,
            config,
            spiral: SpiralGenerator::new(anchor, config.spiral),
            placed: vec![],
            probe_counter: 0,
        }
    }

    /// Places the next rectangle of `size` and returns its final position.
    ///
    /// The very first rectangle is centered exactly on the anchor. Every
    /// subsequent one is centered on the first spiral point where it
    /// collides with nothing, then moved towards the anchor one unit step
    /// at a time until it collides or its center reaches the anchor.
    ///
    /// Fails with [`PlacementError::InvalidSize`] on non-positive
    /// dimensions (no state is touched) and with
    /// [`PlacementError::PlacementExhausted`] when the probe budget runs
    /// out (the placed rectangles are left exactly as they were).
    pub fn place_next(&mut self, size: Size) -> Result<Rect, PlacementError> {
        if !size.is_valid() {
            return Err(PlacementError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        let rect = match self.placed.is_empty() {
            true => Rect::centered_at(self.anchor, size),
            false => {
                let candidate = self.first_free_candidate(size)?;
                self.pull_towards_anchor(candidate)
            }
        };

        self.placed.push(rect);

        debug_assert!(assertions::rects_are_pairwise_disjoint(&self.placed));
        debug_assert!(assertions::cloud_contains_anchor(&self.placed, self.anchor));

        debug!(
            "placed rectangle #{} of size {} at {:?}",
            self.placed.len(),
            size,
            rect.center()
        );
        Ok(rect)
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Read-only snapshot of all placed rectangles, in placement order.
    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }

    /// Total number of spiral points probed over the lifetime of the session.
    pub fn probe_counter(&self) -> usize {
        self.probe_counter
    }

    /// Smallest rectangle containing the entire cluster.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.placed.iter().copied().reduce(Rect::bounding_rect)
    }

    /// Fraction of the cluster's bounding box covered by placed rectangles.
    pub fn density(&self) -> Option<f64> {
        let bbox = self.bounding_rect()?;
        let covered: i64 = self.placed.iter().map(|rect| rect.area()).sum();
        Some(covered as f64 / bbox.area() as f64)
    }

    /// Walks the spiral until a rectangle of `size` fits without collision.
    ///
    /// The spiral radius is unbounded while the occupied region is finite,
    /// so a free candidate always exists; the probe budget only guards
    /// against degenerate configurations (e.g. a zero expansion rate).
    fn first_free_candidate(&mut self, size: Size) -> Result<Rect, PlacementError> {
        for _ in 0..self.config.max_probes_per_rect {
            let center = self.spiral.next_point(size);
            self.probe_counter += 1;
            let candidate = Rect::centered_at(center, size);
            if !self.collides_with_any(&candidate) {
                return Ok(candidate);
            }
        }
        Err(PlacementError::PlacementExhausted {
            probes: self.config.max_probes_per_rect,
        })
    }

    /// Greedily moves `candidate` towards the anchor, one unit step per
    /// axis at a time (diagonally when both axes are off-center), keeping
    /// the last collision-free position. This pass fills the gaps near the
    /// center that the spiral search never revisits.
    fn pull_towards_anchor(&self, candidate: Rect) -> Rect {
        let mut current = candidate;
        loop {
            let center = current.center();
            let dx = (self.anchor.x() - center.x()).signum();
            let dy = (self.anchor.y() - center.y()).signum();
            if dx == 0 && dy == 0 {
                break; //centered on the anchor
            }
            let moved = current.translate(dx, dy);
            if self.collides_with_any(&moved) {
                break;
            }
            current = moved;
        }
        current
    }

    fn collides_with_any(&self, rect: &Rect) -> bool {
        self.placed.iter().any(|placed| placed.collides_with(rect))
    }
}
